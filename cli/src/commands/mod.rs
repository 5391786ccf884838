pub mod cli;
pub mod generate;
pub mod status;
pub mod validate;
