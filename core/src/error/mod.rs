#[allow(clippy::module_inception)]
pub mod error;
pub mod status;
pub mod validate;

pub use error::{CliError, RunnerError};
pub use status::StatusError;
pub use validate::ValidateError;
