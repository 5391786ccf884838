//! Chart tooling core: job runner, status tracker and output validator.

pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod status;
pub mod util;
pub mod validate;
