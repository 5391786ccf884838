//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `chartops_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_chartops_data_dir, load, AppConfig, ChartJob, LoggingConfig, PaletteColor,
    RunnerConfig, RunnerKind, StatusConfig, ValidateConfig,
};
pub use crate::error::{CliError, RunnerError, StatusError, ValidateError};
pub use crate::runner::{
    run_all, run_job, CapturedRun, RunOutcome, RunResult, RunSummary, RunnerEvent, RunnerPlugin,
    RunnerSession, RunnerStartArgs, SessionExit, Signal,
};
pub use crate::status::{
    show_status, update_chart_status, CategoryStatus, ChartEntry, ChartStatus, StatusRecord,
    UpdateOutcome,
};
pub use crate::validate::{validate_chart, validate_dir, ValidationResult, ValidationSummary};
