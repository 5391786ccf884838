mod events;
mod io_pump;
pub mod report;
mod run;
mod traits;
pub mod types;

pub use events::RunnerEvent;
pub use run::{capture, run_all, run_job, start_args};
pub use traits::{RunnerPlugin, RunnerSession};
pub use types::{
    CapturedRun, RunOutcome, RunResult, RunSummary, RunnerStartArgs, SessionExit, Signal,
};
