use super::types::RunResult;

/// Progress notifications emitted while jobs run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    JobStarted { name: String, script: String },
    JobFinished(RunResult),
}
