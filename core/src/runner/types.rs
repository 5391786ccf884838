use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Kill,
}

/// Command line for one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerStartArgs {
    pub cmd: String,
    pub args: Vec<String>,
    pub envs: BTreeMap<String, String>,
}

/// How a session ended. `code` is `None` when the child was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExit {
    pub code: Option<i32>,
}

/// Result of one bounded, blocking child execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRun {
    pub exit_code: Option<i32>,
    pub stdout_tail: String,
    pub stderr_tail: String,
    pub timed_out: bool,
    pub duration_ms: u64,
}

impl CapturedRun {
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    Success,
    Failed,
    Skipped,
}

impl RunOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RunOutcome::Success => "SUCCESS",
            RunOutcome::Failed => "FAILED",
            RunOutcome::Skipped => "SKIPPED",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RunOutcome::Success => "✅",
            RunOutcome::Failed => "❌",
            RunOutcome::Skipped => "⚠️ ",
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub name: String,
    pub script: String,
    pub outcome: RunOutcome,
    /// Failure or skip reason; empty on success.
    pub diagnostic: String,
    /// Last lines of the relevant output stream, shown under the job.
    pub tail: Vec<String>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<RunResult>,
}

impl RunSummary {
    pub fn count(&self, outcome: RunOutcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn has_failures(&self) -> bool {
        self.count(RunOutcome::Failed) > 0
    }

    /// Skipped jobs never force a failing exit.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: RunOutcome) -> RunResult {
        RunResult {
            name: name.to_string(),
            script: format!("{name}.py"),
            outcome,
            diagnostic: String::new(),
            tail: vec![],
            duration_ms: None,
        }
    }

    #[test]
    fn skipped_jobs_do_not_fail_the_run() {
        let summary = RunSummary {
            results: vec![
                result("a", RunOutcome::Success),
                result("b", RunOutcome::Skipped),
            ],
        };
        assert_eq!(summary.count(RunOutcome::Skipped), 1);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn any_failure_fails_the_run() {
        let summary = RunSummary {
            results: vec![
                result("a", RunOutcome::Success),
                result("b", RunOutcome::Failed),
                result("c", RunOutcome::Skipped),
            ],
        };
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn empty_run_succeeds() {
        assert_eq!(RunSummary::default().exit_code(), 0);
    }

    #[test]
    fn timeout_is_never_success() {
        let run = CapturedRun {
            exit_code: Some(0),
            stdout_tail: String::new(),
            stderr_tail: String::new(),
            timed_out: true,
            duration_ms: 0,
        };
        assert!(!run.succeeded());
    }
}
