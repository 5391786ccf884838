use chartops_core::config::{RunnerConfig, RunnerKind};
use chartops_core::runner::RunnerPlugin;

use crate::runner::dry_run::DryRunRunnerPlugin;
use crate::runner::process::ProcessRunnerPlugin;

pub fn build_runner(cfg: &RunnerConfig) -> Box<dyn RunnerPlugin> {
    match cfg.kind {
        RunnerKind::Process => Box::new(ProcessRunnerPlugin::new()),
        RunnerKind::DryRun => Box::new(DryRunRunnerPlugin::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_runner_by_kind() {
        let mut cfg = RunnerConfig::default();
        assert_eq!(build_runner(&cfg).name(), "process");

        cfg.kind = RunnerKind::DryRun;
        assert_eq!(build_runner(&cfg).name(), "dry_run");
    }
}
