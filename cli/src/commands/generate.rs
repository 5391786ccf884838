use std::io::{self, Write};

use chartops_core::api as core_api;
use chartops_core::report::write_banner;
use chartops_core::runner::report::{write_event, write_summary, TITLE};
use chartops_plugins::build_runner;

use crate::commands::cli::GenerateArgs;

/// Runs every configured job in order and prints the generation report.
pub async fn handle_generate<W: Write>(
    args: GenerateArgs,
    cfg: &core_api::AppConfig,
    out: &mut W,
) -> Result<i32, core_api::CliError> {
    let mut runner_cfg = cfg.runner.clone();
    if args.dry_run {
        runner_cfg.kind = core_api::RunnerKind::DryRun;
    }

    write_banner(out, TITLE)?;
    out.flush()?;

    let plugin = build_runner(&runner_cfg);
    tracing::debug!(runner = plugin.name(), jobs = runner_cfg.jobs.len(), "starting generation");
    let mut write_err: Option<io::Error> = None;

    let summary = core_api::run_all(plugin.as_ref(), &runner_cfg, |event| {
        if write_err.is_some() {
            return;
        }
        if let Err(e) = write_event(out, &event).and_then(|_| out.flush()) {
            write_err = Some(e);
        }
    })
    .await;

    if let Some(e) = write_err {
        return Err(e.into());
    }

    write_summary(out, &summary)?;
    out.flush()?;

    tracing::info!(
        total = summary.total(),
        failed = summary.count(core_api::RunOutcome::Failed),
        "generation finished"
    );
    Ok(summary.exit_code())
}
