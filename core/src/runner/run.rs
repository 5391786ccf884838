use std::path::Path;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::{ChartJob, RunnerConfig};
use crate::error::RunnerError;
use crate::util::text::last_lines;
use crate::util::RingBytes;

use super::io_pump;
use super::traits::RunnerPlugin;
use super::types::{
    CapturedRun, RunOutcome, RunResult, RunSummary, RunnerStartArgs, SessionExit, Signal,
};
use super::RunnerEvent;

/// How long the output pumps may keep draining after the child is gone.
/// A grandchild that inherited the pipes would otherwise hold them open.
const PUMP_DRAIN_GRACE: Duration = Duration::from_secs(2);

/// Starts one child, captures both streams and waits at most `timeout`.
/// A child still running at the deadline is killed and reported as timed out.
pub async fn capture(
    plugin: &dyn RunnerPlugin,
    args: &RunnerStartArgs,
    timeout: Duration,
    capture_bytes: usize,
) -> Result<CapturedRun, RunnerError> {
    let mut session = plugin
        .start_session(args)
        .await
        .map_err(|e| RunnerError::Spawn(format!("{}: {e:#}", args.cmd)))?;

    // A session without a stream reads as empty.
    let stdout = session
        .stdout()
        .unwrap_or_else(|| Box::new(tokio::io::empty()));
    let stderr = session
        .stderr()
        .unwrap_or_else(|| Box::new(tokio::io::empty()));

    let ring_out = RingBytes::new(capture_bytes);
    let ring_err = RingBytes::new(capture_bytes);
    let out_task = io_pump::pump(stdout, ring_out.clone(), "stdout");
    let err_task = io_pump::pump(stderr, ring_err.clone(), "stderr");

    let started_at = Instant::now();
    let (exit, timed_out) = match tokio::time::timeout(timeout, session.wait()).await {
        Ok(res) => (res?, false),
        Err(_) => {
            tracing::warn!(
                cmd = %args.cmd,
                timeout_secs = timeout.as_secs(),
                "child exceeded timeout, killing"
            );
            if let Err(e) = session.signal(Signal::Kill).await {
                tracing::warn!(error = %e, "kill after timeout failed");
            }
            let exit = match tokio::time::timeout(PUMP_DRAIN_GRACE, session.wait()).await {
                Ok(Ok(exit)) => exit,
                _ => SessionExit { code: None },
            };
            (exit, true)
        }
    };
    let duration_ms = started_at.elapsed().as_millis() as u64;

    join_pump(out_task, "stdout").await;
    join_pump(err_task, "stderr").await;

    Ok(CapturedRun {
        exit_code: exit.code,
        stdout_tail: ring_out.to_string_lossy(),
        stderr_tail: ring_err.to_string_lossy(),
        timed_out,
        duration_ms,
    })
}

async fn join_pump(mut task: JoinHandle<Result<u64, RunnerError>>, label: &'static str) {
    match tokio::time::timeout(PUMP_DRAIN_GRACE, &mut task).await {
        Ok(Ok(Ok(_))) => {}
        Ok(Ok(Err(e))) => tracing::warn!(stream = label, error = %e, "output pump failed"),
        Ok(Err(e)) => tracing::warn!(stream = label, error = %e, "output pump panicked"),
        Err(_) => {
            tracing::warn!(stream = label, "output still open after exit, detaching");
            task.abort();
        }
    }
}

/// Command line for a job: `<interpreter> <script>`, or the script itself when
/// the effective interpreter is empty.
pub fn start_args(job: &ChartJob, cfg: &RunnerConfig) -> RunnerStartArgs {
    let interpreter = job
        .interpreter
        .as_deref()
        .unwrap_or(cfg.interpreter.as_str())
        .trim();
    if interpreter.is_empty() {
        RunnerStartArgs {
            cmd: job.script.clone(),
            args: vec![],
            envs: cfg.env.clone(),
        }
    } else {
        RunnerStartArgs {
            cmd: interpreter.to_string(),
            args: vec![job.script.clone()],
            envs: cfg.env.clone(),
        }
    }
}

pub async fn run_job(plugin: &dyn RunnerPlugin, job: &ChartJob, cfg: &RunnerConfig) -> RunResult {
    let mut result = RunResult {
        name: job.name.clone(),
        script: job.script.clone(),
        outcome: RunOutcome::Skipped,
        diagnostic: String::new(),
        tail: vec![],
        duration_ms: None,
    };

    if !Path::new(&job.script).exists() {
        tracing::info!(job = %job.name, script = %job.script, "script not found, skipping");
        result.diagnostic = "Script not found".to_string();
        return result;
    }

    let args = start_args(job, cfg);
    let timeout = Duration::from_secs(cfg.timeout_secs);
    match capture(plugin, &args, timeout, cfg.capture_bytes).await {
        Ok(run) => {
            result.duration_ms = Some(run.duration_ms);
            if run.timed_out {
                result.outcome = RunOutcome::Failed;
                result.diagnostic =
                    format!("Script timed out after {} seconds", cfg.timeout_secs);
                result.tail = last_lines(&result.diagnostic, cfg.tail_lines);
            } else if run.succeeded() {
                result.outcome = RunOutcome::Success;
                result.tail = last_lines(&run.stdout_tail, cfg.tail_lines);
            } else {
                result.outcome = RunOutcome::Failed;
                result.diagnostic = if run.stderr_tail.trim().is_empty() {
                    match run.exit_code {
                        Some(code) => format!("exited with status {code}"),
                        None => "terminated by signal".to_string(),
                    }
                } else {
                    run.stderr_tail.clone()
                };
                let stream = if run.stderr_tail.trim().is_empty() {
                    &run.stdout_tail
                } else {
                    &run.stderr_tail
                };
                result.tail = last_lines(stream, cfg.tail_lines);
            }
        }
        Err(e) => {
            tracing::error!(job = %job.name, error = %e, "job could not be run");
            result.outcome = RunOutcome::Failed;
            result.diagnostic = e.to_string();
            result.tail = last_lines(&result.diagnostic, cfg.tail_lines);
        }
    }

    tracing::info!(
        job = %job.name,
        outcome = %result.outcome,
        duration_ms = ?result.duration_ms,
        "job finished"
    );
    result
}

/// Runs every configured job strictly in order; one job's outcome never stops the next.
pub async fn run_all<F>(plugin: &dyn RunnerPlugin, cfg: &RunnerConfig, mut emit: F) -> RunSummary
where
    F: FnMut(RunnerEvent),
{
    let mut summary = RunSummary::default();
    for job in &cfg.jobs {
        if Path::new(&job.script).exists() {
            emit(RunnerEvent::JobStarted {
                name: job.name.clone(),
                script: job.script.clone(),
            });
        }
        let result = run_job(plugin, job, cfg).await;
        emit(RunnerEvent::JobFinished(result.clone()));
        summary.results.push(result);
    }
    summary
}
