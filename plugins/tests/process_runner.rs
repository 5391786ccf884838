#![cfg(unix)]

use chartops_core::config::{ChartJob, RunnerConfig};
use chartops_core::runner::{run_all, run_job, RunOutcome};
use chartops_plugins::ProcessRunnerPlugin;

fn shell_job(dir: &tempfile::TempDir, name: &str, body: &str) -> ChartJob {
    let path = dir.path().join(format!("{name}.sh"));
    std::fs::write(&path, body).unwrap();
    ChartJob::new(name, path.to_string_lossy().to_string())
}

fn sh_config(jobs: Vec<ChartJob>) -> RunnerConfig {
    RunnerConfig {
        interpreter: "sh".to_string(),
        jobs,
        ..RunnerConfig::default()
    }
}

#[tokio::test]
async fn successful_script_reports_last_stdout_lines() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job(
        &dir,
        "sankey",
        "echo loading\necho filtering\necho rendering\necho 'saved sankey.html'\n",
    );
    let cfg = sh_config(vec![job]);

    let result = run_job(&ProcessRunnerPlugin::new(), &cfg.jobs[0], &cfg).await;

    assert_eq!(result.outcome, RunOutcome::Success);
    assert_eq!(result.tail, vec!["filtering", "rendering", "saved sankey.html"]);
}

#[tokio::test]
async fn failing_script_reports_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job(&dir, "bar", "echo partial\necho 'no data for cycle' >&2\nexit 3\n");
    let cfg = sh_config(vec![job]);

    let result = run_job(&ProcessRunnerPlugin::new(), &cfg.jobs[0], &cfg).await;

    assert_eq!(result.outcome, RunOutcome::Failed);
    assert_eq!(result.tail, vec!["no data for cycle"]);
}

#[tokio::test]
async fn configured_env_reaches_the_script() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job(&dir, "env", "echo \"backend=$MPLBACKEND\"\n");
    let mut cfg = sh_config(vec![job]);
    cfg.env.insert("MPLBACKEND".into(), "Agg".into());

    let result = run_job(&ProcessRunnerPlugin::new(), &cfg.jobs[0], &cfg).await;

    assert_eq!(result.tail, vec!["backend=Agg"]);
}

#[tokio::test]
async fn slow_script_is_killed_at_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job(&dir, "slow", "exec sleep 30\n");
    let cfg = RunnerConfig {
        timeout_secs: 1,
        ..sh_config(vec![job])
    };

    let started = std::time::Instant::now();
    let result = run_job(&ProcessRunnerPlugin::new(), &cfg.jobs[0], &cfg).await;

    assert_eq!(result.outcome, RunOutcome::Failed);
    assert_eq!(result.diagnostic, "Script timed out after 1 seconds");
    assert!(started.elapsed() < std::time::Duration::from_secs(20));
}

#[tokio::test]
async fn unknown_interpreter_is_a_failure_not_a_skip() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = shell_job(&dir, "net", "echo hi\n");
    job.interpreter = Some("chartops-no-such-interpreter".to_string());
    let cfg = sh_config(vec![job]);

    let result = run_job(&ProcessRunnerPlugin::new(), &cfg.jobs[0], &cfg).await;

    assert_eq!(result.outcome, RunOutcome::Failed);
    assert!(result.diagnostic.contains("chartops-no-such-interpreter"));
}

#[tokio::test]
async fn mixed_run_exit_code_follows_failures() {
    let dir = tempfile::tempdir().unwrap();
    let ok = shell_job(&dir, "ok", "echo fine\n");
    let missing = ChartJob::new("Missing", dir.path().join("absent.sh").to_string_lossy());
    let cfg = sh_config(vec![ok.clone(), missing.clone()]);

    let summary = run_all(&ProcessRunnerPlugin::new(), &cfg, |_| {}).await;
    assert_eq!(summary.count(RunOutcome::Skipped), 1);
    assert_eq!(summary.exit_code(), 0);

    let bad = shell_job(&dir, "bad", "exit 1\n");
    let cfg = sh_config(vec![ok, missing, bad]);
    let summary = run_all(&ProcessRunnerPlugin::new(), &cfg, |_| {}).await;
    assert_eq!(summary.count(RunOutcome::Failed), 1);
    assert_eq!(summary.exit_code(), 1);
}
