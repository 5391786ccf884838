use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

use super::{RunnerPlugin, RunnerSession, RunnerStartArgs, SessionExit, Signal};

/// Launches each job as a local child process with piped output and no stdin.
pub struct ProcessRunnerPlugin {}

impl ProcessRunnerPlugin {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ProcessRunnerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunnerPlugin for ProcessRunnerPlugin {
    fn name(&self) -> &str {
        "process"
    }

    async fn start_session(&self, args: &RunnerStartArgs) -> Result<Box<dyn RunnerSession>> {
        let mut cmd = Command::new(&args.cmd);
        cmd.args(&args.args)
            .envs(&args.envs)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .with_context(|| format!("failed to launch {}", args.cmd))?;
        tracing::debug!(cmd = %args.cmd, pid = ?child.id(), "child started");

        Ok(Box::new(ProcessRunnerSession { child }))
    }
}

struct ProcessRunnerSession {
    child: Child,
}

#[async_trait]
impl RunnerSession for ProcessRunnerSession {
    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stdout
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    fn stderr(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stderr
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    async fn signal(&mut self, signal: Signal) -> Result<()> {
        match signal {
            Signal::Kill => self.child.kill().await.context("kill child"),
        }
    }

    async fn wait(&mut self) -> Result<SessionExit> {
        let status = self.child.wait().await.context("wait for child")?;
        Ok(SessionExit {
            code: status.code(),
        })
    }
}
