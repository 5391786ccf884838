use std::io::Cursor;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::{RunnerPlugin, RunnerSession, RunnerStartArgs, SessionExit, Signal};

/// Echoes the command line each job would run and exits 0 without launching anything.
pub struct DryRunRunnerPlugin {}

impl DryRunRunnerPlugin {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DryRunRunnerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunnerPlugin for DryRunRunnerPlugin {
    fn name(&self) -> &str {
        "dry_run"
    }

    async fn start_session(&self, args: &RunnerStartArgs) -> Result<Box<dyn RunnerSession>> {
        let mut line = format!("dry run: {}", args.cmd);
        for arg in &args.args {
            line.push(' ');
            line.push_str(arg);
        }
        line.push('\n');
        tracing::debug!(cmd = %args.cmd, "dry run session");

        Ok(Box::new(DryRunSession {
            output: Some(line.into_bytes()),
        }))
    }
}

struct DryRunSession {
    output: Option<Vec<u8>>,
}

#[async_trait]
impl RunnerSession for DryRunSession {
    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.output
            .take()
            .map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn AsyncRead + Unpin + Send>)
    }

    fn stderr(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        None
    }

    async fn signal(&mut self, _signal: Signal) -> Result<()> {
        Ok(())
    }

    async fn wait(&mut self) -> Result<SessionExit> {
        Ok(SessionExit { code: Some(0) })
    }
}
