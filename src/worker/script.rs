use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::{SpawnOutcome, SpawnRequest, Spawner};
use crate::consts::WORKER_TIMEOUT;

/// Launches workers through an external spawn executable
/// (`spawn-worker.sh` by default).
#[derive(Debug, Clone)]
pub struct ScriptSpawner {
    script: PathBuf,
    timeout: Duration,
}

impl ScriptSpawner {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            timeout: WORKER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, request: &SpawnRequest) -> io::Result<SpawnOutcome> {
        let mut child = Command::new(&self.script)
            .args(request.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Pipes are drained while waiting so a chatty worker can't block on a
        // full buffer.
        let run = async {
            tokio::try_join!(child.wait(), read_pipe(stdout), read_pipe(stderr))
        };
        let waited = tokio::time::timeout(self.timeout, run).await;

        match waited {
            Ok(result) => {
                let (status, stdout, stderr) = result?;
                Ok(SpawnOutcome::Exited {
                    code: status.code().unwrap_or(-1),
                    stdout,
                    stderr,
                })
            }
            Err(_) => {
                // kill() also reaps the child
                child.kill().await?;
                Ok(SpawnOutcome::TimedOut)
            }
        }
    }
}

#[async_trait]
impl Spawner for ScriptSpawner {
    async fn spawn(&self, request: &SpawnRequest) -> SpawnOutcome {
        if !tokio::fs::try_exists(&self.script).await.unwrap_or(false) {
            return SpawnOutcome::Missing(self.script.clone());
        }
        match self.run(request).await {
            Ok(outcome) => outcome,
            Err(e) => SpawnOutcome::Failed(e.to_string()),
        }
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
