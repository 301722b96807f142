//! Worker invocation: spawn, wait, read the artifact.
//!
//! A [`Spawner`] launches the external worker and reports how the launch
//! ended. [`WorkerInvoker`] turns that into a `(success, record)` pair by
//! looking for the artifact the worker was supposed to leave behind.

pub mod mock;
pub mod script;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::classifier::Profile;
use crate::record::ResultRecord;
use crate::task::Task;

/// Everything the worker is told about its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub task_id: String,
    pub task: String,
    pub model: String,
    pub thinking: String,
}

impl SpawnRequest {
    pub fn new(task: &Task, profile: &Profile) -> Self {
        Self {
            task_id: task.id.clone(),
            task: task.description.clone(),
            model: profile.model.to_string(),
            thinking: profile.thinking.to_string(),
        }
    }

    /// Command-line flags passed to the spawn executable.
    pub fn args(&self) -> Vec<&str> {
        vec![
            "--task-id",
            &self.task_id,
            "--task",
            &self.task,
            "--model",
            &self.model,
            "--thinking",
            &self.thinking,
        ]
    }
}

/// How a spawn attempt ended. Failures are information, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The spawn executable doesn't exist; nothing was launched.
    Missing(PathBuf),
    /// The process ran to completion. Its exit code is informational only.
    Exited {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The process outlived the deadline and was killed.
    TimedOut,
    /// The process could not be launched or waited on.
    Failed(String),
}

/// Something that can launch a worker for a task.
#[async_trait]
pub trait Spawner: Send + Sync {
    async fn spawn(&self, request: &SpawnRequest) -> SpawnOutcome;
}

/// What came back from one worker invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub success: bool,
    pub record: ResultRecord,
}

impl Invocation {
    fn failed(record: ResultRecord) -> Self {
        Self {
            success: false,
            record,
        }
    }
}

/// Runs one worker per task and reads its `result.json`.
pub struct WorkerInvoker {
    spawner: Box<dyn Spawner>,
    workspace_base: PathBuf,
}

impl WorkerInvoker {
    pub fn new(spawner: Box<dyn Spawner>, workspace_base: impl Into<PathBuf>) -> Self {
        Self {
            spawner,
            workspace_base: workspace_base.into(),
        }
    }

    /// Spawn a worker with the given profile and collect its result.
    ///
    /// Single attempt, no retries. The artifact is the only success signal:
    /// a worker that exits nonzero but writes a `success` result succeeds.
    pub async fn invoke(&self, task: &Task, profile: &Profile) -> Invocation {
        let request = SpawnRequest::new(task, profile);
        info!(
            task_id = %task.id,
            model = %request.model,
            thinking = %request.thinking,
            "spawning worker"
        );

        match self.spawner.spawn(&request).await {
            SpawnOutcome::Missing(path) => {
                warn!(path = %path.display(), "spawn script missing");
                Invocation::failed(ResultRecord::error(format!(
                    "Spawn script not found: {}",
                    path.display()
                )))
            }
            SpawnOutcome::TimedOut => {
                warn!(task_id = %task.id, "worker spawn timed out");
                Invocation::failed(ResultRecord::error("Worker spawn timed out"))
            }
            SpawnOutcome::Failed(e) => {
                warn!(task_id = %task.id, error = %e, "worker spawn failed");
                Invocation::failed(ResultRecord::error(e))
            }
            SpawnOutcome::Exited {
                code,
                stdout,
                stderr,
            } => {
                debug!(code, stdout = %stdout, "worker exited");
                self.collect(task, code, stderr).await
            }
        }
    }

    async fn collect(&self, task: &Task, code: i32, stderr: String) -> Invocation {
        let path = task.result_path(&self.workspace_base);

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            warn!(path = %path.display(), code, "no result file generated");
            return Invocation::failed(
                ResultRecord::error("No result file generated")
                    .with("exit_code", code)
                    .with("stderr", stderr),
            );
        }

        match read_result(&path).await {
            Ok(record) => {
                let success = record.status().is_success();
                info!(status = %record.status_text(), success, "worker result read");
                Invocation { success, record }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable result file");
                Invocation::failed(ResultRecord::error(e.to_string()))
            }
        }
    }
}

async fn read_result(path: &Path) -> anyhow::Result<ResultRecord> {
    let text = tokio::fs::read_to_string(path).await?;
    ResultRecord::from_json(&text)
}
