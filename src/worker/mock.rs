use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{SpawnOutcome, SpawnRequest, Spawner};
use crate::consts::RESULT_FILE_NAME;

/// A scripted spawner for tests. Optionally writes a result artifact into
/// the task's workspace, then returns a fixed outcome.
pub struct MockSpawner {
    outcome: SpawnOutcome,
    artifact: Option<(PathBuf, String)>,
    requests: Mutex<Vec<SpawnRequest>>,
}

impl MockSpawner {
    pub fn new(outcome: SpawnOutcome) -> Self {
        Self {
            outcome,
            artifact: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A worker that exits cleanly without writing anything.
    pub fn exiting(code: i32) -> Self {
        Self::new(SpawnOutcome::Exited {
            code,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    /// Write `contents` to `<workspace_base>/<task-id>/result.json` on spawn.
    pub fn writing(mut self, workspace_base: impl Into<PathBuf>, contents: &str) -> Self {
        self.artifact = Some((workspace_base.into(), contents.to_string()));
        self
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<SpawnRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Spawner for MockSpawner {
    async fn spawn(&self, request: &SpawnRequest) -> SpawnOutcome {
        self.requests.lock().unwrap().push(request.clone());

        if let Some((base, contents)) = &self.artifact {
            let dir = base.join(&request.task_id);
            if let Err(e) = tokio::fs::create_dir_all(&dir).await {
                return SpawnOutcome::Failed(e.to_string());
            }
            if let Err(e) = tokio::fs::write(dir.join(RESULT_FILE_NAME), contents).await {
                return SpawnOutcome::Failed(e.to_string());
            }
        }

        self.outcome.clone()
    }
}
