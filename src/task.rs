use std::path::{Path, PathBuf};

use crate::consts::RESULT_FILE_NAME;

/// One unit of work handed to a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Opaque identifier, usually a UUID. Not validated.
    pub id: String,
    pub description: String,
}

impl Task {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// The directory the worker owns for this task: `<base>/<id>/`.
    pub fn workspace(&self, base: &Path) -> PathBuf {
        base.join(&self.id)
    }

    /// Where the worker is expected to leave its result.
    pub fn result_path(&self, base: &Path) -> PathBuf {
        self.workspace(base).join(RESULT_FILE_NAME)
    }
}
