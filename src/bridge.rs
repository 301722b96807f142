//! One task, end to end: classify, invoke, format.

use tracing::{debug, info};

use crate::classifier::{self, Thinking};
use crate::config::Config;
use crate::consts::{DESCRIPTION_PREVIEW_LEN, truncate_chars};
use crate::notify::format_message;
use crate::record::{DISCORD_MESSAGE, MODEL, ResultRecord, STATUS, SUCCESS, THINKING};
use crate::task::Task;
use crate::worker::WorkerInvoker;
use crate::worker::script::ScriptSpawner;

/// Wires the classifier, a worker invoker, and the formatter together.
pub struct Bridge {
    invoker: WorkerInvoker,
}

impl Bridge {
    pub fn new(invoker: WorkerInvoker) -> Self {
        Self { invoker }
    }

    /// A bridge that spawns workers through the configured script.
    pub fn from_config(config: &Config) -> Self {
        debug!(
            spawn_script = %config.spawn_script.display(),
            workspace = %config.workspace_base.display(),
            discord = ?config.discord,
            "bridge configured"
        );
        let spawner = ScriptSpawner::new(&config.spawn_script).with_timeout(config.timeout);
        Self::new(WorkerInvoker::new(
            Box::new(spawner),
            &config.workspace_base,
        ))
    }

    /// Run a task through a worker. Always returns a record carrying
    /// `status`, `discord_message` and `success`, whatever happened to the
    /// worker.
    pub async fn run_task(&self, task: &Task) -> ResultRecord {
        info!(
            task_id = %task.id,
            description = %truncate_chars(&task.description, DESCRIPTION_PREVIEW_LEN),
            "new task"
        );

        let profile = classifier::classify(&task.description);
        info!(model = profile.model, thinking = %profile.thinking, "selected profile");

        let invocation = self.invoker.invoke(task, &profile).await;

        let mut record = invocation.record;
        let message = format_message(&task.id, &record);
        if !record.contains(STATUS) {
            record.insert(STATUS, record.status_text());
        }
        record.insert(DISCORD_MESSAGE, message);
        record.insert(SUCCESS, invocation.success);
        record
    }
}

/// Caller-supplied replacements for the reported model and thinking level.
///
/// Applied to the emitted record only. The worker has already run with the
/// classifier's choice by the time these land, and `discord_message` is not
/// re-rendered.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub thinking: Option<Thinking>,
}

impl Overrides {
    pub fn apply(&self, record: &mut ResultRecord) {
        if let Some(model) = &self.model {
            record.insert(MODEL, model.as_str());
        }
        if let Some(thinking) = self.thinking {
            record.insert(THINKING, thinking.as_str());
        }
    }
}
