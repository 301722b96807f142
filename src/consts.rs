//! Project-wide constants.

use std::time::Duration;

/// Model picked for tasks that look architectural or investigative.
pub const HIGH_CAPABILITY_MODEL: &str = "anthropic/claude-sonnet-4";

/// Model picked for everything else.
pub const ECONOMY_MODEL: &str = "openrouter/moonshotai/kimi-k2.5";

/// Wall-clock bound on a single worker spawn.
pub const WORKER_TIMEOUT: Duration = Duration::from_secs(600);

/// Spawn executable looked up beside the running binary.
pub const SPAWN_SCRIPT_NAME: &str = "spawn-worker.sh";

/// Artifact the worker writes into its workspace.
pub const RESULT_FILE_NAME: &str = "result.json";

/// Workspace base, relative to the user's home directory.
pub const WORKSPACE_DIR: [&str; 2] = [".openclaw", "discord-workers"];

pub const BOT_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
pub const GUILD_ID_VAR: &str = "DISCORD_GUILD_ID";

/// Number of task id characters shown in the display block.
pub const SHORT_ID_LEN: usize = 8;

/// Number of description characters shown in the task header log.
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Keep at most `max` characters of `s` (never splits a char).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
