//! Runtime configuration: where the spawn executable lives, where workers
//! leave their results, and the chat credentials handed through to them.

use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{
    BOT_TOKEN_VAR, GUILD_ID_VAR, SPAWN_SCRIPT_NAME, WORKER_TIMEOUT, WORKSPACE_DIR,
};

/// Resolved settings for one bridge run.
#[derive(Debug, Clone)]
pub struct Config {
    pub spawn_script: PathBuf,
    pub workspace_base: PathBuf,
    pub timeout: Duration,
    pub discord: DiscordEnv,
}

impl Config {
    /// Fill unset paths with their defaults.
    pub fn resolve(spawn_script: Option<PathBuf>, workspace_base: Option<PathBuf>) -> Result<Self> {
        let spawn_script = match spawn_script {
            Some(path) => path,
            None => default_spawn_script()?,
        };
        let workspace_base = match workspace_base {
            Some(path) => path,
            None => default_workspace_base()?,
        };
        Ok(Self {
            spawn_script,
            workspace_base,
            timeout: WORKER_TIMEOUT,
            discord: DiscordEnv::from_env(),
        })
    }
}

/// `spawn-worker.sh` in the directory of the running binary.
pub fn default_spawn_script() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe
        .parent()
        .context("running executable has no parent directory")?;
    Ok(dir.join(SPAWN_SCRIPT_NAME))
}

/// `~/.openclaw/discord-workers`.
pub fn default_workspace_base() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(WORKSPACE_DIR.iter().fold(home, |path, part| path.join(part)))
}

/// Chat credentials. Only the worker uses them; they're inherited through
/// the environment and never validated here.
#[derive(Clone, Default)]
pub struct DiscordEnv {
    pub bot_token: Option<String>,
    pub guild_id: Option<String>,
}

impl DiscordEnv {
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v: &String| !v.is_empty());
        Self {
            bot_token: read(BOT_TOKEN_VAR),
            guild_id: read(GUILD_ID_VAR),
        }
    }
}

impl fmt::Debug for DiscordEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordEnv")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_paths_win() {
        let config = Config::resolve(
            Some(PathBuf::from("/opt/spawn.sh")),
            Some(PathBuf::from("/srv/workers")),
        )
        .unwrap();
        assert_eq!(config.spawn_script, PathBuf::from("/opt/spawn.sh"));
        assert_eq!(config.workspace_base, PathBuf::from("/srv/workers"));
        assert_eq!(config.timeout, WORKER_TIMEOUT);
    }

    #[test]
    fn default_spawn_script_sits_beside_executable() {
        let path = default_spawn_script().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
        assert!(path.ends_with(SPAWN_SCRIPT_NAME));
    }

    #[test]
    fn default_workspace_base_is_under_home() {
        let path = default_workspace_base().unwrap();
        assert!(path.starts_with(dirs::home_dir().unwrap()));
        assert!(path.ends_with(".openclaw/discord-workers"));
    }

    #[test]
    fn debug_redacts_token() {
        let env = DiscordEnv {
            bot_token: Some("secret-token".to_string()),
            guild_id: Some("42".to_string()),
        };
        let shown = format!("{env:?}");
        assert!(!shown.contains("secret-token"));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains("42"));
    }
}
