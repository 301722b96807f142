use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use herald::bridge::{Bridge, Overrides};
use herald::classifier::Thinking;
use herald::config::Config;
use herald::report::{print_message, print_result, print_written};
use herald::task::Task;

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Hand a task to a spawned worker and report back."
)]
struct Cli {
    /// Unique task identifier
    #[arg(long)]
    task_id: String,

    /// Task description
    #[arg(long)]
    task: String,

    /// Override the reported model
    #[arg(long)]
    model: Option<String>,

    /// Override the reported thinking level
    #[arg(long, value_enum)]
    thinking: Option<Thinking>,

    /// Output file for the result (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker spawn executable (default: spawn-worker.sh beside this binary)
    #[arg(long, env = "HERALD_SPAWN_SCRIPT")]
    spawn_script: Option<PathBuf>,

    /// Directory holding per-task worker workspaces
    /// (default: ~/.openclaw/discord-workers)
    #[arg(long, env = "HERALD_WORKSPACE_DIR")]
    workspace_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = Config::resolve(cli.spawn_script, cli.workspace_dir)?;
    let bridge = Bridge::from_config(&config);
    let task = Task::new(cli.task_id, cli.task);

    let mut record = bridge.run_task(&task).await;
    Overrides {
        model: cli.model,
        thinking: cli.thinking,
    }
    .apply(&mut record);

    let json = record
        .to_pretty_json()
        .context("failed to serialize result")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            print_written(path);
        }
        None => print_result(&json),
    }

    let message = record
        .text(herald::record::DISCORD_MESSAGE)
        .unwrap_or_default();
    print_message(&message);

    Ok(if record.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs go to stderr; stdout carries the report.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("herald={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
