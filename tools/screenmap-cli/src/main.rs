//! screenmap CLI — print the current monitor layout.
//!
//! Usage:
//!   screenmap [OPTIONS]          Print all monitors as a JSON array
//!   screenmap check              Summarize the display setup

use clap::{Parser, Subcommand};
use screenmap_common::config::{config_file_path, AppConfig};
use screenmap_platform_linux::source::ShellCommandSource;

mod commands;

#[derive(Parser)]
#[command(
    name = "screenmap",
    about = "List connected monitors and their geometry as JSON",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Pretty-print the JSON listing
    #[arg(long)]
    pretty: bool,

    /// Only print the display with this 1-based screen id
    #[arg(long)]
    screen: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the display server and detected monitors
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    screenmap_common::logging::init_logging(&config.logging);

    if let Some(e) = config_error {
        tracing::warn!("Ignoring config at {:?}: {}", config_file_path(), e);
    }

    let source = ShellCommandSource::from_config(&config.source);
    match cli.command {
        None => {
            let stdout = std::io::stdout();
            commands::list::run(&source, cli.pretty, cli.screen, &mut stdout.lock())
        }
        Some(Commands::Check) => commands::check::run(&source),
    }
}
