// feedbox - a social feed widget in the terminal
//
// Compose posts under a category, filter the feed, react and leave
// single-level comments. State lives in memory for the session only.
//
// Architecture:
// - Feed: the state container (posts, filter, reactions, comments)
// - TUI (ratatui): renders the Feed and routes input to it
// - Config: env > ~/.config/feedbox/config.toml > defaults
// - Logging: tracing events captured for the logs panel, optionally to file

mod cli;
mod config;
mod demo;
mod feed;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::Cli;
use config::Config;
use logging::LogBuffer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands (config --show, --reset, ...) run and exit
    if let Some(command) = cli.command {
        return cli::handle_command(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    // Logs are captured into the buffer so they never garble the display.
    // The guard must live until exit so the file writer flushes.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer);

    tracing::info!(
        version = config::VERSION,
        author = %config.author,
        demo = config.demo_mode,
        "Starting feedbox"
    );

    let demo_mode = config.demo_mode;
    let result = tui::run_tui(config, log_buffer, |app| {
        if demo_mode {
            demo::seed(&mut app.feed, Utc::now());
        }
    })
    .await;

    if let Err(ref e) = result {
        tracing::error!("TUI error: {:?}", e);
    }
    tracing::info!("Shutdown complete");
    result
}
