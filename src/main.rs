// MindCare - terminal wellness check-in and dashboard
//
// A single-screen wellness companion for the terminal:
// - Check-in: the daily mood check-in form
// - Dashboard: trends, category scores and insights
// - Resources: emergency support and the resource library
// - Profile: preferences and session activity
//
// Architecture:
// - TUI (ratatui): renders the four sections, driven by a tokio event loop
// - Check-in state machine: owns the form, hands submissions to the app
// - Catalog: the static data (moods, factors, resources, mock week)
// - Logging: tracing captured into an in-memory buffer for display

mod catalog;
mod checkin;
mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log buffer backing the Profile view's activity list
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs go to the in-memory buffer, never to stdout:
    // anything printed while the alternate screen is active garbles the TUI.
    // File logging is optional on top.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("mindcare={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so
    // buffered file logs flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    );
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("MindCare {} starting", config::VERSION);

    tui::run_tui(log_buffer, config).await?;

    tracing::info!("Goodbye");
    Ok(())
}
