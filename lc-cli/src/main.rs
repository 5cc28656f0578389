//! LoveCalendar CLI - Command-line interface for the photo journal.
//!
//! Drives the photo-journal store from the terminal: record photos against
//! calendar days, browse the month grid and the gallery, annotate entries,
//! and switch color themes.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use lc_core::config::{AppConfig, ConfigHandle};
use lc_core::error::LcResult;
use lc_core::logging;
use lc_core::platform::Platform;

/// LoveCalendar - a photo journal on a calendar.
#[derive(Parser)]
#[command(
    name = "lovecal",
    version,
    about = "LoveCalendar photo journal CLI",
    long_about = "A command-line interface for the LoveCalendar photo journal.\n\
                   Record a photo per day, annotate it, browse the month grid, and\n\
                   switch color themes."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, list, annotate, and delete photos.
    Photos {
        #[command(subcommand)]
        action: commands::photos::PhotosAction,
    },
    /// Render the month grid.
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// List and switch color themes.
    Themes {
        #[command(subcommand)]
        action: commands::themes::ThemesAction,
    },
    /// View and modify settings.
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Show journal and service status.
    Status,
}

#[tokio::main]
async fn main() -> LcResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let log_dir = Platform::data_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("logs");
    let _guard = logging::init_logging(log_level, &log_dir, false)?;

    // Load configuration
    let config = if let Some(path) = cli.config.as_deref() {
        AppConfig::load_from_file(std::path::Path::new(path))?
    } else {
        AppConfig::load_default()?
    };

    let config_handle = ConfigHandle::new(config);

    info!("LoveCalendar CLI v{}", lc_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Photos { action } => {
            commands::photos::run(config_handle, action, cli.format).await
        }
        Commands::Calendar { action } => {
            commands::calendar::run(config_handle, action, cli.format).await
        }
        Commands::Themes { action } => {
            commands::themes::run(config_handle, action, cli.format).await
        }
        Commands::Settings { action } => {
            commands::settings::run(config_handle, action, cli.format).await
        }
        Commands::Status => commands::status::run(config_handle, cli.format).await,
    }
}
