//! Settings commands.

use clap::Subcommand;
use console::style;

use lc_core::config::ConfigHandle;
use lc_core::error::{LcError, LcResult};
use lc_services::settings::SettingsService;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show all settings.
    Show,
    /// Get a specific setting value by key path.
    Get {
        /// Setting key path (e.g. "logging.level", "storage.data_dir").
        key: String,
    },
    /// Set a specific setting value by key path.
    Set {
        /// Setting key path (e.g. "logging.level", "storage.data_dir").
        key: String,
        /// New value.
        value: String,
    },
}

/// Resolve a dot-separated key path to a value.
async fn get_setting_value(svc: &SettingsService, key: &str) -> Option<String> {
    match key {
        "storage.data_dir" => Some(svc.data_dir().await),
        "logging.level" | "log.level" => Some(svc.log_level().await),
        "logging.json_output" => Some(svc.json_logging().await.to_string()),
        "calendar.dim_empty_past_days" => Some(svc.dim_empty_past_days().await.to_string()),
        "calendar.preview_count" => Some(svc.preview_count().await.to_string()),
        _ => None,
    }
}

/// Apply a value to a dot-separated key path.
async fn set_setting_value(svc: &SettingsService, key: &str, value: &str) -> Result<(), String> {
    match key {
        "storage.data_dir" => {
            svc.set_data_dir(value.to_string()).await;
        }
        "logging.level" | "log.level" => {
            let v = value.to_lowercase();
            if !["trace", "debug", "info", "warn", "error"].contains(&v.as_str()) {
                return Err("expected one of: trace, debug, info, warn, error".to_string());
            }
            svc.set_log_level(v).await;
        }
        "logging.json_output" => {
            svc.set_json_logging(value.parse().map_err(|_| "expected true/false".to_string())?)
                .await;
        }
        "calendar.dim_empty_past_days" => {
            svc.set_dim_empty_past_days(
                value.parse().map_err(|_| "expected true/false".to_string())?,
            )
            .await;
        }
        "calendar.preview_count" => {
            svc.set_preview_count(value.parse().map_err(|_| "invalid integer".to_string())?)
                .await;
        }
        _ => {
            return Err(format!("unknown setting key: {key}"));
        }
    }
    Ok(())
}

async fn print_settings_text(svc: &SettingsService) {
    println!("{}", style("Storage").bold().underlined());
    println!("  storage.data_dir               {}", svc.data_dir().await);

    println!();
    println!("{}", style("Logging").bold().underlined());
    println!("  logging.level                  {}", svc.log_level().await);
    println!("  logging.json_output            {}", svc.json_logging().await);

    println!();
    println!("{}", style("Calendar").bold().underlined());
    println!(
        "  calendar.dim_empty_past_days   {}",
        svc.dim_empty_past_days().await
    );
    println!(
        "  calendar.preview_count         {}",
        svc.preview_count().await
    );
}

pub async fn run(
    config: ConfigHandle,
    action: SettingsAction,
    format: OutputFormat,
) -> LcResult<()> {
    let svc = SettingsService::new(config);

    match action {
        SettingsAction::Show => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&svc.export_as_json().await)?);
            }
            OutputFormat::Text => print_settings_text(&svc).await,
        },

        SettingsAction::Get { key } => match get_setting_value(&svc, &key).await {
            Some(value) => println!("{value}"),
            None => return Err(LcError::Config(format!("unknown setting key: {key}"))),
        },

        SettingsAction::Set { key, value } => {
            set_setting_value(&svc, &key, &value)
                .await
                .map_err(LcError::Config)?;
            svc.save().await?;
            println!("{} {key} = {value}", style("✓").green());
        }
    }

    Ok(())
}
