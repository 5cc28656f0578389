//! Status command: journal summary and service health.

use console::style;

use lc_core::config::ConfigHandle;
use lc_core::error::LcResult;
use lc_core::platform::Platform;
use lc_services::registry::ServiceRegistry;

use crate::commands::{journal_service, open_store, theme_service};
use crate::OutputFormat;

pub async fn run(config: ConfigHandle, format: OutputFormat) -> LcResult<()> {
    let data_dir = config.read().await.effective_data_dir()?;

    let journal = journal_service(&config).await?;
    let themes = theme_service(&config).await?;

    let all = journal.all_photos().await;
    let total = all.total_count();
    let days = all.day_count();
    let selected = themes.selected_theme().await;

    // Bring the full service set up once to report health.
    let store = open_store(&config).await?;
    let mut registry = ServiceRegistry::new(config, store);
    registry.register_all();
    registry.init_all().await?;
    let health = registry.health_check().await;

    match format {
        OutputFormat::Json => {
            let services: Vec<serde_json::Value> = health
                .iter()
                .map(|(name, state, healthy)| {
                    serde_json::json!({
                        "name": name,
                        "state": state.to_string(),
                        "healthy": healthy,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "version": lc_core::constants::APP_VERSION,
                    "platform": Platform::current().to_string(),
                    "dataDir": data_dir.display().to_string(),
                    "totalPhotos": total,
                    "daysWithPhotos": days,
                    "selectedTheme": selected.key,
                    "services": services,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("{}", style("LoveCalendar").bold());
            println!("  version      {}", lc_core::constants::APP_VERSION);
            println!("  platform     {}", Platform::current());
            println!("  data dir     {}", data_dir.display());
            println!("  photos       {total} across {days} day(s)");
            println!("  theme        {} ({})", selected.name, selected.key);
            println!();
            println!("{}", style("Services").bold());
            for (name, state, healthy) in &health {
                let mark = if *healthy {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                println!("  {mark} {name:<10} {state}");
            }
        }
    }

    registry.shutdown_all().await?;
    Ok(())
}
