//! Theme commands.

use clap::Subcommand;
use console::style;

use lc_core::config::ConfigHandle;
use lc_core::error::LcResult;
use lc_models::models::theme::AppTheme;

use crate::commands::theme_service;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ThemesAction {
    /// List all built-in themes.
    List,
    /// Show the currently selected theme.
    Current,
    /// Show one theme's full palette.
    Show {
        /// Theme key (e.g. pinkLove).
        key: String,
    },
    /// Select a theme.
    Set {
        /// Theme key (e.g. roseGold).
        key: String,
    },
}

fn print_theme(theme: &AppTheme) {
    println!("{} ({})", style(&theme.name).bold(), theme.key);
    println!("  {}", theme.description);
    println!("  primary        {}", theme.colors.primary);
    println!("  secondary      {}", theme.colors.secondary);
    println!("  accent         {}", theme.colors.accent);
    println!("  background     {}", theme.colors.background);
    println!("  surface        {}", theme.colors.surface);
    println!("  text           {}", theme.colors.text);
    println!("  textSecondary  {}", theme.colors.text_secondary);
    println!("  border         {}", theme.colors.border);
}

pub async fn run(config: ConfigHandle, action: ThemesAction, format: OutputFormat) -> LcResult<()> {
    let themes = theme_service(&config).await?;

    match action {
        ThemesAction::List => {
            let all = themes.list_themes();
            let selected = themes.selected_theme().await;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&all)?);
                }
                OutputFormat::Text => {
                    for theme in &all {
                        let marker = if theme.key == selected.key { "*" } else { " " };
                        println!(
                            "{marker} {}  {}",
                            style(format!("{:<16}", theme.key)).cyan(),
                            theme.name
                        );
                    }
                }
            }
        }

        ThemesAction::Current => {
            let theme = themes.selected_theme().await;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&theme)?);
                }
                OutputFormat::Text => print_theme(&theme),
            }
        }

        ThemesAction::Show { key } => {
            match lc_models::models::theme::find_theme(&key) {
                Some(theme) => match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&theme)?);
                    }
                    OutputFormat::Text => print_theme(&theme),
                },
                None => {
                    println!("unknown theme: {key}");
                    println!("available: {}",
                        themes
                            .list_themes()
                            .iter()
                            .map(|t| t.key.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
            }
        }

        ThemesAction::Set { key } => {
            let theme = themes.set_selected_theme(&key).await?;
            println!("{} theme set to {}", style("✓").green(), theme.name);
        }
    }

    Ok(())
}
