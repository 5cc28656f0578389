//! Calendar grid commands.

use chrono::Datelike;
use clap::Subcommand;
use console::style;

use lc_core::config::ConfigHandle;
use lc_core::error::LcResult;
use lc_models::models::calendar::CalendarDay;

use crate::commands::journal_service;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Render the month grid (defaults to the current month).
    Show {
        /// Year, e.g. 2024.
        #[arg(short, long)]
        year: Option<i32>,
        /// Month, 1-12.
        #[arg(short, long)]
        month: Option<u32>,
    },
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

fn render_grid(year: i32, month: u32, grid: &[CalendarDay], dim_empty_past: bool) {
    let month_name = MONTH_NAMES[(month - 1) as usize];
    println!("{}", style(format!("{month_name} {year}")).bold().underlined());
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    for week in grid.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let rendered = match cell.day {
                None => "    ".to_string(),
                Some(day) => {
                    let label = format!("{day:>3}");
                    let styled = if cell.is_today {
                        style(label).reverse().to_string()
                    } else if cell.has_photo {
                        style(label).magenta().bold().to_string()
                    } else if cell.is_past && dim_empty_past {
                        style(label).dim().to_string()
                    } else {
                        label
                    };
                    let marker = if cell.has_photo { "*" } else { " " };
                    format!("{styled}{marker}")
                }
            };
            line.push_str(&rendered);
        }
        println!("{line}");
    }
    println!("  {} photo day", style("*").magenta().bold());
}

pub async fn run(
    config: ConfigHandle,
    action: CalendarAction,
    format: OutputFormat,
) -> LcResult<()> {
    match action {
        CalendarAction::Show { year, month } => {
            let today = chrono::Local::now().date_naive();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());

            let journal = journal_service(&config).await?;
            let grid = journal.month_grid(year, month, today).await?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&grid)?);
                }
                OutputFormat::Text => {
                    let dim_empty_past = config.read().await.calendar.dim_empty_past_days;
                    render_grid(year, month, &grid, dim_empty_past);
                }
            }
        }
    }

    Ok(())
}
