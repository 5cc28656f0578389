//! Photo journal commands.

use clap::Subcommand;
use console::style;

use lc_core::config::ConfigHandle;
use lc_core::error::{LcError, LcResult};
use lc_models::models::journal::DateKey;
use lc_models::models::photo_entry::PhotoEntry;
use lc_services::capture::{CaptureProvider, FileImport};

use crate::commands::{format_timestamp, journal_service, truncate};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum PhotosAction {
    /// Record a photo for a day.
    Add {
        /// Image file to import (stored as a file:// uri).
        #[arg(short = 'F', long, conflicts_with = "uri")]
        file: Option<String>,
        /// Record a pre-built uri as-is (e.g. a content:// uri).
        #[arg(long)]
        uri: Option<String>,
        /// Day to record under, YYYY-MM-DD (default: today).
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List photos for one day, or the whole gallery newest-first.
    List {
        /// Day to list, YYYY-MM-DD. Omit for the full gallery.
        date: Option<String>,
    },
    /// Delete a photo by id.
    Delete {
        /// Day the photo is recorded under, YYYY-MM-DD.
        date: String,
        /// Entry id.
        id: String,
    },
    /// Replace a photo's note and emoji (both fields, every time).
    Annotate {
        /// Day the photo is recorded under, YYYY-MM-DD.
        date: String,
        /// Entry id.
        id: String,
        /// Note text. Empty clears the note.
        #[arg(long, default_value = "")]
        note: String,
        /// Emoji tag. Empty clears the emoji.
        #[arg(long, default_value = "")]
        emoji: String,
    },
    /// Show the total photo count.
    Count,
    /// Show the uri of a day's most recent photo.
    Latest {
        /// Day to check, YYYY-MM-DD.
        date: String,
    },
}

/// Resolve the date argument, defaulting to today.
fn resolve_date(date: Option<&str>) -> LcResult<DateKey> {
    match date {
        Some(s) => DateKey::parse(s),
        None => Ok(DateKey::from_date(chrono::Local::now().date_naive())),
    }
}

fn print_entry_line(date: DateKey, entry: &PhotoEntry) {
    let annotation = match (&entry.note, &entry.emoji) {
        (Some(note), Some(emoji)) => format!("  {emoji} {}", truncate(note, 40)),
        (Some(note), None) => format!("  {}", truncate(note, 40)),
        (None, Some(emoji)) => format!("  {emoji}"),
        (None, None) => String::new(),
    };
    println!(
        "  {}  {}  {}  {}{}",
        style(date.to_string()).cyan(),
        entry.id,
        style(format_timestamp(entry.timestamp)).dim(),
        truncate(&entry.uri, 50),
        annotation,
    );
}

pub async fn run(config: ConfigHandle, action: PhotosAction, format: OutputFormat) -> LcResult<()> {
    let journal = journal_service(&config).await?;

    match action {
        PhotosAction::Add { file, uri, date } => {
            let date = resolve_date(date.as_deref())?;

            let uri = match (file, uri) {
                (Some(path), _) => match FileImport::new(path).capture().await? {
                    Some(uri) => uri,
                    None => {
                        println!("import cancelled");
                        return Ok(());
                    }
                },
                (None, Some(uri)) => uri,
                (None, None) => {
                    return Err(LcError::Capture(
                        "nothing to record: pass --file or --uri".into(),
                    ))
                }
            };

            let entry = journal.add_photo(date, &uri).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                }
                OutputFormat::Text => {
                    println!(
                        "{} photo {} recorded for {date}",
                        style("✓").green(),
                        entry.id
                    );
                }
            }
        }

        PhotosAction::List { date: Some(date) } => {
            let date = DateKey::parse(&date)?;
            let photos = journal.photos_for_date(date).await;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&photos)?);
                }
                OutputFormat::Text => {
                    if photos.is_empty() {
                        println!("no photos for {date}");
                    } else {
                        println!("{}", style(format!("Photos for {date}")).bold());
                        for entry in &photos {
                            print_entry_line(date, entry);
                        }
                    }
                }
            }
        }

        PhotosAction::List { date: None } => {
            let gallery = journal.gallery().await;
            match format {
                OutputFormat::Json => {
                    let items: Vec<serde_json::Value> = gallery
                        .iter()
                        .map(|(date, entry)| {
                            serde_json::json!({
                                "date": date.to_string(),
                                "entry": entry,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&items)?);
                }
                OutputFormat::Text => {
                    if gallery.is_empty() {
                        println!("the journal is empty");
                    } else {
                        println!("{}", style("Gallery (newest first)").bold());
                        for (date, entry) in &gallery {
                            print_entry_line(*date, entry);
                        }
                    }
                }
            }
        }

        PhotosAction::Delete { date, id } => {
            let date = DateKey::parse(&date)?;
            journal.delete_photo(date, &id).await?;
            println!("{} deleted {id} from {date}", style("✓").green());
        }

        PhotosAction::Annotate {
            date,
            id,
            note,
            emoji,
        } => {
            let date = DateKey::parse(&date)?;
            journal.update_note_and_emoji(date, &id, &note, &emoji).await?;
            println!("{} annotation updated for {id}", style("✓").green());
        }

        PhotosAction::Count => {
            let count = journal.total_photo_count().await;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "total": count }));
                }
                OutputFormat::Text => {
                    println!("{count} photo(s) in the journal");
                }
            }
        }

        PhotosAction::Latest { date } => {
            let date = DateKey::parse(&date)?;
            match journal.latest_photo_for_date(date).await {
                Some(uri) => match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::json!({ "date": date.to_string(), "uri": uri }));
                    }
                    OutputFormat::Text => println!("{uri}"),
                },
                None => println!("no photos for {date}"),
            }
        }
    }

    Ok(())
}
