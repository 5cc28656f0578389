//! Month-grid derivation for the calendar screen.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use lc_core::error::{LcError, LcResult};

use super::journal::{DateKey, Journal};

/// One cell of the month grid.
///
/// Cells before the first of the month carry `day: None` so a Sunday-first
/// grid lines up: a month starting on Thursday gets four blank cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Day of month, or None for a leading blank cell.
    pub day: Option<u32>,
    /// Date key for real cells.
    pub date: Option<DateKey>,
    pub is_today: bool,
    pub is_past: bool,
    pub has_photo: bool,
    /// Uri of the day's latest photo, for the cell thumbnail.
    pub photo_uri: Option<String>,
}

impl CalendarDay {
    fn blank() -> Self {
        Self {
            day: None,
            date: None,
            is_today: false,
            is_past: false,
            has_photo: false,
            photo_uri: None,
        }
    }
}

/// Build the Sunday-first grid for `year`/`month` against the journal.
///
/// `today` is passed in rather than read from the clock so views and tests
/// agree on what "today" and "past" mean.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    journal: &Journal,
) -> LcResult<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LcError::InvalidDate(format!("{year}-{month:02}")))?;
    let days_in_month = days_in_month(year, month)?;

    let mut grid = Vec::with_capacity(42);

    // Blank cells before the first of the month
    for _ in 0..first.weekday().num_days_from_sunday() {
        grid.push(CalendarDay::blank());
    }

    for day in 1..=days_in_month {
        // Every day in a validated month exists
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let key = DateKey::from_date(date);
        grid.push(CalendarDay {
            day: Some(day),
            date: Some(key),
            is_today: date == today,
            is_past: date < today,
            has_photo: journal.has_photos(key),
            photo_uri: journal.latest_for(key).map(|e| e.uri.clone()),
        });
    }

    Ok(grid)
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> LcResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LcError::InvalidDate(format!("{year}-{month:02}")))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| LcError::InvalidDate(format!("{year}-{month:02}")))?;
    Ok(next_month.signed_duration_since(first).num_days() as u32)
}
