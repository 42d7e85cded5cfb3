//! Day-by-day calendar assembly.
//!
//! The builder walks the date range one day at a time, re-deriving the
//! week's title sequence from the rotation whenever the ISO week number
//! increases, and emits one all-day event per day. No I/O happens here.

use crate::rotation::generate_weekly_workouts;
use crate::{AllDayEvent, CalendarDocument, CalendarMetadata, Result, WorkoutSet};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Assemble the calendar document for an inclusive date range.
///
/// `generated_at` is injected by the caller and stamped into the document,
/// so identical inputs serialize to identical output.
///
/// Week boundaries are detected by comparing ISO week-of-year numbers, not
/// elapsed days: a range starting mid-week keeps that week's rotation for
/// the remaining partial week and rotates at the next ISO boundary. Because
/// the tracked week number only moves on a strict increase and ISO
/// week-of-year resets to 1 in January, a range crossing a year boundary
/// stops rotating from that point on. Known limitation.
///
/// An empty range (`start_date > end_date`) yields a valid document with
/// zero events.
pub fn calculate_calendar(
    set: &WorkoutSet,
    start_offset: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    metadata: CalendarMetadata,
    generated_at: DateTime<Utc>,
) -> Result<CalendarDocument> {
    let titles = set.titles();
    let mut week_count: u32 = 0;
    let mut current_titles = generate_weekly_workouts(&titles, start_offset, week_count)?;
    let mut current_week = start_date.iso_week().week();

    let mut events = Vec::new();
    let mut cursor = start_date;
    while cursor <= end_date {
        let local_week = cursor.iso_week().week();
        if local_week > current_week {
            current_week = local_week;
            week_count += 1;
            current_titles = generate_weekly_workouts(&titles, start_offset, week_count)?;
            tracing::debug!("Rotated to week {} at {}", week_count, cursor);
        }

        let weekday = cursor.weekday().num_days_from_monday() as usize;
        events.push(AllDayEvent {
            date: cursor,
            summary: current_titles[weekday % current_titles.len()].clone(),
            location: set.location.clone(),
        });

        cursor += Duration::days(1);
    }

    tracing::info!(
        "Assembled {} events between {} and {}",
        events.len(),
        start_date,
        end_date
    );

    Ok(CalendarDocument {
        metadata,
        generated_at,
        events,
    })
}
