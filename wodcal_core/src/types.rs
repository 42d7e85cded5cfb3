//! Core domain types for the Wodcal calendar generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout definitions and the weekly-repeating cycle
//! - All-day calendar events
//! - The assembled calendar document

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Workout Source Types
// ============================================================================

/// A single workout in the rotation cycle.
///
/// A workout is an ordered list of content items (e.g. the movements of the
/// day); the display title joins them with `/`. Source order is significant
/// and fixed for the lifetime of a run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDefinition {
    pub contents: Vec<String>,
}

impl WorkoutDefinition {
    /// Display title: content items joined with `/`
    pub fn title(&self) -> String {
        self.contents.join("/")
    }
}

/// A named location plus its ordered workout cycle.
///
/// Loaded once per run from the workout source file, immutable thereafter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub location: String,
    pub workouts: Vec<WorkoutDefinition>,
}

impl WorkoutSet {
    /// The ordered cycle of display titles
    pub fn titles(&self) -> Vec<String> {
        self.workouts.iter().map(|w| w.title()).collect()
    }
}

// ============================================================================
// Calendar Types
// ============================================================================

/// One all-day calendar entry: a workout title on a date at a location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllDayEvent {
    pub date: NaiveDate,
    pub summary: String,
    pub location: String,
}

/// Calendar-level metadata written into the iCalendar header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarMetadata {
    pub name: String,
    pub description: String,
    pub timezone: String,
}

/// The assembled calendar, ready for serialization.
///
/// Built incrementally by the calendar builder, serialized once, then
/// discarded. `generated_at` is injected by the caller so that identical
/// inputs produce identical output.
#[derive(Clone, Debug)]
pub struct CalendarDocument {
    pub metadata: CalendarMetadata,
    pub generated_at: DateTime<Utc>,
    pub events: Vec<AllDayEvent>,
}
