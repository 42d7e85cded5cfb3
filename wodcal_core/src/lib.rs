#![forbid(unsafe_code)]

//! Core domain model and business logic for the Wodcal calendar generator.
//!
//! This crate provides:
//! - Domain types (workout cycles, all-day events, calendar documents)
//! - Workout source loading (YAML)
//! - Week-by-week rotation of the workout cycle
//! - Day-by-day calendar assembly
//! - iCalendar serialization

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod rotation;
pub mod calendar;
pub mod ics;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::load_workout_set;
pub use config::Config;
pub use rotation::{generate_weekly_workouts, rotate_cycle};
pub use calendar::calculate_calendar;
pub use ics::generate_ics;
