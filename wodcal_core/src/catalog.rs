//! Workout source loading.
//!
//! The workout cycle is read from a YAML file: a mapping with a `location`
//! string and an ordered `workouts` sequence, each entry carrying the
//! `contents` items of one workout.

use crate::{Result, WorkoutSet};
use std::path::Path;

/// Load the workout cycle from a YAML file
///
/// The source is not validated beyond deserialization; an empty or
/// undersized cycle is caught later by the rotation.
pub fn load_workout_set(path: &Path) -> Result<WorkoutSet> {
    let contents = std::fs::read_to_string(path)?;
    let set: WorkoutSet = serde_yaml::from_str(&contents)?;
    tracing::info!("Loaded {} workouts from {:?}", set.workouts.len(), path);
    Ok(set)
}
