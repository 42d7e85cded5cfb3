//! Error types for the wodcal_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wodcal_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Workout source file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A CLI date did not match the expected format
    #[error("unparseable date '{value}', expected format {expected} (e.g. 08.02.2018)")]
    DateFormat {
        value: String,
        expected: &'static str,
    },

    /// Rotation start index outside the workout cycle
    #[error("start workout {offset} is out of range for a cycle of {cycle_len} workouts")]
    InvalidOffset { offset: usize, cycle_len: usize },
}
