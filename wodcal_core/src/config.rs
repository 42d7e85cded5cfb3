//! Configuration file support for Wodcal.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wodcal/config.toml`.
//! Every setting has a default, so the file is optional; CLI flags may
//! override the file locations per run.

use crate::{CalendarMetadata, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Input and output file locations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_workouts_file")]
    pub workouts: PathBuf,

    #[serde(default = "default_output_file")]
    pub output: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            workouts: default_workouts_file(),
            output: default_output_file(),
        }
    }
}

/// Labels written into the calendar header
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_name")]
    pub name: String,

    #[serde(default = "default_calendar_description")]
    pub description: String,

    #[serde(default = "default_calendar_timezone")]
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            description: default_calendar_description(),
            timezone: default_calendar_timezone(),
        }
    }
}

impl CalendarConfig {
    /// The metadata block stamped into every generated calendar
    pub fn metadata(&self) -> CalendarMetadata {
        CalendarMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            timezone: self.timezone.clone(),
        }
    }
}

// Default value functions
fn default_workouts_file() -> PathBuf {
    PathBuf::from("workouts.yml")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("crossfit.ics")
}

fn default_calendar_name() -> String {
    "Workouts".into()
}

fn default_calendar_description() -> String {
    "Weekly rotating workout plan".into()
}

fn default_calendar_timezone() -> String {
    "Europe/Berlin".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("wodcal").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.files.workouts, PathBuf::from("workouts.yml"));
        assert_eq!(config.files.output, PathBuf::from("crossfit.ics"));
        assert_eq!(config.calendar.name, "Workouts");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.files.workouts, parsed.files.workouts);
        assert_eq!(config.calendar.timezone, parsed.calendar.timezone);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[calendar]
name = "CrossFit Cologne WODs"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.calendar.name, "CrossFit Cologne WODs");
        assert_eq!(config.calendar.timezone, "Europe/Berlin"); // default
        assert_eq!(config.files.output, PathBuf::from("crossfit.ics")); // default
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[files]\nworkouts = \"plans/wods.yml\"\noutput = \"out.ics\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.files.workouts, PathBuf::from("plans/wods.yml"));
        assert_eq!(config.files.output, PathBuf::from("out.ics"));
    }

    #[test]
    fn test_metadata_mirrors_calendar_section() {
        let config = Config::default();
        let metadata = config.calendar.metadata();
        assert_eq!(metadata.name, config.calendar.name);
        assert_eq!(metadata.description, config.calendar.description);
        assert_eq!(metadata.timezone, config.calendar.timezone);
    }
}
