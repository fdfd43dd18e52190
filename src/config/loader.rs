//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading schedule
//! configuration and exception lists from disk.

use std::fs;
use std::path::Path;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::Exception;

use super::types::ScheduleConfig;

/// Loads and provides access to schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml    # ScheduleConfig (required)
/// └── exceptions.yaml  # list of exceptions (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekly hours: {}", loader.config().weekly_hours);
/// println!("Exceptions: {}", loader.exceptions().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ScheduleConfig,
    exceptions: Vec<Exception>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `schedule.yaml` is missing
    /// - Any file contains invalid YAML or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> SchedulerResult<Self> {
        let path = path.as_ref();

        let config = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        config.validate()?;

        let exceptions_path = path.join("exceptions.yaml");
        let exceptions = if exceptions_path.exists() {
            Self::load_exceptions(&exceptions_path)?
        } else {
            Vec::new()
        };

        Ok(Self { config, exceptions })
    }

    /// Loads an exception list from a `.yaml`, `.yml` or `.json` file.
    ///
    /// Files exported from the browser store are JSON with camelCase keys
    /// (`endDate`, `weeklyHours`, `splitDays`) and an extra `id`; both those
    /// and the snake_case keys are accepted. Hand-written files are usually
    /// YAML. Any other extension is parsed as YAML.
    pub fn load_exceptions<P: AsRef<Path>>(path: P) -> SchedulerResult<Vec<Exception>> {
        let path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::load_json(path)
        } else {
            Self::load_yaml(path)
        }
    }

    /// Builds a loader from already-parsed parts, validating the configuration.
    pub fn from_parts(config: ScheduleConfig, exceptions: Vec<Exception>) -> SchedulerResult<Self> {
        config.validate()?;
        Ok(Self { config, exceptions })
    }

    fn read(path: &Path) -> SchedulerResult<String> {
        fs::read_to_string(path).map_err(|_| SchedulerError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
        let content = Self::read(path)?;
        serde_yaml::from_str(&content).map_err(|e| SchedulerError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
        let content = Self::read(path)?;
        serde_json::from_str(&content).map_err(|e| SchedulerError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the loaded exceptions.
    pub fn exceptions(&self) -> &[Exception] {
        &self.exceptions
    }
}
