//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading store
//! configurations from YAML files.

use chrono::Weekday;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ReceiptsConfig, ScheduleConfig, StoreConfig, StoreMetadata, TimeOffSettings};

/// Loads and provides access to store configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides accessors for the schedule and receipt settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── store.yaml     # Store name and currency
/// ├── schedule.yaml  # Surcharge day and time-off settings
/// └── receipts.yaml  # Receipt chart settings
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Store: {}", loader.store().name);
/// println!("Surcharge day: {}", loader.surcharge_day());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StoreConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A numeric setting is zero where a positive value is required
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<StoreMetadata>(&path.join("store.yaml"))?;

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        if schedule.time_off.working_days_per_week == 0 {
            return Err(EngineError::ConfigParseError {
                path: schedule_path.display().to_string(),
                message: "time_off.working_days_per_week must be at least 1".to_string(),
            });
        }
        if schedule.time_off.max_request_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: schedule_path.display().to_string(),
                message: "time_off.max_request_days must be at least 1".to_string(),
            });
        }

        let receipts_path = path.join("receipts.yaml");
        let receipts = Self::load_yaml::<ReceiptsConfig>(&receipts_path)?;
        if receipts.chart_window_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: receipts_path.display().to_string(),
                message: "chart_window_days must be at least 1".to_string(),
            });
        }

        Ok(Self {
            config: StoreConfig::new(metadata, schedule, receipts),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        self.config.store()
    }

    /// Returns the weekday whose worked minutes are surcharged.
    pub fn surcharge_day(&self) -> Weekday {
        self.config.schedule().surcharge_day
    }

    /// Returns the time-off expansion settings.
    pub fn time_off(&self) -> &TimeOffSettings {
        &self.config.schedule().time_off
    }

    /// Returns how many receipt dates the daily series keeps.
    pub fn chart_window_days(&self) -> usize {
        self.config.receipts().chart_window_days
    }
}
