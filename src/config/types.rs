//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;

/// Identifying information about the store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreMetadata {
    /// The store name shown on reports.
    pub name: String,
    /// The currency label of receipt amounts (e.g., "EUR").
    pub currency: String,
}

/// How approved time-off requests become shift records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeOffSettings {
    /// Start time of generated vacation and sick shifts.
    pub default_start_time: NaiveTime,
    /// Working days the weekly hours are spread across.
    pub working_days_per_week: u32,
    /// Weekdays on which no vacation or sick shift is generated.
    pub excluded_weekdays: Vec<Weekday>,
    /// Weekly contract hours used when the employee has none on record.
    pub default_weekly_hours: u32,
    /// Longest vacation or sick range, in calendar days, one request may cover.
    #[serde(default = "default_max_request_days")]
    pub max_request_days: u32,
}

fn default_max_request_days() -> u32 {
    366
}

impl Default for TimeOffSettings {
    fn default() -> Self {
        Self {
            default_start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            working_days_per_week: 6,
            excluded_weekdays: vec![Weekday::Sun],
            default_weekly_hours: 40,
            max_request_days: default_max_request_days(),
        }
    }
}

fn default_surcharge_day() -> Weekday {
    Weekday::Sun
}

/// Schedule configuration from schedule.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Work and overtime on this weekday count as surcharged hours.
    #[serde(default = "default_surcharge_day")]
    pub surcharge_day: Weekday,
    /// Time-off expansion settings.
    #[serde(default)]
    pub time_off: TimeOffSettings,
}

/// Receipts configuration from receipts.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptsConfig {
    /// Number of most recent receipt dates in the daily series.
    pub chart_window_days: usize,
}

/// The complete store configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    metadata: StoreMetadata,
    schedule: ScheduleConfig,
    receipts: ReceiptsConfig,
}

impl StoreConfig {
    /// Creates a new StoreConfig from its component parts.
    pub fn new(
        metadata: StoreMetadata,
        schedule: ScheduleConfig,
        receipts: ReceiptsConfig,
    ) -> Self {
        Self {
            metadata,
            schedule,
            receipts,
        }
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Returns the schedule configuration.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the receipts configuration.
    pub fn receipts(&self) -> &ReceiptsConfig {
        &self.receipts
    }
}
