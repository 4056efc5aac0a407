//! Configuration loading and management for the roster engine.
//!
//! This module provides functionality to load store configurations from YAML
//! files: store metadata, the surcharge weekday, time-off expansion settings
//! and receipt chart settings.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded store: {}", config.store().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ReceiptsConfig, ScheduleConfig, StoreConfig, StoreMetadata, TimeOffSettings};
