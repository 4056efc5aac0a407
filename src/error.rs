//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can reject input or configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift row was missing data or contained malformed values.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift (empty when the row had none).
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A receipt row was missing data or contained malformed values.
    #[error("Invalid receipt '{receipt_id}': {message}")]
    InvalidReceipt {
        /// The ID of the invalid receipt (empty when the row had none).
        receipt_id: String,
        /// A description of what made the receipt invalid.
        message: String,
    },

    /// A period could not be built from the given bounds.
    #[error("Invalid period {start} to {end}: {message}")]
    InvalidPeriod {
        /// The requested first day.
        start: NaiveDate,
        /// The requested last day.
        end: NaiveDate,
        /// A description of the problem.
        message: String,
    },

    /// A calendar month outside 1..=12 or outside the supported date range.
    #[error("Invalid month {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u32,
    },

    /// A time-off request could not be expanded into shifts.
    #[error("Invalid time-off request '{request_id}': {message}")]
    InvalidTimeOff {
        /// The ID of the request.
        request_id: String,
        /// A description of the problem.
        message: String,
    },

    /// An arithmetic step overflowed the supported range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/store.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/store.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let error = EngineError::InvalidShift {
            shift_id: "shift_001".to_string(),
            message: "missing start_time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift 'shift_001': missing start_time"
        );
    }

    #[test]
    fn test_invalid_receipt_displays_id_and_message() {
        let error = EngineError::InvalidReceipt {
            receipt_id: "rc_9".to_string(),
            message: "amount must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid receipt 'rc_9': amount must not be negative"
        );
    }

    #[test]
    fn test_invalid_period_displays_bounds() {
        let error = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            message: "start is after end".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period 2026-03-10 to 2026-03-01: start is after end"
        );
    }

    #[test]
    fn test_invalid_month_displays_year_and_month() {
        let error = EngineError::InvalidMonth {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid month 2026-13");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "percentage overflowed".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: percentage overflowed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time_off() -> EngineResult<()> {
            Err(EngineError::InvalidTimeOff {
                request_id: "req_1".to_string(),
                message: "request was rejected".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time_off()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
