//! Day detection for surcharged hours.
//!
//! This module decides whether a shift date falls on the surcharge weekday,
//! on which work and overtime minutes are tracked separately.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The weekday whose worked minutes are surcharged unless configured
/// otherwise.
pub const DEFAULT_SURCHARGE_DAY: Weekday = Weekday::Sun;

/// Represents the type of day for hour classification.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::DayType;
///
/// let day_type = DayType::Surcharged;
/// assert_eq!(day_type.to_string(), "Surcharged");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Any day other than the surcharge day.
    Ordinary,
    /// The surcharge day; work and overtime land in the surcharged bucket.
    Surcharged,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Ordinary => write!(f, "Ordinary"),
            DayType::Surcharged => write!(f, "Surcharged"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{get_day_type, DayType, DEFAULT_SURCHARGE_DAY};
/// use chrono::NaiveDate;
///
/// // 2026-03-08 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
/// assert_eq!(get_day_type(sunday, DEFAULT_SURCHARGE_DAY), DayType::Surcharged);
///
/// // 2026-03-07 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(get_day_type(saturday, DEFAULT_SURCHARGE_DAY), DayType::Ordinary);
/// ```
pub fn get_day_type(date: NaiveDate, surcharge_day: Weekday) -> DayType {
    if date.weekday() == surcharge_day {
        DayType::Surcharged
    } else {
        DayType::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_every_weekday_against_default_surcharge_day() {
        // 2026-03-09 is a Monday
        let monday = make_date("2026-03-09");
        let day_types: Vec<DayType> = (0..7)
            .map(|offset| {
                get_day_type(
                    monday + chrono::Duration::days(offset),
                    DEFAULT_SURCHARGE_DAY,
                )
            })
            .collect();

        assert_eq!(
            day_types,
            vec![
                DayType::Ordinary,
                DayType::Ordinary,
                DayType::Ordinary,
                DayType::Ordinary,
                DayType::Ordinary,
                DayType::Ordinary,
                DayType::Surcharged,
            ]
        );
    }

    #[test]
    fn test_configured_surcharge_day() {
        // 2026-03-14 is a Saturday
        let saturday = make_date("2026-03-14");
        assert_eq!(get_day_type(saturday, Weekday::Sat), DayType::Surcharged);
        assert_eq!(
            get_day_type(make_date("2026-03-15"), Weekday::Sat),
            DayType::Ordinary
        );
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Surcharged).unwrap();
        assert_eq!(json, "\"surcharged\"");
    }
}
