//! Result models for shift aggregation and receipt analysis.
//!
//! This module contains the [`ShiftStats`] and [`RevenueStats`] types that
//! capture the derived views produced by the calculation functions, plus
//! the chart series entries.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// Categorised minute totals for one employee over one month.
///
/// Every bucket starts at zero. Minute totals may be negative when the
/// underlying records are malformed.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftStats;
///
/// let stats = ShiftStats {
///     ordinary_minutes: 480,
///     overtime_minutes: 60,
///     surcharged_minutes: 400,
///     ..ShiftStats::default()
/// };
/// assert_eq!(stats.worked_minutes(), 940);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStats {
    /// Work minutes outside the surcharge day.
    pub ordinary_minutes: i64,
    /// Overtime minutes outside the surcharge day.
    pub overtime_minutes: i64,
    /// Work and overtime minutes on the surcharge day.
    pub surcharged_minutes: i64,
    /// Vacation minutes.
    pub vacation_minutes: i64,
    /// Permission minutes.
    pub permission_minutes: i64,
    /// Distinct dates with at least one sick record.
    pub sick_days_count: usize,
}

impl ShiftStats {
    /// Returns all worked minutes: ordinary, overtime and surcharged.
    pub fn worked_minutes(&self) -> i64 {
        self.ordinary_minutes + self.overtime_minutes + self.surcharged_minutes
    }
}

/// Totals and trend figures for a receipt period.
///
/// `daily_average` is per receipt, not per calendar day. Percentages are
/// zero whenever the prior period has no takings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueStats {
    /// The analysed period.
    pub period: Period,
    /// The preceding period of identical length.
    pub prior_period: Period,
    /// Sum of the amounts inside the period.
    pub period_total: Decimal,
    /// Sum of the amounts inside the prior period.
    pub prior_total: Decimal,
    /// Number of receipts inside the period.
    pub receipt_count: usize,
    /// `period_total / receipt_count`, or zero without receipts.
    pub daily_average: Decimal,
    /// Percentage change against the prior period.
    pub percent_vs_prior_period: Decimal,
    /// Period trend, currently equal to `percent_vs_prior_period`.
    pub trend_percent: Decimal,
    /// Distinct dates with at least one receipt inside the period.
    pub distinct_days_with_receipts: usize,
}

/// One point of the daily revenue series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    /// The receipt date.
    pub date: NaiveDate,
    /// Sum of the amounts for that date.
    pub total: Decimal,
}

/// Revenue collected on one weekday across all receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayRevenue {
    /// The weekday.
    pub weekday: Weekday,
    /// Sum of the amounts.
    pub total: Decimal,
    /// Number of receipts.
    pub count: usize,
    /// `total / count`, or zero without receipts.
    pub average: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_stats_are_zero() {
        let stats = ShiftStats::default();
        assert_eq!(stats.ordinary_minutes, 0);
        assert_eq!(stats.overtime_minutes, 0);
        assert_eq!(stats.surcharged_minutes, 0);
        assert_eq!(stats.vacation_minutes, 0);
        assert_eq!(stats.permission_minutes, 0);
        assert_eq!(stats.sick_days_count, 0);
        assert_eq!(stats.worked_minutes(), 0);
    }

    #[test]
    fn test_worked_minutes_ignores_leave() {
        let stats = ShiftStats {
            ordinary_minutes: 100,
            vacation_minutes: 480,
            permission_minutes: 120,
            sick_days_count: 2,
            ..ShiftStats::default()
        };
        assert_eq!(stats.worked_minutes(), 100);
    }

    #[test]
    fn test_revenue_stats_serialization() {
        let period = Period::new(
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        )
        .unwrap();
        let stats = RevenueStats {
            period,
            prior_period: period.prior().unwrap(),
            period_total: dec("150.00"),
            prior_total: dec("100.00"),
            receipt_count: 2,
            daily_average: dec("75.00"),
            percent_vs_prior_period: dec("50"),
            trend_percent: dec("50"),
            distinct_days_with_receipts: 2,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"period_total\":\"150.00\""));
        assert!(json.contains("\"daily_average\":\"75.00\""));
        assert!(json.contains("\"start_date\":\"2026-03-02\""));
        assert!(json.contains("\"distinct_days_with_receipts\":2"));
    }

    #[test]
    fn test_weekday_revenue_serializes_weekday() {
        let entry = WeekdayRevenue {
            weekday: Weekday::Sat,
            total: dec("300"),
            count: 2,
            average: dec("150"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"weekday\":\"Sat\""));
    }
}
