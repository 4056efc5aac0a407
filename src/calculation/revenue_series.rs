//! Chart series over receipts.
//!
//! Two views feed the receipts charts: a daily series of the most recent
//! dates and a Monday-to-Sunday breakdown.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{DailyRevenue, ReceiptRecord, WeekdayRevenue};

use super::revenue_analysis::add_amount;

/// Number of dates in the daily series unless configured otherwise.
pub const DEFAULT_CHART_WINDOW_DAYS: usize = 30;

/// Sums receipts per date and keeps the latest `window` dates, oldest first.
///
/// Only dates carrying at least one receipt appear; gaps are not filled.
/// Fails with `EngineError::CalculationError` if a day's total overflows.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::daily_totals;
/// use roster_engine::models::ReceiptRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let receipt = |day: u32, amount: i64| ReceiptRecord {
///     id: format!("r{}", day),
///     date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
///     amount: Decimal::from(amount),
///     note: None,
/// };
/// let series = daily_totals(&[receipt(3, 10), receipt(1, 5), receipt(3, 15)], 30).unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[1].total, Decimal::from(25));
/// ```
pub fn daily_totals(records: &[ReceiptRecord], window: usize) -> EngineResult<Vec<DailyRevenue>> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in records {
        let total = by_date.entry(record.date).or_insert(Decimal::ZERO);
        *total = add_amount(*total, record)?;
    }

    let skip = by_date.len().saturating_sub(window);
    Ok(by_date
        .into_iter()
        .skip(skip)
        .map(|(date, total)| DailyRevenue { date, total })
        .collect())
}

/// Totals, counts and per-receipt averages for each weekday, Monday first.
///
/// Always seven entries; a weekday without receipts has a zero average.
pub fn weekday_breakdown(records: &[ReceiptRecord]) -> EngineResult<Vec<WeekdayRevenue>> {
    let mut buckets = [(Decimal::ZERO, 0usize); 7];
    for record in records {
        let bucket = &mut buckets[record.date.weekday().num_days_from_monday() as usize];
        bucket.0 = add_amount(bucket.0, record)?;
        bucket.1 += 1;
    }

    let mut weekday = Weekday::Mon;
    let mut breakdown = Vec::with_capacity(7);
    for (total, count) in buckets {
        let average = if count > 0 {
            total / Decimal::from(count)
        } else {
            Decimal::ZERO
        };
        breakdown.push(WeekdayRevenue {
            weekday,
            total,
            count,
            average,
        });
        weekday = weekday.succ();
    }
    Ok(breakdown)
}
