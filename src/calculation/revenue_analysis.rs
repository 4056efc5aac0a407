//! Receipt totals for a period compared with the period before it.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Period, ReceiptRecord, RevenueStats};

/// Percentage change from `prior` to `current`.
///
/// Returns zero when `prior` is not positive, so an empty prior period never
/// divides by zero.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::percent_change;
/// use rust_decimal::Decimal;
///
/// let change = percent_change(Decimal::from(150), Decimal::from(100)).unwrap();
/// assert_eq!(change, Decimal::from(50));
///
/// let no_prior = percent_change(Decimal::from(200), Decimal::ZERO).unwrap();
/// assert_eq!(no_prior, Decimal::ZERO);
/// ```
pub fn percent_change(current: Decimal, prior: Decimal) -> EngineResult<Decimal> {
    if prior <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    current
        .checked_sub(prior)
        .and_then(|delta| delta.checked_div(prior))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "percentage change from {} to {} overflowed",
                prior, current
            ),
        })
}

/// Adds one receipt to a running total, failing instead of overflowing.
pub(crate) fn add_amount(total: Decimal, record: &ReceiptRecord) -> EngineResult<Decimal> {
    total
        .checked_add(record.amount)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("receipt total overflowed at receipt '{}'", record.id),
        })
}

/// Computes the receipt statistics of `period`.
///
/// The prior period has the same number of days and ends the day before
/// `period` starts. The daily average is per receipt, not per calendar day.
///
/// # Arguments
///
/// * `records` - Receipts, in any order and over any range of dates
/// * `period` - The period to analyse
///
/// # Returns
///
/// Returns the statistics, or an error when the prior period falls outside
/// the supported date range or a total or percentage overflows.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::analyze_period;
/// use roster_engine::models::{Period, ReceiptRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let receipt = |id: &str, day: u32, amount: i64| ReceiptRecord {
///     id: id.to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
///     amount: Decimal::from(amount),
///     note: None,
/// };
/// let receipts = vec![receipt("r1", 9, 100), receipt("r2", 11, 50)];
///
/// let week = Period::new(
///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
/// ).unwrap();
///
/// let stats = analyze_period(&receipts, &week).unwrap();
/// assert_eq!(stats.period_total, Decimal::from(150));
/// assert_eq!(stats.daily_average, Decimal::from(75));
/// assert_eq!(stats.distinct_days_with_receipts, 2);
/// ```
pub fn analyze_period(records: &[ReceiptRecord], period: &Period) -> EngineResult<RevenueStats> {
    let prior_period = period.prior()?;

    let mut period_total = Decimal::ZERO;
    let mut prior_total = Decimal::ZERO;
    let mut receipt_count = 0usize;
    let mut days = BTreeSet::new();

    for record in records {
        if period.contains_date(record.date) {
            period_total = add_amount(period_total, record)?;
            receipt_count += 1;
            days.insert(record.date);
        } else if prior_period.contains_date(record.date) {
            prior_total = add_amount(prior_total, record)?;
        }
    }

    let daily_average = if receipt_count > 0 {
        period_total / Decimal::from(receipt_count)
    } else {
        Decimal::ZERO
    };
    let percent = percent_change(period_total, prior_total)?;

    Ok(RevenueStats {
        period: *period,
        prior_period,
        period_total,
        prior_total,
        receipt_count,
        daily_average,
        percent_vs_prior_period: percent,
        trend_percent: percent,
        distinct_days_with_receipts: days.len(),
    })
}
