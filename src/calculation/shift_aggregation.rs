//! Monthly shift aggregation.
//!
//! This module turns a month of shift records into categorised minute
//! totals, separating work and overtime on the surcharge day from the rest.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Weekday;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Period, ShiftRecord, ShiftStats, ShiftType};

use super::{DayType, get_day_type};

/// Aggregates one employee's shift records for a calendar month.
///
/// Records dated outside the month are ignored. Durations are summed as
/// recorded, so a record whose end time precedes its start time lowers its
/// bucket instead of failing the aggregation.
///
/// # Arguments
///
/// * `records` - Shift records of a single employee
/// * `year` - The calendar year
/// * `month` - The month number, 1 to 12
/// * `surcharge_day` - The weekday whose work and overtime are surcharged
///
/// # Returns
///
/// Returns the categorised totals, or `EngineError::InvalidMonth` when the
/// month does not exist.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::{aggregate_shifts, DEFAULT_SURCHARGE_DAY};
/// use roster_engine::models::{ShiftRecord, ShiftType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let sunday_shift = ShiftRecord {
///     id: "s1".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(16, 40, 0).unwrap(),
///     shift_type: ShiftType::Work,
///     note: None,
/// };
///
/// let stats = aggregate_shifts(&[sunday_shift], 2026, 3, DEFAULT_SURCHARGE_DAY).unwrap();
/// assert_eq!(stats.surcharged_minutes, 400);
/// assert_eq!(stats.ordinary_minutes, 0);
/// ```
pub fn aggregate_shifts(
    records: &[ShiftRecord],
    year: i32,
    month: u32,
    surcharge_day: Weekday,
) -> EngineResult<ShiftStats> {
    let month = Period::month(year, month)?;
    Ok(accumulate(records.iter(), &month, surcharge_day))
}

/// Aggregates a multi-employee month snapshot, one entry per employee.
///
/// Employees with no record inside the month still get an all-zero entry
/// when they appear elsewhere in the snapshot. `month` is usually built with
/// [`Period::month`].
pub fn aggregate_team(
    records: &[ShiftRecord],
    month: &Period,
    surcharge_day: Weekday,
) -> BTreeMap<String, ShiftStats> {
    let mut by_employee: BTreeMap<&str, Vec<&ShiftRecord>> = BTreeMap::new();
    for record in records {
        by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record);
    }

    by_employee
        .into_iter()
        .map(|(employee_id, group)| {
            (
                employee_id.to_string(),
                accumulate(group, month, surcharge_day),
            )
        })
        .collect()
}

fn accumulate<'a>(
    records: impl IntoIterator<Item = &'a ShiftRecord>,
    month: &Period,
    surcharge_day: Weekday,
) -> ShiftStats {
    let mut stats = ShiftStats::default();
    let mut sick_dates = BTreeSet::new();

    for record in records
        .into_iter()
        .filter(|record| month.contains_date(record.date))
    {
        let minutes = record.duration_minutes();
        if minutes <= 0 && record.shift_type != ShiftType::Sick {
            debug!(
                shift_id = %record.id,
                minutes,
                "Shift has a non-positive duration"
            );
        }

        match (record.shift_type, get_day_type(record.date, surcharge_day)) {
            (ShiftType::Work | ShiftType::Overtime, DayType::Surcharged) => {
                stats.surcharged_minutes += minutes
            }
            (ShiftType::Work, DayType::Ordinary) => stats.ordinary_minutes += minutes,
            (ShiftType::Overtime, DayType::Ordinary) => stats.overtime_minutes += minutes,
            (ShiftType::Vacation, _) => stats.vacation_minutes += minutes,
            (ShiftType::Permission, _) => stats.permission_minutes += minutes,
            (ShiftType::Sick, _) => {
                sick_dates.insert(record.date);
            }
        }
    }

    stats.sick_days_count = sick_dates.len();
    stats
}
