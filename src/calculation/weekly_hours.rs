//! Weekly worked hours for the team schedule.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Period, ShiftRecord};

/// Returns the Monday-to-Sunday week containing `date`.
pub fn week_of(date: NaiveDate) -> EngineResult<Period> {
    Period::week_containing(date)
}

/// Sums the work and overtime minutes of one employee inside `week`.
///
/// The surcharge day is not split out here; every worked minute counts.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::{week_of, weekly_worked_minutes};
/// use roster_engine::models::{ShiftRecord, ShiftType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftRecord {
///     id: "s1".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
///     shift_type: ShiftType::Work,
///     note: None,
/// };
///
/// let week = week_of(NaiveDate::from_ymd_opt(2026, 3, 12).unwrap()).unwrap();
/// assert_eq!(weekly_worked_minutes(&[shift], "emp_001", &week), 270);
/// ```
pub fn weekly_worked_minutes(records: &[ShiftRecord], employee_id: &str, week: &Period) -> i64 {
    records
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .filter(|record| week.contains_date(record.date))
        .filter(|record| record.shift_type.is_worked())
        .map(ShiftRecord::duration_minutes)
        .sum()
}

/// Weekly worked minutes for every employee found in `records`.
///
/// Employees whose records all fall outside the week map to zero.
pub fn weekly_team_minutes(records: &[ShiftRecord], week: &Period) -> BTreeMap<String, i64> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        let total = totals.entry(record.employee_id.clone()).or_insert(0);
        if week.contains_date(record.date) && record.shift_type.is_worked() {
            *total += record.duration_minutes();
        }
    }
    totals
}
