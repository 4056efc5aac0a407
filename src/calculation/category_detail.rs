//! Drill-down from a monthly total to the shifts behind it.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftRecord, ShiftType};

use super::{DayType, format_weekly_minutes, get_day_type};

/// A category a monthly total can be broken down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailCategory {
    /// Work and overtime on the surcharge day.
    #[serde(alias = "maggiorate")]
    Surcharged,
    /// Records of one raw shift type, whatever the weekday.
    #[serde(untagged)]
    Type(ShiftType),
}

impl DetailCategory {
    /// Returns true if `record` belongs to this category.
    pub fn matches(self, record: &ShiftRecord, surcharge_day: Weekday) -> bool {
        match self {
            DetailCategory::Surcharged => {
                record.shift_type.is_worked()
                    && get_day_type(record.date, surcharge_day) == DayType::Surcharged
            }
            DetailCategory::Type(shift_type) => record.shift_type == shift_type,
        }
    }
}

/// One line of a category drill-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDetail {
    /// The underlying record.
    pub shift: ShiftRecord,
    /// Its duration in minutes.
    pub duration_minutes: i64,
    /// Its duration as `"Xh"` or `"Xh Ym"`.
    pub hours_label: String,
}

/// Lists one employee's records of a category, sorted by date.
///
/// Records sharing a date keep their input order. The overtime category
/// lists surcharge-day overtime too, even though the monthly totals count
/// it as surcharged.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::{category_detail, DetailCategory};
/// use roster_engine::models::{ShiftRecord, ShiftType};
/// use chrono::{NaiveDate, NaiveTime, Weekday};
///
/// let shift = ShiftRecord {
///     id: "s1".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(16, 40, 0).unwrap(),
///     shift_type: ShiftType::Work,
///     note: None,
/// };
///
/// let details = category_detail(&[shift], "emp_001", DetailCategory::Surcharged, Weekday::Sun);
/// assert_eq!(details.len(), 1);
/// assert_eq!(details[0].hours_label, "6h 40m");
/// ```
pub fn category_detail(
    records: &[ShiftRecord],
    employee_id: &str,
    category: DetailCategory,
    surcharge_day: Weekday,
) -> Vec<ShiftDetail> {
    let mut details: Vec<ShiftDetail> = records
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .filter(|record| category.matches(record, surcharge_day))
        .map(|record| {
            let duration_minutes = record.duration_minutes();
            ShiftDetail {
                shift: record.clone(),
                duration_minutes,
                hours_label: format_weekly_minutes(duration_minutes),
            }
        })
        .collect();

    details.sort_by_key(|detail| detail.shift.date);
    details
}
