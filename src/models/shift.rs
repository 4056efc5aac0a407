//! Shift record model and shift types.
//!
//! This module defines the [`ShiftRecord`] struct and the [`ShiftType`]
//! categories a shift can belong to.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The category of a shift record.
///
/// Exactly one type applies to each record. The Italian values used by the
/// hosted store are accepted as aliases when deserializing.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftType;
///
/// let shift_type: ShiftType = serde_json::from_str("\"straordinario\"").unwrap();
/// assert_eq!(shift_type, ShiftType::Overtime);
/// assert_eq!(serde_json::to_string(&shift_type).unwrap(), "\"overtime\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Ordinary working time.
    #[serde(alias = "lavorativo")]
    Work,
    /// Paid permission (short leave) during the day.
    #[serde(alias = "permesso")]
    Permission,
    /// Vacation.
    #[serde(alias = "ferie")]
    Vacation,
    /// Sick leave.
    #[serde(alias = "malattia")]
    Sick,
    /// Overtime work.
    #[serde(alias = "straordinario")]
    Overtime,
}

impl ShiftType {
    /// Parses a type as stored in the external store, accepting both the
    /// English and the Italian spelling.
    pub fn from_store_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" | "lavorativo" => Some(ShiftType::Work),
            "permission" | "permesso" => Some(ShiftType::Permission),
            "vacation" | "ferie" => Some(ShiftType::Vacation),
            "sick" | "malattia" => Some(ShiftType::Sick),
            "overtime" | "straordinario" => Some(ShiftType::Overtime),
            _ => None,
        }
    }

    /// Returns true for the types that count as worked time.
    pub fn is_worked(self) -> bool {
        matches!(self, ShiftType::Work | ShiftType::Overtime)
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Work => write!(f, "work"),
            ShiftType::Permission => write!(f, "permission"),
            ShiftType::Vacation => write!(f, "vacation"),
            ShiftType::Sick => write!(f, "sick"),
            ShiftType::Overtime => write!(f, "overtime"),
        }
    }
}

/// A single interval of an employee's day.
///
/// Start and end are local times on `date`; shifts never cross midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Local start time.
    pub start_time: NaiveTime,
    /// Local end time.
    pub end_time: NaiveTime,
    /// The shift category.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftRecord {
    /// Returns the shift length in whole minutes.
    ///
    /// Partial minutes are truncated toward zero. A record whose end is not
    /// after its start yields zero or a negative value; callers sum it as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{ShiftRecord, ShiftType};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = ShiftRecord {
    ///     id: "sh_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(16, 40, 0).unwrap(),
    ///     shift_type: ShiftType::Work,
    ///     note: None,
    /// };
    /// assert_eq!(shift.duration_minutes(), 400);
    /// ```
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Returns the day of the week of the shift date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
