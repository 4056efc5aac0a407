//! Time-off request model.
//!
//! Employees ask for permission, vacation or sick leave through a request;
//! once approved the request is turned into shift records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ShiftType;

/// The kind of leave requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
    /// A few hours off within a single day.
    #[serde(alias = "permesso")]
    Permission,
    /// One or more vacation days.
    #[serde(alias = "ferie")]
    Vacation,
    /// One or more sick days.
    #[serde(alias = "malattia")]
    Sick,
}

impl TimeOffKind {
    /// Returns the shift type recorded for this kind of leave.
    pub fn shift_type(self) -> ShiftType {
        match self {
            TimeOffKind::Permission => ShiftType::Permission,
            TimeOffKind::Vacation => ShiftType::Vacation,
            TimeOffKind::Sick => ShiftType::Sick,
        }
    }
}

/// Review status of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Waiting for review.
    #[default]
    Pending,
    /// Accepted; shifts are generated.
    Approved,
    /// Refused.
    Rejected,
}

/// A leave request submitted by an employee.
///
/// # Example
///
/// ```
/// use roster_engine::models::{RequestStatus, TimeOffKind, TimeOffRequest};
///
/// let json = r#"{
///     "id": "req_001",
///     "employee_id": "emp_001",
///     "type": "ferie",
///     "start_date": "2026-03-09"
/// }"#;
/// let request: TimeOffRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.kind, TimeOffKind::Vacation);
/// assert_eq!(request.status, RequestStatus::Pending);
/// assert_eq!(request.last_date(), request.start_date);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee asking for leave.
    pub employee_id: String,
    /// The kind of leave.
    #[serde(rename = "type")]
    pub kind: TimeOffKind,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave; a missing value means a single day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Start time, used by permission requests.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// End time, used by permission requests.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Review status.
    #[serde(default)]
    pub status: RequestStatus,
    /// Optional free text.
    #[serde(default)]
    pub note: Option<String>,
}

impl TimeOffRequest {
    /// Returns the last day covered by the request.
    pub fn last_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_maps_to_shift_type() {
        assert_eq!(TimeOffKind::Permission.shift_type(), ShiftType::Permission);
        assert_eq!(TimeOffKind::Vacation.shift_type(), ShiftType::Vacation);
        assert_eq!(TimeOffKind::Sick.shift_type(), ShiftType::Sick);
    }

    #[test]
    fn test_permission_request_deserialization() {
        let json = r#"{
            "id": "req_002",
            "employee_id": "emp_003",
            "type": "permission",
            "start_date": "2026-03-11",
            "start_time": "15:00:00",
            "end_time": "17:30:00",
            "status": "approved",
            "note": "dentist"
        }"#;

        let request: TimeOffRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, TimeOffKind::Permission);
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(request.note.as_deref(), Some("dentist"));
    }

    #[test]
    fn test_last_date_uses_end_date_when_present() {
        let request = TimeOffRequest {
            id: "req_003".to_string(),
            employee_id: "emp_001".to_string(),
            kind: TimeOffKind::Sick,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 12),
            start_time: None,
            end_time: None,
            status: RequestStatus::Approved,
            note: None,
        };
        assert_eq!(
            request.last_date(),
            NaiveDate::from_ymd_opt(2026, 3, 12).unwrap()
        );
    }
}
