//! Expansion of time-off requests into shift records.
//!
//! A permission becomes a single shift with the requested times. Vacation
//! and sick leave become one shift per covered day, skipping the excluded
//! weekdays, each lasting one working day's share of the weekly hours.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use tracing::debug;

use crate::config::TimeOffSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{Period, RequestStatus, ShiftRecord, TimeOffKind, TimeOffRequest};

/// Minutes of leave recorded for one working day.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::daily_leave_minutes;
/// use roster_engine::config::TimeOffSettings;
///
/// let settings = TimeOffSettings::default();
/// assert_eq!(daily_leave_minutes(40, &settings), 400);
/// ```
pub fn daily_leave_minutes(weekly_hours: u32, settings: &TimeOffSettings) -> i64 {
    i64::from(weekly_hours) * 60 / i64::from(settings.working_days_per_week.max(1))
}

/// Builds the shift records created when `request` is approved.
///
/// # Arguments
///
/// * `request` - A pending or approved request
/// * `weekly_hours` - The employee's weekly contract hours; the configured
///   default is used when `None`
/// * `settings` - Time-off expansion settings
///
/// # Returns
///
/// Returns the generated shifts in date order, or
/// `EngineError::InvalidTimeOff` when the request is rejected, ends before
/// it starts, is a permission without valid times, spans more days than
/// `settings.max_request_days`, or would produce a shift crossing midnight.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::expand_time_off;
/// use roster_engine::config::TimeOffSettings;
/// use roster_engine::models::{RequestStatus, ShiftType, TimeOffKind, TimeOffRequest};
/// use chrono::{NaiveDate, NaiveTime};
///
/// // Friday 13 to Monday 16 March 2026, Sunday skipped
/// let request = TimeOffRequest {
///     id: "req_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     kind: TimeOffKind::Vacation,
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 16),
///     start_time: None,
///     end_time: None,
///     status: RequestStatus::Approved,
///     note: None,
/// };
///
/// let shifts = expand_time_off(&request, Some(40), &TimeOffSettings::default()).unwrap();
/// assert_eq!(shifts.len(), 3);
/// assert_eq!(shifts[0].shift_type, ShiftType::Vacation);
/// assert_eq!(shifts[0].end_time, NaiveTime::from_hms_opt(16, 40, 0).unwrap());
/// ```
pub fn expand_time_off(
    request: &TimeOffRequest,
    weekly_hours: Option<u32>,
    settings: &TimeOffSettings,
) -> EngineResult<Vec<ShiftRecord>> {
    let invalid = |message: &str| EngineError::InvalidTimeOff {
        request_id: request.id.clone(),
        message: message.to_string(),
    };

    if request.status == RequestStatus::Rejected {
        return Err(invalid("request was rejected"));
    }
    if request.last_date() < request.start_date {
        return Err(invalid("end date is before start date"));
    }

    match request.kind {
        TimeOffKind::Permission => {
            let (start_time, end_time) = match (request.start_time, request.end_time) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(invalid("permission requires start and end times")),
            };
            if end_time <= start_time {
                return Err(invalid("permission end time must be after start time"));
            }
            Ok(vec![make_shift(
                request,
                request.start_date,
                start_time,
                end_time,
            )])
        }
        TimeOffKind::Vacation | TimeOffKind::Sick => {
            let hours = weekly_hours.unwrap_or(settings.default_weekly_hours);
            let minutes = daily_leave_minutes(hours, settings);
            let start_time = settings.default_start_time;
            let (end_time, wrapped) =
                start_time.overflowing_add_signed(Duration::minutes(minutes));
            if wrapped != 0 {
                return Err(invalid("daily leave would run past midnight"));
            }

            let covered = Period::new(request.start_date, request.last_date())?;
            if covered.length_days() > i64::from(settings.max_request_days) {
                return Err(invalid(&format!(
                    "range covers {} days, the limit is {}",
                    covered.length_days(),
                    settings.max_request_days
                )));
            }
            let shifts = covered
                .days()
                .filter(|date| {
                    let excluded = settings.excluded_weekdays.contains(&date.weekday());
                    if excluded {
                        debug!(request_id = %request.id, %date, "Skipping excluded weekday");
                    }
                    !excluded
                })
                .map(|date| make_shift(request, date, start_time, end_time))
                .collect();
            Ok(shifts)
        }
    }
}

fn make_shift(
    request: &TimeOffRequest,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> ShiftRecord {
    ShiftRecord {
        id: uuid::Uuid::new_v4().to_string(),
        employee_id: request.employee_id.clone(),
        date,
        start_time,
        end_time,
        shift_type: request.kind.shift_type(),
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use chrono::Weekday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn make_request(kind: TimeOffKind, start: &str, end: Option<&str>) -> TimeOffRequest {
        TimeOffRequest {
            id: "req_001".to_string(),
            employee_id: "emp_001".to_string(),
            kind,
            start_date: make_date(start),
            end_date: end.map(make_date),
            start_time: None,
            end_time: None,
            status: RequestStatus::Approved,
            note: None,
        }
    }

    #[test]
    fn test_permission_uses_requested_times() {
        let mut request = make_request(TimeOffKind::Permission, "2026-03-10", None);
        request.start_time = Some(make_time(9, 0));
        request.end_time = Some(make_time(11, 30));

        let shifts = expand_time_off(&request, None, &TimeOffSettings::default()).unwrap();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].shift_type, ShiftType::Permission);
        assert_eq!(shifts[0].date, make_date("2026-03-10"));
        assert_eq!(shifts[0].duration_minutes(), 150);
    }

    #[test]
    fn test_permission_without_times_is_rejected() {
        let request = make_request(TimeOffKind::Permission, "2026-03-10", None);
        let result = expand_time_off(&request, None, &TimeOffSettings::default());
        assert!(matches!(result, Err(EngineError::InvalidTimeOff { .. })));
    }

    #[test]
    fn test_vacation_week_skips_sunday() {
        // Monday 9 to Sunday 15 March 2026
        let request = make_request(TimeOffKind::Vacation, "2026-03-09", Some("2026-03-15"));
        let shifts = expand_time_off(&request, Some(36), &TimeOffSettings::default()).unwrap();

        assert_eq!(shifts.len(), 6);
        assert!(shifts.iter().all(|s| s.day_of_week() != Weekday::Sun));
        assert!(shifts.iter().all(|s| s.start_time == make_time(10, 0)));
        assert!(shifts.iter().all(|s| s.duration_minutes() == 360));
        assert_eq!(shifts[5].date, make_date("2026-03-14"));
    }

    #[test]
    fn test_sick_single_day_uses_default_hours() {
        let request = make_request(TimeOffKind::Sick, "2026-03-11", None);
        let shifts = expand_time_off(&request, None, &TimeOffSettings::default()).unwrap();

        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].shift_type, ShiftType::Sick);
        assert_eq!(shifts[0].end_time, make_time(16, 40));
    }

    #[test]
    fn test_sunday_only_request_produces_nothing() {
        let request = make_request(TimeOffKind::Vacation, "2026-03-15", None);
        let shifts = expand_time_off(&request, Some(40), &TimeOffSettings::default()).unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let request = make_request(TimeOffKind::Vacation, "2026-03-09", Some("2026-03-11"));
        let shifts = expand_time_off(&request, Some(40), &TimeOffSettings::default()).unwrap();
        assert_ne!(shifts[0].id, shifts[1].id);
        assert_ne!(shifts[1].id, shifts[2].id);
    }

    #[test]
    fn test_rejected_request_is_an_error() {
        let mut request = make_request(TimeOffKind::Vacation, "2026-03-09", None);
        request.status = RequestStatus::Rejected;
        let result = expand_time_off(&request, Some(40), &TimeOffSettings::default());
        match result {
            Err(EngineError::InvalidTimeOff { message, .. }) => {
                assert!(message.contains("rejected"))
            }
            other => panic!("Expected InvalidTimeOff, got {:?}", other),
        }
    }

    #[test]
    fn test_end_before_start_is_an_error() {
        let request = make_request(TimeOffKind::Vacation, "2026-03-10", Some("2026-03-09"));
        assert!(expand_time_off(&request, Some(40), &TimeOffSettings::default()).is_err());
    }

    #[test]
    fn test_duration_past_midnight_is_an_error() {
        let request = make_request(TimeOffKind::Vacation, "2026-03-10", None);
        // 120 weekly hours over 6 days is 20 hours from 10:00
        let result = expand_time_off(&request, Some(120), &TimeOffSettings::default());
        assert!(matches!(result, Err(EngineError::InvalidTimeOff { .. })));
    }

    #[test]
    fn test_range_longer_than_limit_is_an_error() {
        let request = make_request(TimeOffKind::Vacation, "2000-01-01", Some("9999-12-31"));
        let result = expand_time_off(&request, Some(40), &TimeOffSettings::default());
        match result {
            Err(EngineError::InvalidTimeOff { message, .. }) => {
                assert!(message.contains("the limit is 366"))
            }
            other => panic!("Expected InvalidTimeOff, got {:?}", other),
        }
    }

    #[test]
    fn test_range_at_limit_is_expanded() {
        let settings = TimeOffSettings {
            max_request_days: 7,
            ..TimeOffSettings::default()
        };
        let week = make_request(TimeOffKind::Sick, "2026-03-09", Some("2026-03-15"));
        assert_eq!(expand_time_off(&week, None, &settings).unwrap().len(), 6);

        let eight_days = make_request(TimeOffKind::Sick, "2026-03-09", Some("2026-03-16"));
        assert!(expand_time_off(&eight_days, None, &settings).is_err());
    }

    #[test]
    fn test_configured_five_day_week() {
        let settings = TimeOffSettings {
            default_start_time: make_time(9, 0),
            working_days_per_week: 5,
            excluded_weekdays: vec![Weekday::Sat, Weekday::Sun],
            default_weekly_hours: 38,
            max_request_days: 31,
        };
        let request = make_request(TimeOffKind::Vacation, "2026-03-13", Some("2026-03-16"));
        let shifts = expand_time_off(&request, None, &settings).unwrap();

        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].date, make_date("2026-03-13"));
        assert_eq!(shifts[1].date, make_date("2026-03-16"));
        assert_eq!(shifts[0].duration_minutes(), 456);
    }
}
