//! Rendering of minute totals as hours and minutes.
//!
//! Hours are the floor of `minutes / 60`; the minute part is the remainder
//! truncated toward zero. Labels built from that split are what reports and
//! spreadsheets show, so the rule must not change.

use serde::{Deserialize, Serialize};

/// A minute total split into whole hours and remaining minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    /// Whole hours, rounded down.
    pub hours: i64,
    /// Remaining minutes.
    pub minutes: i64,
}

/// Splits a minute total into hours and minutes.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{split_minutes, HoursMinutes};
///
/// assert_eq!(split_minutes(400), HoursMinutes { hours: 6, minutes: 40 });
/// assert_eq!(split_minutes(-30), HoursMinutes { hours: -1, minutes: -30 });
/// ```
pub fn split_minutes(total: i64) -> HoursMinutes {
    HoursMinutes {
        hours: total.div_euclid(60),
        minutes: total % 60,
    }
}

/// Label for a monthly category total.
///
/// Empty when the total is zero or negative; otherwise `"Xh"`, or
/// `"Xh Ym"` when minutes remain.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::format_category_minutes;
///
/// assert_eq!(format_category_minutes(0), "");
/// assert_eq!(format_category_minutes(360), "6h");
/// assert_eq!(format_category_minutes(400), "6h 40m");
/// ```
pub fn format_category_minutes(total: i64) -> String {
    if total <= 0 {
        return String::new();
    }
    let split = split_minutes(total);
    if split.minutes != 0 {
        format!("{}h {}m", split.hours, split.minutes)
    } else {
        format!("{}h", split.hours)
    }
}

/// Label for a weekly worked total.
///
/// Always rendered: `"0h"` for an empty week, `"Xh Ym"` only when the
/// minute part is positive.
pub fn format_weekly_minutes(total: i64) -> String {
    let split = split_minutes(total);
    if split.minutes > 0 {
        format!("{}h {}m", split.hours, split.minutes)
    } else {
        format!("{}h", split.hours)
    }
}
