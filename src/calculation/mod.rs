//! Calculation logic for the roster engine.
//!
//! This module contains the pure functions behind the store views: monthly
//! shift aggregation with surcharge-day detection, hour labels, weekly
//! worked hours, category drill-downs, receipt period analysis and chart
//! series, period navigation, and the expansion of time-off requests into
//! shifts.

mod category_detail;
mod day_detection;
mod hours_format;
mod navigation;
mod revenue_analysis;
mod revenue_series;
mod shift_aggregation;
mod time_off;
mod weekly_hours;

pub use category_detail::{DetailCategory, ShiftDetail, category_detail};
pub use day_detection::{DEFAULT_SURCHARGE_DAY, DayType, get_day_type};
pub use hours_format::{
    HoursMinutes, format_category_minutes, format_weekly_minutes, split_minutes,
};
pub use navigation::{PeriodMode, PeriodSelector, RequestSequence, RequestTicket};
pub use revenue_analysis::{analyze_period, percent_change};
pub use revenue_series::{DEFAULT_CHART_WINDOW_DAYS, daily_totals, weekday_breakdown};
pub use shift_aggregation::{aggregate_shifts, aggregate_team};
pub use time_off::{daily_leave_minutes, expand_time_off};
pub use weekly_hours::{week_of, weekly_team_minutes, weekly_worked_minutes};
