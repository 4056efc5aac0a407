//! HTTP API module for the roster engine.
//!
//! This module provides the JSON endpoints for monthly and weekly shift
//! totals, category drill-downs, receipt statistics and time-off expansion.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    MonthlyShiftsRequest, ReceiptStatsRequest, ShiftDetailRequest, TimeOffExpandRequest,
    WeeklyShiftsRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CategoryLabels, EmployeeMonthSummary, EmployeeWeekSummary,
    MonthlyShiftsResponse, ReceiptStatsResponse, ShiftDetailResponse, TimeOffExpandResponse,
    WeeklyShiftsResponse,
};
pub use state::AppState;
