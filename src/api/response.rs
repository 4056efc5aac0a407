//! Response types for the roster engine API.
//!
//! This module defines the response bodies of every endpoint and the error
//! handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{DetailCategory, ShiftDetail, format_category_minutes};
use crate::error::EngineError;
use crate::models::{
    DailyRevenue, Period, RevenueStats, RowRejection, ShiftRecord, ShiftStats, WeekdayRevenue,
};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidShift { shift_id, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift '{}': {}", shift_id, message),
                    "The shift data contains invalid information",
                ))
            }
            EngineError::InvalidReceipt {
                receipt_id,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_RECEIPT",
                format!("Invalid receipt '{}': {}", receipt_id, message),
                "The receipt data contains invalid information",
            )),
            EngineError::InvalidPeriod {
                start,
                end,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_PERIOD",
                format!("Invalid period {} to {}", start, end),
                message,
            )),
            EngineError::InvalidMonth { year, month } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {}-{}", year, month),
                    "The month must be between 1 and 12",
                ))
            }
            EngineError::InvalidTimeOff {
                request_id,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_TIME_OFF",
                format!("Invalid time-off request '{}'", request_id),
                message,
            )),
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}

/// Hour labels of one employee's monthly categories.
///
/// A category with no positive total has an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabels {
    /// Ordinary work.
    pub ordinary: String,
    /// Overtime outside the surcharge day.
    pub overtime: String,
    /// Work and overtime on the surcharge day.
    pub surcharged: String,
    /// Vacation.
    pub vacation: String,
    /// Permission.
    pub permission: String,
}

impl From<&ShiftStats> for CategoryLabels {
    fn from(stats: &ShiftStats) -> Self {
        Self {
            ordinary: format_category_minutes(stats.ordinary_minutes),
            overtime: format_category_minutes(stats.overtime_minutes),
            surcharged: format_category_minutes(stats.surcharged_minutes),
            vacation: format_category_minutes(stats.vacation_minutes),
            permission: format_category_minutes(stats.permission_minutes),
        }
    }
}

/// One employee's monthly totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthSummary {
    /// The employee.
    pub employee_id: String,
    /// Minute totals per category.
    pub stats: ShiftStats,
    /// The same totals as hour labels.
    pub labels: CategoryLabels,
}

/// Response body for `POST /shifts/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyShiftsResponse {
    /// The month covered.
    pub period: Period,
    /// One summary per employee, ordered by employee id.
    pub employees: Vec<EmployeeMonthSummary>,
    /// Rows that failed validation.
    pub rejected: Vec<RowRejection>,
}

/// One employee's worked time for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWeekSummary {
    /// The employee.
    pub employee_id: String,
    /// Work and overtime minutes in the week.
    pub worked_minutes: i64,
    /// The same total as an hour label.
    pub hours_label: String,
}

/// Response body for `POST /shifts/weekly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyShiftsResponse {
    /// The Monday-to-Sunday week covered.
    pub week: Period,
    /// One summary per employee, ordered by employee id.
    pub employees: Vec<EmployeeWeekSummary>,
    /// Rows that failed validation.
    pub rejected: Vec<RowRejection>,
}

/// Response body for `POST /shifts/detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDetailResponse {
    /// The employee.
    pub employee_id: String,
    /// The category listed.
    pub category: DetailCategory,
    /// Matching shifts in date order.
    pub details: Vec<ShiftDetail>,
    /// Rows that failed validation.
    pub rejected: Vec<RowRejection>,
}

/// Response body for `POST /receipts/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptStatsResponse {
    /// The currency label of every amount.
    pub currency: String,
    /// Totals and trend of the requested period.
    pub stats: RevenueStats,
    /// Daily totals of the most recent receipt dates.
    pub daily: Vec<DailyRevenue>,
    /// Monday-to-Sunday breakdown of every receipt.
    pub weekdays: Vec<WeekdayRevenue>,
    /// Rows that failed validation.
    pub rejected: Vec<RowRejection>,
}

/// Response body for `POST /time-off/expand`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffExpandResponse {
    /// The expanded request.
    pub request_id: String,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Generated shifts in date order.
    pub shifts: Vec<ShiftRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidMonth {
            year: 2026,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_time_off_error_keeps_reason_in_details() {
        let api_error: ApiErrorResponse = EngineError::InvalidTimeOff {
            request_id: "req_1".to_string(),
            message: "request was rejected".to_string(),
        }
        .into();
        assert_eq!(api_error.error.code, "INVALID_TIME_OFF");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("request was rejected")
        );
    }

    #[test]
    fn test_category_labels_from_stats() {
        let stats = ShiftStats {
            ordinary_minutes: 400,
            surcharged_minutes: 360,
            ..ShiftStats::default()
        };
        let labels = CategoryLabels::from(&stats);
        assert_eq!(labels.ordinary, "6h 40m");
        assert_eq!(labels.surcharged, "6h");
        assert_eq!(labels.overtime, "");
    }
}
