//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_team, analyze_period, category_detail, daily_totals, expand_time_off,
    format_weekly_minutes, week_of, weekday_breakdown, weekly_team_minutes,
};
use crate::error::EngineError;
use crate::models::{Period, ShiftRecord, parse_receipt_rows, parse_shift_rows};

use super::request::{
    MonthlyShiftsRequest, ReceiptStatsRequest, ShiftDetailRequest, TimeOffExpandRequest,
    WeeklyShiftsRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CategoryLabels, EmployeeMonthSummary, EmployeeWeekSummary,
    MonthlyShiftsResponse, ReceiptStatsResponse, ShiftDetailResponse, TimeOffExpandResponse,
    WeeklyShiftsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/monthly", post(monthly_shifts_handler))
        .route("/shifts/weekly", post(weekly_shifts_handler))
        .route("/shifts/detail", post(shift_detail_handler))
        .route("/receipts/stats", post(receipt_stats_handler))
        .route("/time-off/expand", post(time_off_expand_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

fn failure_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    error_response(err.into())
}

/// Handler for POST /shifts/monthly.
///
/// Aggregates a month snapshot per employee.
async fn monthly_shifts_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyShiftsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly shifts request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let parsed = parse_shift_rows(request.shifts);
    let surcharge_day = state.config().surcharge_day();

    let result = Period::month(request.year, request.month)
        .map(|period| (period, aggregate_team(&parsed.records, &period, surcharge_day)));

    match result {
        Ok((period, team)) => {
            let employees: Vec<EmployeeMonthSummary> = team
                .into_iter()
                .map(|(employee_id, stats)| EmployeeMonthSummary {
                    labels: CategoryLabels::from(&stats),
                    employee_id,
                    stats,
                })
                .collect();
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                shifts_count = parsed.records.len(),
                rejected = parsed.rejected.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly aggregation completed"
            );
            json_response(
                StatusCode::OK,
                MonthlyShiftsResponse {
                    period,
                    employees,
                    rejected: parsed.rejected,
                },
            )
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

/// Handler for POST /shifts/weekly.
///
/// Sums worked minutes per employee for the week containing `week_of`.
async fn weekly_shifts_handler(
    payload: Result<Json<WeeklyShiftsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly shifts request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let week = match week_of(request.week_of) {
        Ok(week) => week,
        Err(err) => return failure_response(correlation_id, err),
    };
    let parsed = parse_shift_rows(request.shifts);

    let employees: Vec<EmployeeWeekSummary> = weekly_team_minutes(&parsed.records, &week)
        .into_iter()
        .map(|(employee_id, worked_minutes)| EmployeeWeekSummary {
            employee_id,
            worked_minutes,
            hours_label: format_weekly_minutes(worked_minutes),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        week_start = %week.start_date,
        employees = employees.len(),
        rejected = parsed.rejected.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Weekly hours completed"
    );
    json_response(
        StatusCode::OK,
        WeeklyShiftsResponse {
            week,
            employees,
            rejected: parsed.rejected,
        },
    )
}

/// Handler for POST /shifts/detail.
///
/// Lists the shifts behind one employee's monthly category total.
async fn shift_detail_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftDetailRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift detail request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let month = match Period::month(request.year, request.month) {
        Ok(month) => month,
        Err(err) => return failure_response(correlation_id, err),
    };
    let parsed = parse_shift_rows(request.shifts);
    let in_month: Vec<ShiftRecord> = parsed
        .records
        .into_iter()
        .filter(|record| month.contains_date(record.date))
        .collect();

    let details = category_detail(
        &in_month,
        &request.employee_id,
        request.category,
        state.config().surcharge_day(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        details = details.len(),
        "Shift detail completed"
    );
    json_response(
        StatusCode::OK,
        ShiftDetailResponse {
            employee_id: request.employee_id,
            category: request.category,
            details,
            rejected: parsed.rejected,
        },
    )
}

/// Handler for POST /receipts/stats.
///
/// Analyses the requested period, or the current week when no range is
/// given, and builds the chart series.
async fn receipt_stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptStatsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt stats request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period = match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => Period::new(start, end),
        (None, None) => Period::week_containing(Local::now().date_naive()),
        _ => {
            warn!(correlation_id = %correlation_id, "Incomplete receipt range");
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                "start_date and end_date must be given together",
            )));
        }
    };

    let start_time = Instant::now();
    let parsed = parse_receipt_rows(request.receipts);
    let config = state.config();

    let result = period.and_then(|period| {
        let stats = analyze_period(&parsed.records, &period)?;
        let daily = daily_totals(&parsed.records, config.chart_window_days())?;
        let weekdays = weekday_breakdown(&parsed.records)?;
        Ok((stats, daily, weekdays))
    });

    match result {
        Ok((stats, daily, weekdays)) => {
            info!(
                correlation_id = %correlation_id,
                period_start = %stats.period.start_date,
                period_end = %stats.period.end_date,
                receipts = stats.receipt_count,
                total = %stats.period_total,
                rejected = parsed.rejected.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Receipt analysis completed"
            );
            json_response(
                StatusCode::OK,
                ReceiptStatsResponse {
                    currency: config.store().currency.clone(),
                    stats,
                    daily,
                    weekdays,
                    rejected: parsed.rejected,
                },
            )
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

/// Handler for POST /time-off/expand.
///
/// Returns the shifts an approved request turns into.
async fn time_off_expand_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeOffExpandRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time-off expansion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match expand_time_off(
        &request.request,
        request.weekly_hours,
        state.config().time_off(),
    ) {
        Ok(shifts) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %request.request.id,
                shifts_count = shifts.len(),
                "Time-off expansion completed"
            );
            json_response(
                StatusCode::OK,
                TimeOffExpandResponse {
                    request_id: request.request.id,
                    start_date: request.request.start_date,
                    shifts,
                },
            )
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, serde_json::Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_monthly_returns_labels_per_employee() {
        let body = serde_json::json!({
            "year": 2026,
            "month": 3,
            "shifts": [
                {"id": "s1", "employee_id": "emp_001", "date": "2026-03-08",
                 "start_time": "10:00", "end_time": "16:40", "type": "lavorativo"},
                {"id": "s2", "employee_id": "emp_001", "date": "2026-03-09",
                 "start_time": "09:00", "end_time": "17:00", "type": "work"}
            ]
        });
        let (status, json) = post_json("/shifts/monthly", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let employee = &json["employees"][0];
        assert_eq!(employee["employee_id"], "emp_001");
        assert_eq!(employee["stats"]["surcharged_minutes"], 400);
        assert_eq!(employee["labels"]["surcharged"], "6h 40m");
        assert_eq!(employee["labels"]["ordinary"], "8h");
    }

    #[tokio::test]
    async fn test_monthly_invalid_month_returns_400() {
        let body = serde_json::json!({"year": 2026, "month": 0, "shifts": []});
        let (status, json) = post_json("/shifts/monthly", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post_json("/shifts/weekly", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, json) =
            post_json("/shifts/monthly", r#"{"year": 2026, "shifts": []}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_half_open_receipt_range_returns_400() {
        let body = serde_json::json!({"start_date": "2026-03-09", "receipts": []});
        let (status, json) = post_json("/receipts/stats", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
