//! Request types for the roster engine API.
//!
//! Shift and receipt payloads carry the store's loose rows; handlers
//! validate them before any calculation runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::DetailCategory;
use crate::models::{ReceiptRow, ShiftRow, TimeOffRequest};

/// Request body for `POST /shifts/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyShiftsRequest {
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 to 12.
    pub month: u32,
    /// Shift rows of any number of employees.
    pub shifts: Vec<ShiftRow>,
}

/// Request body for `POST /shifts/weekly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyShiftsRequest {
    /// Any date inside the Monday-to-Sunday week to report.
    pub week_of: NaiveDate,
    /// Shift rows of any number of employees.
    pub shifts: Vec<ShiftRow>,
}

/// Request body for `POST /shifts/detail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDetailRequest {
    /// The employee to list shifts for.
    pub employee_id: String,
    /// The category to break down.
    pub category: DetailCategory,
    /// The calendar year.
    pub year: i32,
    /// The month number, 1 to 12.
    pub month: u32,
    /// Shift rows; rows outside the month are ignored.
    pub shifts: Vec<ShiftRow>,
}

/// Request body for `POST /receipts/stats`.
///
/// Without `start_date` and `end_date` the current week is analysed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptStatsRequest {
    /// First day of a custom range.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of a custom range.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Receipt rows over any range of dates.
    pub receipts: Vec<ReceiptRow>,
}

/// Request body for `POST /time-off/expand`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffExpandRequest {
    /// The request to expand.
    pub request: TimeOffRequest,
    /// The employee's weekly contract hours, when known.
    #[serde(default)]
    pub weekly_hours: Option<u32>,
}
