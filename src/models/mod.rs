//! Core data models for the roster engine.
//!
//! This module contains the record types read from the external store, the
//! loose row shapes they are validated from, and the result types produced
//! by the calculations.

mod period;
mod receipt;
mod row;
mod shift;
mod stats;
mod time_off;

pub use period::Period;
pub use receipt::ReceiptRecord;
pub use row::{
    ParsedRows, ReceiptRow, RowRejection, ShiftRow, parse_receipt_rows, parse_shift_rows,
};
pub use shift::{ShiftRecord, ShiftType};
pub use stats::{DailyRevenue, RevenueStats, ShiftStats, WeekdayRevenue};
pub use time_off::{RequestStatus, TimeOffKind, TimeOffRequest};
