//! Loose row shapes as delivered by the external store.
//!
//! Rows arrive with every field optional and of any JSON kind. Converting a
//! row into a [`ShiftRecord`] or [`ReceiptRecord`] validates it; malformed
//! rows are rejected with a typed error before they reach any calculation,
//! and never fail the batch they arrived in.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

use super::{ReceiptRecord, ShiftRecord, ShiftType};

/// A shift row exactly as the store returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Row identifier, a string or number.
    pub id: Option<Value>,
    /// Employee identifier, a string or number.
    pub employee_id: Option<Value>,
    /// Date as `YYYY-MM-DD`.
    pub date: Option<Value>,
    /// Start time as `HH:MM` or `HH:MM:SS`.
    pub start_time: Option<Value>,
    /// End time as `HH:MM` or `HH:MM:SS`.
    pub end_time: Option<Value>,
    /// Shift type, English or Italian spelling.
    #[serde(rename = "type")]
    pub shift_type: Option<Value>,
    /// Optional free text.
    pub note: Option<Value>,
}

/// A receipt row exactly as the store returns it.
///
/// The store names the date `data` and the amount `importo`; both names are
/// accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRow {
    /// Row identifier, a string or number.
    pub id: Option<Value>,
    /// Date as `YYYY-MM-DD`.
    #[serde(alias = "data")]
    pub date: Option<Value>,
    /// Amount, as a JSON number or string.
    #[serde(alias = "importo")]
    pub amount: Option<Value>,
    /// Optional free text.
    pub note: Option<Value>,
}

/// A row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRejection {
    /// Position of the row in the input.
    pub index: usize,
    /// The row identifier, when it had one.
    pub id: Option<String>,
    /// Why the row was rejected.
    pub message: String,
}

/// The outcome of validating a batch of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRows<T> {
    /// Rows that passed validation, in input order.
    pub records: Vec<T>,
    /// Rows that were rejected.
    pub rejected: Vec<RowRejection>,
}

/// Reads a text field. Numbers are accepted as their decimal text; blank
/// strings and nulls count as absent.
fn text(value: Option<&Value>, field: &str) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(format!("{} must be a string or number", field)),
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

impl TryFrom<ShiftRow> for ShiftRecord {
    type Error = EngineError;

    fn try_from(row: ShiftRow) -> EngineResult<Self> {
        let id = text(row.id.as_ref(), "id").ok().flatten();
        let shift_id = id.clone().unwrap_or_default();
        let invalid = |message: String| EngineError::InvalidShift {
            shift_id: shift_id.clone(),
            message,
        };
        let required = |value: Option<&Value>, field: &str| {
            text(value, field)
                .map_err(&invalid)?
                .ok_or_else(|| invalid(format!("missing {}", field)))
        };

        let id = required(row.id.as_ref(), "id")?;
        let employee_id = required(row.employee_id.as_ref(), "employee_id")?;

        let date_str = required(row.date.as_ref(), "date")?;
        let date = parse_date(&date_str)
            .ok_or_else(|| invalid(format!("invalid date '{}'", date_str)))?;

        let start_str = required(row.start_time.as_ref(), "start_time")?;
        let start_time = parse_time(&start_str)
            .ok_or_else(|| invalid(format!("invalid start_time '{}'", start_str)))?;

        let end_str = required(row.end_time.as_ref(), "end_time")?;
        let end_time = parse_time(&end_str)
            .ok_or_else(|| invalid(format!("invalid end_time '{}'", end_str)))?;

        let type_str = required(row.shift_type.as_ref(), "type")?;
        let shift_type = ShiftType::from_store_value(&type_str)
            .ok_or_else(|| invalid(format!("unknown type '{}'", type_str)))?;

        let note = text(row.note.as_ref(), "note").map_err(&invalid)?;

        Ok(ShiftRecord {
            id,
            employee_id,
            date,
            start_time,
            end_time,
            shift_type,
            note,
        })
    }
}

impl TryFrom<ReceiptRow> for ReceiptRecord {
    type Error = EngineError;

    fn try_from(row: ReceiptRow) -> EngineResult<Self> {
        let id = text(row.id.as_ref(), "id").ok().flatten();
        let receipt_id = id.clone().unwrap_or_default();
        let invalid = |message: String| EngineError::InvalidReceipt {
            receipt_id: receipt_id.clone(),
            message,
        };
        let required = |value: Option<&Value>, field: &str| {
            text(value, field)
                .map_err(&invalid)?
                .ok_or_else(|| invalid(format!("missing {}", field)))
        };

        let id = required(row.id.as_ref(), "id")?;

        let date_str = required(row.date.as_ref(), "date")?;
        let date = parse_date(&date_str)
            .ok_or_else(|| invalid(format!("invalid date '{}'", date_str)))?;

        let amount_str = required(row.amount.as_ref(), "amount")?;
        let amount = parse_decimal(&amount_str)
            .ok_or_else(|| invalid(format!("invalid amount '{}'", amount_str)))?;
        if amount < Decimal::ZERO {
            return Err(invalid("amount must not be negative".to_string()));
        }

        let note = text(row.note.as_ref(), "note").map_err(&invalid)?;

        Ok(ReceiptRecord {
            id,
            date,
            amount,
            note,
        })
    }
}

fn parse_rows<R, T>(rows: Vec<R>, row_id: impl Fn(&R) -> Option<&Value>) -> ParsedRows<T>
where
    T: TryFrom<R, Error = EngineError>,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        let id = text(row_id(&row), "id").ok().flatten();
        match T::try_from(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::debug!(index, error = %err, "Rejected store row");
                rejected.push(RowRejection {
                    index,
                    id,
                    message: err.to_string(),
                });
            }
        }
    }

    ParsedRows { records, rejected }
}

/// Validates a batch of shift rows, keeping the valid ones and flagging the
/// rest.
pub fn parse_shift_rows(rows: Vec<ShiftRow>) -> ParsedRows<ShiftRecord> {
    parse_rows(rows, |row| row.id.as_ref())
}

/// Validates a batch of receipt rows, keeping the valid ones and flagging
/// the rest.
pub fn parse_receipt_rows(rows: Vec<ReceiptRow>) -> ParsedRows<ReceiptRecord> {
    parse_rows(rows, |row| row.id.as_ref())
}
