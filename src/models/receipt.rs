//! Daily cash-register receipt model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cash-register receipt for one day.
///
/// Receipts are store-wide; they are not tied to an employee. A day may
/// hold more than one receipt.
///
/// # Example
///
/// ```
/// use roster_engine::models::ReceiptRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let receipt = ReceiptRecord {
///     id: "rc_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     amount: Decimal::new(12550, 2), // 125.50
///     note: None,
/// };
/// assert_eq!(receipt.amount.to_string(), "125.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Unique identifier for the receipt.
    pub id: String,
    /// The business day of the receipt.
    pub date: NaiveDate,
    /// The non-negative amount taken.
    pub amount: Decimal,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
