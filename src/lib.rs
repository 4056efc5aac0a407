//! Shift hour aggregation and receipt analytics for a single retail store.
//!
//! This crate turns the store's shift records into categorised monthly and
//! weekly hour totals, and its daily receipts into period statistics compared
//! with the preceding period. It also expands approved time-off requests into
//! shift records and serves everything over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
