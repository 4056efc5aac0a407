//! Period navigation for the receipts view.
//!
//! A [`PeriodSelector`] holds the period being looked at and moves it
//! forwards or backwards by its own length. A [`RequestSequence`] makes sure
//! only the answer to the most recent lookup is kept when several are in
//! flight.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Period;

/// How the selected period was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// A Monday-to-Sunday week.
    Week,
    /// An arbitrary inclusive date range.
    Custom,
}

/// The period currently selected for analysis.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{PeriodMode, PeriodSelector};
/// use chrono::NaiveDate;
///
/// // 2026-03-12 is a Thursday
/// let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
/// let mut selector = PeriodSelector::current_week(today).unwrap();
/// assert_eq!(selector.mode(), PeriodMode::Week);
///
/// let previous = selector.previous().unwrap();
/// assert_eq!(previous.start_date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelector {
    mode: PeriodMode,
    period: Period,
}

impl PeriodSelector {
    /// Selects the week containing `today`.
    pub fn current_week(today: NaiveDate) -> EngineResult<Self> {
        Ok(Self {
            mode: PeriodMode::Week,
            period: Period::week_containing(today)?,
        })
    }

    /// Selects a custom range; `start` after `end` is an error.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        Ok(Self {
            mode: PeriodMode::Custom,
            period: Period::new(start, end)?,
        })
    }

    /// Returns the selection mode.
    pub fn mode(&self) -> PeriodMode {
        self.mode
    }

    /// Returns the selected period.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Moves forward by the period's own length and returns the new period.
    pub fn next(&mut self) -> EngineResult<Period> {
        self.step(self.period.length_days())
    }

    /// Moves backward by the period's own length and returns the new period.
    pub fn previous(&mut self) -> EngineResult<Period> {
        self.step(-self.period.length_days())
    }

    /// Returns to week mode on the week containing `today`.
    pub fn reset(&mut self, today: NaiveDate) -> EngineResult<Period> {
        *self = Self::current_week(today)?;
        Ok(self.period)
    }

    fn step(&mut self, days: i64) -> EngineResult<Period> {
        self.period = self.period.shifted(days)?;
        Ok(self.period)
    }
}

/// A ticket identifying one lookup issued by a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets and accepts only the latest one's result.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::RequestSequence;
///
/// let sequence = RequestSequence::new();
/// let slow = sequence.issue();
/// let fast = sequence.issue();
///
/// assert_eq!(sequence.accept(fast, "this week"), Some("this week"));
/// assert_eq!(sequence.accept(slow, "last week"), None);
/// ```
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    /// Creates a sequence with no ticket issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Keeps `result` only if `ticket` is still the latest.
    pub fn accept<T>(&self, ticket: RequestTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(ticket = ticket.0, "Dropping stale result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::sync::Arc;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_current_week_from_sunday() {
        let selector = PeriodSelector::current_week(make_date("2026-03-15")).unwrap();
        assert_eq!(selector.period().start_date, make_date("2026-03-09"));
        assert_eq!(selector.period().end_date, make_date("2026-03-15"));
    }

    #[test]
    fn test_week_navigation_moves_seven_days() {
        let mut selector = PeriodSelector::current_week(make_date("2026-03-12")).unwrap();
        let next = selector.next().unwrap();
        assert_eq!(next.start_date, make_date("2026-03-16"));
        assert_eq!(next.end_date, make_date("2026-03-22"));

        selector.previous().unwrap();
        let back = selector.previous().unwrap();
        assert_eq!(back.start_date, make_date("2026-03-02"));
        assert_eq!(back.end_date, make_date("2026-03-08"));
    }

    #[test]
    fn test_custom_navigation_moves_by_inclusive_length() {
        let mut selector =
            PeriodSelector::custom(make_date("2026-03-01"), make_date("2026-03-10")).unwrap();
        assert_eq!(selector.mode(), PeriodMode::Custom);

        let next = selector.next().unwrap();
        assert_eq!(next.start_date, make_date("2026-03-11"));
        assert_eq!(next.end_date, make_date("2026-03-20"));
    }

    #[test]
    fn test_custom_rejects_inverted_range() {
        let result = PeriodSelector::custom(make_date("2026-03-10"), make_date("2026-03-01"));
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_reset_returns_to_week_mode() {
        let mut selector =
            PeriodSelector::custom(make_date("2026-01-01"), make_date("2026-01-31")).unwrap();
        let period = selector.reset(make_date("2026-03-12")).unwrap();
        assert_eq!(selector.mode(), PeriodMode::Week);
        assert_eq!(period.start_date, make_date("2026-03-09"));
    }

    #[test]
    fn test_only_latest_ticket_is_accepted() {
        let sequence = RequestSequence::new();
        let first = sequence.issue();
        assert!(sequence.is_current(first));

        let second = sequence.issue();
        assert!(second > first);
        assert!(!sequence.is_current(first));
        assert_eq!(sequence.accept(first, 1), None);
        assert_eq!(sequence.accept(second, 2), Some(2));
    }

    #[test]
    fn test_sequence_shared_across_threads() {
        let sequence = Arc::new(RequestSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sequence = Arc::clone(&sequence);
                std::thread::spawn(move || sequence.issue())
            })
            .collect();
        let mut tickets: Vec<RequestTicket> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        tickets.sort();
        tickets.dedup();

        assert_eq!(tickets.len(), 8);
        assert!(sequence.is_current(*tickets.last().unwrap()));
    }
}
