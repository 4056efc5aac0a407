//! Inclusive date periods.
//!
//! This module contains the [`Period`] type used for shift months, schedule
//! weeks and receipt ranges.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates.
///
/// A period always satisfies `start_date <= end_date`. Its length is the
/// number of calendar days it covers, both bounds included.
///
/// # Example
///
/// ```
/// use roster_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
/// ).unwrap();
///
/// assert_eq!(period.length_days(), 7);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds")]
pub struct Period {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
struct PeriodBounds {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<PeriodBounds> for Period {
    type Error = EngineError;

    fn try_from(bounds: PeriodBounds) -> EngineResult<Self> {
        Period::new(bounds.start_date, bounds.end_date)
    }
}

fn out_of_range(start: NaiveDate, end: NaiveDate) -> EngineError {
    EngineError::InvalidPeriod {
        start,
        end,
        message: "date arithmetic out of supported range".to_string(),
    }
}

impl Period {
    /// Creates a period, rejecting a start after the end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPeriod {
                start: start_date,
                end: end_date,
                message: "start date is after end date".to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the calendar month `month` of `year`, first to last day.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::Period;
    /// use chrono::NaiveDate;
    ///
    /// let february = Period::month(2028, 2).unwrap();
    /// assert_eq!(february.start_date, NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
    /// assert_eq!(february.end_date, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    ///
    /// assert!(Period::month(2028, 13).is_err());
    /// ```
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth { year, month };

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last = next_first.pred_opt().ok_or_else(invalid)?;

        Ok(Self {
            start_date: first,
            end_date: last,
        })
    }

    /// Returns the Monday-to-Sunday week containing `date`.
    ///
    /// Sunday counts as the seventh day of the week, so a Sunday maps back
    /// to the Monday six days earlier.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::Period;
    /// use chrono::NaiveDate;
    ///
    /// // 2026-03-15 is a Sunday
    /// let week = Period::week_containing(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()).unwrap();
    /// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
    /// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    /// ```
    pub fn week_containing(date: NaiveDate) -> EngineResult<Self> {
        let days_since_monday = i64::from(date.weekday().num_days_from_monday());
        let monday = date
            .checked_sub_signed(Duration::days(days_since_monday))
            .ok_or_else(|| out_of_range(date, date))?;
        let sunday = monday
            .checked_add_signed(Duration::days(6))
            .ok_or_else(|| out_of_range(date, date))?;

        Ok(Self {
            start_date: monday,
            end_date: sunday,
        })
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days covered, both bounds included.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns this period moved by `days` (negative moves backwards).
    pub fn shifted(&self, days: i64) -> EngineResult<Self> {
        let offset = Duration::days(days);
        let start = self
            .start_date
            .checked_add_signed(offset)
            .ok_or_else(|| out_of_range(self.start_date, self.end_date))?;
        let end = self
            .end_date
            .checked_add_signed(offset)
            .ok_or_else(|| out_of_range(self.start_date, self.end_date))?;

        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }

    /// Returns the period of identical length that ends the day before
    /// this one starts.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::Period;
    /// use chrono::NaiveDate;
    ///
    /// let week = Period::new(
    ///     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
    /// ).unwrap();
    /// let prior = week.prior().unwrap();
    /// assert_eq!(prior.start_date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    /// assert_eq!(prior.end_date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    /// ```
    ///
    /// The prior window uses the inclusive day count for custom ranges too,
    /// so it always matches the length of `self`.
    pub fn prior(&self) -> EngineResult<Self> {
        self.shifted(-self.length_days())
    }

    /// Iterates over every date of the period in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }
}
