//! Query interval model.
//!
//! This module contains the [`DateRange`] type describing the inclusive
//! interval a budget allocation is computed for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates.
///
/// A range whose start is after its end is not rejected at construction;
/// it is simply invalid and allocates nothing.
///
/// # Example
///
/// ```
/// use budget_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
/// );
///
/// assert!(range.is_valid());
/// assert_eq!(range.num_days(), 4);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range from its endpoints.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns `true` unless the start date is after the end date.
    pub fn is_valid(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Checks if a given date falls within this range.
    ///
    /// The check is inclusive of both start and end dates. An invalid range
    /// contains no dates.
    ///
    /// # Example
    ///
    /// ```
    /// use budget_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    /// );
    ///
    /// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())); // start date
    /// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())); // end date
    /// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days in the range, counting both ends. Zero when invalid.
    pub fn num_days(&self) -> i64 {
        if self.is_valid() {
            (self.end_date - self.start_date).num_days() + 1
        } else {
            0
        }
    }
}
