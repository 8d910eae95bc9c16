//! Month coverage decomposition.
//!
//! This module splits an inclusive date range at calendar month boundaries,
//! recording how many days of each touched month fall inside the range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::YearMonth;

/// The number of days of one calendar month covered by a date range.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::MonthCoverage;
/// use budget_engine::models::YearMonth;
///
/// let coverage = MonthCoverage {
///     year_month: YearMonth::new(2024, 1).unwrap(),
///     covered_days: 2,
/// };
/// assert_eq!(coverage.year(), 2024);
/// assert_eq!(coverage.month(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCoverage {
    /// The covered month.
    pub year_month: YearMonth,
    /// Days of the month inside the range, in `1..=days_in_month`.
    pub covered_days: u32,
}

impl MonthCoverage {
    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year_month.year()
    }

    /// The calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.year_month.month()
    }
}

/// Decomposes an inclusive date range into per-month day coverage.
///
/// Walks month by month from the month containing `start`, clamping the range
/// to each month's first and last day, until a month begins after `end`.
///
/// # Returns
///
/// One [`MonthCoverage`] per month touched by the range, in chronological
/// order with no gaps. The covered days sum to the length of the range.
/// Returns an empty vector when `start > end`.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::decompose_coverage;
/// use chrono::NaiveDate;
///
/// let coverage = decompose_coverage(
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
/// );
///
/// assert_eq!(coverage.len(), 2);
/// assert_eq!(coverage[0].year_month.to_string(), "202401");
/// assert_eq!(coverage[0].covered_days, 2);
/// assert_eq!(coverage[1].year_month.to_string(), "202402");
/// assert_eq!(coverage[1].covered_days, 2);
/// ```
pub fn decompose_coverage(start: NaiveDate, end: NaiveDate) -> Vec<MonthCoverage> {
    let mut coverage = Vec::new();
    let mut current = YearMonth::from_date(start);

    while let (Some(first_day), Some(last_day)) = (current.first_day(), current.last_day()) {
        if first_day > end {
            break;
        }

        let actual_start = start.max(first_day);
        let actual_end = end.min(last_day);

        if actual_start <= actual_end {
            let covered_days = (actual_end - actual_start).num_days() + 1;
            coverage.push(MonthCoverage {
                year_month: current,
                covered_days: covered_days as u32,
            });
        }

        current = current.next();
    }

    coverage
}
