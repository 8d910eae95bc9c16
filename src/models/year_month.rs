//! Calendar month identification.
//!
//! This module provides the [`YearMonth`] value type, which names a single
//! calendar month and knows how to render and parse the six-character
//! `YYYYMM` key used by budget records.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month, ordered chronologically.
///
/// Renders as a six-character key: the 4-digit year followed by the
/// zero-padded 2-digit month.
///
/// # Example
///
/// ```
/// use budget_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let ym = YearMonth::from_date(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// assert_eq!(ym.to_string(), "202402");
/// assert_eq!(ym.days_in_month(), 29);
/// assert_eq!(ym.next().to_string(), "202403");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, returning `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The calendar month, `1..=12`.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Number of days in this month under the Gregorian calendar.
    pub fn days_in_month(self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// The first day of the month, or `None` outside chrono's date range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The last day of the month, or `None` outside chrono's date range.
    pub fn last_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
    }

    /// The following calendar month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    /// Parses a `YYYYMM` key.
    ///
    /// # Example
    ///
    /// ```
    /// use budget_engine::models::YearMonth;
    ///
    /// let ym: YearMonth = "202401".parse().unwrap();
    /// assert_eq!((ym.year(), ym.month()), (2024, 1));
    /// assert!("2024-1".parse::<YearMonth>().is_err());
    /// assert!("202413".parse::<YearMonth>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidYearMonth {
            value: s.to_string(),
        };

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = s[..4].parse::<i32>().map_err(|_| invalid())?;
        let month = s[4..].parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
