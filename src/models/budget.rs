//! Monthly budget record model.
//!
//! This module contains the [`Budget`] type supplied by budget providers.

use serde::{Deserialize, Serialize};

/// The total budget for one calendar month.
///
/// `year_month` is the six-character `YYYYMM` key. Records are passed through
/// from the provider as-is: the allocator compares keys textually and does
/// not validate them.
///
/// # Example
///
/// ```
/// use budget_engine::models::Budget;
///
/// let budget = Budget::new("202401", 31000);
/// assert_eq!(budget.year_month, "202401");
/// assert_eq!(budget.amount, 31000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The month key, e.g. "202401" for January 2024.
    pub year_month: String,
    /// The budget for the entire month, in whole monetary units.
    pub amount: u64,
}

impl Budget {
    /// Creates a budget record.
    pub fn new(year_month: impl Into<String>, amount: u64) -> Self {
        Self {
            year_month: year_month.into(),
            amount,
        }
    }
}
