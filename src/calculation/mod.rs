//! Calculation logic for the Budget Allocation Engine.
//!
//! This module contains month coverage decomposition, which splits a date
//! range at month boundaries, and budget allocation, which pro-rates each
//! covered month's budget by the days covered.

mod allocation;
mod coverage;

pub use allocation::{allocate_months, calculate_allocation, get_budget};
pub use coverage::{MonthCoverage, decompose_coverage};
