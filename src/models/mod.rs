//! Core data models for the Budget Allocation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation_result;
mod budget;
mod date_range;
mod year_month;

pub use allocation_result::{
    AllocationResult, AuditStep, AuditTrace, AuditWarning, MonthlyAllocation,
};
pub use budget::Budget;
pub use date_range::DateRange;
pub use year_month::YearMonth;
