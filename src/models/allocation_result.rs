//! Allocation result models for the Budget Allocation Engine.
//!
//! This module contains the [`AllocationResult`] type and its associated
//! structures: the per-month breakdown, the total, and an audit trace
//! recording how each month's contribution was derived.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DateRange, YearMonth};

/// One month's contribution to an allocation.
///
/// # Example
///
/// ```
/// use budget_engine::models::{MonthlyAllocation, YearMonth};
/// use rust_decimal::Decimal;
///
/// let line = MonthlyAllocation {
///     year_month: YearMonth::new(2024, 1).unwrap(),
///     covered_days: 10,
///     days_in_month: 31,
///     monthly_amount: Some(31000),
///     per_day_amount: Decimal::from(1000),
///     amount: Decimal::from(10000),
/// };
/// assert_eq!(line.amount, line.per_day_amount * Decimal::from(line.covered_days));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAllocation {
    /// The month this line covers.
    pub year_month: YearMonth,
    /// Days of the month inside the query range.
    pub covered_days: u32,
    /// Total days in the month.
    pub days_in_month: u32,
    /// The month's budget, or `None` when no record exists for it.
    pub monthly_amount: Option<u64>,
    /// The truncated daily rate (`monthly_amount / days_in_month`).
    pub per_day_amount: Decimal,
    /// `per_day_amount * covered_days`.
    pub amount: Decimal,
}

/// A single step in the audit trace recording an allocation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during allocation.
///
/// Warnings flag questionable budget data without affecting the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of allocation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during allocation.
    pub warnings: Vec<AuditWarning>,
    /// The total allocation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a budget allocation.
///
/// `total` always equals the sum of the line amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Unique identifier for this allocation.
    pub allocation_id: Uuid,
    /// When the allocation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the allocation.
    pub engine_version: String,
    /// The query range.
    pub range: DateRange,
    /// One line per month touched by the range, in chronological order.
    pub lines: Vec<MonthlyAllocation>,
    /// The allocated budget for the range.
    pub total: Decimal,
    /// Complete audit trace of allocation decisions.
    pub audit_trace: AuditTrace,
}
