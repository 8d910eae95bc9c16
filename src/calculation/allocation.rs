//! Budget allocation.
//!
//! This module pro-rates monthly budgets over an arbitrary date range. Each
//! covered month contributes its budget divided by the month's length,
//! truncated to a whole unit per day, multiplied by the number of covered
//! days. The truncation happens before the multiplication, so a month whose
//! budget does not divide evenly never allocates its remainder, even when it
//! is covered in full.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AllocationResult, AuditStep, AuditTrace, AuditWarning, Budget, DateRange, MonthlyAllocation,
};
use crate::provider::BudgetProvider;

use super::coverage::{MonthCoverage, decompose_coverage};

/// Returns the portion of the monthly budgets allocated to `start..=end`.
///
/// An inverted range (`start > end`) allocates zero and the provider is not
/// read. Otherwise the provider is read exactly once. Months without a budget
/// record contribute zero; when several records share a month's key the
/// first one wins.
///
/// # Errors
///
/// Only errors raised by `provider` are returned, unchanged.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::get_budget;
/// use budget_engine::models::Budget;
/// use budget_engine::provider::InMemoryBudgetProvider;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let provider = InMemoryBudgetProvider::new(vec![
///     Budget::new("202401", 31000),
///     Budget::new("202402", 29000),
/// ]);
///
/// let total = get_budget(
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
///     &provider,
/// )?;
/// assert_eq!(total, Decimal::from(4000));
/// # Ok::<(), budget_engine::error::EngineError>(())
/// ```
pub fn get_budget<P>(start: NaiveDate, end: NaiveDate, provider: &P) -> EngineResult<Decimal>
where
    P: BudgetProvider + ?Sized,
{
    if start > end {
        debug!(%start, %end, "Inverted range allocates nothing");
        return Ok(Decimal::ZERO);
    }

    let coverage = decompose_coverage(start, end);
    let budgets = provider.get_all()?;

    Ok(allocate_months(&coverage, &budgets)
        .iter()
        .map(|line| line.amount)
        .sum())
}

/// Folds month coverage against a snapshot of budget records.
///
/// Produces one [`MonthlyAllocation`] per coverage entry, in the same order.
pub fn allocate_months(coverage: &[MonthCoverage], budgets: &[Budget]) -> Vec<MonthlyAllocation> {
    coverage
        .iter()
        .map(|entry| allocate_month(entry, budgets))
        .collect()
}

fn allocate_month(entry: &MonthCoverage, budgets: &[Budget]) -> MonthlyAllocation {
    let key = entry.year_month.to_string();
    let days_in_month = entry.year_month.days_in_month();

    let Some(budget) = budgets.iter().find(|b| b.year_month == key) else {
        debug!(year_month = %key, "No budget defined for month");
        return MonthlyAllocation {
            year_month: entry.year_month,
            covered_days: entry.covered_days,
            days_in_month,
            monthly_amount: None,
            per_day_amount: Decimal::ZERO,
            amount: Decimal::ZERO,
        };
    };

    let per_day_amount = Decimal::from(budget.amount / u64::from(days_in_month));

    MonthlyAllocation {
        year_month: entry.year_month,
        covered_days: entry.covered_days,
        days_in_month,
        monthly_amount: Some(budget.amount),
        per_day_amount,
        amount: per_day_amount * Decimal::from(entry.covered_days),
    }
}

/// Allocates budget over `range` and records how the total was derived.
///
/// The total always equals [`get_budget`] for the same inputs, and the
/// provider is read under the same rules. The result adds the per-month
/// breakdown, an audit step per decision, and warnings for months without a
/// budget or with duplicate records.
///
/// # Example
///
/// ```
/// use budget_engine::calculation::calculate_allocation;
/// use budget_engine::models::{Budget, DateRange};
/// use budget_engine::provider::InMemoryBudgetProvider;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let provider = InMemoryBudgetProvider::new(vec![Budget::new("202401", 31000)]);
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// );
///
/// let result = calculate_allocation(range, &provider)?;
/// assert_eq!(result.total, Decimal::from(10000));
/// assert_eq!(result.lines.len(), 1);
/// assert_eq!(result.lines[0].per_day_amount, Decimal::from(1000));
/// # Ok::<(), budget_engine::error::EngineError>(())
/// ```
pub fn calculate_allocation<P>(range: DateRange, provider: &P) -> EngineResult<AllocationResult>
where
    P: BudgetProvider + ?Sized,
{
    let started = Instant::now();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let valid = range.is_valid();
    steps.push(AuditStep {
        step_number,
        rule_id: "range_validation".to_string(),
        rule_name: "Range Validation".to_string(),
        input: serde_json::json!({
            "start_date": range.start_date.to_string(),
            "end_date": range.end_date.to_string()
        }),
        output: serde_json::json!({ "valid": valid }),
        reasoning: if valid {
            format!("{} days from {} to {}", range.num_days(), range.start_date, range.end_date)
        } else {
            format!(
                "Start {} is after end {}; nothing is allocated",
                range.start_date, range.end_date
            )
        },
    });
    step_number += 1;

    if !valid {
        debug!(start = %range.start_date, end = %range.end_date, "Inverted range allocates nothing");
        return Ok(build_result(range, Vec::new(), steps, warnings, started));
    }

    let coverage = decompose_coverage(range.start_date, range.end_date);
    steps.push(AuditStep {
        step_number,
        rule_id: "month_coverage".to_string(),
        rule_name: "Month Coverage".to_string(),
        input: serde_json::json!({
            "start_date": range.start_date.to_string(),
            "end_date": range.end_date.to_string()
        }),
        output: serde_json::json!({
            "months": coverage
                .iter()
                .map(|c| serde_json::json!({
                    "year_month": c.year_month.to_string(),
                    "covered_days": c.covered_days
                }))
                .collect::<Vec<_>>()
        }),
        reasoning: format!("Range touches {} month(s)", coverage.len()),
    });
    step_number += 1;

    let budgets = provider.get_all()?;
    debug!(months = coverage.len(), budgets = budgets.len(), "Allocating budget");

    let lines = allocate_months(&coverage, &budgets);

    for line in &lines {
        let key = line.year_month.to_string();
        let matches = budgets.iter().filter(|b| b.year_month == key).count();

        if matches > 1 {
            warnings.push(AuditWarning {
                code: "DUPLICATE_BUDGET".to_string(),
                message: format!("{} budget records for {}; using the first", matches, key),
                severity: "medium".to_string(),
            });
        }

        let reasoning = match line.monthly_amount {
            Some(monthly_amount) => format!(
                "floor({} / {}) = {} per day x {} day(s) = {}",
                monthly_amount,
                line.days_in_month,
                line.per_day_amount,
                line.covered_days,
                line.amount
            ),
            None => {
                warnings.push(AuditWarning {
                    code: "NO_BUDGET".to_string(),
                    message: format!("No budget defined for {}", key),
                    severity: "low".to_string(),
                });
                format!("No budget defined for {}; contributes 0", key)
            }
        };

        steps.push(AuditStep {
            step_number,
            rule_id: "monthly_proration".to_string(),
            rule_name: "Monthly Pro-ration".to_string(),
            input: serde_json::json!({
                "year_month": key,
                "covered_days": line.covered_days,
                "days_in_month": line.days_in_month,
                "monthly_amount": line.monthly_amount
            }),
            output: serde_json::json!({
                "per_day_amount": line.per_day_amount.to_string(),
                "amount": line.amount.to_string()
            }),
            reasoning,
        });
        step_number += 1;
    }

    Ok(build_result(range, lines, steps, warnings, started))
}

fn build_result(
    range: DateRange,
    lines: Vec<MonthlyAllocation>,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
    started: Instant,
) -> AllocationResult {
    let total: Decimal = lines.iter().map(|line| line.amount).sum();

    AllocationResult {
        allocation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        range,
        lines,
        total,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: started.elapsed().as_micros() as u64,
        },
    }
}
