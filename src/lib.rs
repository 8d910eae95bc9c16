//! Budget Allocation Engine
//!
//! This crate pro-rates monthly budgets over arbitrary date ranges. A range is
//! split into per-month day coverage, each covered month's budget is looked up
//! from a [`BudgetProvider`](provider::BudgetProvider), and the month's
//! truncated daily rate is multiplied by the days covered.
//!
//! # Example
//!
//! ```
//! use budget_engine::calculation::get_budget;
//! use budget_engine::models::Budget;
//! use budget_engine::provider::InMemoryBudgetProvider;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let provider = InMemoryBudgetProvider::new(vec![Budget::new("202401", 31000)]);
//! let total = get_budget(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     &provider,
//! )?;
//! assert_eq!(total, Decimal::from(10000));
//! # Ok::<(), budget_engine::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod provider;
