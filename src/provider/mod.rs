//! Budget data sources.
//!
//! The allocator never stores budget data. Each allocation reads one snapshot
//! of every monthly budget record from a [`BudgetProvider`] passed in by the
//! caller.
//!
//! # Example
//!
//! ```
//! use budget_engine::models::Budget;
//! use budget_engine::provider::{BudgetProvider, InMemoryBudgetProvider};
//!
//! let provider = InMemoryBudgetProvider::new(vec![Budget::new("202401", 31000)]);
//! assert_eq!(provider.get_all().unwrap().len(), 1);
//! ```

mod memory;
mod yaml;

pub use memory::InMemoryBudgetProvider;
pub use yaml::{BudgetFile, YamlBudgetProvider};

use crate::error::EngineResult;
use crate::models::Budget;

/// Supplies the full collection of monthly budget records.
///
/// Implementations decide where records come from. Order matters only when
/// the data holds duplicate keys: the allocator uses the first match.
pub trait BudgetProvider: Send + Sync {
    /// Returns every budget record currently known to the provider.
    fn get_all(&self) -> EngineResult<Vec<Budget>>;
}
