//! In-memory budget provider.

use crate::error::EngineResult;
use crate::models::Budget;

use super::BudgetProvider;

/// A provider backed by a fixed list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryBudgetProvider {
    budgets: Vec<Budget>,
}

impl InMemoryBudgetProvider {
    /// Creates a provider returning `budgets` in the given order.
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    /// Returns the stored records.
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }
}

impl From<Vec<Budget>> for InMemoryBudgetProvider {
    fn from(budgets: Vec<Budget>) -> Self {
        Self::new(budgets)
    }
}

impl BudgetProvider for InMemoryBudgetProvider {
    fn get_all(&self) -> EngineResult<Vec<Budget>> {
        Ok(self.budgets.clone())
    }
}
