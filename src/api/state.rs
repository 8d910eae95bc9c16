//! Application state for the Budget Allocation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::provider::BudgetProvider;

/// Shared application state.
///
/// Holds the budget provider every request allocates against.
#[derive(Clone)]
pub struct AppState {
    /// The source of monthly budget records.
    provider: Arc<dyn BudgetProvider>,
}

impl AppState {
    /// Creates a new application state with the given provider.
    pub fn new<P: BudgetProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Creates a new application state sharing an existing provider.
    pub fn from_shared(provider: Arc<dyn BudgetProvider>) -> Self {
        Self { provider }
    }

    /// Returns a reference to the budget provider.
    pub fn provider(&self) -> &dyn BudgetProvider {
        self.provider.as_ref()
    }
}
