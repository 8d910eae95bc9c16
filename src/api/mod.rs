//! HTTP API module for the Budget Allocation Engine.
//!
//! This module exposes budget allocation over REST, backed by whichever
//! [`BudgetProvider`](crate::provider::BudgetProvider) the state is built with.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, BudgetTotalResponse};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
