//! Error types for the Budget Allocation Engine.
//!
//! Allocation itself never fails: invalid ranges and unbudgeted months both
//! resolve to zero. The errors here come from budget providers (missing or
//! malformed budget files, unavailable data sources) and are propagated
//! unchanged through the allocator.

use thiserror::Error;

/// The main error type for the Budget Allocation Engine.
///
/// # Example
///
/// ```
/// use budget_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/budgets.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Budget file not found: /missing/budgets.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Budget file was not found at the specified path.
    #[error("Budget file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Budget file could not be parsed.
    #[error("Failed to parse budget file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A year-month key was not six digits naming a valid month.
    #[error("Invalid year-month key: '{value}'")]
    InvalidYearMonth {
        /// The offending key.
        value: String,
    },

    /// The budget data source could not be read.
    #[error("Budget provider unavailable: {message}")]
    ProviderUnavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
