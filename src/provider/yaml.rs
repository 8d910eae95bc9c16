//! File-backed budget provider.
//!
//! This module provides the [`YamlBudgetProvider`] type for reading monthly
//! budgets from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Budget, YearMonth};

use super::BudgetProvider;

/// Structure of a budget file.
///
/// ```yaml
/// budgets:
///   - year_month: "202401"
///     amount: 31000
///   - year_month: "202402"
///     amount: 29000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFile {
    /// Monthly budget records, in file order.
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

/// Reads budgets from a YAML file.
///
/// The file is read on every [`get_all`](BudgetProvider::get_all) call, so
/// edits are visible to the next allocation without reconstructing the
/// provider.
///
/// # Example
///
/// ```no_run
/// use budget_engine::provider::{BudgetProvider, YamlBudgetProvider};
///
/// let provider = YamlBudgetProvider::new("./data/budgets.yaml");
/// let budgets = provider.get_all()?;
/// println!("{} monthly budgets", budgets.len());
/// # Ok::<(), budget_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct YamlBudgetProvider {
    path: PathBuf,
}

impl YamlBudgetProvider {
    /// Creates a provider for the file at `path`. The file is not read yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path of the budget file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the budget file.
    ///
    /// # Returns
    ///
    /// Returns the parsed file, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`BudgetFile`] (`ConfigParseError`)
    /// - A record's key is not a valid `YYYYMM` month (`InvalidYearMonth`)
    pub fn load(&self) -> EngineResult<BudgetFile> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: BudgetFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        for budget in &file.budgets {
            budget.year_month.parse::<YearMonth>()?;
        }

        debug!(path = %path_str, budgets = file.budgets.len(), "Loaded budget file");

        Ok(file)
    }
}

impl BudgetProvider for YamlBudgetProvider {
    fn get_all(&self) -> EngineResult<Vec<Budget>> {
        self.load().map(|file| file.budgets)
    }
}
