//! Storage layer for xpense
//!
//! CSV storage for expenses, JSON storage for budgets, with automatic
//! first-run initialization of the data directory and both files.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::{BudgetStore, Budgets};
pub use expenses::ExpenseStore;
pub use file_io::{read_json_or_default, write_json_atomic};

use crate::config::paths::XpensePaths;
use crate::error::XpenseResult;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: XpensePaths,
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create a new Storage instance, initializing the data directory and
    /// empty store files on first use
    pub fn new(paths: XpensePaths) -> XpenseResult<Self> {
        paths.ensure_directories()?;

        let storage = Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        };

        storage.expenses.init()?;
        storage.budgets.init()?;

        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &XpensePaths {
        &self.paths
    }
}
