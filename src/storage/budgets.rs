//! Budget store backed by a flat JSON mapping
//!
//! `budgets.json` maps category name (exact case) to a monthly limit in
//! dollars, kept human-editable. An unreadable file is treated as "no budgets
//! set" rather than an error.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::XpenseResult;
use crate::models::Money;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Per-category monthly budgets, sorted by category name
pub type Budgets = BTreeMap<String, Money>;

/// Store for budget persistence
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a new budget store for the given JSON path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create an empty budgets file if it doesn't exist yet
    ///
    /// Idempotent; safe to call on every invocation.
    pub fn init(&self) -> XpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        write_json_atomic(&self.path, &Budgets::new())
    }

    /// Load the budget mapping
    ///
    /// Returns an empty mapping if no budgets have ever been set or if the
    /// persisted file is unreadable.
    pub fn load(&self) -> XpenseResult<Budgets> {
        read_json_or_default(&self.path)
    }

    /// Overwrite the entire budget mapping atomically
    pub fn save(&self, budgets: &Budgets) -> XpenseResult<()> {
        write_json_atomic(&self.path, budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BudgetStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BudgetStore::new(temp_dir.path().join("budgets.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();

        let mut budgets = Budgets::new();
        budgets.insert("food".to_string(), Money::from_cents(15000));
        budgets.insert("rent".to_string(), Money::from_cents(120000));
        store.save(&budgets).unwrap();

        assert_eq!(store.load().unwrap(), budgets);
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let (temp_dir, store) = create_test_store();
        fs::write(temp_dir.path().join("budgets.json"), "{{{ not json").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_is_human_editable_dollars() {
        let (temp_dir, store) = create_test_store();

        // A hand-written file with plain numbers loads fine
        fs::write(
            temp_dir.path().join("budgets.json"),
            r#"{ "food": 150.0, "transport": 40 }"#,
        )
        .unwrap();

        let budgets = store.load().unwrap();
        assert_eq!(budgets["food"].cents(), 15000);
        assert_eq!(budgets["transport"].cents(), 4000);
    }

    #[test]
    fn test_upsert_overwrites_single_entry() {
        let (_temp_dir, store) = create_test_store();

        let mut budgets = Budgets::new();
        budgets.insert("food".to_string(), Money::from_cents(10000));
        store.save(&budgets).unwrap();

        budgets.insert("food".to_string(), Money::from_cents(20000));
        store.save(&budgets).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["food"].cents(), 20000);
    }
}
