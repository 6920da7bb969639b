//! Expense model
//!
//! Represents a single dated expense with a category and optional note.
//! Expenses are immutable once recorded; there is no edit or delete.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;

/// Date format used everywhere: storage, CLI flags, display
pub const DATE_FMT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Calendar date of the expense (no time component)
    pub when: NaiveDate,

    /// Amount spent, non-negative by convention (not enforced)
    pub amount: Money,

    /// Free-text category label; case is preserved as entered
    pub category: String,

    /// Optional free-text note
    pub note: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        when: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            when,
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    /// Check whether this expense's category matches a filter label
    ///
    /// Matching is case-insensitive; storage and display keep the original case.
    pub fn category_matches(&self, filter: &str) -> bool {
        self.category.eq_ignore_ascii_case(filter)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.when.format(DATE_FMT),
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let when = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let e = Expense::new(when, Money::from_cents(1250), "food", "lunch");

        assert_eq!(e.when, when);
        assert_eq!(e.amount.cents(), 1250);
        assert_eq!(e.category, "food");
        assert_eq!(e.note, "lunch");
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let when = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let e = Expense::new(when, Money::from_cents(100), "food", "");

        assert!(e.category_matches("food"));
        assert!(e.category_matches("Food"));
        assert!(e.category_matches("FOOD"));
        assert!(!e.category_matches("rent"));
    }

    #[test]
    fn test_display() {
        let when = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let e = Expense::new(when, Money::from_cents(1250), "food", "");

        assert_eq!(format!("{}", e), "2025-06-01 $12.50 food");
    }
}
