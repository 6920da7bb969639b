//! Month-to-date report
//!
//! Compares this month's spending against the per-category budgets.

use chrono::NaiveDate;

use crate::models::{month_bounds, Expense, Money, Period};
use crate::query::{filter_expenses, totals_by_category};
use crate::storage::Budgets;

/// One report row: a category's month-to-date spend against its budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Category name
    pub category: String,
    /// Amount spent this month
    pub spent: Money,
    /// Monthly budget, zero when none is set
    pub budget: Money,
    /// Budget minus spend; reported as zero for categories without a nonzero
    /// budget (legacy policy, kept for output compatibility)
    pub remaining: Money,
}

/// Month-to-date comparison of spending vs budgets
#[derive(Debug, Clone)]
pub struct MonthToDateReport {
    /// First day of the reported month
    pub month_start: NaiveDate,
    /// One row per category, sorted lexicographically ascending
    pub rows: Vec<ReportRow>,
    /// Sum of all spent amounts
    pub total_spent: Money,
    /// Sum of all budgets (unbudgeted categories contribute zero)
    pub total_budget: Money,
    /// Total budget minus total spent
    pub total_remaining: Money,
}

impl MonthToDateReport {
    /// Generate the report for the month containing `today`
    ///
    /// The category universe is the union of categories with any spend this
    /// month and categories with a budget entry.
    pub fn generate(expenses: &[Expense], budgets: &Budgets, today: NaiveDate) -> Self {
        let (start, end) = month_bounds(today);
        let in_month = filter_expenses(expenses, &Period::bounded(start, end), None);
        let totals = totals_by_category(&in_month);

        let mut categories: Vec<&String> = totals.keys().chain(budgets.keys()).collect();
        categories.sort();
        categories.dedup();

        let mut rows = Vec::with_capacity(categories.len());
        let mut total_spent = Money::zero();
        let mut total_budget = Money::zero();

        for category in categories {
            let spent = totals.get(category).copied().unwrap_or_default();
            let budget = budgets.get(category).copied().unwrap_or_default();
            let remaining = if budget.is_zero() {
                Money::zero()
            } else {
                budget - spent
            };

            total_spent += spent;
            total_budget += budget;

            rows.push(ReportRow {
                category: category.clone(),
                spent,
                budget,
                remaining,
            });
        }

        Self {
            month_start: start,
            rows,
            total_spent,
            total_budget,
            total_remaining: total_budget - total_spent,
        }
    }

    /// True when there is nothing to show (no spend this month, no budgets)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
