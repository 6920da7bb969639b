//! Filtering and aggregation over loaded expenses
//!
//! Pure functions operating on caller-owned in-memory copies; every command
//! loads the full store once and runs a single pass here.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, Period};

/// Keep expenses within the period and (if given) matching the category
///
/// Category comparison is case-insensitive. Relative input order is preserved.
pub fn filter_expenses(expenses: &[Expense], period: &Period, category: Option<&str>) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| matches(e, period, category))
        .cloned()
        .collect()
}

/// Filter like [`filter_expenses`], pairing each kept expense with its
/// positional row id (1-based position in load order)
pub fn filter_numbered(
    expenses: Vec<Expense>,
    period: &Period,
    category: Option<&str>,
) -> Vec<(usize, Expense)> {
    expenses
        .into_iter()
        .enumerate()
        .filter(|(_, e)| matches(e, period, category))
        .map(|(i, e)| (i + 1, e))
        .collect()
}

fn matches(expense: &Expense, period: &Period, category: Option<&str>) -> bool {
    period.contains(expense.when)
        && category.map_or(true, |c| expense.category_matches(c))
}

/// Sort listing rows ascending by (date, category), keeping load order for ties
pub fn sort_for_listing(rows: &mut [(usize, Expense)]) {
    rows.sort_by(|(_, a), (_, b)| a.when.cmp(&b.when).then_with(|| a.category.cmp(&b.category)));
}

/// Sum amounts per exact (case-sensitive) category string
///
/// Categories with no expenses in the input are absent from the result.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for e in expenses {
        *totals.entry(e.category.clone()).or_insert_with(Money::zero) += e.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(d(2025, 6, 15), Money::from_cents(800), "food", "dinner"),
            Expense::new(d(2025, 6, 1), Money::from_cents(1250), "food", "lunch"),
            Expense::new(d(2025, 5, 28), Money::from_cents(4000), "transport", ""),
            Expense::new(d(2025, 6, 10), Money::from_cents(300), "Food", "coffee"),
        ]
    }

    #[test]
    fn test_no_filters_returns_input_unchanged() {
        let expenses = sample();
        let filtered = filter_expenses(&expenses, &Period::all(), None);
        assert_eq!(filtered, expenses);
    }

    #[test]
    fn test_filter_by_date_bounds_inclusive() {
        let expenses = sample();
        let period = Period::bounded(d(2025, 6, 1), d(2025, 6, 15));
        let filtered = filter_expenses(&expenses, &period, None);

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| period.contains(e.when)));
        // Input order preserved
        assert_eq!(filtered[0].when, d(2025, 6, 15));
        assert_eq!(filtered[1].when, d(2025, 6, 1));
    }

    #[test]
    fn test_filter_category_case_insensitive() {
        let expenses = sample();
        let filtered = filter_expenses(&expenses, &Period::all(), Some("FOOD"));

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().any(|e| e.category == "Food"));
    }

    #[test]
    fn test_filter_numbered_ids_are_load_positions() {
        let expenses = sample();
        let rows = filter_numbered(expenses, &Period::all(), Some("food"));

        let ids: Vec<usize> = rows.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_sort_for_listing_by_date_then_category() {
        let rows = filter_numbered(sample(), &Period::all(), None);
        let mut rows = rows;
        sort_for_listing(&mut rows);

        let order: Vec<NaiveDate> = rows.iter().map(|(_, e)| e.when).collect();
        assert_eq!(
            order,
            vec![d(2025, 5, 28), d(2025, 6, 1), d(2025, 6, 10), d(2025, 6, 15)]
        );
    }

    #[test]
    fn test_totals_by_category_exact_case_keys() {
        let expenses = sample();
        let totals = totals_by_category(&expenses);

        // "food" and "Food" are distinct aggregation keys
        assert_eq!(totals["food"].cents(), 2050);
        assert_eq!(totals["Food"].cents(), 300);
        assert_eq!(totals["transport"].cents(), 4000);
        assert!(!totals.contains_key("rent"));
    }

    #[test]
    fn test_totals_partition_the_input_sum() {
        let expenses = sample();
        let totals = totals_by_category(&expenses);

        let grand: Money = totals.values().copied().sum();
        let input_sum: Money = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(grand, input_sum);
    }
}
