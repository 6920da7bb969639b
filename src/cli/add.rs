//! Add command
//!
//! Appends one expense and, when the category is budgeted, prints its
//! month-to-date status right away.

use chrono::{Local, NaiveDate};

use crate::error::{XpenseError, XpenseResult};
use crate::models::{month_bounds, parse_date, Expense, Money, Period};
use crate::query::filter_expenses;
use crate::reports::{budget_status, BudgetState};
use crate::storage::Storage;

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    amount: &str,
    category: &str,
    date: Option<&str>,
    note: Option<&str>,
) -> XpenseResult<()> {
    let amount = Money::parse(amount)
        .map_err(|e| XpenseError::Validation(format!("Invalid amount: {}", e)))?;
    let when = match date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let expense = Expense::new(when, amount, category, note.unwrap_or(""));
    storage.expenses.append(&expense)?;

    if expense.note.is_empty() {
        println!(
            "Added {} to '{}' on {}",
            expense.amount, expense.category, expense.when
        );
    } else {
        println!(
            "Added {} to '{}' on {} - {}",
            expense.amount, expense.category, expense.when, expense.note
        );
    }

    // Budget alert for the month the expense lands in
    let budgets = storage.budgets.load()?;
    if let Some(&budget) = budgets.get(category) {
        let mtd = month_to_date_spend(storage, category, when)?;
        let status = budget_status(mtd, budget);

        match status.state {
            BudgetState::Exceeded => println!(
                "⚠️  Budget exceeded for '{}': {} / {} ({:.0}%, over by {})",
                category, status.spent, status.budget, status.percentage, status.remaining_or_over
            ),
            BudgetState::Ok => println!(
                "✅ MTD for '{}': {} / {} ({:.0}%). Remaining: {}.",
                category, status.spent, status.budget, status.percentage, status.remaining_or_over
            ),
        }
    }

    Ok(())
}

/// Sum this category's spend over the month containing `when`
fn month_to_date_spend(storage: &Storage, category: &str, when: NaiveDate) -> XpenseResult<Money> {
    let (start, end) = month_bounds(when);
    let expenses = storage.expenses.load()?;
    let in_month = filter_expenses(&expenses, &Period::bounded(start, end), Some(category));
    Ok(in_month.iter().map(|e| e.amount).sum())
}
