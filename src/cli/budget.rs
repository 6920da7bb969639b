//! Set-budget command
//!
//! With both arguments, upserts the category's monthly budget; with neither,
//! lists all budgets sorted by category name.

use crate::error::{XpenseError, XpenseResult};
use crate::models::Money;
use crate::storage::Storage;

/// Handle the set-budget command
pub fn handle_set_budget_command(
    storage: &Storage,
    category: Option<&str>,
    amount: Option<&str>,
) -> XpenseResult<()> {
    match (category, amount) {
        (Some(category), Some(amount)) => {
            let amount = Money::parse(amount)
                .map_err(|e| XpenseError::Validation(format!("Invalid amount: {}", e)))?;

            let mut budgets = storage.budgets.load()?;
            budgets.insert(category.to_string(), amount);
            storage.budgets.save(&budgets)?;

            println!("Set budget for '{}' to {}", category, amount);
            Ok(())
        }
        (None, None) => {
            let budgets = storage.budgets.load()?;
            if budgets.is_empty() {
                println!("No budgets set.");
                return Ok(());
            }

            println!("Budgets (per month):");
            println!("{}", "-".repeat(28));
            for (category, amount) in &budgets {
                println!("{:<15} {:>12}", category, amount.to_string());
            }
            Ok(())
        }
        _ => Err(XpenseError::MissingParameter(
            "Provide both category and amount to set a budget, or neither to list budgets"
                .to_string(),
        )),
    }
}
