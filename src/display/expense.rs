//! Expense listing table

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::{Expense, DATE_FMT};

/// Render listing rows as a table
///
/// `rows` pair each expense with its positional row id; the ID column is only
/// emitted when `with_id` is set.
pub fn format_expense_table(rows: &[(usize, Expense)], with_id: bool) -> String {
    let mut builder = Builder::default();

    if with_id {
        builder.push_record(["ID", "Date", "Amount", "Category", "Note"]);
    } else {
        builder.push_record(["Date", "Amount", "Category", "Note"]);
    }

    for (id, expense) in rows {
        let base = [
            expense.when.format(DATE_FMT).to_string(),
            expense.amount.to_string(),
            expense.category.clone(),
            expense.note.clone(),
        ];
        if with_id {
            let mut record = vec![id.to_string()];
            record.extend(base);
            builder.push_record(record);
        } else {
            builder.push_record(base);
        }
    }

    let amount_col = if with_id { 2 } else { 1 };
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::single(amount_col), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn rows() -> Vec<(usize, Expense)> {
        vec![
            (
                1,
                Expense::new(
                    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    Money::from_cents(1250),
                    "food",
                    "lunch",
                ),
            ),
            (
                3,
                Expense::new(
                    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
                    Money::from_cents(800),
                    "food",
                    "",
                ),
            ),
        ]
    }

    #[test]
    fn test_table_without_ids() {
        let table = format_expense_table(&rows(), false);

        assert!(table.contains("Date"));
        assert!(table.contains("2025-06-01"));
        assert!(table.contains("$12.50"));
        assert!(table.contains("lunch"));
        assert!(!table.contains("ID"));
    }

    #[test]
    fn test_table_with_ids() {
        let table = format_expense_table(&rows(), true);

        assert!(table.contains("ID"));
        assert!(table.contains(" 3 "));
    }
}
