//! List command
//!
//! Filtered, sorted listing of expenses with an optional positional row id.

use chrono::Local;

use crate::display::format_expense_table;
use crate::error::XpenseResult;
use crate::models::{parse_date, resolve_month_spec, Money, Period};
use crate::query::{filter_numbered, sort_for_listing};
use crate::storage::Storage;

/// Handle the list command
///
/// A month spec (`--month this|YYYY-MM`) takes precedence over explicit
/// `--start`/`--end` bounds.
pub fn handle_list_command(
    storage: &Storage,
    month: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    category: Option<&str>,
    with_id: bool,
) -> XpenseResult<()> {
    let period = match month {
        Some(spec) => resolve_month_spec(spec, Local::now().date_naive())?,
        None => Period {
            start: start.map(parse_date).transpose()?,
            end: end.map(parse_date).transpose()?,
        },
    };

    let expenses = storage.expenses.load()?;
    let mut rows = filter_numbered(expenses, &period, category);

    if rows.is_empty() {
        println!("No matching expenses.");
        return Ok(());
    }

    sort_for_listing(&mut rows);
    let total: Money = rows.iter().map(|(_, e)| e.amount).sum();

    println!("{} expenses - Total {}", rows.len(), total);
    println!("{}", format_expense_table(&rows, with_id));

    Ok(())
}
