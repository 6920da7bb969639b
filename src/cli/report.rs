//! Report command
//!
//! Month-to-date comparison table of spending vs budgets.

use chrono::Local;

use crate::display::format_report_table;
use crate::error::XpenseResult;
use crate::reports::MonthToDateReport;
use crate::storage::Storage;

/// Handle the report command
pub fn handle_report_command(storage: &Storage) -> XpenseResult<()> {
    let today = Local::now().date_naive();
    let expenses = storage.expenses.load()?;
    let budgets = storage.budgets.load()?;

    let report = MonthToDateReport::generate(&expenses, &budgets, today);
    if report.is_empty() {
        println!("No data/budgets yet.");
        return Ok(());
    }

    println!("Report - {} (MTD)", report.month_start.format("%B %Y"));
    println!("{}", format_report_table(&report));

    Ok(())
}
