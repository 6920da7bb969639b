//! Month-to-date report table

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::reports::MonthToDateReport;

/// Render the month-to-date report as a table, including the totals row
pub fn format_report_table(report: &MonthToDateReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Spent", "Budget", "Left(+)/Over(-)"]);

    for row in &report.rows {
        builder.push_record([
            row.category.clone(),
            row.spent.to_string(),
            row.budget.to_string(),
            row.remaining.to_string(),
        ]);
    }

    builder.push_record([
        "TOTAL".to_string(),
        report.total_spent.to_string(),
        report.total_budget.to_string(),
        report.total_remaining.to_string(),
    ]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..=3), Alignment::right());

    table.to_string()
}
