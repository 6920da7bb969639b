//! Summary command
//!
//! Per-category totals for a symbolic period, with percentage of the grand
//! total, descending by amount.

use chrono::Local;
use clap::ValueEnum;

use crate::error::XpenseResult;
use crate::models::{parse_date, resolve_period, Money, PeriodSelector};
use crate::query::{filter_expenses, totals_by_category};
use crate::storage::Storage;

/// Period choices for the summary command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryPeriod {
    Today,
    Week,
    Month,
    Range,
    All,
}

impl From<SummaryPeriod> for PeriodSelector {
    fn from(period: SummaryPeriod) -> Self {
        match period {
            SummaryPeriod::Today => PeriodSelector::Today,
            SummaryPeriod::Week => PeriodSelector::Week,
            SummaryPeriod::Month => PeriodSelector::Month,
            SummaryPeriod::Range => PeriodSelector::Range,
            SummaryPeriod::All => PeriodSelector::All,
        }
    }
}

impl SummaryPeriod {
    fn label(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Range => "range",
            Self::All => "all",
        }
    }
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    period: SummaryPeriod,
    start: Option<&str>,
    end: Option<&str>,
    category: Option<&str>,
) -> XpenseResult<()> {
    let today = Local::now().date_naive();
    let resolved = resolve_period(
        period.into(),
        today,
        start.map(parse_date).transpose()?,
        end.map(parse_date).transpose()?,
    )?;

    let expenses = storage.expenses.load()?;
    let filtered = filter_expenses(&expenses, &resolved, category);
    let totals = totals_by_category(&filtered);

    if totals.is_empty() {
        println!("No data for that period/filter.");
        return Ok(());
    }

    let grand: Money = totals.values().copied().sum();
    let scope = category
        .map(|c| format!(" for {}", c))
        .unwrap_or_default();
    println!("Summary ({}){}: {} total", period.label(), scope, grand);
    println!("{}", "-".repeat(48));

    let mut entries: Vec<(&String, &Money)> = totals.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (cat, amount) in entries {
        let pct = if grand.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / grand.cents() as f64 * 100.0
        };
        println!("{:<15} {:>12}   {:5.1}%", cat, amount.to_string(), pct);
    }

    Ok(())
}
