//! Period model and resolver
//!
//! Pure date arithmetic that turns symbolic period selectors (today, week,
//! month, range, all) into concrete inclusive date intervals. No side effects;
//! "today" is always passed in explicitly so callers stay testable.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{XpenseError, XpenseResult};

use super::expense::DATE_FMT;

/// An inclusive date interval, possibly unbounded on either side
///
/// Both bounds absent means "all time".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    /// First day of the interval, inclusive
    pub start: Option<NaiveDate>,
    /// Last day of the interval, inclusive
    pub end: Option<NaiveDate>,
}

impl Period {
    /// The unbounded period covering all time
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A fully bounded period
    pub const fn bounded(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Check whether a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Symbolic period selector for the summary command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelector {
    /// Just today
    Today,
    /// Monday-start week containing today
    Week,
    /// Calendar month containing today
    Month,
    /// Explicit --start/--end bounds (both required)
    Range,
    /// All time
    All,
}

/// Parse a strict YYYY-MM-DD date string
///
/// chrono accepts unpadded numerics for `%Y-%m-%d`, so the fixed
/// 4-2-2 shape is checked first.
pub fn parse_date(s: &str) -> XpenseResult<NaiveDate> {
    let shaped = s.len() == 10 && s.as_bytes()[4] == b'-' && s.as_bytes()[7] == b'-';
    if !shaped {
        return Err(XpenseError::DateParse(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FMT).map_err(|_| XpenseError::DateParse(s.to_string()))
}

/// Get the first and last day of the month containing `date`
///
/// Handles December rollover, variable month lengths, and leap years.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap();
    let next_month_start = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1).unwrap()
    };
    (start, next_month_start - Duration::days(1))
}

/// Resolve a symbolic selector into a concrete period
///
/// `start`/`end` are only consulted for [`PeriodSelector::Range`], which
/// requires both and fails with a usage error otherwise.
pub fn resolve_period(
    selector: PeriodSelector,
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> XpenseResult<Period> {
    match selector {
        PeriodSelector::Today => Ok(Period::bounded(today, today)),
        PeriodSelector::Week => {
            let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            Ok(Period::bounded(week_start, week_start + Duration::days(6)))
        }
        PeriodSelector::Month => {
            let (s, e) = month_bounds(today);
            Ok(Period::bounded(s, e))
        }
        PeriodSelector::Range => match (start, end) {
            (Some(s), Some(e)) => Ok(Period::bounded(s, e)),
            _ => Err(XpenseError::MissingParameter(
                "Provide --start YYYY-MM-DD and --end YYYY-MM-DD for 'range'".to_string(),
            )),
        },
        PeriodSelector::All => Ok(Period::all()),
    }
}

/// Resolve a month spec ("this" or "YYYY-MM") into that month's bounds
pub fn resolve_month_spec(spec: &str, today: NaiveDate) -> XpenseResult<Period> {
    if spec == "this" {
        let (s, e) = month_bounds(today);
        return Ok(Period::bounded(s, e));
    }

    let parse_err = || XpenseError::MonthParse(spec.to_string());

    let (year_str, month_str) = spec.split_once('-').ok_or_else(parse_err)?;
    let year: i32 = year_str.parse().map_err(|_| parse_err())?;
    let month: u32 = month_str.parse().map_err(|_| parse_err())?;

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(parse_err)?;
    let (s, e) = month_bounds(first);
    Ok(Period::bounded(s, e))
}
