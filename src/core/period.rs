//! Reporting period resolution: a UI-selected mode (month / year / custom /
//! all) becomes one inclusive [start, end] calendar-date range.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Sentinel bounds for the `all` mode, wide enough for any realistic data.
pub const ALL_START: (i32, u32, u32) = (1970, 1, 1);
pub const ALL_END: (i32, u32, u32) = (9999, 12, 31);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    Month { year: i32, month: u32 },
    Year(i32),
    Custom { from: NaiveDate, to: NaiveDate },
    All,
}

impl Period {
    /// Parse a CLI period expression.
    ///
    /// Supported:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - from:to (both sides in any of the above forms)
    /// - all
    pub fn parse(r: &str) -> AppResult<Period> {
        let r = r.trim();

        if r.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }

        if let Some((start_raw, end_raw)) = r.split_once(':') {
            let (from, _) = parse_single(start_raw.trim())?.resolve()?;
            let (_, to) = parse_single(end_raw.trim())?.resolve()?;
            // from > to is accepted as-is: it simply yields an empty result
            // set downstream.
            return Ok(Period::Custom { from, to });
        }

        parse_single(r)
    }

    /// Resolve into an inclusive [start, end] date pair.
    pub fn resolve(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        match self {
            Period::Month { year, month } => {
                let last = month_last_day(*year, *month)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("{:04}-{:02}", year, month)))?;
                let d1 = NaiveDate::from_ymd_opt(*year, *month, 1)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("{:04}-{:02}", year, month)))?;
                let d2 = NaiveDate::from_ymd_opt(*year, *month, last)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("{:04}-{:02}", year, month)))?;
                Ok((d1, d2))
            }
            Period::Year(y) => {
                let d1 = NaiveDate::from_ymd_opt(*y, 1, 1)
                    .ok_or_else(|| AppError::InvalidPeriod(y.to_string()))?;
                let d2 = NaiveDate::from_ymd_opt(*y, 12, 31)
                    .ok_or_else(|| AppError::InvalidPeriod(y.to_string()))?;
                Ok((d1, d2))
            }
            Period::Custom { from, to } => Ok((*from, *to)),
            Period::All => {
                let (y1, m1, d1) = ALL_START;
                let (y2, m2, d2) = ALL_END;
                Ok((
                    NaiveDate::from_ymd_opt(y1, m1, d1).unwrap(),
                    NaiveDate::from_ymd_opt(y2, m2, d2).unwrap(),
                ))
            }
        }
    }

    /// Period covering the current month (the default for most listings).
    pub fn current_month() -> Period {
        let today = chrono::Local::now().date_naive();
        Period::Month {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Human label used in report headers and export titles.
    pub fn label(&self) -> String {
        match self {
            Period::Month { year, month } => format!("{:04}-{:02}", year, month),
            Period::Year(y) => format!("{:04}", y),
            Period::Custom { from, to } => format!("{} .. {}", from, to),
            Period::All => "all".to_string(),
        }
    }
}

fn parse_single(r: &str) -> AppResult<Period> {
    match r.len() {
        // YYYY
        4 => {
            let y: i32 = r
                .parse()
                .map_err(|_| AppError::InvalidPeriod(r.to_string()))?;
            Ok(Period::Year(y))
        }
        // YYYY-MM
        7 => {
            let y: i32 = r[0..4]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(r.to_string()))?;
            let m: u32 = r[5..7]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(r.to_string()))?;
            if month_last_day(y, m).is_none() {
                return Err(AppError::InvalidPeriod(r.to_string()));
            }
            Ok(Period::Month { year: y, month: m })
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(r.to_string()))?;
            Ok(Period::Custom { from: d, to: d })
        }
        _ => Err(AppError::InvalidPeriod(r.to_string())),
    }
}

/// Last day number of a month; the only piece of date arithmetic that must
/// be computed rather than assumed (leap February).
pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
