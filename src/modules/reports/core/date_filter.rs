// Date predicates and query-parameter validation shared by every report.
//
// Purpose
// - Turn raw `YYYY-MM-DD` parameters into validated dates before any snapshot is read.
// - Describe which appointments a snapshot must contain.

use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParamError {
    #[error("the {0} parameter is required")]
    MissingParameter(&'static str),

    #[error("invalid date format for {param}: {value:?}, use YYYY-MM-DD")]
    InvalidDateFormat { param: &'static str, value: String },

    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Dates an appointment snapshot is fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    On(NaiveDate),
    /// Inclusive on both ends.
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DateFilter::On(day) => date == day,
            DateFilter::Between { start, end } => start <= date && date <= end,
        }
    }
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_iso_date(param: &'static str, value: &str) -> Result<NaiveDate, DateParamError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| {
        DateParamError::InvalidDateFormat {
            param,
            value: value.to_string(),
        }
    })
}

/// Single-date reports fall back to `today` when the parameter is absent or blank.
pub fn date_or_today(
    param: &'static str,
    value: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, DateParamError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => parse_iso_date(param, v),
        None => Ok(today),
    }
}

pub fn required_date(param: &'static str, value: Option<&str>) -> Result<NaiveDate, DateParamError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => parse_iso_date(param, v),
        None => Err(DateParamError::MissingParameter(param)),
    }
}

/// Both ends required and parseable. Ordering is not checked.
pub fn required_range(
    (start_param, start): (&'static str, Option<&str>),
    (end_param, end): (&'static str, Option<&str>),
) -> Result<(NaiveDate, NaiveDate), DateParamError> {
    let start = required_date(start_param, start)?;
    let end = required_date(end_param, end)?;
    Ok((start, end))
}

/// Like [`required_range`] but also rejects an end date before the start date.
pub fn required_ordered_range(
    start: (&'static str, Option<&str>),
    end: (&'static str, Option<&str>),
) -> Result<(NaiveDate, NaiveDate), DateParamError> {
    let (start, end) = required_range(start, end)?;
    if end < start {
        return Err(DateParamError::InvalidRange { start, end });
    }
    Ok((start, end))
}
