/// Trial date normalization
///
/// Content dates arrive as month-name-first tokens ("Sep 25, 2024") while
/// file name dates arrive as numeric day-first tokens ("25 09 2024").
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::models::RawTrialDate;

/// Format of dates derived from file names
pub const FILE_NAME_DATE_FORMAT: &str = "%d %m %Y";

/// Formats tried, in order, for dates captured from a `Date` line
///
/// `%B` accepts both full and abbreviated month names when parsing.
pub const CONTENT_DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%d %B, %Y"];

/// How raw date strings are turned into calendar dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateInterpretation {
    /// Parse each string according to where it came from
    #[default]
    SourceAware,
    /// Parse every string as numeric day-month-year.
    ///
    /// This reproduces the legacy report behaviour: content dates such as
    /// "Sep 25, 2024" do not match and fail normalization.
    DayMonthYear,
}

impl DateInterpretation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateInterpretation::SourceAware => "source-aware",
            DateInterpretation::DayMonthYear => "day-month-year",
        }
    }
}

impl fmt::Display for DateInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateInterpretation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source-aware" => Ok(DateInterpretation::SourceAware),
            "day-month-year" => Ok(DateInterpretation::DayMonthYear),
            other => Err(format!(
                "unknown date interpretation '{other}' (expected source-aware or day-month-year)"
            )),
        }
    }
}

/// Convert a raw trial date into a calendar date
pub fn normalize_date(
    raw: &RawTrialDate,
    interpretation: DateInterpretation,
) -> Result<NaiveDate, chrono::ParseError> {
    match (interpretation, raw) {
        (DateInterpretation::SourceAware, RawTrialDate::Content(value)) => {
            parse_content_date(value)
        }
        (_, raw) => NaiveDate::parse_from_str(raw.as_str().trim(), FILE_NAME_DATE_FORMAT),
    }
}

/// Parse a month-name date captured from file content
///
/// Returns the error from the first format when none match.
fn parse_content_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    let mut result = NaiveDate::parse_from_str(value, CONTENT_DATE_FORMATS[0]);

    for format in &CONTENT_DATE_FORMATS[1..] {
        if result.is_ok() {
            break;
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            result = Ok(date);
        }
    }

    result
}
