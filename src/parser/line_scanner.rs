/// Line-level parsing of force plate text exports
///
/// A trial export is a header block followed by a tab-delimited table.
/// The table starts on the line after the column header containing
/// `abs time`; columns 1 and 3 hold the Fx and Fz force components.
/// Somewhere in the header block a `Date` line may carry the session date,
/// e.g. `Date: Sep 25, 2024 17:29:18`.
use regex::Regex;
use tracing::debug;

use crate::models::ScanSummary;
use crate::utils::resultant_force;

/// Substring marking a line that carries the session date
pub const DATE_MARKER: &str = "Date";

/// Substring marking the column header of the sample table
pub const DATA_HEADER_MARKER: &str = "abs time";

/// Pattern separating sample columns (one or more tabs)
pub const SAMPLE_SEPARATOR: &str = r"\t+";

const FX_COLUMN: usize = 1;
const FZ_COLUMN: usize = 3;
const MIN_SAMPLE_FIELDS: usize = 4;

/// Why a line inside the data region did not yield a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields(usize),
    NotNumeric,
}

/// Outcome of reading one data-region line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleParse {
    Sample { fx: f64, fz: f64 },
    Skip(SkipReason),
}

impl SampleParse {
    /// Rounded resultant force, if this line was a sample
    pub fn resultant(&self) -> Option<f64> {
        match self {
            SampleParse::Sample { fx, fz } => Some(resultant_force(*fx, *fz)),
            SampleParse::Skip(_) => None,
        }
    }
}

/// Read Fx and Fz from a tab-delimited sample line
pub fn parse_sample(line: &str, separator: &Regex) -> SampleParse {
    let fields: Vec<&str> = separator.split(line.trim()).collect();

    if fields.len() < MIN_SAMPLE_FIELDS {
        return SampleParse::Skip(SkipReason::TooFewFields(fields.len()));
    }

    match (
        fields[FX_COLUMN].trim().parse::<f64>(),
        fields[FZ_COLUMN].trim().parse::<f64>(),
    ) {
        (Ok(fx), Ok(fz)) => SampleParse::Sample { fx, fz },
        _ => SampleParse::Skip(SkipReason::NotNumeric),
    }
}

/// Extract the date tokens from a `Date` line
///
/// Takes whitespace tokens 1 through 3, so `Date: Sep 25, 2024 17:29:18`
/// yields `Sep 25, 2024`. The tokens are not validated here. Returns `None`
/// when the line has no `Date` marker or nothing follows the first token.
pub fn content_date(line: &str) -> Option<String> {
    if !line.contains(DATE_MARKER) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().skip(1).take(3).collect();
    if tokens.is_empty() {
        return None;
    }

    Some(tokens.join(" "))
}

pub fn is_data_header(line: &str) -> bool {
    line.contains(DATA_HEADER_MARKER)
}

/// Split text into lines on `\n`, `\r\n`, bare `\r` and the Unicode line/paragraph separators
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split(is_line_boundary))
}

// `\n` and `\r\n` are already handled by `str::lines`
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Running state of a single top-to-bottom scan over a trial's lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    pub content_date: Option<String>,
    pub in_data_region: bool,
    pub max_force: f64,
    pub lines: usize,
    pub samples: usize,
    pub skipped: usize,
}

impl ScanState {
    /// Fold one line into the state
    ///
    /// Order matters: the sample check runs before the header check, so the
    /// `abs time` line itself is never read as a sample.
    pub fn advance(self, line: &str, separator: &Regex) -> Self {
        let mut next = self;
        next.lines += 1;

        if next.content_date.is_none() {
            if let Some(date) = content_date(line) {
                debug!("Captured content date '{}' at line {}", date, next.lines);
                next.content_date = Some(date);
            }
        }

        if next.in_data_region {
            match parse_sample(line, separator) {
                SampleParse::Sample { fx, fz } => {
                    next.samples += 1;
                    let force = resultant_force(fx, fz);
                    if force > next.max_force {
                        next.max_force = force;
                    }
                }
                SampleParse::Skip(reason) => {
                    debug!("Skipping line {}: {:?}", next.lines, reason);
                    next.skipped += 1;
                }
            }
        }

        if is_data_header(line) {
            next.in_data_region = true;
        }

        next
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            lines: self.lines,
            samples: self.samples,
            skipped: self.skipped,
            data_region_found: self.in_data_region,
        }
    }
}

/// Scan every line of a trial's content
pub fn scan_lines<'a, I>(lines: I, separator: &Regex) -> ScanState
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(ScanState::default(), |state, line| state.advance(line, separator))
}
