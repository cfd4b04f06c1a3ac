use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Output date format for the report (dd/mm/yyyy)
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Column headers of the result table, in order
pub const REPORT_COLUMNS: [&str; 4] = ["Name", "Date", "Trial", "Resultant_Force"];

/// One uploaded force plate export: its file name and raw bytes
#[derive(Debug, Clone)]
pub struct TrialFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl TrialFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Where a trial's date string came from
///
/// The two sources use different token orders: content lines read
/// month-name first ("Sep 25, 2024"), file names are numeric day first
/// ("25 09 2024").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTrialDate {
    Content(String),
    FileName(String),
}

impl RawTrialDate {
    pub fn as_str(&self) -> &str {
        match self {
            RawTrialDate::Content(s) | RawTrialDate::FileName(s) => s,
        }
    }
}

/// Line scan counters, kept for logging and diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub samples: usize,
    pub skipped: usize,
    pub data_region_found: bool,
}

/// A trial file that parsed successfully but whose date has not been
/// normalized yet
#[derive(Debug, Clone)]
pub struct ParsedTrial {
    pub file_name: String,
    pub name: String,
    pub trial: String,
    pub raw_date: RawTrialDate,
    pub resultant_force: f64,
    pub summary: ScanSummary,
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date", serialize_with = "serialize_report_date")]
    pub date: NaiveDate,
    #[serde(rename = "Trial")]
    pub trial: String,
    #[serde(rename = "Resultant_Force")]
    pub resultant_force: f64,
}

impl TrialResult {
    pub fn formatted_date(&self) -> String {
        self.date.format(REPORT_DATE_FORMAT).to_string()
    }
}

fn serialize_report_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(REPORT_DATE_FORMAT))
}
