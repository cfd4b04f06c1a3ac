use regex::Regex;
use tracing::{debug, instrument};

use crate::models::{ParsedTrial, RawTrialDate, TrialFile};
use crate::parser::file_name::{date_from_file_name, split_file_name};
use crate::parser::line_scanner::{
    scan_lines, split_lines, DATA_HEADER_MARKER, SAMPLE_SEPARATOR,
};
use crate::trial_error::TrialError;

/// Parser for force plate trial exports
///
/// Turns one `(file name, content)` pair into a [`ParsedTrial`]. Dates are
/// left raw; batch-wide normalization happens in [`crate::report`].
#[derive(Clone)]
pub struct TrialParser {
    separator: Regex,
}

impl Default for TrialParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TrialParser {
    pub fn new() -> Self {
        Self {
            separator: Regex::new(SAMPLE_SEPARATOR).unwrap(),
        }
    }

    pub fn separator(&self) -> &Regex {
        &self.separator
    }

    /// Parse a trial file whose content is still raw bytes
    pub fn parse_trial(&self, file: &TrialFile) -> Result<ParsedTrial, TrialError> {
        let text =
            std::str::from_utf8(&file.content).map_err(|source| TrialError::InvalidEncoding {
                file_name: file.file_name.clone(),
                source,
            })?;

        self.parse_text(&file.file_name, text)
    }

    /// Parse a trial's decoded text
    ///
    /// Steps:
    /// 1. Split name and trial out of the file name
    /// 2. Scan every line once for the `Date` line and the sample table
    /// 3. Fall back to the file name date when the content had none
    #[instrument(skip(self, text), fields(text_size = text.len()))]
    pub fn parse_text(&self, file_name: &str, text: &str) -> Result<ParsedTrial, TrialError> {
        let parts = split_file_name(file_name)?;

        let state = scan_lines(split_lines(text), &self.separator);
        let summary = state.summary();

        let raw_date = match state.content_date {
            Some(date) => RawTrialDate::Content(date),
            None => {
                debug!("No Date line in content, using file name date");
                RawTrialDate::FileName(date_from_file_name(file_name)?)
            }
        };

        if !summary.data_region_found {
            debug!(
                "No '{}' header found, resultant force is 0",
                DATA_HEADER_MARKER
            );
        }

        debug!(
            "Parsed {} samples ({} skipped) from {} lines, peak {:.1}",
            summary.samples, summary.skipped, summary.lines, state.max_force
        );

        Ok(ParsedTrial {
            file_name: file_name.to_string(),
            name: parts.name,
            trial: parts.trial,
            raw_date,
            resultant_force: state.max_force,
            summary,
        })
    }
}
