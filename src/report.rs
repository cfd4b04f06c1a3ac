use tracing::{error, info, instrument};

use crate::models::{ParsedTrial, TrialFile, TrialResult};
use crate::parser::{normalize_date, DateInterpretation, TrialParser};
use crate::trial_error::TrialError;

/// A trial file that was excluded from the report
#[derive(Debug)]
pub struct TrialFailure {
    pub file_name: String,
    pub error: TrialError,
}

impl From<TrialError> for TrialFailure {
    fn from(error: TrialError) -> Self {
        Self {
            file_name: error.file_name().to_string(),
            error,
        }
    }
}

/// Per-file outcomes of a batch, before date normalization
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub parsed: Vec<ParsedTrial>,
    pub failures: Vec<TrialFailure>,
}

/// The compiled report: one row per successfully parsed file, in input order
#[derive(Debug, Default)]
pub struct TrialReport {
    pub results: Vec<TrialResult>,
    pub failures: Vec<TrialFailure>,
}

/// Error types for the batch-wide report step
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to normalize date '{raw}' of {file_name} ({interpretation}): {source}")]
    DateNormalization {
        file_name: String,
        raw: String,
        interpretation: DateInterpretation,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse every trial file in order
///
/// A failing file is recorded and skipped; it never stops the batch.
pub fn process_trial_files<I>(files: I) -> BatchOutcome
where
    I: IntoIterator<Item = TrialFile>,
{
    let parser = TrialParser::new();
    let mut outcome = BatchOutcome::default();

    for file in files {
        match parser.parse_trial(&file) {
            Ok(trial) => outcome.parsed.push(trial),
            Err(e) => {
                error!("{}", e);
                outcome.failures.push(TrialFailure::from(e));
            }
        }
    }

    info!(
        "Parsed {} trial files, {} failed",
        outcome.parsed.len(),
        outcome.failures.len()
    );

    outcome
}

/// Convert every raw trial date to a calendar date
///
/// Runs once over the whole batch. A row that does not parse means the
/// batch mixes date formats, so the first failure aborts the step.
pub fn normalize_dates(
    parsed: Vec<ParsedTrial>,
    interpretation: DateInterpretation,
) -> Result<Vec<TrialResult>, ReportError> {
    parsed
        .into_iter()
        .map(|trial| {
            let date = normalize_date(&trial.raw_date, interpretation).map_err(|source| {
                ReportError::DateNormalization {
                    file_name: trial.file_name.clone(),
                    raw: trial.raw_date.as_str().to_string(),
                    interpretation,
                    source,
                }
            })?;

            Ok(TrialResult {
                name: trial.name,
                date,
                trial: trial.trial,
                resultant_force: trial.resultant_force,
            })
        })
        .collect()
}

/// Parse a batch of trial files and compile the report rows
#[instrument(skip(files))]
pub fn compile_report<I>(
    files: I,
    interpretation: DateInterpretation,
) -> Result<TrialReport, ReportError>
where
    I: IntoIterator<Item = TrialFile>,
{
    let BatchOutcome { parsed, failures } = process_trial_files(files);
    let results = normalize_dates(parsed, interpretation)?;

    info!(
        "Compiled report with {} rows ({} files excluded)",
        results.len(),
        failures.len()
    );

    Ok(TrialReport { results, failures })
}
