/// Trial file name parsing
///
/// File names follow `{name}_{trial}_..._{dd.mm.yy}.txt`. The first two
/// underscore-delimited segments are always the subject name and trial;
/// the last segment carries the date when the file content has none.
use crate::trial_error::TrialError;
use crate::utils::expand_two_digit_year;

/// Name and trial tokens taken from a trial file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameParts {
    pub name: String,
    pub trial: String,
}

/// Split a file name into its subject name and trial tokens
///
/// The trial token is kept verbatim; it is not required to be numeric.
pub fn split_file_name(file_name: &str) -> Result<FileNameParts, TrialError> {
    let mut segments = file_name.split('_');

    match (segments.next(), segments.next()) {
        (Some(name), Some(trial)) => Ok(FileNameParts {
            name: name.to_string(),
            trial: trial.to_string(),
        }),
        _ => Err(TrialError::MalformedFilename {
            file_name: file_name.to_string(),
        }),
    }
}

/// Derive a `"{day} {month} {year}"` date string from the last segment of
/// the file name
///
/// Examples:
/// - "Alice_3_25.09.24.txt" -> "25 09 2024"
/// - "Bob_1_left_5.1.2023.txt" -> "5 1 2023"
pub fn date_from_file_name(file_name: &str) -> Result<String, TrialError> {
    let unparseable = |reason: String| TrialError::UnparseableDate {
        file_name: file_name.to_string(),
        reason,
    };

    let last_segment = file_name.rsplit('_').next().unwrap_or(file_name);
    // Only a trailing extension is dropped; ".txt" elsewhere stays in the date
    let date_part = last_segment.strip_suffix(".txt").unwrap_or(last_segment);

    let parts: Vec<&str> = date_part.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(unparseable(format!(
            "expected day.month.year, found {} part(s) in '{date_part}'",
            parts.len()
        )));
    };

    for (label, value) in [("day", day), ("month", month), ("year", year)] {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(unparseable(format!("invalid {label} '{value}'")));
        }
    }

    let year = expand_two_digit_year(year);
    Ok(format!("{day} {month} {year}"))
}
