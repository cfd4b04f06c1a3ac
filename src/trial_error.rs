/// Errors that exclude a single trial file from the report.
///
/// None of these abort a batch; they are collected as failures and the
/// remaining files are still processed.
#[derive(Debug, thiserror::Error)]
pub enum TrialError {
    #[error("Malformed filename: {file_name} (expected at least name and trial segments separated by '_')")]
    MalformedFilename { file_name: String },

    #[error("Error processing date from filename: {file_name}, {reason}")]
    UnparseableDate { file_name: String, reason: String },

    #[error("File is not valid UTF-8 text: {file_name}: {source}")]
    InvalidEncoding {
        file_name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to read {file_name}: {source}")]
    Io {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl TrialError {
    pub fn file_name(&self) -> &str {
        match self {
            TrialError::MalformedFilename { file_name }
            | TrialError::UnparseableDate { file_name, .. }
            | TrialError::InvalidEncoding { file_name, .. }
            | TrialError::Io { file_name, .. } => file_name,
        }
    }
}
