use force_plate_report::models::TrialFile;
use std::path::Path;

/// Directory holding sample force plate exports
pub const SAMPLE_DIR: &str = "sample-data-files";

/// Build an in-memory trial file
#[allow(dead_code)]
pub fn trial_file(file_name: &str, content: &str) -> TrialFile {
    TrialFile::new(file_name, content)
}

/// Load one of the sample exports as a trial file
pub fn sample_file(file_name: &str) -> TrialFile {
    let path = Path::new(SAMPLE_DIR).join(file_name);
    let content = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("Failed to read sample file {}: {e}", path.display()));
    TrialFile::new(file_name, content)
}
