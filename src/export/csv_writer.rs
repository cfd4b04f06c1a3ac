use std::io::Write;

use crate::export::ExportError;
use crate::models::{TrialResult, REPORT_COLUMNS};

/// Write the report as CSV with a single header row
///
/// Headers come from the serde column names on [`TrialResult`]. An empty
/// report still gets its header row.
pub fn write_csv<W: Write>(results: &[TrialResult], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // serialize() only emits headers alongside the first record
    if results.is_empty() {
        csv_writer.write_record(REPORT_COLUMNS)?;
    }

    for result in results {
        csv_writer.serialize(result)?;
    }

    csv_writer.flush()?;
    Ok(())
}
