/// Workbook export of the trial report
///
/// Layout of the single worksheet:
/// ```text
/// Row 1: Name | Date | Trial | Resultant_Force   (bold)
/// Row 2+: one row per trial, in report order
/// ```
/// Date and Trial are written as text so that values like "03" or "3b"
/// survive unchanged; Resultant_Force is numeric with one decimal shown.
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::debug;

use crate::export::ExportError;
use crate::models::{TrialResult, REPORT_COLUMNS};

const FORCE_NUMBER_FORMAT: &str = "0.0";

fn build_workbook(results: &[TrialResult], sheet_name: &str) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let force_format = Format::new().set_num_format(FORCE_NUMBER_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (idx, result) in results.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, result.name.as_str())?;
        worksheet.write_string(row, 1, result.formatted_date())?;
        worksheet.write_string(row, 2, result.trial.as_str())?;
        worksheet.write_number_with_format(row, 3, result.resultant_force, &force_format)?;
    }

    worksheet.autofit();
    debug!("Built worksheet '{}' with {} rows", sheet_name, results.len());

    Ok(workbook)
}

/// Write the report to an `.xlsx` file
pub fn write_xlsx(
    results: &[TrialResult],
    path: &Path,
    sheet_name: &str,
) -> Result<(), ExportError> {
    let mut workbook = build_workbook(results, sheet_name)?;
    workbook.save(path)?;
    Ok(())
}

/// Serialize the report workbook into memory, ready to hand to a download
pub fn xlsx_to_buffer(results: &[TrialResult], sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(results, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}
