// Report export
//
// Serializes the result table with the column headers
// `Name, Date, Trial, Resultant_Force` and a single header row:
// - xlsx: the downloadable workbook (file or in-memory buffer)
// - csv / json: plain-text alternatives for scripting

pub mod csv_writer;
pub mod xlsx_writer;

pub use csv_writer::write_csv;
pub use xlsx_writer::{write_xlsx, xlsx_to_buffer};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

use crate::models::{TrialResult, REPORT_COLUMNS};

/// Default workbook file name
pub const DEFAULT_OUTPUT_FILE: &str = "Results.xlsx";

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from an output path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "unknown export format '{other}' (expected xlsx, csv or json)"
            )),
        }
    }
}

/// Write the report rows as a JSON array of objects keyed by column name
pub fn write_json<W: Write>(results: &[TrialResult], writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

/// Write the report rows to `path` in the given format
#[instrument(skip(results), fields(rows = results.len()))]
pub fn export_report(
    results: &[TrialResult],
    path: &Path,
    format: ExportFormat,
    sheet_name: &str,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Xlsx => write_xlsx(results, path, sheet_name)?,
        ExportFormat::Csv => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_csv(results, &mut writer)?;
            writer.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json(results, &mut writer)?;
            writer.flush()?;
        }
    }

    info!("Wrote {} rows to {}", results.len(), path.display());
    Ok(())
}

/// Render the report as a fixed-width text table for the terminal
pub fn render_table(results: &[TrialResult]) -> String {
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.formatted_date(),
                r.trial.clone(),
                format!("{:.1}", r.resultant_force),
            ]
        })
        .collect();

    let mut widths = REPORT_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = REPORT_COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                // Right-align the force column
                if col == 3 {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}
