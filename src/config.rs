use std::env;
use std::path::PathBuf;

use crate::export::{ExportFormat, DEFAULT_OUTPUT_FILE, DEFAULT_SHEET_NAME};
use crate::parser::DateInterpretation;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {msg}")]
    InvalidValue { var: &'static str, msg: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub export_format: Option<ExportFormat>,
    pub sheet_name: String,
    pub date_interpretation: DateInterpretation,
    pub input_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            export_format: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            date_interpretation: DateInterpretation::default(),
            input_extension: "txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            output_path: env::var("REPORT_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            export_format: env::var("REPORT_FORMAT")
                .ok()
                .map(|value| parse_var("REPORT_FORMAT", &value))
                .transpose()?,
            sheet_name: env::var("REPORT_SHEET_NAME").unwrap_or(defaults.sheet_name),
            date_interpretation: match env::var("REPORT_DATE_INTERPRETATION") {
                Ok(value) => parse_var("REPORT_DATE_INTERPRETATION", &value)?,
                Err(_) => defaults.date_interpretation,
            },
            input_extension: env::var("REPORT_INPUT_EXTENSION")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.input_extension),
        })
    }

    /// Export format, falling back to the output path's extension and then xlsx
    pub fn resolved_format(&self) -> ExportFormat {
        self.export_format
            .or_else(|| ExportFormat::from_path(&self.output_path))
            .unwrap_or(ExportFormat::Xlsx)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|msg| ConfigError::InvalidValue { var, msg })
}
