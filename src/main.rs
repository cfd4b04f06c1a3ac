use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use force_plate_report::config::Config;
use force_plate_report::export::{export_report, render_table, ExportFormat};
use force_plate_report::models::TrialFile;
use force_plate_report::parser::DateInterpretation;
use force_plate_report::report::{normalize_dates, process_trial_files, TrialFailure};
use force_plate_report::trial_error::TrialError;

#[derive(Parser)]
#[command(name = "force-plate-report")]
#[command(about = "Compile peak resultant forces from force plate text exports", long_about = None)]
struct Cli {
    /// Trial files, or directories of trial files, processed in the order given
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: REPORT_OUTPUT_PATH or Results.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: xlsx, csv or json (default: from the output extension)
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Date handling: 'source-aware' or the legacy 'day-month-year'
    #[arg(long)]
    date_interpretation: Option<DateInterpretation>,

    /// Worksheet name for xlsx output
    #[arg(long)]
    sheet_name: Option<String>,

    /// Print the result table to stdout
    #[arg(long)]
    print: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(format) = self.format {
            config.export_format = Some(format);
        }
        if let Some(interpretation) = self.date_interpretation {
            config.date_interpretation = interpretation;
        }
        if let Some(sheet_name) = &self.sheet_name {
            config.sheet_name = sheet_name.clone();
        }
        config
    }
}

/// Read trial files from the given paths
///
/// Directories expand to their files with the configured extension, sorted
/// by name. Unreadable files become failures instead of aborting the run.
fn collect_trial_files(inputs: &[PathBuf], extension: &str) -> (Vec<TrialFile>, Vec<TrialFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        let paths = if input.is_dir() {
            match list_directory(input, extension) {
                Ok(paths) => paths,
                Err(e) => {
                    failures.push(read_failure(input, e));
                    continue;
                }
            }
        } else {
            vec![input.clone()]
        };

        for path in paths {
            match fs::read(&path) {
                Ok(content) => files.push(TrialFile::new(display_name(&path), content)),
                Err(e) => failures.push(read_failure(&path, e)),
            }
        }
    }

    (files, failures)
}

fn list_directory(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if path.is_file() && matches_extension {
            paths.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }

    paths.sort_by_key(|path| display_name(path));
    Ok(paths)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn read_failure(path: &Path, source: std::io::Error) -> TrialFailure {
    let error = TrialError::Io {
        file_name: display_name(path),
        source,
    };
    error!("{}", error);
    TrialFailure::from(error)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the printed table stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.apply_to(Config::from_env()?);
    debug!("Running with config: {:?}", config);

    let (files, mut failures) = collect_trial_files(&cli.inputs, &config.input_extension);
    info!("Processing {} trial files", files.len());

    let start = Instant::now();
    let pb = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let outcome = process_trial_files(files.into_iter().inspect(|file| {
        pb.set_message(file.file_name.clone());
        pb.inc(1);
    }));
    pb.finish_with_message(format!("✓ Parsed {} files", outcome.parsed.len()));

    failures.extend(outcome.failures);

    let results = match normalize_dates(outcome.parsed, config.date_interpretation) {
        Ok(results) => results,
        Err(e) => {
            error!("{}", e);
            if config.date_interpretation == DateInterpretation::DayMonthYear {
                warn!("Content dates need --date-interpretation source-aware");
            }
            return Err(e.into());
        }
    };

    if !failures.is_empty() {
        eprintln!("\n{} file(s) excluded from the report:", failures.len());
        for failure in &failures {
            eprintln!("  ✗ {}: {}", failure.file_name, failure.error);
        }
    }

    if cli.print {
        println!("{}", render_table(&results));
    }

    let format = config.resolved_format();
    export_report(&results, &config.output_path, format, &config.sheet_name)?;

    println!(
        "✓ Wrote {} rows to {} ({:.2?})",
        results.len(),
        config.output_path.display(),
        start.elapsed()
    );

    Ok(())
}
