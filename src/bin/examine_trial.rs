use force_plate_report::parser::file_name::{date_from_file_name, split_file_name};
use force_plate_report::parser::line_scanner::{
    content_date, is_data_header, parse_sample, split_lines, SampleParse, ScanState,
};
use force_plate_report::parser::TrialParser;
use force_plate_report::utils::resultant_force;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let Some(file_path) = args.get(1) else {
        eprintln!("Usage: examine-trial <trial-file.txt>");
        std::process::exit(2);
    };

    let path = Path::new(file_path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.clone());

    println!("Opening trial file: {file_path}");
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    match split_file_name(&file_name) {
        Ok(parts) => println!("Name: {}  Trial: {}", parts.name, parts.trial),
        Err(e) => println!("File name: {e}"),
    }
    match date_from_file_name(&file_name) {
        Ok(date) => println!("File name date: {date}"),
        Err(e) => println!("File name date: none ({e})"),
    }

    println!("\n{}", "=".repeat(100));

    let parser = TrialParser::new();
    let separator = parser.separator();
    let mut state = ScanState::default();

    for (idx, line) in split_lines(&text).enumerate() {
        let mut notes = Vec::new();

        if state.content_date.is_none() {
            if let Some(date) = content_date(line) {
                notes.push(format!("DATE '{date}'"));
            }
        }
        if state.in_data_region {
            match parse_sample(line, separator) {
                SampleParse::Sample { fx, fz } => {
                    let force = resultant_force(fx, fz);
                    notes.push(format!("SAMPLE fx={fx} fz={fz} -> {force:.1}"));
                }
                SampleParse::Skip(reason) => notes.push(format!("SKIP {reason:?}")),
            }
        }
        if is_data_header(line) && !state.in_data_region {
            notes.push("HEADER".to_string());
        }

        if !notes.is_empty() {
            println!("Line {:5}: {:<50} {}", idx + 1, notes.join(" | "), preview(line));
        }

        state = state.advance(line, separator);
    }

    println!("{}", "=".repeat(100));
    println!("Lines:       {}", state.lines);
    println!("Samples:     {}", state.samples);
    println!("Skipped:     {}", state.skipped);
    println!(
        "Content date: {}",
        state.content_date.as_deref().unwrap_or("(none)")
    );
    println!("Peak resultant force: {:.1}", state.max_force);

    Ok(())
}

fn preview(line: &str) -> String {
    let shown: String = line.chars().take(40).collect();
    shown.replace('\t', " ⇥ ")
}
