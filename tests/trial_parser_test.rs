// Tests for the trial parser and batch processing
// Covers file name handling, the data region scan and per-file failures

mod common;

use chrono::NaiveDate;
use common::{sample_file, trial_file};
use force_plate_report::models::RawTrialDate;
use force_plate_report::parser::{DateInterpretation, TrialParser};
use force_plate_report::report::{compile_report, process_trial_files};
use force_plate_report::trial_error::TrialError;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_name_and_trial_come_from_file_name_segments() {
    let parser = TrialParser::new();
    let cases = [
        ("Alice_3_25.09.24.txt", "Alice", "3"),
        ("Bob_12_left_01.02.2023.txt", "Bob", "12"),
        ("Dana Smith_T4a_01.02.23.txt", "Dana Smith", "T4a"),
    ];

    for (file_name, name, trial) in cases {
        let parsed = parser.parse_trial(&trial_file(file_name, "")).unwrap();
        assert_eq!(parsed.name, name, "name for {file_name}");
        assert_eq!(parsed.trial, trial, "trial for {file_name}");
    }
}

#[test]
fn test_no_abs_time_header_means_zero_force() {
    let parser = TrialParser::new();
    let content = "Iso Leg Press\n0.0\t30.0\t0.0\t40.0\n0.1\t300.0\t0.0\t400.0\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();

    assert_eq!(parsed.resultant_force, 0.0);
    assert!(!parsed.summary.data_region_found);
}

#[test]
fn test_short_lines_contribute_nothing() {
    let parser = TrialParser::new();
    let content = "abs time\n0.0\t300.0\t400.0\n0.1\t3.0\t0.0\t4.0\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();

    assert_eq!(parsed.resultant_force, 5.0);
    assert_eq!(parsed.summary.skipped, 1);
}

#[test]
fn test_single_sample_resultant() {
    let parser = TrialParser::new();
    let content = "abs time\tFx\tFy\tFz\n0.0\t30.0\t0.0\t40.0\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();

    assert_eq!(parsed.resultant_force, 50.0);
}

#[test]
fn test_negative_components_give_positive_force() {
    let parser = TrialParser::new();
    let content = "abs time\n0.0\t-30.0\t0.0\t-40.0\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();

    assert_eq!(parsed.resultant_force, 50.0);
}

#[test]
fn test_peak_force_rounds_like_one_decimal_round() {
    // 0.35 is stored just below the tie and 12.25 is an exact tie
    let parser = TrialParser::new();
    let content = "abs time\n0\t0.0\t0\t0.35\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();
    assert_eq!(parsed.resultant_force, 0.3);

    let content = "abs time\n0\t12.25\t0\t0.0\n0\t0.0\t0\t1.25\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_25.09.24.txt", content))
        .unwrap();
    assert_eq!(parsed.resultant_force, 12.2);
}

#[test]
fn test_file_name_date_fallback() {
    let report = compile_report(
        vec![trial_file("Alice_3_25.09.24.txt", "abs time\n")],
        DateInterpretation::SourceAware,
    )
    .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].formatted_date(), "25/09/2024");
}

#[test]
fn test_content_date_wins_over_file_name() {
    let parser = TrialParser::new();
    let content = "Date Sep 25, 2024 17:29:18\nabs time\n";
    let parsed = parser
        .parse_trial(&trial_file("Alice_3_01.01.23.txt", content))
        .unwrap();

    assert_eq!(
        parsed.raw_date,
        RawTrialDate::Content("Sep 25, 2024".to_string())
    );
}

#[test]
fn test_content_date_normalized_source_aware() {
    let report = compile_report(
        vec![trial_file(
            "Alice_3_01.01.23.txt",
            "Date Sep 25, 2024 17:29:18\n",
        )],
        DateInterpretation::SourceAware,
    )
    .unwrap();

    assert_eq!(report.results[0].date, ymd(2024, 9, 25));
}

#[test]
fn test_content_date_fails_under_legacy_day_month_year() {
    // The legacy parser reads every date as "%d %m %Y", so a month-name
    // content date fails the whole normalization step
    let result = compile_report(
        vec![
            trial_file("Alice_3_25.09.24.txt", "abs time\n"),
            trial_file("Bob_1_01.01.23.txt", "Date: Sep 25, 2024 17:29:18\n"),
        ],
        DateInterpretation::DayMonthYear,
    );

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Bob_1_01.01.23.txt"));
    assert!(message.contains("Sep 25, 2024"));
}

#[test]
fn test_file_name_without_underscore_is_excluded() {
    let outcome = process_trial_files(vec![
        trial_file("nounderscore.txt", "abs time\n0\t3\t0\t4\n"),
        trial_file("Alice_3_25.09.24.txt", "abs time\n0\t3\t0\t4\n"),
    ]);

    assert_eq!(outcome.parsed.len(), 1);
    assert_eq!(outcome.parsed[0].name, "Alice");
    assert_eq!(outcome.failures.len(), 1);
    assert!(matches!(
        outcome.failures[0].error,
        TrialError::MalformedFilename { .. }
    ));
}

#[test]
fn test_unparseable_file_name_date_names_the_file() {
    let outcome = process_trial_files(vec![trial_file("Alice_3_final.txt", "abs time\n")]);

    assert!(outcome.parsed.is_empty());
    let message = outcome.failures[0].error.to_string();
    assert!(message.contains("Alice_3_final.txt"));
}

#[test]
fn test_batch_of_three_with_one_malformed() {
    let report = compile_report(
        vec![
            trial_file("Bob_2_01.02.24.txt", "abs time\n0\t6\t0\t8\n"),
            trial_file("broken.txt", "abs time\n0\t6\t0\t8\n"),
            trial_file("Alice_1_03.04.24.txt", "abs time\n0\t30\t0\t40\n"),
        ],
        DateInterpretation::SourceAware,
    )
    .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].name, "Bob");
    assert_eq!(report.results[0].resultant_force, 10.0);
    assert_eq!(report.results[1].name, "Alice");
    assert_eq!(report.results[1].resultant_force, 50.0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file_name, "broken.txt");
}

#[test]
fn test_sample_export_with_content_date() {
    let parser = TrialParser::new();
    let parsed = parser
        .parse_trial(&sample_file("Bob_1_export.txt"))
        .unwrap();

    assert_eq!(parsed.name, "Bob");
    assert_eq!(parsed.trial, "1");
    assert_eq!(
        parsed.raw_date,
        RawTrialDate::Content("Sep 25, 2024".to_string())
    );
    assert_eq!(parsed.resultant_force, 1204.3);
    assert_eq!(parsed.summary.samples, 6);
    assert_eq!(parsed.summary.skipped, 1);
}

#[test]
fn test_sample_exports_compile_into_report() {
    let files = vec![
        sample_file("Alice_3_25.09.24.txt"),
        sample_file("Bob_1_export.txt"),
        sample_file("Carol_2_left_01.10.2024.txt"),
    ];

    let report = compile_report(files, DateInterpretation::SourceAware).unwrap();

    assert!(report.failures.is_empty());
    let rows: Vec<(&str, String, &str, f64)> = report
        .results
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                r.formatted_date(),
                r.trial.as_str(),
                r.resultant_force,
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Alice", "25/09/2024".to_string(), "3", 50.0),
            ("Bob", "25/09/2024".to_string(), "1", 1204.3),
            ("Carol", "01/10/2024".to_string(), "2", 0.0),
        ]
    );
}
