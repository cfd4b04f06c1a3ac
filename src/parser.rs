// Trial parser module
//
// Reads force plate text exports (one file per trial) and extracts:
// - subject name and trial token from the file name
// - the session date, from a `Date` line or the file name
// - the peak resultant force over the tab-delimited sample table

pub mod file_name;
pub mod line_scanner;
pub mod trial_date;
pub mod trial_parser;

pub use file_name::{date_from_file_name, split_file_name, FileNameParts};
pub use line_scanner::{parse_sample, SampleParse, ScanState, SkipReason};
pub use trial_date::{normalize_date, DateInterpretation};
pub use trial_parser::TrialParser;
