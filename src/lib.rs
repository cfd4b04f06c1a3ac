pub mod config;
pub mod export;
pub mod models;
pub mod parser;
pub mod report;
pub mod trial_error;
pub mod utils;
