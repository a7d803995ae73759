//! Infrastructure layer - External I/O

pub mod config;
pub mod csv_source;
pub mod output;

pub use config::Config;
pub use csv_source::{CsvSource, RowError, RowRecord};
pub use output::OutputDirectory;
