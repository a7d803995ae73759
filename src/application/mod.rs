//! Application layer - Use cases and orchestration

pub mod export;

pub use export::{ExportOptions, ExportService, ExportSummary};
