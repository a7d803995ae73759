//! Export use case
//!
//! Converts every selected row of a CSV export into its own Markdown file.

use crate::domain::{output_file_name, LanguageSet, TagFilter};
use crate::error::Result;
use crate::infrastructure::{CsvSource, OutputDirectory, RowRecord};
use anyhow::Context;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Options for an export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving the converted files
    pub outdir: PathBuf,

    /// File extension without the dot
    pub ext: String,

    /// Only export rows whose tags contain one of these substrings
    pub tag_filters: Vec<String>,

    /// Prepend the frontmatter block (off = body only)
    pub frontmatter: bool,

    /// Tags classified as `programmiersprache`
    pub languages: LanguageSet,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            outdir: PathBuf::from("output"),
            ext: "md".to_string(),
            tag_filters: Vec::new(),
            frontmatter: true,
            languages: LanguageSet::default(),
        }
    }
}

/// Counts reported after an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, including empty files for failed rows
    pub exported: usize,
    /// Rows whose conversion failed and were written empty
    pub failed: usize,
    /// Rows whose file could not be written
    pub unwritten: usize,
    /// Rows excluded by the tag filter
    pub skipped: usize,
    pub outdir: PathBuf,
}

/// Service for exporting tiddlers
pub struct ExportService {
    source: CsvSource,
}

impl ExportService {
    /// Create a new export service reading from `source`
    pub fn new(source: CsvSource) -> Self {
        ExportService { source }
    }

    /// Execute the export.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is missing or lacks a required column
    /// - The CSV itself cannot be read
    /// - The output directory cannot be created
    ///
    /// Problems with a single row never abort the run.
    pub fn execute(&self, options: &ExportOptions) -> Result<ExportSummary> {
        let rows = self.source.read_rows()?;
        info!(
            rows = rows.len(),
            input = %self.source.path().display(),
            "Read export"
        );

        let output = OutputDirectory::new(options.outdir.clone());
        output.create()?;

        let filter = TagFilter::new(options.tag_filters.clone());
        let mut summary = ExportSummary {
            exported: 0,
            failed: 0,
            unwritten: 0,
            skipped: 0,
            outdir: options.outdir.clone(),
        };

        for row in rows {
            if !filter.matches(row.raw_tags.as_deref()) {
                debug!(row = row.index, title = %row.title, "Skipped by tag filter");
                summary.skipped += 1;
                continue;
            }

            let file_name = output_file_name(&row.title, &options.ext);
            let contents = match render_row(&row, options) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!("Writing empty file {}: {:#}", file_name, e);
                    summary.failed += 1;
                    String::new()
                }
            };

            match output.write(&file_name, &contents) {
                Ok(path) => {
                    debug!(path = %path.display(), "Wrote file");
                    summary.exported += 1;
                }
                Err(e) => {
                    warn!(row = row.index, title = %row.title, "Could not write {}: {}", file_name, e);
                    summary.unwritten += 1;
                }
            }
        }

        Ok(summary)
    }
}

fn render_row(row: &RowRecord, options: &ExportOptions) -> anyhow::Result<String> {
    let tiddler = row
        .tiddler
        .clone()
        .with_context(|| format!("row {} ({:?}) could not be converted", row.index, row.title))?;

    Ok(tiddler.to_markdown(&options.languages, options.frontmatter))
}
