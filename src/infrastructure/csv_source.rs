//! CSV export reader

use crate::domain::Tiddler;
use crate::error::{Result, Tiddly2MdError};
use csv::{ByteRecord, ReaderBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Reason a single row could not be turned into a tiddler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("'{0}' cell is not valid UTF-8")]
    InvalidUtf8(&'static str),
}

/// One data row of the export
#[derive(Debug)]
pub struct RowRecord {
    /// 1-based data row number (header excluded)
    pub index: usize,
    /// Title used for the output file, even when the row is broken
    pub title: String,
    /// Tag cell decoded lossily, for filtering broken rows too
    pub raw_tags: Option<String>,
    pub tiddler: std::result::Result<Tiddler, RowError>,
}

/// Column positions of the fields we read
#[derive(Debug, Clone, Copy)]
struct Columns {
    title: usize,
    tags: usize,
    text: usize,
}

impl Columns {
    fn locate(headers: &ByteRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim() == name)
                .ok_or_else(|| Tiddly2MdError::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            title: find("title")?,
            tags: find("tags")?,
            text: find("text")?,
        })
    }
}

/// TiddlyWiki CSV export on disk
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: PathBuf) -> Self {
        CsvSource { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every data row in file order.
    ///
    /// Rows with undecodable cells are returned with an error instead of
    /// failing the whole read.
    pub fn read_rows(&self) -> Result<Vec<RowRecord>> {
        if !self.path.is_file() {
            return Err(Tiddly2MdError::InputNotFound(self.path.clone()));
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let columns = Columns::locate(reader.byte_headers()?)?;
        debug!(?columns, path = %self.path.display(), "Located export columns");

        let mut rows = Vec::new();
        for (i, record) in reader.byte_records().enumerate() {
            let record = record?;
            rows.push(decode_row(i + 1, &record, columns));
        }

        Ok(rows)
    }
}

fn decode_row(index: usize, record: &ByteRecord, columns: Columns) -> RowRecord {
    let lossy = |column: usize| {
        record
            .get(column)
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    };
    let title = lossy(columns.title).unwrap_or_default();
    let raw_tags = lossy(columns.tags);

    let tiddler = decode_cell(record, columns.tags, "tags").and_then(|tags| {
        let text = decode_cell(record, columns.text, "text")?;
        Ok(Tiddler::new(title.clone(), tags, text))
    });

    RowRecord {
        index,
        title,
        raw_tags,
        tiddler,
    }
}

/// Empty or absent cells are missing values
fn decode_cell(
    record: &ByteRecord,
    column: usize,
    name: &'static str,
) -> std::result::Result<Option<String>, RowError> {
    match record.get(column) {
        None => Ok(None),
        Some(bytes) if bytes.is_empty() => Ok(None),
        Some(bytes) => std::str::from_utf8(bytes)
            .map(|s| Some(s.to_string()))
            .map_err(|_| RowError::InvalidUtf8(name)),
    }
}
