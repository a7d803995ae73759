//! Error types for tiddly2md

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tiddly2md
#[derive(Debug, Error)]
pub enum Tiddly2MdError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Missing column in export: {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Tiddly2MdError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Tiddly2MdError::InputNotFound(_) => 2,
            Tiddly2MdError::MissingColumn(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            Tiddly2MdError::InputNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Export your tiddlers from TiddlyWiki as CSV first\n\
                    • Check the path passed as INPUT_FILE",
                    path.display()
                )
            }
            Tiddly2MdError::MissingColumn(column) => {
                format!(
                    "The export has no '{}' column.\n\n\
                    The CSV header row must contain: title, tags, text\n\
                    Other columns are ignored.",
                    column
                )
            }
            Tiddly2MdError::Config(msg) => {
                if msg.contains("language_tags") {
                    format!(
                        "{}\n\n\
                        Example config:\n\
                        language_tags = [\"c\", \"python\", \"VHDL\"]",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using Tiddly2MdError
pub type Result<T> = std::result::Result<T, Tiddly2MdError>;
