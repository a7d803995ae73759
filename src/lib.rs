//! tiddly2md - TiddlyWiki CSV export to Markdown
//!
//! Converts tiddlers exported from TiddlyWiki as CSV into individual Markdown
//! files with frontmatter built from their tags.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::Tiddly2MdError;
