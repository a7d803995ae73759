//! Tag system

pub mod frontmatter;
pub mod parser;

// Re-export main types
pub use frontmatter::{classify_and_render, Frontmatter, LanguageSet, DEFAULT_LANGUAGE_TAGS};
pub use parser::{add_quotation_marks, parse_tags};
