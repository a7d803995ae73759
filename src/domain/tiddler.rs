//! Tiddler model and tag filtering

use super::markup::transform;
use super::tags::{classify_and_render, parse_tags, LanguageSet};

/// One row of a TiddlyWiki CSV export.
///
/// Empty cells are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiddler {
    pub title: String,
    pub tags: Option<String>,
    pub text: Option<String>,
}

impl Tiddler {
    pub fn new(title: String, tags: Option<String>, text: Option<String>) -> Self {
        Tiddler { title, tags, text }
    }

    /// Render the output file contents: frontmatter followed by the converted body
    pub fn to_markdown(&self, languages: &LanguageSet, with_frontmatter: bool) -> String {
        let body = transform(self.text.as_deref());
        if !with_frontmatter {
            return body;
        }

        let tags = parse_tags(self.tags.as_deref());
        let mut output = classify_and_render(&tags, languages);
        output.push_str(&body);
        output
    }
}

/// Keeps tiddlers whose tag cell contains any of the given substrings
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    needles: Vec<String>,
}

impl TagFilter {
    pub fn new(needles: Vec<String>) -> Self {
        TagFilter { needles }
    }

    /// Check a raw tag cell. An empty filter matches everything.
    pub fn matches(&self, tags: Option<&str>) -> bool {
        if self.needles.is_empty() {
            return true;
        }

        match tags {
            Some(tags) => self.needles.iter().any(|needle| tags.contains(needle)),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}
