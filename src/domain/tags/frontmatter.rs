//! Frontmatter generation from a tag list

use super::parser::add_quotation_marks;
use std::collections::HashSet;

/// Tags recognized as a programming language when no config overrides them
pub const DEFAULT_LANGUAGE_TAGS: &[&str] = &[
    "c",
    "c++",
    "eagle: ulp",
    "html",
    "javascript",
    "nodejs",
    "php",
    "python",
    "Verilog",
    "VHDL",
];

/// Set of tags moved into the `programmiersprache` field.
///
/// Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    tags: HashSet<String>,
}

impl LanguageSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_TAGS.iter().copied())
    }
}

/// Frontmatter fields for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Every tag, comma-joined
    pub up: String,
    /// Tags that are not a language; omitted when empty
    pub tags: Option<String>,
    /// Last language tag found
    pub programmiersprache: Option<String>,
}

impl Frontmatter {
    /// Split a tag list into frontmatter fields.
    ///
    /// Language detection looks at the raw tag; `up` and `tags` use the quoted
    /// form so multi-word tags stay a single YAML scalar.
    pub fn classify(tags: &[String], languages: &LanguageSet) -> Self {
        let quoted = add_quotation_marks(tags);
        let up = quoted.join(", ");

        let mut programmiersprache = None;
        let mut other = String::new();
        for (raw, quoted) in tags.iter().zip(&quoted) {
            if languages.contains(raw) {
                programmiersprache = Some(raw.clone());
            } else {
                other.push_str(quoted);
                other.push_str(", ");
            }
        }

        let other = other.strip_suffix(", ").unwrap_or(&other);
        let tags = if other.is_empty() {
            None
        } else {
            Some(other.to_string())
        };

        Frontmatter {
            up,
            tags,
            programmiersprache,
        }
    }

    /// Render as a `---` delimited block followed by a blank line
    pub fn render(&self) -> String {
        let mut output = String::from("---\n");
        output.push_str(&format!("up: {}\n", self.up));
        if let Some(tags) = &self.tags {
            output.push_str(&format!("tags: {}\n", tags));
        }
        if let Some(language) = &self.programmiersprache {
            output.push_str(&format!("programmiersprache: {}\n", language));
        }
        output.push_str("---\n\n");
        output
    }
}

/// Classify tags and render the frontmatter block in one step
pub fn classify_and_render(tags: &[String], languages: &LanguageSet) -> String {
    Frontmatter::classify(tags, languages).render()
}
