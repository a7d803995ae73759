//! Tag list parsing for TiddlyWiki tag cells
//!
//! TiddlyWiki stores a tiddler's tags as one string: multi-word tags are wrapped
//! in `[[...]]`, single-word tags are separated by spaces.

use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching bracketed tags: [[multi word tag]]
fn bracket_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[(.*?)\]\]").unwrap())
}

/// Parse a raw tag cell into an ordered tag list.
///
/// Bracketed tags come first in the order they were found, followed by the
/// space-separated bare tags. A missing cell yields a single empty tag.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return vec![String::new()];
    };

    let mut tags: Vec<String> = bracket_regex()
        .captures_iter(raw)
        .map(|cap| cap[1].to_string())
        .collect();

    let remainder = bracket_regex().replace_all(raw, "");
    tags.extend(
        remainder
            .trim()
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    );

    tags
}

/// Wrap tags containing a space in double quotes
pub fn add_quotation_marks(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| {
            if tag.contains(' ') {
                format!("\"{}\"", tag)
            } else {
                tag.clone()
            }
        })
        .collect()
}
