//! File names for exported tiddlers

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap())
}

/// Turn a tiddler title into a file stem.
///
/// The title is NFKD-normalized and reduced to ASCII, so accented letters keep
/// their base letter. Anything that is not a word character, whitespace or a
/// hyphen is dropped.
pub fn sanitize_title(title: &str) -> String {
    let ascii: String = title.nfkd().filter(char::is_ascii).collect();
    disallowed_regex().replace_all(&ascii, "").trim().to_string()
}

/// File name for a title with the given extension
pub fn output_file_name(title: &str, ext: &str) -> String {
    format!("{}.{}", sanitize_title(title), ext)
}
