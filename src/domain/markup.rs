//! TiddlyWiki markup to Markdown conversion
//!
//! Conversion is line based: every line runs through the same ordered set of
//! rewrite passes, and footnotes are collected across the whole body and
//! emitted as definitions after the last line.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Regex for wiki headers: leading `!` run not followed by `[`
fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(!+)\s?([^\[])").unwrap())
}

/// Regex for wiki footnotes: ```note```
fn footnote_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"```(.*?)```").unwrap())
}

/// Inline rewrites applied in order after lists and headers.
///
/// Single-word links are unwrapped before piped links are converted; the
/// single-word pattern cannot match across a `|`.
fn inline_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // Underline has no Markdown equivalent
            (r"__(.*?)__", "${1}"),
            (r"''(.*?)''", "**${1}**"),
            (r"//(.*?)//", "_${1}_"),
            (r"\[\[(\w+?)\]\]", "${1}"),
            (r"\[\[([^\]|]*)\|([^\]]*)\]\]", "[${1}](${2})"),
            (r"\{\{\{(.*?)\}\}\}", "`${1}`"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect()
    })
}

/// Convert a wiki list line into a Markdown list item.
///
/// Every ordered level uses the literal marker `0.`; Markdown renderers
/// number the items themselves. Each extra marker adds two spaces of indent.
pub fn normalize_lists(line: &str) -> String {
    let mut line = line.trim().to_string();

    for (marker, replacement) in [('#', "0. "), ('*', "- ")] {
        let rest = line.trim_start_matches(marker);
        let depth = line.len() - rest.len();
        if depth > 0 {
            line = format!("{}{}{}", "  ".repeat(depth - 1), replacement, rest.trim());
        }
    }

    line
}

/// Turn `!Header` into `# Header`, keeping the number of levels.
///
/// Lines starting with `![[` are left alone.
pub fn rewrite_header(line: &str) -> String {
    header_regex()
        .replacen(line, 1, |caps: &Captures<'_>| {
            format!("{} {}", "#".repeat(caps[1].len()), &caps[2])
        })
        .into_owned()
}

fn rewrite_inline(line: &str) -> String {
    inline_rules()
        .iter()
        .fold(line.to_string(), |line, (regex, replacement)| {
            regex.replace_all(&line, *replacement).into_owned()
        })
}

/// Footnotes collected while converting one body
#[derive(Debug, Default)]
pub struct Footnotes {
    notes: Vec<String>,
}

impl Footnotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every footnote span in `line` with a `[^N]` reference
    pub fn extract(&mut self, line: &str) -> String {
        footnote_regex()
            .replace_all(line, |caps: &Captures<'_>| {
                self.notes.push(caps[1].to_string());
                format!("[^{}]", self.notes.len())
            })
            .into_owned()
    }

    /// `[^N]: text` lines in order of appearance
    pub fn definitions(&self) -> impl Iterator<Item = String> + '_ {
        self.notes
            .iter()
            .enumerate()
            .map(|(i, note)| format!("[^{}]: {}", i + 1, note))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Convert a tiddler body to Markdown. A missing body yields an empty string.
pub fn transform(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut footnotes = Footnotes::new();
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let line = normalize_lists(line);
            let line = rewrite_header(&line);
            let line = rewrite_inline(&line);
            footnotes.extract(&line)
        })
        .collect();

    lines.extend(footnotes.definitions());
    lines.join("\n")
}
