//! Output formatting utilities

use crate::application::ExportSummary;

/// Format the one-line summary printed after an export
pub fn format_summary(summary: &ExportSummary) -> String {
    let noun = if summary.exported == 1 {
        "tiddler"
    } else {
        "tiddlers"
    };
    let mut output = format!(
        "Exported {} {} to {}",
        summary.exported,
        noun,
        summary.outdir.display()
    );

    let mut notes = Vec::new();
    if summary.failed > 0 {
        notes.push(format!("{} failed, written empty", summary.failed));
    }
    if summary.unwritten > 0 {
        notes.push(format!("{} not written", summary.unwritten));
    }
    if summary.skipped > 0 {
        notes.push(format!("{} skipped by tag filter", summary.skipped));
    }
    if !notes.is_empty() {
        output.push_str(&format!(" ({})", notes.join("; ")));
    }

    output
}
