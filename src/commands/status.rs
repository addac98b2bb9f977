//! Status command.

use super::truncate_chars;
use crate::config::InstinctConfig;
use crate::models::Instinct;
use crate::store::InstinctStore;
use crate::Result;

/// Width of the confidence bar, in segments.
const BAR_WIDTH: usize = 10;

/// Maximum pattern length shown per line.
const PATTERN_WIDTH: usize = 60;

/// Status command.
///
/// Lists every record sorted by confidence descending. Ties keep their
/// original store order (the sort is stable).
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn cmd_status(config: &InstinctConfig) -> Result<()> {
    let store = InstinctStore::new(config.instincts_path());
    let instincts = store.load()?;

    for line in status_lines(&instincts) {
        println!("{line}");
    }

    Ok(())
}

/// Renders the full status report, one element per output line.
///
/// An empty store yields only the "no instincts" message. Otherwise a count
/// header, then one line per record in non-increasing confidence order;
/// ties keep their store order (the sort is stable).
#[must_use]
pub fn status_lines(records: &[Instinct]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No instincts captured yet. Use sessions to build patterns.".to_string()];
    }

    let mut lines = vec![format!("Total instincts: {}", records.len())];

    let mut sorted: Vec<&Instinct> = records.iter().collect();
    sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    lines.extend(sorted.into_iter().map(status_line));

    lines
}

/// Renders one status line: score, confidence bar, truncated pattern.
fn status_line(instinct: &Instinct) -> String {
    format!(
        "  [{:.1}] {:<width$} {}",
        instinct.confidence,
        confidence_bar(instinct.confidence),
        truncate_chars(&instinct.pattern, PATTERN_WIDTH),
        width = BAR_WIDTH
    )
}

/// Renders the filled portion of the confidence bar.
///
/// One segment per full tenth of confidence. Negative scores render empty;
/// scores above 1.0 overflow the nominal width rather than clamping.
fn confidence_bar(confidence: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (confidence * 10.0).floor().max(0.0) as usize;
    "#".repeat(filled)
}
