//! Export and import commands.

use crate::config::InstinctConfig;
use crate::models::Instinct;
use crate::store::{InstinctStore, write_records};
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Confidence penalty applied to every imported record.
const IMPORT_DISCOUNT: f64 = 0.1;

/// Lower bound the discount never crosses.
const CONFIDENCE_FLOOR: f64 = 0.3;

/// Applies the import discount to a record's stated confidence.
///
/// Records brought in from an external source start slightly weaker than
/// they claim, but never below the floor.
#[must_use]
pub fn discounted_confidence(confidence: f64) -> f64 {
    (confidence - IMPORT_DISCOUNT).max(CONFIDENCE_FLOOR)
}

/// Export command.
///
/// Snapshots the full store, pretty-printed, to `output`. Without an explicit
/// path the snapshot lands in the data directory under a date-stamped name
/// (`export-YYYYMMDD.json`).
///
/// # Errors
///
/// Returns an error if the store cannot be read or the snapshot written.
pub fn cmd_export(config: &InstinctConfig, output: Option<PathBuf>) -> Result<()> {
    let store = InstinctStore::new(config.instincts_path());
    let instincts = store.load()?;

    let output = output.unwrap_or_else(|| default_export_path(config));
    write_records(&output, &instincts)?;

    info!(count = instincts.len(), path = %output.display(), "exported instincts");
    println!("Exported {} instincts to {}", instincts.len(), output.display());
    Ok(())
}

/// Default export path for today's date.
fn default_export_path(config: &InstinctConfig) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d");
    config.data_dir.join(format!("export-{stamp}.json"))
}

/// Import command.
///
/// Reads a JSON array of candidate records and appends every candidate whose
/// id is not already in the store, discounting its confidence. Candidates
/// with a known id are skipped entirely; existing records are never touched.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, or the combined
/// store cannot be saved.
pub fn cmd_import(config: &InstinctConfig, input: &Path) -> Result<()> {
    let store = InstinctStore::new(config.instincts_path());
    let mut existing = store.load()?;

    let candidates = read_candidates(input)?;
    let known_ids: HashSet<_> = existing.iter().map(|i| i.id.clone()).collect();

    let mut added = 0;
    for mut candidate in candidates {
        if known_ids.contains(&candidate.id) {
            continue;
        }
        candidate.confidence = discounted_confidence(candidate.confidence);
        existing.push(candidate);
        added += 1;
    }

    store.save(&existing)?;

    info!(added, path = %input.display(), "imported instincts");
    println!("Imported {added} new instincts (discounted confidence by 0.1)");
    Ok(())
}

/// Reads candidate records from an import file.
fn read_candidates(path: &Path) -> Result<Vec<Instinct>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "read_import_file".to_string(),
        cause: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        Error::InvalidInput(format!(
            "import file {} is not a JSON array of instincts: {e}",
            path.display()
        ))
    })
}
