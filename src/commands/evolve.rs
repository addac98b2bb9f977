//! Evolve command.
//!
//! Finds clusters of high-confidence instincts sharing a category. A large
//! enough cluster is a candidate for promotion into a reusable skill
//! document. Read-only: the store is never mutated here.

use super::truncate_chars;
use crate::config::InstinctConfig;
use crate::models::Instinct;
use crate::store::InstinctStore;
use crate::Result;

/// Minimum confidence for a record to count toward a cluster.
pub const EVOLUTION_THRESHOLD: f64 = 0.7;

/// Minimum cluster size worth promoting.
pub const MIN_CLUSTER_SIZE: usize = 3;

/// Maximum pattern length shown per cluster member.
const PATTERN_WIDTH: usize = 50;

/// A promotion-ready group of high-confidence instincts.
#[derive(Debug)]
pub struct Cluster<'a> {
    /// Shared category label.
    pub category: String,
    /// Member records, in store order.
    pub members: Vec<&'a Instinct>,
}

impl Cluster<'_> {
    /// Suggested file name for the skill document derived from this cluster.
    #[must_use]
    pub fn skill_name(&self) -> String {
        format!("{}-patterns.md", self.category)
    }
}

/// Groups records with confidence at or above [`EVOLUTION_THRESHOLD`] by
/// category, keeping only groups of at least [`MIN_CLUSTER_SIZE`] members.
///
/// Clusters appear in order of each category's first strong record, and
/// members keep their store order.
#[must_use]
pub fn clusters(records: &[Instinct]) -> Vec<Cluster<'_>> {
    let mut groups: Vec<Cluster<'_>> = Vec::new();

    for record in records {
        if record.confidence < EVOLUTION_THRESHOLD {
            continue;
        }
        let category = record.category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.members.push(record),
            None => groups.push(Cluster {
                category: category.to_string(),
                members: vec![record],
            }),
        }
    }

    groups.retain(|g| g.members.len() >= MIN_CLUSTER_SIZE);
    groups
}

/// Evolve command.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn cmd_evolve(config: &InstinctConfig) -> Result<()> {
    let store = InstinctStore::new(config.instincts_path());
    let instincts = store.load()?;

    for cluster in clusters(&instincts) {
        println!();
        println!(
            "Cluster ready for evolution: {} ({} instincts)",
            cluster.category,
            cluster.members.len()
        );
        for member in &cluster.members {
            println!(
                "  [{:.1}] {}",
                member.confidence,
                truncate_chars(&member.pattern, PATTERN_WIDTH)
            );
        }
        println!("  -> Recommend creating skill: {}", cluster.skill_name());
    }

    Ok(())
}
