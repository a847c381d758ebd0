//! Ranked, tab-separated text output of a normalised spectrum.

use crate::channel::BucketKey;
use crate::spectrum::{BucketStats, MutSpectrum};

/// First line of every table.
pub const TABLE_HEADER: &str = "Context_Mutation\tPercentage";

impl MutSpectrum {
    /// Normalised buckets sorted by descending percentage.
    ///
    /// Buckets which were skipped during normalisation are left out. The sort
    /// is stable over canonical key order, so equal percentages stay in
    /// canonical (substitution, context) order.
    pub fn ranked(&self) -> Vec<(BucketKey, BucketStats)> {
        let mut ranked: Vec<(BucketKey, BucketStats)> = self
            .buckets
            .iter()
            .filter(|(_, stats)| stats.raw_percentage.is_some())
            .map(|(key, stats)| (*key, *stats))
            .collect();
        ranked.sort_by(|a, b| b.1.percentage.total_cmp(&a.1.percentage));
        ranked
    }
}

/// Format ranked buckets, one `<context> (<substitution>)\t<pct>%` row each.
///
/// Rows are separated by newlines, with no newline after the last one.
pub fn format_table(ranked: &[(BucketKey, BucketStats)]) -> String {
    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(TABLE_HEADER.to_string());
    for (key, stats) in ranked {
        lines.push(format!("{}\t{:.2}%", key.label(), stats.percentage));
    }
    lines.join("\n")
}
