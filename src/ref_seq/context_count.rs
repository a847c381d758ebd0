//! Background frequencies of sequence contexts.
//!
//! Every 3-base window of the reference is counted with a stride of one. The
//! counts of flanking pairs (the first and last base of each window) are the
//! denominators used when normalising a spectrum by context.

use hashbrown::HashMap;

use crate::channel::Context;

/// Trinucleotide and flanking-pair counts of a sequence.
#[derive(Debug, Clone, Default)]
pub struct ContextCounts {
    trinucleotides: HashMap<[u8; 3], u32>,
    flanks: HashMap<Context, u32>,
    n_windows: usize,
}

impl ContextCounts {
    /// Count all windows of `seq`. Sequences shorter than three bases have none.
    pub fn new(seq: &[u8]) -> Self {
        let mut counts = Self::default();
        for window in seq.windows(3) {
            let tri = [window[0], window[1], window[2]];
            *counts.trinucleotides.entry(tri).or_insert(0) += 1;
            *counts.flanks.entry(Context::from_window(&tri)).or_insert(0) += 1;
            counts.n_windows += 1;
        }
        log::debug!(
            "Counted {} windows, {} distinct trinucleotides",
            counts.n_windows,
            counts.trinucleotides.len()
        );
        counts
    }

    /// Occurrences of a trinucleotide, zero if never seen.
    pub fn get(&self, trinucleotide: &[u8; 3]) -> u32 {
        self.trinucleotides.get(trinucleotide).copied().unwrap_or(0)
    }

    /// Windows whose outer bases match `context`, whatever the middle base.
    pub fn occurrences(&self, context: &Context) -> u32 {
        self.flanks.get(context).copied().unwrap_or(0)
    }

    /// Total number of windows counted.
    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Number of distinct trinucleotides.
    pub fn n_distinct(&self) -> usize {
        self.trinucleotides.len()
    }

    /// Trinucleotide counts, sorted by sequence.
    pub fn sorted_trinucleotides(&self) -> Vec<([u8; 3], u32)> {
        let mut sorted: Vec<([u8; 3], u32)> =
            self.trinucleotides.iter().map(|(k, v)| (*k, *v)).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Flanking pair counts, sorted by sequence.
    pub fn sorted_flanks(&self) -> Vec<(Context, u32)> {
        let mut sorted: Vec<(Context, u32)> = self.flanks.iter().map(|(k, v)| (*k, *v)).collect();
        sorted.sort_unstable_by_key(|(ctx, _)| (ctx.five_prime, ctx.three_prime));
        sorted
    }
}
