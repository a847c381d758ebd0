//! Dense 192-channel view of a spectrum, for plotting.
//!
//! Every canonical channel is present, zero-filled where no mutation was
//! counted. Channels are laid out with substitution types outer and contexts
//! inner, both in canonical order, so the display index of a channel (its
//! position on the x-axis) is the same for every spectrum.

use serde::{Deserialize, Serialize};

use crate::channel::{BucketKey, N_CHANNELS};
use crate::spectrum::MutSpectrum;

/// One bar of the spectrum plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumEntry {
    /// Flanking bases, e.g. `CT`
    pub context: String,
    /// Substitution, e.g. `G>T`
    pub mutation_type: String,
    /// Rescaled percentage, zero if not observed
    pub percentage: f64,
    /// Position on the x-axis, 0 to 191
    pub display_index: usize,
    /// Tooltip text, e.g. `CT (G>T)`
    pub label: String,
    /// Bar colour, by substitution type
    pub colour: String,
}

/// All 192 canonical channels, indexed by display position.
///
/// Serialises as a JSON array of [`SpectrumEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpectrumDataset {
    entries: Vec<SpectrumEntry>,
}

impl SpectrumDataset {
    /// Fill every canonical channel from a normalised spectrum.
    pub fn new(spectrum: &MutSpectrum) -> Self {
        let mut entries = Vec::with_capacity(N_CHANNELS);
        for (display_index, key) in BucketKey::canonical().enumerate() {
            entries.push(SpectrumEntry {
                context: key.context.to_string(),
                mutation_type: key.substitution.to_string(),
                percentage: spectrum.get(&key).map_or(0.0, |stats| stats.percentage),
                display_index,
                label: key.label(),
                colour: key.substitution.colour().unwrap_or_default().to_string(),
            });
        }
        Self { entries }
    }

    /// Entry for a canonical key.
    pub fn get(&self, key: &BucketKey) -> Option<&SpectrumEntry> {
        key.display_index().and_then(|idx| self.entries.get(idx))
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[SpectrumEntry] {
        &self.entries
    }

    /// Number of channels (always 192 when built by [`SpectrumDataset::new`]).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no channels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all percentages.
    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|entry| entry.percentage).sum()
    }

    /// Pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
