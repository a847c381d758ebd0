//! Mutation channels: the (context, substitution type) buckets of a spectrum.
//!
//! A [`Context`] is the pair of bases flanking a mutated position, with the
//! mutated base itself dropped (the same idea as a split 3-mer). A
//! [`SubstitutionType`] is the reference to alternate base change. Together
//! they form a [`BucketKey`], of which there are 16 × 12 = 192 canonical values
//! over `{A, C, G, T}`.
//!
//! Canonical orders are fixed, and determine both the display position and
//! colour of each channel in a chart, and the tie-break when ranking buckets:
//! - contexts: `AA, AC, AG, AT, CA, ..., TT`
//! - substitutions: `C>A, C>G, C>T, T>A, T>C, T>G, G>T, G>C, G>A, A>T, A>G, A>C`

use std::cmp::Ordering;
use std::fmt;

/// Bases, in the order used to enumerate contexts.
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Number of canonical contexts.
pub const N_CONTEXTS: usize = BASES.len() * BASES.len();
/// Number of canonical substitution types.
pub const N_SUBSTITUTIONS: usize = BASES.len() * (BASES.len() - 1);
/// Number of canonical channels (buckets).
pub const N_CHANNELS: usize = N_CONTEXTS * N_SUBSTITUTIONS;

// Pyrimidine-first then their purine complements, as in the usual spectrum plots
const SUBSTITUTION_ORDER: [(u8, u8); N_SUBSTITUTIONS] = [
    (b'C', b'A'),
    (b'C', b'G'),
    (b'C', b'T'),
    (b'T', b'A'),
    (b'T', b'C'),
    (b'T', b'G'),
    (b'G', b'T'),
    (b'G', b'C'),
    (b'G', b'A'),
    (b'A', b'T'),
    (b'A', b'G'),
    (b'A', b'C'),
];

/// Bar colours, one per substitution type in canonical order.
pub const PALETTE: [&str; N_SUBSTITUTIONS] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94",
];

#[inline]
fn base_rank(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// The bases 5' and 3' of a mutated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    /// Base before the mutated position
    pub five_prime: u8,
    /// Base after the mutated position
    pub three_prime: u8,
}

impl Context {
    /// Context from its two flanking bases.
    pub fn new(five_prime: u8, three_prime: u8) -> Self {
        Self {
            five_prime,
            three_prime,
        }
    }

    /// Context from a 3-base window, dropping the middle base.
    pub fn from_window(window: &[u8; 3]) -> Self {
        Self::new(window[0], window[2])
    }

    /// Position in the canonical context order, or [`None`] if either base
    /// is outside upper-case `ACGT`.
    pub fn rank(&self) -> Option<usize> {
        Some(base_rank(self.five_prime)? * BASES.len() + base_rank(self.three_prime)?)
    }

    /// All 16 canonical contexts, in canonical order.
    pub fn canonical() -> impl Iterator<Item = Context> {
        (0..N_CONTEXTS).map(|idx| {
            Context::new(BASES[idx / BASES.len()], BASES[idx % BASES.len()])
        })
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.five_prime as char, self.three_prime as char)
    }
}

/// A reference to alternate base change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionType {
    /// Reference base
    pub reference: u8,
    /// Alternate (observed) base
    pub alternate: u8,
}

impl SubstitutionType {
    /// Substitution from its two bases.
    pub fn new(reference: u8, alternate: u8) -> Self {
        Self {
            reference,
            alternate,
        }
    }

    /// Position in the canonical substitution order, or [`None`] if not one of
    /// the 12 canonical types.
    pub fn rank(&self) -> Option<usize> {
        SUBSTITUTION_ORDER
            .iter()
            .position(|&(r, a)| r == self.reference && a == self.alternate)
    }

    /// Chart colour, for canonical types.
    pub fn colour(&self) -> Option<&'static str> {
        self.rank().map(|idx| PALETTE[idx])
    }

    /// All 12 canonical substitution types, in canonical order.
    pub fn canonical() -> impl Iterator<Item = SubstitutionType> {
        (0..N_SUBSTITUTIONS).map(|idx| {
            let (reference, alternate) = SUBSTITUTION_ORDER[idx];
            SubstitutionType::new(reference, alternate)
        })
    }
}

impl fmt::Display for SubstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}>{}", self.reference as char, self.alternate as char)
    }
}

/// A spectrum bucket: one (context, substitution type) combination.
///
/// Ordered by canonical substitution rank, then canonical context rank.
/// Non-canonical keys sort after all canonical ones, by their raw bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    /// Flanking bases
    pub context: Context,
    /// Base change
    pub substitution: SubstitutionType,
}

impl BucketKey {
    /// Bucket for a context and substitution.
    pub fn new(context: Context, substitution: SubstitutionType) -> Self {
        Self {
            context,
            substitution,
        }
    }

    /// Position of this channel in the 192-channel display order, if canonical.
    pub fn display_index(&self) -> Option<usize> {
        Some(self.substitution.rank()? * N_CONTEXTS + self.context.rank()?)
    }

    /// Whether both the context and the substitution are canonical.
    pub fn is_canonical(&self) -> bool {
        self.display_index().is_some()
    }

    /// Human readable label, e.g. `CT (G>T)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.context, self.substitution)
    }

    /// All 192 canonical keys in display order: substitutions outer, contexts
    /// inner.
    pub fn canonical() -> impl Iterator<Item = BucketKey> {
        SubstitutionType::canonical()
            .flat_map(|sub| Context::canonical().map(move |ctx| BucketKey::new(ctx, sub)))
    }

    fn sort_key(&self) -> (usize, usize, [u8; 4]) {
        (
            self.substitution.rank().unwrap_or(N_SUBSTITUTIONS),
            self.context.rank().unwrap_or(N_CONTEXTS),
            [
                self.substitution.reference,
                self.substitution.alternate,
                self.context.five_prime,
                self.context.three_prime,
            ],
        )
    }
}

impl Ord for BucketKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for BucketKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Compact key form, e.g. CT_G>T
impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.context, self.substitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_counts() {
        assert_eq!(Context::canonical().count(), N_CONTEXTS);
        assert_eq!(SubstitutionType::canonical().count(), N_SUBSTITUTIONS);
        assert_eq!(BucketKey::canonical().count(), N_CHANNELS);
        assert_eq!(N_CHANNELS, 192);
    }

    #[test]
    fn display_indices_follow_enumeration() {
        for (idx, key) in BucketKey::canonical().enumerate() {
            assert_eq!(key.display_index(), Some(idx));
        }
        let key = BucketKey::new(Context::new(b'C', b'T'), SubstitutionType::new(b'G', b'T'));
        assert_eq!(key.display_index(), Some(6 * 16 + 7));
        assert_eq!(key.label(), "CT (G>T)");
        assert_eq!(key.to_string(), "CT_G>T");
        assert_eq!(key.substitution.colour(), Some("#d62728"));
    }

    #[test]
    fn ordering_is_canonical() {
        let mut keys: Vec<BucketKey> = BucketKey::canonical().collect();
        keys.reverse();
        keys.sort();
        assert_eq!(keys, BucketKey::canonical().collect::<Vec<_>>());

        let lower = BucketKey::new(Context::new(b'c', b't'), SubstitutionType::new(b'g', b't'));
        let last = BucketKey::new(Context::new(b'T', b'T'), SubstitutionType::new(b'A', b'C'));
        assert!(!lower.is_canonical());
        assert!(lower > last);
    }
}
