//! Mutational spectra: counting mutations per (context, substitution) bucket.
//!
//! [`MutSpectrum`] tabulates mutations by [`BucketKey`]. For each mutation the
//! 3-base window centred on its position is taken from the reference, the
//! centre base dropped to give the [`Context`], and the substitution taken
//! from the mutation itself. Buckets are then normalised (see
//! [`normalise`]) and presented as a ranked table ([`table`]) or a dense
//! 192-channel dataset ([`dataset`]).
//!
//! [`compute_spectrum`] runs all of these steps on raw input text and
//! returns a [`SpectrumResult`], which also carries every
//! [`SpectrumWarning`] produced along the way. No step fails: tokens,
//! mutations or buckets which cannot be used are skipped and reported.
//!
//! # Examples
//! ```
//! use mutspec::spectrum::{compute_spectrum, SpectrumOpts};
//!
//! let opts = SpectrumOpts { normalise: false, ..Default::default() };
//! let result = compute_spectrum(">ref\nACGTAC\n", "G3T, G3T, A1C", &opts);
//!
//! // A1C has no 5' base, so is skipped with a warning
//! assert_eq!(result.warnings.len(), 1);
//! assert_eq!(result.table, "Context_Mutation\tPercentage\nCT (G>T)\t100.00%");
//! assert_eq!(result.dataset.len(), 192);
//! ```

use std::collections::BTreeMap;
use std::fmt;

pub mod dataset;
use crate::spectrum::dataset::SpectrumDataset;
pub mod normalise;
use crate::spectrum::normalise::Denominator;
pub mod table;
use crate::spectrum::table::format_table;

use crate::channel::{BucketKey, Context, SubstitutionType};
use crate::cli::RefCheck;
use crate::errors::SpectrumWarning;
use crate::mutation::{parse_mutations, Mutation, MutationList};
use crate::ref_seq::RefSeq;

/// Options for [`compute_spectrum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumOpts {
    /// Divide counts by the occurrences of each context in the reference,
    /// rather than by the number of submitted mutations
    pub normalise: bool,
    /// Whether to check mutation reference bases against the sequence
    pub ref_check: RefCheck,
}

impl Default for SpectrumOpts {
    fn default() -> Self {
        Self {
            normalise: true,
            ref_check: RefCheck::Lenient,
        }
    }
}

/// Count and percentages of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BucketStats {
    /// Number of mutations in the bucket
    pub count: u32,
    /// Percentage before rescaling; [`None`] if the bucket had no denominator
    pub raw_percentage: Option<f64>,
    /// Percentage after rescaling all buckets to sum to 100
    pub percentage: f64,
}

/// Mutation counts per bucket, iterated in canonical [`BucketKey`] order.
#[derive(Debug, Clone, Default)]
pub struct MutSpectrum {
    buckets: BTreeMap<BucketKey, BucketStats>,
    n_counted: usize,
}

impl MutSpectrum {
    /// An empty spectrum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every mutation against `ref_seq`.
    ///
    /// Mutations without a full 3-base window, and with [`RefCheck::Strict`]
    /// those whose reference base differs from the sequence, are skipped; a
    /// warning is returned for each.
    pub fn aggregate(
        ref_seq: &RefSeq,
        mutations: &[Mutation],
        ref_check: RefCheck,
    ) -> (Self, Vec<SpectrumWarning>) {
        let mut spectrum = Self::new();
        let mut warnings = Vec::new();
        for mutation in mutations {
            if let Err(warning) = spectrum.add_mutation(ref_seq, mutation, ref_check) {
                log::debug!("{warning}");
                warnings.push(warning);
            }
        }
        log::info!(
            "Counted {} of {} mutations into {} buckets",
            spectrum.n_counted(),
            mutations.len(),
            spectrum.len()
        );
        (spectrum, warnings)
    }

    /// Find the bucket of a single mutation and count it.
    pub fn add_mutation(
        &mut self,
        ref_seq: &RefSeq,
        mutation: &Mutation,
        ref_check: RefCheck,
    ) -> Result<BucketKey, SpectrumWarning> {
        let window =
            ref_seq
                .window(mutation.pos)
                .ok_or_else(|| SpectrumWarning::OutOfRangeMutation {
                    mutation: *mutation,
                    length: ref_seq.len(),
                })?;
        if ref_check == RefCheck::Strict && !window[1].eq_ignore_ascii_case(&mutation.ref_base) {
            return Err(SpectrumWarning::ReferenceMismatch {
                mutation: *mutation,
                found: window[1] as char,
            });
        }
        let key = BucketKey::new(
            Context::from_window(&window),
            SubstitutionType::new(mutation.ref_base, mutation.alt_base),
        );
        self.add(key);
        Ok(key)
    }

    /// Increment a bucket.
    pub fn add(&mut self, key: BucketKey) {
        self.buckets.entry(key).or_default().count += 1;
        self.n_counted += 1;
    }

    /// Stats of a bucket, if any mutation fell in it.
    pub fn get(&self, key: &BucketKey) -> Option<&BucketStats> {
        self.buckets.get(key)
    }

    /// Count in a bucket, zero for unseen buckets.
    pub fn count(&self, key: &BucketKey) -> u32 {
        self.get(key).map_or(0, |stats| stats.count)
    }

    /// Buckets in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, &BucketStats)> {
        self.buckets.iter()
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of mutations counted.
    pub fn n_counted(&self) -> usize {
        self.n_counted
    }
}

impl fmt::Display for MutSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} mutations in {} buckets",
            self.n_counted,
            self.buckets.len()
        )?;
        for (key, stats) in &self.buckets {
            writeln!(f, "{key}\t{}", stats.count)?;
        }
        Ok(())
    }
}

/// Everything produced by one run of [`compute_spectrum`].
#[derive(Debug, Clone)]
pub struct SpectrumResult {
    /// Counts and percentages per bucket
    pub spectrum: MutSpectrum,
    /// Tab-separated table of non-zero buckets, highest percentage first
    pub table: String,
    /// All 192 canonical channels, for plotting
    pub dataset: SpectrumDataset,
    /// Problems found, in the order they were met
    pub warnings: Vec<SpectrumWarning>,
    /// Number of mutation tokens submitted
    pub n_tokens: usize,
}

impl SpectrumResult {
    /// Normalised buckets ranked as in [`SpectrumResult::table`].
    pub fn ranked(&self) -> Vec<(BucketKey, BucketStats)> {
        self.spectrum.ranked()
    }

    /// Sum of all bucket percentages: 100, or 0 if nothing could be normalised.
    pub fn total_percentage(&self) -> f64 {
        self.spectrum.iter().map(|(_, stats)| stats.percentage).sum()
    }
}

/// Compute a spectrum from reference text (FASTA or bare sequence) and a
/// comma-separated list of mutation tokens.
pub fn compute_spectrum(
    reference_text: &str,
    mutations_text: &str,
    opts: &SpectrumOpts,
) -> SpectrumResult {
    let ref_seq = RefSeq::from_text(reference_text);
    let mutation_list = parse_mutations(mutations_text);
    spectrum_from_parts(&ref_seq, mutation_list, opts)
}

/// As [`compute_spectrum`], for an already loaded reference and parsed mutations.
pub fn spectrum_from_parts(
    ref_seq: &RefSeq,
    mutation_list: MutationList,
    opts: &SpectrumOpts,
) -> SpectrumResult {
    let mut warnings = Vec::new();
    if ref_seq.is_empty() {
        warnings.push(SpectrumWarning::EmptyInput {
            what: "reference sequence",
        });
    }
    if mutation_list.is_empty() {
        warnings.push(SpectrumWarning::EmptyInput {
            what: "mutation list",
        });
    }
    let (mutations, n_tokens, parse_warnings) = mutation_list.into_parts();
    warnings.extend(parse_warnings);

    let (mut spectrum, count_warnings) =
        MutSpectrum::aggregate(ref_seq, &mutations, opts.ref_check);
    warnings.extend(count_warnings);
    log::debug!("{spectrum}");

    let total = if opts.normalise {
        let context_counts = ref_seq.context_counts();
        spectrum.normalise(&Denominator::Context(&context_counts))
    } else {
        spectrum.normalise(&Denominator::Raw(n_tokens))
    };
    if n_tokens > 0 && total == 0.0 {
        warnings.push(SpectrumWarning::DegenerateNormalization);
    }

    let ranked = spectrum.ranked();
    for (key, _) in ranked.iter().filter(|(key, _)| !key.is_canonical()) {
        warnings.push(SpectrumWarning::NonCanonicalBucket { label: key.label() });
    }
    let table = format_table(&ranked);
    let dataset = SpectrumDataset::new(&spectrum);

    SpectrumResult {
        spectrum,
        table,
        dataset,
        warnings,
        n_tokens,
    }
}
