//! Converting bucket counts to percentages.
//!
//! Percentages are first computed per bucket against a [`Denominator`], then
//! rescaled so that all buckets which received one sum to 100. With context
//! normalisation a bucket whose context never occurs in the reference has no
//! denominator; it is skipped (left at zero, and out of the rescaling sum)
//! rather than producing a NaN.

use crate::ref_seq::context_count::ContextCounts;
use crate::spectrum::MutSpectrum;

/// What each bucket count is divided by.
#[derive(Debug, Clone, Copy)]
pub enum Denominator<'a> {
    /// Occurrences of the bucket's context in the reference
    Context(&'a ContextCounts),
    /// Total number of mutation tokens submitted
    Raw(usize),
}

impl MutSpectrum {
    /// Assign percentages to every bucket, then rescale them to sum to 100.
    ///
    /// Returns the sum of the percentages before rescaling. This is zero only
    /// when no bucket had a denominator, in which case every percentage is
    /// left at zero.
    pub fn normalise(&mut self, denominator: &Denominator) -> f64 {
        let mut total = 0.0;
        for (key, stats) in self.buckets.iter_mut() {
            let denom = match denominator {
                Denominator::Context(counts) => counts.occurrences(&key.context) as usize,
                Denominator::Raw(n_tokens) => *n_tokens,
            };
            stats.percentage = 0.0;
            stats.raw_percentage = if denom == 0 {
                log::debug!("No occurrences of context {}; skipping {key}", key.context);
                None
            } else {
                Some(stats.count as f64 / denom as f64 * 100.0)
            };
            total += stats.raw_percentage.unwrap_or(0.0);
        }

        if total > 0.0 {
            for stats in self.buckets.values_mut() {
                if let Some(raw) = stats.raw_percentage {
                    stats.percentage = raw / total * 100.0;
                }
            }
        } else if !self.buckets.is_empty() {
            log::debug!("No bucket could be normalised");
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{BucketKey, Context, SubstitutionType};

    const EPS: f64 = 1.0e-6;

    fn key(context: &[u8; 2], substitution: &[u8; 2]) -> BucketKey {
        BucketKey::new(
            Context::new(context[0], context[1]),
            SubstitutionType::new(substitution[0], substitution[1]),
        )
    }

    #[test]
    fn skips_zero_denominator() {
        let mut spectrum = MutSpectrum::new();
        spectrum.add(key(b"AA", b"AC"));
        spectrum.add(key(b"TT", b"TG"));

        // TT never occurs in this reference
        let counts = ContextCounts::new(b"AAAA");
        let total = spectrum.normalise(&Denominator::Context(&counts));
        assert!((total - 50.0).abs() < EPS);

        let present = spectrum.get(&key(b"AA", b"AC")).unwrap();
        assert!((present.raw_percentage.unwrap() - 50.0).abs() < EPS);
        assert!((present.percentage - 100.0).abs() < EPS);

        let skipped = spectrum.get(&key(b"TT", b"TG")).unwrap();
        assert_eq!(skipped.count, 1);
        assert_eq!(skipped.raw_percentage, None);
        assert_eq!(skipped.percentage, 0.0);
    }

    #[test]
    fn all_skipped() {
        let mut spectrum = MutSpectrum::new();
        spectrum.add(key(b"AC", b"GT"));
        let counts = ContextCounts::new(b"");
        assert_eq!(spectrum.normalise(&Denominator::Context(&counts)), 0.0);
        for (_, stats) in spectrum.iter() {
            assert_eq!(stats.raw_percentage, None);
            assert_eq!(stats.percentage, 0.0);
            assert!(!stats.percentage.is_nan());
        }
        assert!(spectrum.ranked().is_empty());
    }

    #[test]
    fn raw_rescales() {
        let mut spectrum = MutSpectrum::new();
        spectrum.add(key(b"CT", b"GT"));
        spectrum.add(key(b"CT", b"GT"));
        spectrum.add(key(b"AG", b"CT"));

        // Four tokens submitted, one of which was not counted
        let total = spectrum.normalise(&Denominator::Raw(4));
        assert!((total - 75.0).abs() < EPS);
        let two = spectrum.get(&key(b"CT", b"GT")).unwrap();
        assert!((two.raw_percentage.unwrap() - 50.0).abs() < EPS);
        assert!((two.percentage - 200.0 / 3.0).abs() < EPS);
        let one = spectrum.get(&key(b"AG", b"CT")).unwrap();
        assert!((one.percentage - 100.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn renormalising_resets() {
        let mut spectrum = MutSpectrum::new();
        spectrum.add(key(b"AA", b"AC"));
        spectrum.normalise(&Denominator::Raw(1));
        let counts = ContextCounts::new(b"CCC");
        spectrum.normalise(&Denominator::Context(&counts));
        assert_eq!(spectrum.get(&key(b"AA", b"AC")).unwrap().percentage, 0.0);
    }
}
