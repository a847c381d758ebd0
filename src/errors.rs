//! Warnings raised while computing a spectrum, and errors from the binary's I/O.
//!
//! None of the [`SpectrumWarning`] cases stop a computation: the affected
//! token, mutation or bucket is left out and the warning is returned alongside
//! the (possibly partial) result.

use std::path::PathBuf;

use thiserror::Error;

use crate::mutation::Mutation;

/// A recoverable problem found while computing a spectrum.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumWarning {
    /// Token not of the form `<base><position><base>`
    #[error("malformed mutation token `{token}` (expected e.g. C241T); skipped")]
    MalformedMutationToken {
        /// The offending token, trimmed
        token: String,
    },

    /// Mutation too close to either end of the reference for a 3-base window
    #[error("mutation {mutation} has no full context in a reference of length {length}; skipped")]
    OutOfRangeMutation {
        /// The mutation
        mutation: Mutation,
        /// Reference length
        length: usize,
    },

    /// Reference base of the mutation differs from the reference sequence
    #[error("mutation {mutation} does not match reference base {found} at its position; skipped")]
    ReferenceMismatch {
        /// The mutation
        mutation: Mutation,
        /// Base found in the reference
        found: char,
    },

    /// No bucket had a usable denominator
    #[error("no bucket could be normalised; spectrum is empty")]
    DegenerateNormalization,

    /// One of the inputs was empty
    #[error("empty {what}")]
    EmptyInput {
        /// Which input
        what: &'static str,
    },

    /// Bucket outside the 192 canonical channels, so missing from the dataset
    #[error("bucket {label} is not a canonical ACGT channel and is left out of the dataset")]
    NonCanonicalBucket {
        /// Bucket label
        label: String,
    },
}

/// Fatal errors from reading input or writing output.
#[derive(Error, Debug)]
pub enum MutSpecError {
    /// Could not read or write a file
    #[error("could not access {}: {source}", .path.display())]
    Io {
        /// File path (`-` for stdin/stdout)
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Could not serialise the dataset
    #[error("could not write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MutSpecError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
