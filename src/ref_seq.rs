//! The reference sequence mutations are positioned against.
//!
//! [`RefSeq::from_text`] accepts either FASTA or a bare sequence. Header lines
//! (starting with `>`) are dropped and every other line is concatenated as-is,
//! so multi-record FASTA becomes one contiguous sequence. Bases are not
//! validated or case-folded.
//!
//! # Examples
//! ```
//! use mutspec::ref_seq::RefSeq;
//!
//! let ref_seq = RefSeq::from_text(">chr\nACGT\nAC\n");
//! assert_eq!(ref_seq.as_bytes(), b"ACGTAC");
//! assert_eq!(ref_seq.window(3), Some(*b"CGT"));
//! assert_eq!(ref_seq.window(1), None);
//! ```

pub mod context_count;
use crate::ref_seq::context_count::ContextCounts;

/// A single contiguous reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefSeq {
    seq: Vec<u8>,
}

impl RefSeq {
    /// Strip FASTA headers and line breaks from `text`.
    pub fn from_text(text: &str) -> Self {
        let mut seq = Vec::with_capacity(text.len());
        for line in text.lines() {
            if !line.starts_with('>') {
                seq.extend_from_slice(line.as_bytes());
            }
        }
        log::debug!("Reference sequence has {} bases", seq.len());
        Self { seq }
    }

    /// Sequence length.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// The bases.
    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }

    /// Base at a 1-based position.
    pub fn base(&self, pos: usize) -> Option<u8> {
        pos.checked_sub(1).and_then(|idx| self.seq.get(idx)).copied()
    }

    /// The 3-base window centred on 1-based position `pos`.
    ///
    /// [`None`] where the position is the first or last base, or outside the
    /// sequence, as no full context exists there.
    pub fn window(&self, pos: usize) -> Option<[u8; 3]> {
        if pos < 2 || pos >= self.seq.len() {
            return None;
        }
        let start = pos - 2;
        Some([self.seq[start], self.seq[start + 1], self.seq[start + 2]])
    }

    /// Count every 3-base window of the sequence.
    pub fn context_counts(&self) -> ContextCounts {
        ContextCounts::new(&self.seq)
    }
}
