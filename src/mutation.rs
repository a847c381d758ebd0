//! Point mutations, and parsing them from comma-separated text.
//!
//! Each token is `<reference base><1-based position><alternate base>`, for
//! example `C241T`. Whitespace around tokens is ignored. Malformed tokens are
//! skipped and reported, the rest of the list is still parsed.
//!
//! ```
//! use mutspec::mutation::parse_mutations;
//!
//! let parsed = parse_mutations("C241T, G3T ,X5");
//! assert_eq!(parsed.n_tokens(), 3);
//! assert_eq!(parsed.mutations().len(), 2);
//! assert_eq!(parsed.mutations()[0].pos, 241);
//! assert_eq!(parsed.warnings().len(), 1);
//! ```

use std::fmt;

use regex::Regex;

use crate::errors::SpectrumWarning;

/// A single base substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mutation {
    /// Reference base, as written in the token
    pub ref_base: u8,
    /// 1-based position in the reference
    pub pos: usize,
    /// Alternate base
    pub alt_base: u8,
}

impl Mutation {
    /// New mutation at a 1-based position.
    pub fn new(ref_base: u8, pos: usize, alt_base: u8) -> Self {
        Self {
            ref_base,
            pos,
            alt_base,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.ref_base as char, self.pos, self.alt_base as char
        )
    }
}

/// Mutations parsed from a token list, with the tokens that were skipped.
#[derive(Debug, Clone, Default)]
pub struct MutationList {
    mutations: Vec<Mutation>,
    n_tokens: usize,
    warnings: Vec<SpectrumWarning>,
}

impl MutationList {
    /// Successfully parsed mutations, in input order.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Number of tokens submitted, including malformed ones.
    pub fn n_tokens(&self) -> usize {
        self.n_tokens
    }

    /// One [`SpectrumWarning::MalformedMutationToken`] per skipped token.
    pub fn warnings(&self) -> &[SpectrumWarning] {
        &self.warnings
    }

    /// Whether no tokens were given at all.
    pub fn is_empty(&self) -> bool {
        self.n_tokens == 0
    }

    pub(crate) fn into_parts(self) -> (Vec<Mutation>, usize, Vec<SpectrumWarning>) {
        (self.mutations, self.n_tokens, self.warnings)
    }
}

/// Parse a comma-separated list of mutation tokens.
///
/// Text that is empty or only whitespace holds no tokens. Otherwise every
/// comma-separated piece is a token, so a trailing comma gives an empty
/// (malformed) token.
pub fn parse_mutations(text: &str) -> MutationList {
    let mut list = MutationList::default();
    if text.trim().is_empty() {
        return list;
    }

    let token_re = Regex::new(r"^([A-Za-z])([0-9]+)([A-Za-z])$").unwrap();
    for token in text.split(',').map(str::trim) {
        list.n_tokens += 1;
        match parse_token(&token_re, token) {
            Some(mutation) => list.mutations.push(mutation),
            None => {
                log::debug!("Skipping malformed token '{token}'");
                list.warnings.push(SpectrumWarning::MalformedMutationToken {
                    token: token.to_string(),
                })
            }
        }
    }
    log::info!(
        "Parsed {} of {} mutation tokens",
        list.mutations.len(),
        list.n_tokens
    );
    list
}

fn parse_token(token_re: &Regex, token: &str) -> Option<Mutation> {
    let caps = token_re.captures(token)?;
    // Too many digits for usize fails here
    let pos = caps[2].parse::<usize>().ok()?;
    Some(Mutation::new(caps[1].as_bytes()[0], pos, caps[3].as_bytes()[0]))
}
