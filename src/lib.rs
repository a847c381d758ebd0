//! Mutational spectra of point mutations in their trinucleotide context.
//!
//! Given a reference sequence and a list of single base substitutions,
//! `mutspec` finds the bases either side of each mutated position (its
//! *context*), counts mutations per (context, substitution type) bucket, and
//! reports each bucket as a percentage of the whole spectrum. By default counts
//! are normalised by how often each context occurs in the reference, which
//! corrects for the background base composition.
//!
//! ## Details
//!
//! The context of a mutation is the 3-base window centred on it with the middle
//! base removed. For example, with reference `ACGTAC` the mutation `G3T` has
//! window `CGT`, so context `CT`, and is counted in bucket `CT (G>T)`.
//!
//! | Mutation | Window | Context | Bucket     |
//! |----------|--------|---------|------------|
//! | `C2T`    | `ACG`  | `AG`    | `AG (C>T)` |
//! | `G3T`    | `CGT`  | `CT`    | `CT (G>T)` |
//! | `T4C`    | `GTA`  | `GA`    | `GA (T>C)` |
//!
//! Over `{A, C, G, T}` there are 16 contexts and 12 substitution types, so 192
//! buckets (channels). Percentages are computed per bucket, either
//! - as `count / occurrences(context)`, where occurrences is the number of
//!   3-base windows of the reference with the same flanking bases, or
//! - as `count / mutations submitted` (`--raw`),
//!
//! and then rescaled so that all buckets sum to 100%.
//!
//! Problems with the input never stop a run. Malformed tokens, mutations at the
//! first or last base of the reference (which have no context), and buckets
//! with no denominator are skipped, and a warning is reported for each.
//!
//! # Usage
//!
//! Details and progress messages are written on STDERR. Warnings are always
//! shown; you can see more logging information by adding the verbose flag `-v`.
//!
//! ## mutspec spectrum
//!
//! Pass the reference (FASTA, or a plain sequence) as the first argument, and
//! the mutations as a comma-separated list with `-m`:
//! ```bash
//! mutspec spectrum sars-cov-2.fa -m "C241T, C3037T, A23403G, C14408T"
//! ```
//! This writes a table to STDOUT, highest percentage first:
//! ```text
//! Context_Mutation        Percentage
//! TC (C>T)        ...
//! ```
//!
//! Mutations can instead be read from a file with `--mutation-file`, which may
//! list them over several lines (lines starting with `#` are ignored).
//! `--raw` turns off context normalisation. `--ref-check strict` skips mutations
//! whose reference base does not match the sequence (the default, `lenient`,
//! accepts them). `--format json` writes all 192 channels, including empty
//! ones, with their display position, label and colour, ready for plotting.
//! Use `-o` to write to a file rather than STDOUT.
//!
//! ## mutspec contexts
//!
//! Count each 3-base context in the reference:
//! ```bash
//! mutspec contexts ref.fa
//! ```
//! With `--flanks`, count the flanking pairs instead: these are the
//! denominators used by `spectrum` when normalising.
//!
//! # API usage
//!
//! See the submodule documentation linked below.
//!
//! To compute a spectrum in other rust code:
//! ```rust
//! use mutspec::spectrum::{compute_spectrum, SpectrumOpts};
//!
//! let reference = ">test\nACGT\nACGT\n";
//! let mutations = "C2T, G3A, C6T, G7A, T4C";
//! let result = compute_spectrum(reference, mutations, &SpectrumOpts::default());
//!
//! // Each bucket is all of its context's occurrences, so they tie
//! println!("{}", result.table);
//! assert!((result.total_percentage() - 100.0).abs() < 1e-6);
//!
//! // Dense dataset for plotting
//! assert_eq!(result.dataset.len(), 192);
//! let json = result.dataset.to_json().expect("Could not serialise dataset");
//! assert!(json.starts_with('['));
//!
//! // Problems are returned, not raised
//! for warning in &result.warnings {
//!     eprintln!("{warning}");
//! }
//! ```
//!
//! Steps can also be run separately:
//! ```rust
//! use mutspec::cli::RefCheck;
//! use mutspec::mutation::parse_mutations;
//! use mutspec::ref_seq::RefSeq;
//! use mutspec::spectrum::MutSpectrum;
//! use mutspec::spectrum::normalise::Denominator;
//!
//! let ref_seq = RefSeq::from_text("ACGTAC");
//! let parsed = parse_mutations("G3T, G3T, A1C");
//! let (mut spectrum, warnings) =
//!     MutSpectrum::aggregate(&ref_seq, parsed.mutations(), RefCheck::Lenient);
//! assert_eq!(warnings.len(), 1);
//!
//! let counts = ref_seq.context_counts();
//! spectrum.normalise(&Denominator::Context(&counts));
//! for (key, stats) in spectrum.ranked() {
//!     println!("{key}\t{}\t{:.2}", stats.count, stats.percentage);
//! }
//! ```

#![warn(missing_docs)]
use std::process;
use std::time::Instant;

pub mod channel;
pub mod errors;
pub mod mutation;
pub mod ref_seq;
pub mod spectrum;

pub mod modes;
use crate::modes::*;

pub mod cli;
use crate::cli::*;

pub mod io_utils;

#[doc(hidden)]
pub fn main() {
    let args = cli_args();
    let level = if args.verbose {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).unwrap();

    eprintln!("mutspec: trinucleotide-context mutational spectra");
    let start = Instant::now();
    let status = match &args.command {
        Commands::Spectrum {
            reference,
            mutations,
            mutation_file,
            raw,
            ref_check,
            format,
            output,
        } => spectrum(
            reference,
            mutations,
            mutation_file,
            *raw,
            *ref_check,
            *format,
            output,
        ),
        Commands::Contexts {
            reference,
            flanks,
            output,
        } => contexts(reference, *flanks, output),
    };
    if let Err(err) = status {
        log::error!("{err}");
        process::exit(1);
    }
    let end = Instant::now();

    eprintln!(
        "mutspec done in {}ms",
        end.duration_since(start).as_millis()
    );
    log::info!("Complete");
}
