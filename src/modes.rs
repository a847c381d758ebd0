//! Main control of the CLI subcommands.
//!
//! Loads the input text, runs the library, reports warnings and writes the
//! output. Includes functions for `mutspec spectrum` and `mutspec contexts`.

use std::io::Write;

use crate::cli::{OutputFormat, RefCheck};
use crate::errors::MutSpecError;
use crate::io_utils::{read_mutation_file, read_text, set_ostream};
use crate::ref_seq::RefSeq;
use crate::spectrum::{compute_spectrum, SpectrumOpts};

/// Code for `mutspec spectrum`
///
/// Mutations come either directly from the command line, or from a file.
pub fn spectrum(
    reference: &str,
    mutations: &Option<String>,
    mutation_file: &Option<String>,
    raw: bool,
    ref_check: RefCheck,
    format: OutputFormat,
    output: &Option<String>,
) -> Result<(), MutSpecError> {
    let reference_text = read_text(reference)?;
    let mutations_text = match (mutations, mutation_file) {
        (Some(tokens), _) => tokens.clone(),
        (None, Some(path)) => read_mutation_file(path)?,
        (None, None) => String::new(),
    };

    let opts = SpectrumOpts {
        normalise: !raw,
        ref_check,
    };
    log::info!(
        "Computing spectrum: normalise={} ref_check={}",
        opts.normalise,
        opts.ref_check
    );
    let result = compute_spectrum(&reference_text, &mutations_text, &opts);
    for warning in &result.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "{} of {} mutations counted",
        result.spectrum.n_counted(),
        result.n_tokens
    );

    let mut out_stream = set_ostream(output)?;
    let out_name = output.as_deref().unwrap_or("-");
    match format {
        OutputFormat::Table => {
            log::info!("Writing table");
            writeln!(out_stream, "{}", result.table)
                .map_err(|err| MutSpecError::io(out_name, err))?;
        }
        OutputFormat::Json => {
            log::info!("Writing dataset");
            writeln!(out_stream, "{}", result.dataset.to_json()?)
                .map_err(|err| MutSpecError::io(out_name, err))?;
        }
    }
    out_stream
        .flush()
        .map_err(|err| MutSpecError::io(out_name, err))
}

/// Code for `mutspec contexts`
///
/// Writes `context\tcount` lines, sorted by context, for either the
/// trinucleotides or the flanking pairs of the reference.
pub fn contexts(reference: &str, flanks: bool, output: &Option<String>) -> Result<(), MutSpecError> {
    let ref_seq = RefSeq::from_text(&read_text(reference)?);
    let counts = ref_seq.context_counts();
    log::info!(
        "{} windows, {} distinct trinucleotides",
        counts.n_windows(),
        counts.n_distinct()
    );

    let mut lines = vec!["context\tcount".to_string()];
    if flanks {
        for (context, count) in counts.sorted_flanks() {
            lines.push(format!("{context}\t{count}"));
        }
    } else {
        for (tri, count) in counts.sorted_trinucleotides() {
            lines.push(format!("{}\t{count}", String::from_utf8_lossy(&tri)));
        }
    }

    let out_name = output.as_deref().unwrap_or("-");
    let mut out_stream = set_ostream(output)?;
    writeln!(out_stream, "{}", lines.join("\n")).map_err(|err| MutSpecError::io(out_name, err))?;
    out_stream
        .flush()
        .map_err(|err| MutSpecError::io(out_name, err))
}
