//! Common helper functions for loading input text and setting output
//!
//! The library itself does no I/O; these functions are used by the
//! subcommands to get the reference and mutation text into memory, and to
//! choose where results are written.

use std::fs::File;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::Path;

use crate::errors::MutSpecError;

/// Read a whole text file, or stdin if `path` is `-`.
pub fn read_text(path: &str) -> Result<String, MutSpecError> {
    let mut text = String::new();
    if path == "-" {
        log::info!("Reading from stdin");
        stdin()
            .read_to_string(&mut text)
            .map_err(|err| MutSpecError::io(path, err))?;
    } else {
        log::info!("Reading {path}");
        File::open(Path::new(path))
            .and_then(|mut f| f.read_to_string(&mut text))
            .map_err(|err| MutSpecError::io(path, err))?;
    }
    Ok(text)
}

/// Read a mutation file as a single comma-separated list.
///
/// See [`join_mutation_lines`] for the accepted layout.
pub fn read_mutation_file(path: &str) -> Result<String, MutSpecError> {
    read_text(path).map(|text| join_mutation_lines(&text))
}

/// Join lines of mutation tokens with commas.
///
/// Blank lines and lines starting with `#` are ignored, and lines may
/// themselves hold comma-separated tokens. A trailing comma on a line is
/// dropped.
pub fn join_mutation_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_suffix(',').unwrap_or(line))
        .collect::<Vec<&str>>()
        .join(",")
}

/// Set a buffered stream to write to.
///
/// Either a file (if [`Some`]) or stdout otherwise (if [`None`]).
pub fn set_ostream(oprefix: &Option<String>) -> Result<BufWriter<Box<dyn Write>>, MutSpecError> {
    let out_writer = match oprefix {
        Some(prefix) => {
            let path = Path::new(prefix);
            let file = File::create(path).map_err(|err| MutSpecError::io(path, err))?;
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(stdout()) as Box<dyn Write>,
    };
    Ok(BufWriter::new(out_writer))
}
