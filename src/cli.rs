//! Command line interface, built using [`crate::clap` with `Derive`](https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html)
use std::fmt;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

/// Default normalisation is by context occurrence
pub const DEFAULT_RAW: bool = false;

/// Whether mutation reference bases are checked against the sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum RefCheck {
    /// Accept any reference base
    Lenient,
    /// Skip mutations whose reference base differs from the sequence
    Strict,
}

/// As text, for log messages
impl fmt::Display for RefCheck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Possible output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Ranked tab-separated table
    Table,
    /// Dataset of all 192 channels as JSON
    Json,
}

/// Options that apply to all subcommands
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[doc(hidden)]
    #[command(subcommand)]
    pub command: Commands,

    /// Show progress messages
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands and their specific options
#[derive(Subcommand)]
pub enum Commands {
    #[command(group(
        ArgGroup::new("input")
            .required(true)
            .args(["mutations", "mutation_file"]),
    ))]
    /// Compute a trinucleotide-context mutational spectrum
    Spectrum {
        /// Reference FASTA or plain sequence file (`-` for stdin)
        reference: String,

        /// Comma-separated mutations, e.g. "C241T, G3T"
        #[arg(short, long)]
        mutations: Option<String>,

        /// File of comma- or line-separated mutations
        #[arg(long)]
        mutation_file: Option<String>,

        /// Divide by the number of mutations rather than context occurrences
        #[arg(long, default_value_t = DEFAULT_RAW)]
        raw: bool,

        /// Check mutation reference bases against the sequence
        #[arg(long, value_enum, default_value_t = RefCheck::Lenient)]
        ref_check: RefCheck,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (omit to output to stdout)
        #[arg(short)]
        output: Option<String>,
    },
    /// Count the 3-base contexts of a reference sequence
    Contexts {
        /// Reference FASTA or plain sequence file (`-` for stdin)
        reference: String,

        /// Count flanking pairs (the normalisation denominators) instead
        #[arg(long, default_value_t = false)]
        flanks: bool,

        /// Output file (omit to output to stdout)
        #[arg(short)]
        output: Option<String>,
    },
}

/// Function to parse command line args into [`Args`] struct
pub fn cli_args() -> Args {
    Args::parse()
}
