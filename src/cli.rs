use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::Bounds;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqsieve version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   tools for filtering fastq reads and transforming sequences";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// write log output to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter reads of a .fastq file by length, GC content and mean quality
    #[command(arg_required_else_help = true)]
    Filter {
        /// the input .fastq file
        #[arg(long)]
        input: PathBuf,

        /// the output .fastq file; missing parent directories are created
        #[arg(long)]
        output: PathBuf,

        /// keep reads whose GC percentage lies within the closed interval [a,b],
        /// given as `a,b`. a single value `x` is shorthand for `0,x`.
        #[arg(
            long = "gc_bounds",
            value_parser = |x: &str| ArgBounds::try_from(x),
            default_value = "0,100",
            verbatim_doc_comment
        )]
        gc_bounds: ArgBounds,

        /// keep reads whose length lies within the closed interval [a,b],
        /// given as `a,b`. a single value `x` is shorthand for `0,x`.
        #[arg(
            long = "length_bounds",
            value_parser = |x: &str| ArgBounds::try_from(x),
            default_value = "0,4294967296",
            verbatim_doc_comment
        )]
        length_bounds: ArgBounds,

        /// keep reads whose mean phred quality is at least this value
        #[arg(long = "quality_ths", default_value_t = 0.0)]
        quality_ths: f64,
    },

    /// Apply a transform to one or more nucleotide sequences
    #[command(arg_required_else_help = true)]
    Tool {
        /// one of: transcribe, reverse, complement, reverse_complement
        procedure: String,

        /// the sequences to transform
        #[arg(required = true)]
        seqs: Vec<String>,
    },

    /// Join multi-line FASTA sequences onto single lines
    #[command(arg_required_else_help = true)]
    FastaOneline {
        /// the input .fasta file
        #[arg(long)]
        input: PathBuf,

        /// the output .fasta file
        #[arg(long)]
        output: PathBuf,
    },

    /// Extract the leading hit description from each alignment section of a
    /// plain-text BLAST report
    #[command(arg_required_else_help = true)]
    BlastHits {
        /// the BLAST report
        #[arg(long)]
        input: PathBuf,

        /// the output file, one description per line
        #[arg(long)]
        output: PathBuf,
    },
}

/// A closed interval as it appears on the command line: either `a,b` or a
/// bare scalar `x`, which is shorthand for `0,x`.
#[derive(Copy, Clone, Debug)]
pub struct ArgBounds {
    pub min: f64,
    pub max: f64,
}

/// Error type for parsing a bounds string.
#[derive(Debug)]
pub struct ParseBoundsErr(String);

impl std::fmt::Display for ParseBoundsErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid bounds format: {}", self.0)
    }
}

impl std::error::Error for ParseBoundsErr {}

fn parse_endpoint(s: &str, unbounded: &str, infinity: f64) -> Result<f64, ParseBoundsErr> {
    if s == unbounded {
        return Ok(infinity);
    }
    s.parse::<f64>().map_err(|_| {
        ParseBoundsErr(format!(
            "Invalid value: '{s}' (should be any float or `{unbounded}`)"
        ))
    })
}

impl<'a> TryFrom<&'a str> for ArgBounds {
    type Error = ParseBoundsErr;

    fn try_from(arg: &'a str) -> Result<ArgBounds, Self::Error> {
        let arg_lc = arg.to_lowercase();
        let parts: Vec<&str> = arg_lc.split(',').collect();

        match parts.as_slice() {
            [single] => {
                let max = parse_endpoint(single.trim(), "inf", f64::INFINITY)?;
                Ok(ArgBounds { min: 0.0, max })
            }
            [min, max] => Ok(ArgBounds {
                min: parse_endpoint(min.trim(), "-inf", f64::NEG_INFINITY)?,
                max: parse_endpoint(max.trim(), "inf", f64::INFINITY)?,
            }),
            _ => Err(ParseBoundsErr(indoc::formatdoc! {"
            Expected format '<max>' or '<min>,<max>', got '{arg}', as in:
              --gc_bounds 60
              --gc_bounds 40,60
              --length_bounds 0,inf
            "})),
        }
    }
}

impl From<ArgBounds> for Bounds {
    fn from(arg: ArgBounds) -> Self {
        Bounds::new(arg.min, arg.max)
    }
}
