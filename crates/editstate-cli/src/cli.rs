//! CLI argument definitions for the editstate binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "editstate",
    version,
    about = "Validate edits the way a form would",
    long_about = "Validate raw user input with fluent validator chains.\n\n\
                  Rejected edits keep the last valid value and report why."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a sequence of edits to a comment box limited in length.
    Comment(CommentArgs),

    /// Run a validator chain over one raw value.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct CommentArgs {
    /// Edits applied in order, starting from "Initial value".
    #[arg(value_name = "EDIT")]
    pub edits: Vec<String>,

    /// Comments must be shorter than this many characters.
    #[arg(long = "limit", default_value_t = 20)]
    pub limit: usize,

    /// Reset after the last edit, discarding any rejected input.
    #[arg(long = "reset")]
    pub reset: bool,

    /// Print the session as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Raw input to validate.
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: String,

    /// Conversion applied before any check.
    #[arg(long = "kind", value_enum, default_value = "string")]
    pub kind: KindArg,

    /// Which whitespace to strip from the input.
    #[arg(long = "trim", value_enum)]
    pub trim: Option<TrimArg>,

    /// Reject empty, zero and false values.
    #[arg(long = "required")]
    pub required: bool,

    /// Value must be longer than this many characters.
    #[arg(long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,

    /// Value must be shorter than this many characters.
    #[arg(long = "max-length", value_name = "N")]
    pub max_length: Option<usize>,

    /// Make --min-length and --max-length inclusive.
    #[arg(long = "allow-equal")]
    pub allow_equal: bool,

    /// Regular expression the value must match.
    #[arg(long = "pattern", value_name = "REGEX")]
    pub pattern: Option<String>,

    #[arg(long = "lower-case")]
    pub lower_case: bool,

    #[arg(long = "upper-case")]
    pub upper_case: bool,

    /// Only digits with at most one decimal point.
    #[arg(long = "digit")]
    pub digit: bool,

    #[arg(long = "gt", value_name = "N", allow_hyphen_values = true)]
    pub greater_than: Option<f64>,

    #[arg(long = "ge", value_name = "N", allow_hyphen_values = true)]
    pub greater_or_equal: Option<f64>,

    #[arg(long = "lt", value_name = "N", allow_hyphen_values = true)]
    pub less_than: Option<f64>,

    #[arg(long = "le", value_name = "N", allow_hyphen_values = true)]
    pub less_or_equal: Option<f64>,

    /// Message reported instead of the default for any failing check.
    #[arg(long = "message", value_name = "TEXT")]
    pub message: Option<String>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI validator kinds.
#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    String,
    Int,
    Float,
    Url,
}

/// CLI trim choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TrimArg {
    Both,
    Left,
    Right,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
