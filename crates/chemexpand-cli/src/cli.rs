use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Spyros Gavriil",
    version,
    about = "chemexpand - Expand condensed chemical formulas, verify their parentheses and count their protons.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S parser.max-symbol-length=2
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand every formula into a flat, space-separated list of element symbols.
    Expand(ExpandArgs),
    /// Verify that the parentheses of every formula are balanced.
    Validate(ValidateArgs),
    /// Compute the total proton number of every formula.
    Protons(ProtonsArgs),
}

/// Options shared by the commands that parse formulas.
#[derive(Args, Debug, Clone, Default)]
pub struct ParseOptions {
    /// Stop at the first malformed line instead of skipping it.
    #[arg(long)]
    pub abort_on_error: bool,

    /// Override the maximum element symbol length (1 to 3).
    #[arg(long, value_name = "INT")]
    pub max_symbol_length: Option<usize>,
}

/// Arguments for the `expand` subcommand.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Path to the input file, one formula per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the expanded output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub parse: ParseOptions,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the input file, one formula per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `protons` subcommand.
#[derive(Args, Debug)]
pub struct ProtonsArgs {
    /// Path to the input file, one formula per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the proton count output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Periodic table file (`symbol atomicNumber` text, CSV or TOML).
    /// Defaults to the built-in table of 118 elements.
    #[arg(short = 't', long, value_name = "PATH")]
    pub periodic_table: Option<PathBuf>,

    /// Treat input lines as already-expanded symbol lists (output of `expand`).
    #[arg(long)]
    pub from_expanded: bool,

    #[command(flatten)]
    pub parse: ParseOptions,

    /// Override `policy.unknown-symbols` from the config file.
    #[command(flatten)]
    pub unknown_symbols: UnknownSymbolWarnings,
}

/// A group to handle mutually exclusive flags for reporting unknown element symbols.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct UnknownSymbolWarnings {
    /// Warn once per unknown element symbol (it still counts as 0 protons).
    #[arg(long)]
    pub warn_unknown: bool,
    /// Count unknown element symbols as 0 protons without warning.
    #[arg(long)]
    pub no_warn_unknown: bool,
}
