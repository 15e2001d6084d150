use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "RInChI CLI - Decompose RInChI reaction identifiers into per-molecule InChIs and encode Base26 key blocks.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a RInChI (and optionally its RAuxInfo) into standalone InChI components.
    Decompose(DecomposeArgs),
    /// Encode digest bits as Base26 letters, as used in RInChI and InChI keys.
    Key(KeyArgs),
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per component
    #[default]
    Text,
    /// A single JSON document including the status log
    Json,
}

/// Arguments for the `decompose` subcommand.
#[derive(Args, Debug)]
pub struct DecomposeArgs {
    // --- Input ---
    /// The RInChI string to decompose.
    #[arg(
        short,
        long,
        value_name = "RINCHI",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub rinchi: Option<String>,

    /// The RAuxInfo string belonging to the RInChI. Omit when none is available.
    #[arg(short, long, value_name = "RAUXINFO", conflicts_with = "input")]
    pub auxinfo: Option<String>,

    /// Read the RInChI and an optional RAuxInfo from a file, one per line.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overriding `output.format` from the config file.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file and flags.
    /// Can be used multiple times. Example: -S format.inchi-header=InChI=1/
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `key` subcommand. Exactly one of the options must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// Hex-encoded digest (at least 9 bytes); prints its 14-letter major block.
    #[arg(short, long, value_name = "HEX")]
    pub digest: Option<String>,

    /// Print the triplet for a 14-bit index.
    #[arg(long, value_name = "INDEX")]
    pub triplet: Option<u32>,

    /// Print the doublet for an index below 676.
    #[arg(long, value_name = "INDEX")]
    pub doublet: Option<u32>,
}
