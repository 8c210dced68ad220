//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and convert Uptime Kuma notification payloads
///
/// Reads from FILE, or from stdin when FILE is omitted or `-`.
#[derive(Parser, Debug)]
#[command(name = "kumactl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log decoding steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a wire notification and show its typed form
    Decode(DecodeArgs),

    /// Encode a flat payload into the wire form
    Encode(InputArgs),

    /// Flatten a wire notification into the add/edit payload
    Payload(InputArgs),

    /// List the provider discriminators with a dedicated schema
    Providers,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file (stdin if omitted or `-`)
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep provider fields as an untyped map
    #[arg(long)]
    pub generic: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (output_format, log_level)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
