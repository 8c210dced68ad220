//! Command implementations.

pub mod config;
pub mod decode;
pub mod encode;
pub mod payload;
pub mod providers;

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::cli::args::InputArgs;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Print a serializable value as JSON or YAML.
    ///
    /// Pretty output is command-specific; callers handle it before this.
    pub fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.output_format {
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
            OutputFormat::Json | OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
        }
        Ok(())
    }
}

/// Read the whole input named by `args`, or stdin.
pub fn read_input(args: &InputArgs) -> Result<Vec<u8>> {
    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Human name of the input for error messages.
pub fn input_name(args: &InputArgs) -> String {
    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}
