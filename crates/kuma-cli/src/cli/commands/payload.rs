//! `kumactl payload` - flatten a wire notification.

use anyhow::{Context as _, Result};
use colored::Colorize;
use kuma::Notification;
use serde_json::{Map, Value};

use super::{input_name, read_input, Context};
use crate::cli::args::InputArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: &InputArgs) -> Result<()> {
    let bytes = read_input(args)?;
    let notification = Notification::decode(&bytes)
        .with_context(|| format!("failed to decode notification from {}", input_name(args)))?;
    let payload = notification.payload()?;

    match ctx.output_format {
        OutputFormat::Pretty => print_pretty(&payload),
        OutputFormat::Json | OutputFormat::Yaml => ctx.emit(&payload)?,
    }

    Ok(())
}

fn print_pretty(payload: &Map<String, Value>) {
    let width = payload.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in payload {
        let label = format!("{key}:");
        let pad = " ".repeat(width + 1 - label.len());
        println!("  {}{pad}  {value}", label.bold());
    }
}
