//! `kumactl encode` - wrap a flat payload into the wire form.

use anyhow::{Context as _, Result};
use kuma::Notification;
use serde_json::{Map, Value};

use super::{input_name, read_input, Context};
use crate::cli::args::InputArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: &InputArgs) -> Result<()> {
    let bytes = read_input(args)?;
    let source = input_name(args);

    let payload: Map<String, Value> = serde_json::from_slice(&bytes)
        .with_context(|| format!("{source} is not a JSON object"))?;
    let notification = Notification::from_payload(&payload)
        .with_context(|| format!("invalid notification payload in {source}"))?;
    let wire = notification.encode()?;

    match ctx.output_format {
        OutputFormat::Yaml => {
            let value: Value = serde_json::from_slice(&wire)?;
            ctx.emit(&value)?;
        }
        OutputFormat::Json | OutputFormat::Pretty => println!("{}", String::from_utf8(wire)?),
    }

    Ok(())
}
