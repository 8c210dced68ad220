//! `kumactl providers` - list the discriminators with a dedicated schema.

use anyhow::Result;
use colored::Colorize;
use kuma::PROVIDER_TYPES;

use super::Context;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context) -> Result<()> {
    let mut types: Vec<&str> = PROVIDER_TYPES.to_vec();
    types.sort_unstable_by_key(|t| t.to_lowercase());

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{} ({})", "Providers".bold(), types.len());
            for t in types {
                println!("  {t}");
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => ctx.emit(&types)?,
    }

    Ok(())
}
