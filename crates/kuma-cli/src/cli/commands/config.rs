//! `kumactl config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => ctx.emit(&config)?,
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "log_level:".bold(),
                config
                    .log_level
                    .as_deref()
                    .map_or_else(|| "(not set)".dimmed().to_string(), str::to_string)
            );
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "log_level" => {
            tracing_subscriber::EnvFilter::try_new(value)
                .map_err(|e| anyhow::anyhow!("Invalid log level {value:?}: {e}"))?;
            config.log_level = Some(value.to_string());
            println!("{} log_level set to {}.", "Success:".green().bold(), value.cyan());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {key}\n\n\
                 Available keys:\n  \
                 output_format - Default output format (pretty/json/yaml)\n  \
                 log_level     - Default log filter (e.g. warn, debug, kuma_core=trace)"
            );
        }
    }

    config.save()
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
