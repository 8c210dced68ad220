//! `kumactl decode` - show the typed form of a wire notification.

use anyhow::{Context as _, Result};
use colored::Colorize;
use kuma::{Details, Notification};
use tracing::debug;

use super::{input_name, read_input, Context};
use crate::cli::args::DecodeArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: &DecodeArgs) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let source = input_name(&args.input);

    let notification = if args.generic {
        Notification::decode_generic(&bytes)
    } else {
        Notification::decode(&bytes)
    }
    .with_context(|| format!("failed to decode notification from {source}"))?;
    debug!(source = %source, notification_type = notification.type_name(), "decoded");

    match ctx.output_format {
        OutputFormat::Pretty => print_pretty(&notification, ctx.verbose),
        OutputFormat::Json | OutputFormat::Yaml => ctx.emit(&notification.payload()?)?,
    }

    Ok(())
}

fn print_pretty(notification: &Notification, verbose: bool) {
    let envelope = &notification.envelope;
    let kind = match &notification.details {
        Details::Generic(_) if Details::is_known(notification.type_name()) => "untyped".yellow(),
        Details::Generic(_) => "unknown provider".yellow(),
        _ => "typed".green(),
    };

    println!(
        "{} {} {}",
        envelope.name.bold(),
        notification.type_name().cyan(),
        format!("({kind})").dimmed()
    );
    println!("  {notification}");

    if verbose {
        println!("  {} {}", "config:".bold(), envelope.config().dimmed());
    }
}
