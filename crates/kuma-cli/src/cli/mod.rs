//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    init_tracing(cli.verbose, config.log_level.as_deref());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = commands::Context {
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Decode(args) => commands::decode::execute(&ctx, &args),
        Commands::Encode(args) => commands::encode::execute(&ctx, &args),
        Commands::Payload(args) => commands::payload::execute(&ctx, &args),
        Commands::Providers => commands::providers::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Logs go to stderr so they never mix with command output.
/// `KUMA_LOG`, then `RUST_LOG`, take precedence over `--verbose` and the configured level.
fn init_tracing(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    };

    let filter = EnvFilter::try_from_env("KUMA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only when a global subscriber is already installed.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
