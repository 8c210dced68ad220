//! kumactl - inspect and convert Uptime Kuma notification payloads.

use anyhow::Result;

fn main() -> Result<()> {
    kuma_cli::run()
}
