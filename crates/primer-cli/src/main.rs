//! Primer - CLI
//!
//! Prints the primitive-type diagnostics report to standard output.
//! Command-line arguments are accepted and ignored.

use std::env;
use std::io;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use primer_core::{Diagnostics, PrimerConfig};

fn main() -> Result<()> {
    setup_logging();

    let ignored = env::args().skip(1).count();
    if ignored > 0 {
        debug!(count = ignored, "ignoring command-line arguments");
    }

    let diagnostics = Diagnostics::new(PrimerConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    diagnostics
        .write_to(&mut out)
        .context("failed to write diagnostics to stdout")?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
