// File: crates/statchart/src/main.rs
// Summary: Reads a JSON array of player stats from stdin, writes the five chart PNGs to the
// working directory, then reports completion on stdout for the calling process.

use std::io::{self, Read};

use anyhow::{Context, Result};
use statchart::{generate_from_json, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the completion line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut raw = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut raw)
        .context("reading player stats from stdin")?;

    let written = generate_from_json(&raw, Config::default()).context("generating charts")?;
    tracing::debug!(files = written.len(), "all charts written");

    println!("Charts generated successfully");
    Ok(())
}
