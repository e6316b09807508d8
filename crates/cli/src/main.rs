mod cli;
mod input;
mod output;

use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use chunkline_chunker::{chunk_text, whitespace};
use chunkline_core::config::{load_dotenv, Config};

use crate::cli::CliArgs;
use crate::input::{document_text, Source};

fn main() -> Result<()> {
    // .env may carry RUST_LOG, so load it before the subscriber reads the filter.
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut config = match args.profile.as_deref() {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    args.apply_overrides(&mut config.chunking);
    config.log_summary();
    config
        .chunking
        .validate()
        .context("invalid chunking configuration")?;

    let source = Source::from_arg(args.input.as_deref());
    info!(source = %source, conversion_json = args.conversion_json, "Reading input");
    let raw = source.read_to_string()?;
    let text = document_text(raw, args.conversion_json)?;

    whitespace::warm_up();
    let chunks = chunk_text(&text, &config.chunking);
    info!(chunks = chunks.len(), "Chunked input");

    let stdout = std::io::stdout();
    output::write_chunks(BufWriter::new(stdout.lock()), &chunks, args.format)
        .context("failed to write chunks")?;
    Ok(())
}
