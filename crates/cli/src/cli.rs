use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use chunkline_core::ChunkConfig;

/// Split documents into newline-aware, overlapping chunks.
///
/// Sizes default to the environment configuration (`CHUNK_MAX_CHARACTERS`,
/// `CHUNK_CHARACTER_OVERLAP`, optionally prefixed by the active profile).
#[derive(Parser, Debug)]
#[command(name = "chunkline", about = "Newline-aware overlapping text chunker")]
pub struct CliArgs {
    /// Input file; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Maximum window length in UTF-16 code units
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Overlap between consecutive windows in UTF-16 code units
    #[arg(long)]
    pub overlap_chars: Option<usize>,

    /// Config profile (falls back to CHUNKLINE_PROFILE)
    #[arg(long)]
    pub profile: Option<String>,

    /// Treat input as a document conversion response and chunk its content
    #[arg(long)]
    pub conversion_json: bool,

    /// Output format
    #[arg(long, value_enum, env = "CHUNKLINE_FORMAT", default_value_t = OutputFormat::Jsonl)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// A single JSON array
    Json,
    /// Offsets and text, for reading
    Text,
}

impl CliArgs {
    /// Command-line sizes win over the environment.
    pub fn apply_overrides(&self, chunking: &mut ChunkConfig) {
        if let Some(max_chars) = self.max_chars {
            chunking.max_chars = max_chars;
        }
        if let Some(overlap_chars) = self.overlap_chars {
            chunking.overlap_chars = overlap_chars;
        }
    }
}
