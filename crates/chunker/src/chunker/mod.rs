//! Window-advancing driver.
//!
//! Each iteration takes the window `[i, i + max_chars)`, pulls its end back to
//! the last newline when more text follows, trims whitespace from both edges,
//! and emits what is left. The next window starts `overlap_chars` units before
//! the point the cut resumes from, but always strictly after the start of the
//! chunk just produced (or of the window, when it produced none).

mod types;
mod window;

pub use types::Chunk;

use chunkline_core::ChunkConfig;
use tracing::{debug, trace, warn};

use window::Windows;

/// Chunk a string. Offsets in the result are UTF-16 code-unit indices.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    if text.is_empty() {
        return Vec::new();
    }
    let units: Vec<u16> = text.encode_utf16().collect();
    chunk_utf16(&units, config)
}

/// Chunk a UTF-16 code-unit buffer.
///
/// Never fails: empty input yields no chunks, and sizes that
/// [`ChunkConfig::validate`] would reject still terminate, producing small
/// or heavily overlapping chunks.
pub fn chunk_utf16(units: &[u16], config: &ChunkConfig) -> Vec<Chunk> {
    if units.is_empty() {
        return Vec::new();
    }
    if config.is_degenerate() {
        warn!(
            max_chars = config.max_chars,
            overlap_chars = config.overlap_chars,
            "chunking with degenerate window sizes"
        );
    }

    let mut chunks = Vec::with_capacity(units.len() / config.stride().max(1) + 2);
    chunks.extend(
        Windows::new(units, config)
            .inspect(|window| {
                trace!(
                    start = window.start,
                    cut = window.cut,
                    at_newline = window.at_newline,
                    interior = ?window.interior,
                    "window"
                )
            })
            .filter(|window| !window.interior.is_empty())
            .map(|window| Chunk {
                text: String::from_utf16_lossy(&units[window.interior.clone()]),
                start_index: window.interior.start,
                end_index: window.interior.end,
            }),
    );

    debug!(
        units = units.len(),
        chunks = chunks.len(),
        max_chars = config.max_chars,
        overlap_chars = config.overlap_chars,
        "chunked document"
    );
    chunks
}
