//! Newline-aware, overlapping text chunking.
//!
//! Splits a document into windows of at most `max_chars` UTF-16 code units,
//! preferring to cut at the last newline inside each window, trimming
//! whitespace from both edges, and starting each window `overlap_chars` units
//! before the previous cut. Newline search and trimming scan whole register
//! blocks at a time; see [`simd`].

pub mod boundary;
mod chunker;
pub mod simd;
pub mod trim;
pub mod whitespace;

pub use chunker::{chunk_text, chunk_utf16, Chunk};
pub use chunkline_core::ChunkConfig;
