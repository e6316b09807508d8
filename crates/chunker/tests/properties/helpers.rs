use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chunkline_chunker::whitespace::is_whitespace;
use chunkline_chunker::{chunk_utf16, Chunk, ChunkConfig};

/// Pieces documents are assembled from. Mixes ASCII, Latin-1, CJK, astral
/// characters, and every kind of break the chunker has to see through.
const PIECES: &[&str] = &[
    "a", "b", "word", "lorem", "ipsum", "Z", "7", "\u{e9}", "\u{6f22}\u{5b57}", "\u{1F600}",
    " ", " ", "  ", "\t", "\n", "\n", "\n\n", "\r\n", "\u{00A0}", "\u{2003}", "\u{3000}",
    "\u{2028}", "\u{200B}", "#", "-", ".",
];

/// Generate a document of `pieces` pieces. The same seed always yields the
/// same document, so failures reproduce from the seed alone.
pub fn make_document(seed: u64, pieces: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..pieces)
        .map(|_| PIECES[rng.gen_range(0..PIECES.len())])
        .collect()
}

/// Seeds and sizes every property is checked against.
pub fn corpus() -> Vec<(u64, String)> {
    (0..24u64)
        .map(|seed| (seed, make_document(seed, 40 + (seed as usize * 37) % 400)))
        .collect()
}

/// Window sizes covering tiny, typical, and degenerate settings.
pub fn configs() -> Vec<ChunkConfig> {
    vec![
        ChunkConfig::new(1, 0),
        ChunkConfig::new(2, 1),
        ChunkConfig::new(7, 0),
        ChunkConfig::new(7, 3),
        ChunkConfig::new(16, 4),
        ChunkConfig::new(33, 10),
        ChunkConfig::new(64, 0),
        ChunkConfig::new(128, 32),
        ChunkConfig::new(4, 4),
        ChunkConfig::new(3, 9),
        ChunkConfig::new(10_000, 0),
    ]
}

pub fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Chunk `units`, running the checks every result must pass regardless of
/// the property under test.
pub fn chunk_checked(units: &[u16], config: &ChunkConfig) -> Vec<Chunk> {
    let chunks = chunk_utf16(units, config);
    for chunk in &chunks {
        assert!(chunk.start_index < chunk.end_index, "empty chunk {chunk:?}");
        assert!(chunk.end_index <= units.len(), "chunk past end {chunk:?}");
        assert_eq!(
            chunk.text,
            String::from_utf16_lossy(&units[chunk.start_index..chunk.end_index]),
            "text does not match its offsets"
        );
    }
    chunks
}

pub fn is_content(unit: u16) -> bool {
    !is_whitespace(unit)
}
