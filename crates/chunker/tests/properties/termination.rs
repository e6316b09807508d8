use chunkline_chunker::{chunk_text, ChunkConfig};

use crate::helpers::{chunk_checked, corpus, make_document, units};

#[test]
fn test_chunk_count_is_bounded_by_length() {
    for (seed, text) in corpus() {
        let units = units(&text);
        for max in 0..6 {
            for overlap in 0..10 {
                let config = ChunkConfig::new(max, overlap);
                let chunks = chunk_checked(&units, &config);
                assert!(chunks.len() <= units.len(), "seed {seed} {config:?}");
            }
        }
    }
}

#[test]
fn test_zero_max_chars_yields_nothing() {
    for (_, text) in corpus() {
        for overlap in [0, 1, 100] {
            assert!(chunk_text(&text, &ChunkConfig::new(0, overlap)).is_empty());
        }
    }
}

#[test]
fn test_huge_sizes_do_not_overflow() {
    let text = make_document(99, 200);
    let units = units(&text);
    for config in [
        ChunkConfig::new(usize::MAX, 0),
        ChunkConfig::new(usize::MAX, usize::MAX),
        ChunkConfig::new(usize::MAX - 1, 7),
        ChunkConfig::new(3, usize::MAX),
    ] {
        let chunks = chunk_checked(&units, &config);
        assert!(chunks.len() <= units.len(), "{config:?}");
    }
}

#[test]
fn test_results_are_deterministic() {
    let text = make_document(7, 2_000);
    let config = ChunkConfig::new(96, 24);
    assert_eq!(chunk_text(&text, &config), chunk_text(&text, &config));
}

#[test]
fn test_generated_documents_reproduce_from_seed() {
    assert_eq!(make_document(11, 300), make_document(11, 300));
    assert_ne!(make_document(11, 300), make_document(12, 300));
}
