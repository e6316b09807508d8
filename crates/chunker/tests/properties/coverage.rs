use crate::helpers::{chunk_checked, configs, corpus, is_content, units};

#[test]
fn test_every_content_unit_is_covered() {
    for (seed, text) in corpus() {
        let units = units(&text);
        for config in configs() {
            let chunks = chunk_checked(&units, &config);
            let mut covered = vec![false; units.len()];
            for chunk in &chunks {
                covered[chunk.start_index..chunk.end_index].fill(true);
            }
            for (i, &unit) in units.iter().enumerate() {
                if is_content(unit) {
                    assert!(
                        covered[i],
                        "seed {seed} {config:?}: unit {i} ({unit:#06X}) dropped"
                    );
                }
            }
        }
    }
}

#[test]
fn test_whitespace_only_documents_produce_nothing() {
    let documents = [" ", "\n", "\n\n\n", " \t \r\n ", "\u{3000}\u{2003}\u{00A0}\u{2028}"];
    for text in documents {
        let units = units(&text.repeat(20));
        for config in configs() {
            assert!(chunk_checked(&units, &config).is_empty(), "{text:?} {config:?}");
        }
    }
}

#[test]
fn test_single_window_document_is_one_trimmed_chunk() {
    for (seed, text) in corpus() {
        let units = units(&text);
        let first = units.iter().position(|&u| is_content(u));
        let last = units.iter().rposition(|&u| is_content(u));
        let config = chunkline_chunker::ChunkConfig::new(units.len().max(1), 0);
        let chunks = chunk_checked(&units, &config);
        match (first, last) {
            (Some(first), Some(last)) => {
                assert_eq!(chunks.len(), 1, "seed {seed}");
                assert_eq!(chunks[0].start_index, first);
                assert_eq!(chunks[0].end_index, last + 1);
            }
            _ => assert!(chunks.is_empty(), "seed {seed}"),
        }
    }
}
