//! Chunk output type.

use serde::{Deserialize, Serialize};

/// A trimmed slice of a document plus its position in it.
///
/// Offsets are UTF-16 code-unit indices into the original document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text content.
    pub text: String,
    /// Inclusive start offset.
    pub start_index: usize,
    /// Exclusive end offset.
    pub end_index: usize,
}

impl Chunk {
    /// Length in code units.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}
