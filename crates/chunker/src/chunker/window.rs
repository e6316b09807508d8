//! Raw window iteration.

use std::ops::Range;

use chunkline_core::ChunkConfig;

use crate::boundary::find_last_newline;
use crate::trim::trim_range;

/// One driver step: the raw window `[start, cut)` and its trimmed interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Window {
    pub start: usize,
    pub cut: usize,
    /// `cut` is the index of a newline rather than a hard cut.
    pub at_newline: bool,
    /// Empty when the window held only whitespace.
    pub interior: Range<usize>,
}

/// Walks a document window by window.
///
/// The cursor strictly increases on every step, whatever the config, so the
/// iterator always ends.
pub(crate) struct Windows<'a> {
    units: &'a [u16],
    config: ChunkConfig,
    cursor: usize,
}

impl<'a> Windows<'a> {
    pub(crate) fn new(units: &'a [u16], config: &ChunkConfig) -> Self {
        Self {
            units,
            config: *config,
            cursor: 0,
        }
    }
}

impl Iterator for Windows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let len = self.units.len();
        let start = self.cursor;
        if start >= len {
            return None;
        }

        let window_end = start.saturating_add(self.config.max_chars);
        let limit = window_end.min(len);
        // The last window ends with the text; no better cut exists beyond it.
        let newline = if limit < len {
            find_last_newline(self.units, start, limit)
        } else {
            None
        };
        let cut = newline.unwrap_or(limit);
        let interior = trim_range(self.units, start, cut);

        // A newline cut resumes after the newline. A hard cut resumes at the
        // window's nominal end, so the unit sitting on the cut is not skipped.
        let resume = match newline {
            Some(at) => at + 1,
            None => window_end,
        };
        let floor = if interior.is_empty() { start } else { interior.start };
        self.cursor = resume
            .saturating_sub(self.config.overlap_chars)
            .max(floor + 1);

        Some(Window {
            start,
            cut,
            at_newline: newline.is_some(),
            interior,
        })
    }
}
