//! Whitespace trimming at window edges.

use std::ops::Range;

use crate::simd::{first_lane, last_lane, load, whitespace_mask, LANES};
use crate::whitespace::is_whitespace;

/// Narrows `units[start..end]` to its non-whitespace interior.
///
/// The result is empty when the window is empty or all whitespace; its
/// `start` is then the point the leading scan stopped at, which for an
/// all-whitespace window is `end`.
///
/// # Panics
///
/// Panics if `start > end` or `end > units.len()`.
pub fn trim_range(units: &[u16], start: usize, end: usize) -> Range<usize> {
    let window = &units[start..end];
    let lead = leading_whitespace(window);
    let trail = trailing_whitespace(&window[lead..]);
    start + lead..end - trail
}

/// Number of whitespace units at the front of `window`.
fn leading_whitespace(window: &[u16]) -> usize {
    let mut skipped = 0;
    let mut blocks = window.chunks_exact(LANES);

    for block in blocks.by_ref() {
        let content = !whitespace_mask(&load(block));
        if let Some(lane) = first_lane(content) {
            return skipped + lane;
        }
        skipped += LANES;
    }

    skipped
        + blocks
            .remainder()
            .iter()
            .take_while(|&&unit| is_whitespace(unit))
            .count()
}

/// Number of whitespace units at the back of `window`.
fn trailing_whitespace(window: &[u16]) -> usize {
    let mut skipped = 0;
    let mut blocks = window.rchunks_exact(LANES);

    for block in blocks.by_ref() {
        let content = !whitespace_mask(&load(block));
        if let Some(lane) = last_lane(content) {
            return skipped + (LANES - 1 - lane);
        }
        skipped += LANES;
    }

    skipped
        + blocks
            .remainder()
            .iter()
            .rev()
            .take_while(|&&unit| is_whitespace(unit))
            .count()
}
