//! Newline search used to pick a window's cut point.

use crate::simd::{eq_mask, last_lane, load, LANES};

pub const NEWLINE: u16 = b'\n' as u16;

/// Finds the rightmost `'\n'` in `units[start..limit]`.
///
/// Blocks are taken from the end of the range so the first block with a hit
/// holds the answer; units left over at the front (the range length modulo
/// [`LANES`]) are scanned last, one at a time.
///
/// # Panics
///
/// Panics if `start > limit` or `limit > units.len()`.
pub fn find_last_newline(units: &[u16], start: usize, limit: usize) -> Option<usize> {
    let window = &units[start..limit];
    let mut blocks = window.rchunks_exact(LANES);

    for (n, block) in blocks.by_ref().enumerate() {
        if let Some(lane) = last_lane(eq_mask(&load(block), NEWLINE)) {
            let block_start = window.len() - (n + 1) * LANES;
            return Some(start + block_start + lane);
        }
    }

    blocks
        .remainder()
        .iter()
        .rposition(|&unit| unit == NEWLINE)
        .map(|offset| start + offset)
}
