//! Block-wise lane comparisons over UTF-16 code units.
//!
//! A block is one 128-bit register's worth of code units. Comparisons produce
//! a lane mask where bit `k` corresponds to lane `k` (the unit at offset `k`
//! within the block), so the first and last matching lanes fall out of
//! `trailing_zeros` / `leading_zeros`.

use crate::whitespace::is_whitespace;

/// Code units per block.
pub const LANES: usize = 8;

pub type Block = [u16; LANES];

/// Copies a block-sized slice into a fixed-size block.
///
/// Callers obtain `units` from `chunks_exact(LANES)` / `rchunks_exact(LANES)`.
#[inline]
pub fn load(units: &[u16]) -> Block {
    let mut block = [0u16; LANES];
    block.copy_from_slice(units);
    block
}

/// Lanes equal to `needle`.
///
/// A fixed-width fold over the block; the optimizer lowers it to a single
/// vector compare and mask extraction on targets that have one.
#[inline]
pub fn eq_mask(block: &Block, needle: u16) -> u8 {
    block
        .iter()
        .enumerate()
        .fold(0u8, |mask, (lane, &unit)| mask | (u8::from(unit == needle) << lane))
}

/// Lanes holding a whitespace code unit.
///
/// Classification is a table lookup per lane; there is no vector form of the
/// Unicode whitespace set worth the complexity.
#[inline]
pub fn whitespace_mask(block: &Block) -> u8 {
    block
        .iter()
        .enumerate()
        .fold(0u8, |mask, (lane, &unit)| mask | (u8::from(is_whitespace(unit)) << lane))
}

/// Index of the lowest set lane.
#[inline]
pub fn first_lane(mask: u8) -> Option<usize> {
    (mask != 0).then(|| mask.trailing_zeros() as usize)
}

/// Index of the highest set lane.
#[inline]
pub fn last_lane(mask: u8) -> Option<usize> {
    (mask != 0).then(|| LANES - 1 - mask.leading_zeros() as usize)
}
