//! Whitespace classification for UTF-16 code units.

use std::sync::OnceLock;

const UNIT_COUNT: usize = 1 << 16;

static TABLE: OnceLock<Box<[bool]>> = OnceLock::new();

fn build_table() -> Box<[bool]> {
    // Surrogate halves have no `char`, so they classify as non-whitespace.
    (0..UNIT_COUNT)
        .map(|unit| char::from_u32(unit as u32).is_some_and(char::is_whitespace))
        .collect()
}

fn table() -> &'static [bool] {
    TABLE.get_or_init(build_table)
}

/// Returns whether a single code unit is Unicode whitespace.
#[inline]
pub fn is_whitespace(unit: u16) -> bool {
    table()[usize::from(unit)]
}

/// Forces construction of the lookup table.
///
/// Optional: the first call to [`is_whitespace`] does the same.
pub fn warm_up() {
    let _ = table();
}
