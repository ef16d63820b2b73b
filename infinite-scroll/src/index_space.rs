//! Mapping between the tiled slot sequence and the data source.
//!
//! The list renders its `count` items three times in a row. A slot in that sequence resolves to
//! a logical index once the accumulated drift is taken into account.

/// How many copies of the collection are laid out back to back.
pub const TILING_FACTOR: usize = 3;

/// Number of slots in the tiled sequence for `item_count` items.
pub fn slot_count(item_count: usize) -> usize {
    item_count.saturating_mul(TILING_FACTOR)
}

/// Resolves `slot` to a logical index in `0..item_count`.
///
/// Returns `0` when `item_count == 0`; callers must treat that as "no content". The result is
/// periodic in `slot` with period `item_count` and defined for any `slot`/`drift` pair,
/// including negative and out-of-range slots.
pub fn correct(slot: i64, item_count: usize, drift: i64) -> usize {
    // Widen so `slot - drift` cannot overflow; the remainder always fits back in `usize`.
    wrap(slot as i128 - drift as i128, item_count)
}

/// Same as [`correct`] for slots produced by enumeration (`usize`).
pub fn correct_slot(slot: usize, item_count: usize, drift: i64) -> usize {
    wrap(slot as i128 - drift as i128, item_count)
}

fn wrap(shifted: i128, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    shifted.rem_euclid(item_count as i128) as usize
}
