//! Prize table lookup.
//!
//! A level's percentage items always total 100 once validated, so they describe
//! how that level's prize is composed rather than a share of the whole pool.
//! Lookups therefore return the configured level itself; no currency amount is
//! derived from it.

use super::models::{PrizeLevel, PrizeStructure};

/// Structure whose entry range contains `entries`.
///
/// If several match (an unvalidated table), the lowest `sort_order` wins.
pub fn applicable_structure(structures: &[PrizeStructure], entries: u32) -> Option<&PrizeStructure> {
    structures
        .iter()
        .filter(|structure| structure.entry_range().contains(entries))
        .min_by_key(|structure| structure.sort_order)
}

/// Prize level a finishing position falls into
///
/// # Arguments
///
/// * `structures` - Prize table in effect
/// * `entries` - Total entries, selecting the structure
/// * `position` - Finishing position (1-indexed)
///
/// # Returns
///
/// * `Option<&PrizeLevel>` - None if no structure applies or the position is not paid
pub fn prize_level_for(
    structures: &[PrizeStructure],
    entries: u32,
    position: u32,
) -> Option<&PrizeLevel> {
    applicable_structure(structures, entries)?.level_for_position(position)
}
