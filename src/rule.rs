//! Bulk transition rule, one whole word of lanes per call.
//!
//! Birth on exactly 3 live neighbors, survival on 2-3, with a refractory
//! twist: a cell with two or more Young neighbors neither survives nor
//! spawns. Young cells always age into Old.

use crate::count::LANE_LSB;

/// Computes the next-generation word from the current word and the
/// per-lane young/total neighbor counts. Branch-free; every lane is
/// decided by the same boolean circuit evaluated at its bit 0.
pub(crate) fn next_word(current: u64, young: u64, total: u64) -> u64 {
    let not_current = !current;
    let not_young = !young;
    let not_total = !total;

    // young count < 2: bits 1..=3 of the lane all clear
    let young_lt2 = (not_young >> 1) & (not_young >> 2) & (not_young >> 3);
    // total count is 2 or 3: bit 1 set, bits 2..=3 clear
    let total_23 = (total >> 1) & (not_total >> 2) & (not_total >> 3);

    // every young cell ages into an old one
    let aged = (current & LANE_LSB) << 2;
    // an empty cell with exactly three calm neighbors is born young;
    // total bit 0 distinguishes 3 from 2 under total_23
    let empty = not_current & (not_current >> 2);
    let born = empty & young_lt2 & total & total_23 & LANE_LSB;
    // an old cell survives on two or three calm neighbors
    let survived = ((current >> 2) & young_lt2 & total_23 & LANE_LSB) << 2;

    aged | born | survived
}
