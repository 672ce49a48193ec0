//! Word-parallel neighbor counting.
//!
//! One u64 addition sums a whole row of 4-bit lanes at once. A lane-wise
//! sum of up to three cell codes never overflows into the next lane: the
//! young indicators (bit 0) accumulate in bits 0-1 and the old indicators
//! (bit 2) in bits 2-3, so a single masked split recovers both running
//! counts from one sum.

use crate::grid::BITS_PER_CELL;

/// Bits 0-1 of every lane.
const PAIR_MASK: u64 = 0x3333_3333_3333_3333;
/// Bit 0 of every lane.
pub(crate) const LANE_LSB: u64 = 0x1111_1111_1111_1111;

/// Per-lane young and total counters for one row, each lane in 0..=8.
pub(crate) struct RowSums {
    pub young: Vec<u64>,
    pub total: Vec<u64>,
}

impl RowSums {
    pub(crate) fn new(words: usize) -> Self {
        Self {
            young: vec![0; words],
            total: vec![0; words],
        }
    }

    pub(crate) fn copy_from(&mut self, other: &RowSums) {
        self.young.copy_from_slice(&other.young);
        self.total.copy_from_slice(&other.total);
    }
}

/// Splits a word of lane-wise summed codes into (young, total) counters.
fn split(sum: u64) -> (u64, u64) {
    let young = sum & PAIR_MASK;
    let old = (sum >> (BITS_PER_CELL / 2)) & PAIR_MASK;
    (young, old + young)
}

/// Sums each lane of {row, shifted left, shifted right}: the horizontal
/// running sum of three cells, including the lane's own cell.
pub(crate) fn row_sums_into(row: &[u64], left: &[u64], right: &[u64], out: &mut RowSums) {
    debug_assert!(row.len() == left.len() && row.len() == right.len());
    for i in 0..row.len() {
        let (young, total) = split(row[i] + left[i] + right[i]);
        out.young[i] = young;
        out.total[i] = total;
    }
}

/// Combines the running sums of three adjacent rows into 8-neighborhood
/// counts for the center row. The center cell appears once in its own
/// row sum, so one subtraction of its split contribution is enough.
pub(crate) fn neighbor_sums_into(
    above: &RowSums,
    center: &RowSums,
    below: &RowSums,
    center_row: &[u64],
    out: &mut RowSums,
) {
    for i in 0..center_row.len() {
        let (self_young, self_total) = split(center_row[i]);
        out.young[i] = above.young[i] + center.young[i] + below.young[i] - self_young;
        out.total[i] = above.total[i] + center.total[i] + below.total[i] - self_total;
    }
}
