//! Whole-row cell shifts with toroidal wraparound.
//!
//! A "shifted" row is the same packed row with every cell moved one
//! position, so that lane `x` of the output holds the code of the cell's
//! horizontal neighbor. Carries across word boundaries are explicit; the
//! wraparound between column 0 and column `width - 1` folds through
//! `last_cell_shift`, the bit offset of the last valid cell.

use crate::grid::{BITS_PER_CELL, CELL_MASK};

const CARRY_SHIFT: u32 = u64::BITS - BITS_PER_CELL;

/// Moves every cell one position left: lane `x` receives the cell at
/// `x + 1`, and the last valid lane receives the cell at column 0.
pub(crate) fn shift_left_into(row: &[u64], last_cell_shift: u32, last_word_mask: u64, out: &mut [u64]) {
    debug_assert_eq!(row.len(), out.len());
    let n = row.len();
    if n == 1 {
        // Single-word rows wrap inside the word; there is no neighboring
        // word to carry into.
        out[0] = ((row[0] >> BITS_PER_CELL) | ((row[0] & CELL_MASK) << last_cell_shift))
            & last_word_mask;
        return;
    }
    for i in 0..n - 1 {
        out[i] = (row[i] >> BITS_PER_CELL) | (row[i + 1] << CARRY_SHIFT);
    }
    out[n - 1] = ((row[n - 1] >> BITS_PER_CELL) | ((row[0] & CELL_MASK) << last_cell_shift))
        & last_word_mask;
}

/// Moves every cell one position right: lane `x` receives the cell at
/// `x - 1`, and lane 0 receives the cell at column `width - 1`.
pub(crate) fn shift_right_into(row: &[u64], last_cell_shift: u32, last_word_mask: u64, out: &mut [u64]) {
    debug_assert_eq!(row.len(), out.len());
    let n = row.len();
    if n == 1 {
        out[0] = ((row[0] << BITS_PER_CELL) | ((row[0] >> last_cell_shift) & CELL_MASK))
            & last_word_mask;
        return;
    }
    out[0] = (row[0] << BITS_PER_CELL) | ((row[n - 1] >> last_cell_shift) & CELL_MASK);
    for i in 1..n - 1 {
        out[i] = (row[i] << BITS_PER_CELL) | (row[i - 1] >> CARRY_SHIFT);
    }
    out[n - 1] = ((row[n - 1] << BITS_PER_CELL) | (row[n - 2] >> CARRY_SHIFT)) & last_word_mask;
}
