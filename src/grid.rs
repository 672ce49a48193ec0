use crate::{CellState, EngineError};
use std::fmt;

/// Width of one cell lane. The canonical packing is 4 bits per cell:
/// wide enough that an 8-neighbor count (0..=8) fits in a lane, so the
/// counting kernel needs no bit-plane slicing.
pub const BITS_PER_CELL: u32 = 4;
/// Cells packed into one u64 word.
pub const CELLS_PER_WORD: usize = (u64::BITS / BITS_PER_CELL) as usize;
/// Mask of a single cell lane.
pub const CELL_MASK: u64 = (1 << BITS_PER_CELL) - 1;

/// Toroidal grid of packed cell codes.
///
/// Rows are stored row-major in one flat word buffer. The final word of
/// each row may cover fewer than [`CELLS_PER_WORD`] logical cells; bits
/// beyond the row width are kept at zero by reapplying `last_word_mask`
/// after every write that touches the final word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    words_per_row: usize,
    /// Mask covering the valid lanes of the final word in each row.
    last_word_mask: u64,
    /// Bit offset of the last valid cell inside the final word; the
    /// horizontal wraparound folds through this offset.
    last_cell_shift: u32,
    cells: Vec<u64>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let words_per_row = width.div_ceil(CELLS_PER_WORD);
        let last_word_cells = width - CELLS_PER_WORD * (words_per_row - 1);
        let last_word_mask = if last_word_cells == CELLS_PER_WORD {
            u64::MAX
        } else {
            (1u64 << (last_word_cells as u32 * BITS_PER_CELL)) - 1
        };
        let last_cell_shift = (last_word_cells as u32 - 1) * BITS_PER_CELL;
        Ok(Self {
            width,
            height,
            words_per_row,
            last_word_mask,
            last_cell_shift,
            cells: vec![0; height * words_per_row],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    pub fn last_word_mask(&self) -> u64 {
        self.last_word_mask
    }

    pub fn last_cell_shift(&self) -> u32 {
        self.last_cell_shift
    }

    pub(crate) fn row(&self, y: usize) -> &[u64] {
        &self.cells[y * self.words_per_row..(y + 1) * self.words_per_row]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u64] {
        &mut self.cells[y * self.words_per_row..(y + 1) * self.words_per_row]
    }

    /// The packed code of cell `(x, y)`. Caller guarantees bounds.
    pub(crate) fn code_at(&self, x: usize, y: usize) -> u64 {
        debug_assert!(x < self.width && y < self.height);
        let word = self.cells[y * self.words_per_row + x / CELLS_PER_WORD];
        (word >> ((x % CELLS_PER_WORD) as u32 * BITS_PER_CELL)) & CELL_MASK
    }

    /// Writes the code of cell `(x, y)`. Caller guarantees bounds and a
    /// valid code; the final word of the row is re-masked afterwards.
    pub(crate) fn set_code(&mut self, x: usize, y: usize, code: u64) {
        debug_assert!(x < self.width && y < self.height);
        debug_assert!(CellState::from_code(code).is_some());
        let idx = y * self.words_per_row + x / CELLS_PER_WORD;
        let shift = (x % CELLS_PER_WORD) as u32 * BITS_PER_CELL;
        self.cells[idx] = (self.cells[idx] & !(CELL_MASK << shift)) | (code << shift);
        if x / CELLS_PER_WORD == self.words_per_row - 1 {
            self.cells[idx] &= self.last_word_mask;
        }
    }

    pub fn state_at(&self, x: usize, y: usize) -> CellState {
        CellState::from_code(self.code_at(x, y)).unwrap_or(CellState::Empty)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Order-dependent 64-bit hash of the packed contents, for fast
    /// equality checks between generations and engines.
    pub fn hash(&self) -> u64 {
        let combine = |x: u64, y: u64| -> u64 {
            x ^ y
                .wrapping_add(0x9e3779b9)
                .wrapping_add(x << 6)
                .wrapping_add(x >> 2)
        };
        let mut result = combine(self.width as u64, self.height as u64);
        for &word in &self.cells {
            result = combine(result, word);
        }
        result
    }

    /// True when every row's padding bits are zero.
    pub(crate) fn padding_clear(&self) -> bool {
        (0..self.height).all(|y| self.row(y)[self.words_per_row - 1] & !self.last_word_mask == 0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = match CellState::from_code(self.code_at(x, y)) {
                    Some(state) => state.glyph(),
                    None => '?',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_for_7x5() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.words_per_row(), 1);
        assert_eq!(grid.last_word_mask(), 0xFFF_FFFF);
        assert_eq!(grid.last_cell_shift(), 24);
    }

    #[test]
    fn masks_for_800x5() {
        let grid = Grid::new(800, 5).unwrap();
        assert_eq!(grid.words_per_row(), 50);
        assert_eq!(grid.last_word_mask(), u64::MAX);
        assert_eq!(grid.last_cell_shift(), 60);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn set_and_read_back() {
        let mut grid = Grid::new(37, 3).unwrap();
        grid.set_code(36, 2, CellState::Old.code());
        grid.set_code(0, 0, CellState::Young.code());
        assert_eq!(grid.state_at(36, 2), CellState::Old);
        assert_eq!(grid.state_at(0, 0), CellState::Young);
        assert_eq!(grid.state_at(18, 1), CellState::Empty);
        assert!(grid.padding_clear());
    }

    #[test]
    fn hash_tracks_content() {
        let mut a = Grid::new(20, 4).unwrap();
        let b = a.clone();
        assert_eq!(a.hash(), b.hash());
        a.set_code(11, 1, CellState::Young.code());
        assert_ne!(a.hash(), b.hash());
    }
}
