use crate::count::{self, RowSums, LANE_LSB};
use crate::shift::{shift_left_into, shift_right_into};
use crate::{rule, Automaton, CellState, Config, EngineError, Grid, Pattern, Rect};
use std::mem;

/// The automaton engine: two generation buffers, the scratch for a
/// rolling three-row window of neighbor sums, and a generation counter.
///
/// `step` is synchronous and runs to completion; the buffers are swapped,
/// not reallocated, so steady-state stepping allocates nothing.
pub struct Engine {
    grid: Grid,
    next: Grid,
    generation: u64,
    shift_left: Vec<u64>,
    shift_right: Vec<u64>,
    sums_above: RowSums,
    sums_center: RowSums,
    sums_below: RowSums,
    /// Row 0 sums, preserved for the bottom row's vertical wraparound.
    sums_top: RowSums,
    counts: RowSums,
}

/// Shifts one row both ways and folds the three variants into its
/// horizontal running sums.
fn row_sums_for(grid: &Grid, y: usize, left: &mut [u64], right: &mut [u64], out: &mut RowSums) {
    let row = grid.row(y);
    shift_left_into(row, grid.last_cell_shift(), grid.last_word_mask(), left);
    shift_right_into(row, grid.last_cell_shift(), grid.last_word_mask(), right);
    count::row_sums_into(row, left, right, out);
}

impl Engine {
    /// Creates a blank engine. Fails with
    /// [`EngineError::InvalidConfiguration`] on a zero dimension.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let grid = Grid::new(width, height)?;
        let words = grid.words_per_row();
        Ok(Self {
            next: grid.clone(),
            grid,
            generation: 0,
            shift_left: vec![0; words],
            shift_right: vec![0; words],
            sums_above: RowSums::new(words),
            sums_center: RowSums::new(words),
            sums_below: RowSums::new(words),
            sums_top: RowSums::new(words),
            counts: RowSums::new(words),
        })
    }

    /// Creates an engine from an explicit configuration, seeding the
    /// initial pattern if one is set. An invalid pattern fails the whole
    /// construction; no partially seeded engine is returned.
    pub fn with_config(config: &Config) -> Result<Self, EngineError> {
        let mut engine = Self::new(config.width, config.height)?;
        if let Some(pattern) = &config.pattern {
            engine.seed(pattern)?;
        }
        Ok(engine)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advances the grid by one generation.
    ///
    /// Each row's running sums are computed exactly once: the rolling
    /// window hands them to the row above and below, and the preserved
    /// row-0 sums serve the bottom row's wraparound.
    pub fn step(&mut self) {
        let height = self.grid.height();
        let words = self.grid.words_per_row();

        row_sums_for(
            &self.grid,
            0,
            &mut self.shift_left,
            &mut self.shift_right,
            &mut self.sums_top,
        );
        self.sums_below.copy_from(&self.sums_top);
        row_sums_for(
            &self.grid,
            height - 1,
            &mut self.shift_left,
            &mut self.shift_right,
            &mut self.sums_center,
        );

        for y in 0..height {
            mem::swap(&mut self.sums_above, &mut self.sums_center);
            mem::swap(&mut self.sums_center, &mut self.sums_below);
            if y + 1 < height {
                row_sums_for(
                    &self.grid,
                    y + 1,
                    &mut self.shift_left,
                    &mut self.shift_right,
                    &mut self.sums_below,
                );
            } else {
                self.sums_below.copy_from(&self.sums_top);
            }

            count::neighbor_sums_into(
                &self.sums_above,
                &self.sums_center,
                &self.sums_below,
                self.grid.row(y),
                &mut self.counts,
            );

            let src = self.grid.row(y);
            let dst = self.next.row_mut(y);
            for i in 0..words {
                dst[i] = rule::next_word(src[i], self.counts.young[i], self.counts.total[i]);
            }
            dst[words - 1] &= self.grid.last_word_mask();
        }

        mem::swap(&mut self.grid, &mut self.next);
        debug_assert!(self.grid.padding_clear());
        self.generation += 1;
    }

    /// Zeroes every cell. The generation counter keeps running.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Rebuilds both buffers blank at a new shape. The generation counter
    /// keeps running, matching a host that resizes mid-session.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        let grid = Grid::new(width, height)?;
        let words = grid.words_per_row();
        self.next = grid.clone();
        self.grid = grid;
        self.shift_left = vec![0; words];
        self.shift_right = vec![0; words];
        self.sums_above = RowSums::new(words);
        self.sums_center = RowSums::new(words);
        self.sums_below = RowSums::new(words);
        self.sums_top = RowSums::new(words);
        self.counts = RowSums::new(words);
        Ok(())
    }

    /// Seeds a pattern relative to the grid center. The whole pattern is
    /// validated before the first write.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<(), EngineError> {
        pattern.validate()?;
        let (cx, cy) = (self.grid.width() as i64 / 2, self.grid.height() as i64 / 2);
        for stroke in pattern.strokes() {
            self.seed_row(cy + stroke.y, cx + stroke.x, &stroke.tokens)?;
        }
        Ok(())
    }

    /// Writes one stroke of seed tokens starting at `(x, y)`.
    /// Seed coordinates wrap modulo the grid on both axes, so negative
    /// and oversized positions land where the torus says they should.
    pub fn seed_row(&mut self, y: i64, x: i64, tokens: &str) -> Result<(), EngineError> {
        let states = tokens
            .bytes()
            .map(|t| {
                CellState::from_token(t).ok_or_else(|| {
                    EngineError::InvalidConfiguration(format!("invalid seed token {:?}", t as char))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let (width, height) = (self.grid.width() as i64, self.grid.height() as i64);
        let y = y.rem_euclid(height) as usize;
        for (i, state) in states.into_iter().enumerate() {
            let x = (x + i as i64).rem_euclid(width) as usize;
            self.grid.set_code(x, y, state.code());
        }
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x >= self.grid.width() || y >= self.grid.height() {
            return Err(EngineError::OutOfRange {
                x,
                y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        Ok(())
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<CellState, EngineError> {
        self.check_bounds(x, y)?;
        Ok(self.grid.state_at(x, y))
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        self.grid.set_code(x, y, state.code());
        Ok(())
    }

    /// Cycles one cell Empty -> Young -> Old -> Empty and returns the
    /// state it ended up in.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<CellState, EngineError> {
        let state = self.cell_at(x, y)?.cycled();
        self.grid.set_code(x, y, state.code());
        Ok(state)
    }

    /// Live cells inside `rect`, lazily, row by row. The iterator borrows
    /// the engine; call again for a fresh pass. The rectangle is clamped
    /// to the grid.
    pub fn live_cells(&self, rect: Rect) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let rect = rect.clamped(self.grid.width(), self.grid.height());
        (rect.y..rect.y + rect.height).flat_map(move |y| {
            (rect.x..rect.x + rect.width).filter_map(move |x| match self.grid.state_at(x, y) {
                CellState::Empty => None,
                state => Some((x, y, state)),
            })
        })
    }

    /// Counts of (young, old) cells across the whole grid, for host
    /// status lines. Padding lanes are always zero, so whole words count.
    pub fn population(&self) -> (u64, u64) {
        let (mut young, mut old) = (0, 0);
        for y in 0..self.grid.height() {
            for &word in self.grid.row(y) {
                young += (word & LANE_LSB).count_ones() as u64;
                old += ((word >> 2) & LANE_LSB).count_ones() as u64;
            }
        }
        (young, old)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Automaton for Engine {
    fn step(&mut self) {
        Engine::step(self)
    }

    fn cell_at(&self, x: usize, y: usize) -> Result<CellState, EngineError> {
        Engine::cell_at(self, x, y)
    }

    fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError> {
        Engine::set_cell(self, x, y, state)
    }

    fn toggle_cell(&mut self, x: usize, y: usize) -> Result<CellState, EngineError> {
        Engine::toggle_cell(self, x, y)
    }

    fn generation(&self) -> u64 {
        Engine::generation(self)
    }
}
