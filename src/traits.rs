use crate::{CellState, EngineError};

/// The interface a host (timer loop, draw callback, input dispatch)
/// drives the simulation through. All calls must be serialized on one
/// thread: `step` swaps the generation buffers and is not safe to
/// interleave with concurrent reads.
pub trait Automaton {
    /// Advances the whole grid by one generation.
    fn step(&mut self);

    /// Reads one cell; fails with [`EngineError::OutOfRange`] outside
    /// the grid. Direct access never wraps.
    fn cell_at(&self, x: usize, y: usize) -> Result<CellState, EngineError>;

    /// Writes one cell, same bounds policy as [`Automaton::cell_at`].
    fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError>;

    /// Advances one cell through the editing cycle
    /// Empty -> Young -> Old -> Empty and returns the new state.
    fn toggle_cell(&mut self, x: usize, y: usize) -> Result<CellState, EngineError>;

    /// The number of completed steps since construction.
    fn generation(&self) -> u64;
}
