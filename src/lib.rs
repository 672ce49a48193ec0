#![warn(clippy::all)]

mod cell;
mod config;
mod count;
mod engine;
mod error;
mod grid;
mod pattern;
mod rule;
mod shift;
mod traits;
mod viewport;

pub use cell::CellState;
pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use grid::{Grid, BITS_PER_CELL, CELLS_PER_WORD, CELL_MASK};
pub use pattern::Pattern;
pub use traits::Automaton;
pub use viewport::Rect;

pub const VERSION: &str = "0.1.0";
