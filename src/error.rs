use thiserror::Error;

/// Errors reported by the engine and its storage layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Rejected at construction or seeding time: non-positive dimensions,
    /// or a seed pattern using symbols outside the cell alphabet.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A direct cell access outside `[0, width) x [0, height)`.
    /// Only seeding wraps coordinates; direct access never does.
    #[error("coordinates ({x}, {y}) outside {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
