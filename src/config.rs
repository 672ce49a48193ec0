use crate::Pattern;

/// Engine configuration, passed once at construction. There is no global
/// state: two engines built from different configs are fully independent.
#[derive(Clone, Debug)]
pub struct Config {
    /// Grid width in cells, must be positive.
    pub width: usize,
    /// Grid height in cells, must be positive.
    pub height: usize,
    /// Optional initial pattern, seeded relative to the grid center.
    pub pattern: Option<Pattern>,
}

impl Config {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
