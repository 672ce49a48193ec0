/// A viewport rectangle in cell coordinates, used to scope reads to the
/// visible part of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// The whole grid of the given dimensions.
    pub fn full(width: usize, height: usize) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Intersects the rectangle with `[0, width) x [0, height)`.
    pub(crate) fn clamped(self, width: usize, height: usize) -> Rect {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Rect {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_grid() {
        let rect = Rect::new(5, 2, 100, 100).clamped(10, 4);
        assert_eq!(rect, Rect::new(5, 2, 5, 2));
        let off = Rect::new(50, 50, 3, 3).clamped(10, 4);
        assert_eq!(off.width, 0);
        assert_eq!(off.height, 0);
    }
}
