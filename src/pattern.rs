use crate::{CellState, EngineError};
use rand::{Rng, SeedableRng};

/// A seed pattern: a list of horizontal token strokes, positioned
/// relative to the grid center. Coordinates may be negative; seeding
/// wraps them around the torus.
///
/// Tokens use the `'0'` / `'1'` / `'2'` alphabet for Empty / Young / Old.
#[derive(Clone, Debug, Default)]
pub struct Pattern {
    strokes: Vec<Stroke>,
}

#[derive(Clone, Debug)]
pub(crate) struct Stroke {
    pub y: i64,
    pub x: i64,
    pub tokens: String,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one stroke of tokens starting at `(x, y)`.
    pub fn stroke(mut self, y: i64, x: i64, tokens: &str) -> Self {
        self.strokes.push(Stroke {
            y,
            x,
            tokens: tokens.to_string(),
        });
        self
    }

    /// Parses a pattern from text: one `y x tokens` triple per line.
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let mut pattern = Pattern::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (y, x, tokens) = match (fields.next(), fields.next(), fields.next()) {
                (Some(y), Some(x), Some(tokens)) => (y, x, tokens),
                _ => {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "line {}: expected `y x tokens`",
                        lineno + 1
                    )))
                }
            };
            let y = y.parse::<i64>().map_err(|_| bad_coord(lineno, y))?;
            let x = x.parse::<i64>().map_err(|_| bad_coord(lineno, x))?;
            pattern = pattern.stroke(y, x, tokens);
        }
        pattern.validate()?;
        Ok(pattern)
    }

    /// Looks up a named starter pattern.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "line" => Some(Pattern::new().stroke(0, -3, "1222221")),
            "fountain" => Some(
                Pattern::new()
                    .stroke(0, 0, "000000012")
                    .stroke(1, 0, "2100010021")
                    .stroke(2, 0, "0020210021")
                    .stroke(3, 0, "222002122")
                    .stroke(4, 0, "0110101"),
            ),
            "hook" => Some(
                Pattern::new()
                    .stroke(0, 0, "221")
                    .stroke(1, 0, "002")
                    .stroke(2, 0, "2"),
            ),
            _ => None,
        }
    }

    /// A uniformly random pattern covering a `width x height` grid, with
    /// roughly `fill_permille`/1000 of the cells live, split evenly
    /// between Young and Old. A fixed `seed` makes the result reproducible.
    pub fn random(width: usize, height: usize, fill_permille: u32, seed: Option<u64>) -> Self {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_os_rng()
        };
        let mut pattern = Pattern::new();
        let mut tokens = String::with_capacity(width);
        for y in 0..height {
            tokens.clear();
            for _ in 0..width {
                if rng.random_range(0..1000) < fill_permille {
                    tokens.push(if rng.random_bool(0.5) { '1' } else { '2' });
                } else {
                    tokens.push('0');
                }
            }
            pattern = pattern.stroke(y as i64, 0, &tokens);
        }
        pattern
    }

    /// Checks that every stroke stays inside the seed alphabet.
    pub fn validate(&self) -> Result<(), EngineError> {
        for stroke in &self.strokes {
            if let Some(token) = stroke
                .tokens
                .bytes()
                .find(|&t| CellState::from_token(t).is_none())
            {
                return Err(EngineError::InvalidConfiguration(format!(
                    "invalid seed token {:?} in stroke at ({}, {})",
                    token as char, stroke.x, stroke.y
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

fn bad_coord(lineno: usize, field: &str) -> EngineError {
    EngineError::InvalidConfiguration(format!(
        "line {}: bad coordinate {:?}",
        lineno + 1,
        field
    ))
}
