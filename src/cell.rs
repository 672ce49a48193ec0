/// The state of a single cell.
///
/// Codes are chosen so that a lane-wise sum of up to three codes keeps the
/// young count in bits 0-1 and the old count in bits 2-3 of a 4-bit lane:
/// the neighbor counter relies on this to split one running sum into two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Young,
    Old,
}

impl CellState {
    /// The packed 4-bit code of this state.
    pub const fn code(self) -> u64 {
        match self {
            CellState::Empty => 0x0,
            CellState::Young => 0x1,
            CellState::Old => 0x4,
        }
    }

    /// Decodes a 4-bit lane value. Returns `None` for codes outside
    /// the alphabet; those never appear in a well-formed grid.
    pub const fn from_code(code: u64) -> Option<CellState> {
        match code {
            0x0 => Some(CellState::Empty),
            0x1 => Some(CellState::Young),
            0x4 => Some(CellState::Old),
            _ => None,
        }
    }

    /// Maps a seed token to a state: `'0'` empty, `'1'` young, `'2'` old.
    pub const fn from_token(token: u8) -> Option<CellState> {
        match token {
            b'0' => Some(CellState::Empty),
            b'1' => Some(CellState::Young),
            b'2' => Some(CellState::Old),
            _ => None,
        }
    }

    /// One-character rendering used by `Display` impls and the CLI host.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Young => 'o',
            CellState::Old => 'X',
        }
    }

    /// The next state in the interactive editing cycle:
    /// Empty -> Young -> Old -> Empty.
    pub const fn cycled(self) -> CellState {
        match self {
            CellState::Empty => CellState::Young,
            CellState::Young => CellState::Old,
            CellState::Old => CellState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for state in [CellState::Empty, CellState::Young, CellState::Old] {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
    }

    #[test]
    fn invalid_codes_rejected() {
        for code in [0x2, 0x3, 0x5, 0x7, 0xF] {
            assert_eq!(CellState::from_code(code), None);
        }
    }

    #[test]
    fn editing_cycle_closes() {
        let mut state = CellState::Empty;
        for _ in 0..3 {
            state = state.cycled();
        }
        assert_eq!(state, CellState::Empty);
    }
}
