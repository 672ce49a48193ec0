#[cfg(test)]
mod tests {
    use agelife::*;

    /// Brute-force reference: unpacked cells, per-cell neighbor loop,
    /// the same birth/survival table the packed kernel implements.
    struct Reference {
        cells: Vec<Vec<CellState>>,
    }

    impl Reference {
        fn from_engine(engine: &Engine) -> Self {
            let cells = (0..engine.height())
                .map(|y| {
                    (0..engine.width())
                        .map(|x| engine.cell_at(x, y).unwrap())
                        .collect()
                })
                .collect();
            Self { cells }
        }

        fn counts(&self, x: usize, y: usize) -> (u32, u32) {
            let (w, h) = (self.cells[0].len(), self.cells.len());
            let (mut young, mut total) = (0, 0);
            // skip the center by position, not by offset value: on a
            // height-1 or height-2 torus the wrapped rows alias onto the
            // center row and their copies still count
            for (i, dy) in [h - 1, 0, 1].into_iter().enumerate() {
                for (j, dx) in [w - 1, 0, 1].into_iter().enumerate() {
                    if i == 1 && j == 1 {
                        continue;
                    }
                    match self.cells[(y + dy) % h][(x + dx) % w] {
                        CellState::Young => {
                            young += 1;
                            total += 1;
                        }
                        CellState::Old => total += 1,
                        CellState::Empty => {}
                    }
                }
            }
            (young, total)
        }

        fn step(&mut self) {
            let (w, h) = (self.cells[0].len(), self.cells.len());
            let mut next = vec![vec![CellState::Empty; w]; h];
            for y in 0..h {
                for x in 0..w {
                    let (young, total) = self.counts(x, y);
                    next[y][x] = match self.cells[y][x] {
                        CellState::Young => CellState::Old,
                        CellState::Empty if young < 2 && total == 3 => CellState::Young,
                        CellState::Empty => CellState::Empty,
                        CellState::Old if young < 2 && (2..=3).contains(&total) => CellState::Old,
                        CellState::Old => CellState::Empty,
                    };
                }
            }
            self.cells = next;
        }

        fn assert_matches(&self, engine: &Engine) {
            for y in 0..engine.height() {
                for x in 0..engine.width() {
                    assert_eq!(
                        engine.cell_at(x, y).unwrap(),
                        self.cells[y][x],
                        "cell ({}, {}) at generation {}",
                        x,
                        y,
                        engine.generation()
                    );
                }
            }
        }
    }

    fn random_engine(width: usize, height: usize, seed: u64) -> Engine {
        let config = Config::new(width, height)
            .with_pattern(Pattern::random(width, height, 350, Some(seed)));
        Engine::with_config(&config).unwrap()
    }

    #[test]
    fn packed_kernel_matches_reference() {
        // widths chosen around word boundaries: sub-word, exactly one
        // word, one word plus one cell, several words
        for (width, height, seed) in [(7, 5, 1), (16, 12, 2), (17, 9, 3), (50, 23, 4)] {
            let mut engine = random_engine(width, height, seed);
            let mut reference = Reference::from_engine(&engine);
            for _ in 0..12 {
                engine.step();
                reference.step();
                reference.assert_matches(&engine);
            }
        }
    }

    #[test]
    fn degenerate_heights_match_reference() {
        // heights 1 and 2 alias the vertical neighbors onto the center
        // row; the kernel must count those copies like any other row
        for height in [1usize, 2, 3] {
            for width in [7usize, 16, 17, 33] {
                let mut engine = random_engine(width, height, (31 * height + width) as u64);
                let mut reference = Reference::from_engine(&engine);
                for _ in 0..6 {
                    engine.step();
                    reference.step();
                    reference.assert_matches(&engine);
                }
            }
        }
    }

    #[test]
    fn toroidal_invariance_under_translation() {
        let (width, height) = (21, 13);
        let strokes: [(i64, i64, &str); 3] = [(0, 0, "221"), (1, 0, "002"), (2, 0, "2")];
        for (dx, dy) in [(1usize, 0usize), (0, 1), (5, 3), (19, 12)] {
            let mut base = Engine::new(width, height).unwrap();
            let mut moved = Engine::new(width, height).unwrap();
            for (y, x, tokens) in strokes {
                base.seed_row(y, x, tokens).unwrap();
                moved.seed_row(y + dy as i64, x + dx as i64, tokens).unwrap();
            }
            for _ in 0..10 {
                base.step();
                moved.step();
            }
            for y in 0..height {
                for x in 0..width {
                    assert_eq!(
                        base.cell_at(x, y).unwrap(),
                        moved.cell_at((x + dx) % width, (y + dy) % height).unwrap(),
                        "offset ({}, {}), cell ({}, {})",
                        dx,
                        dy,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn block_of_old_cells_is_a_fixed_point() {
        let mut engine = Engine::new(10, 8).unwrap();
        engine.seed_row(3, 4, "22").unwrap();
        engine.seed_row(4, 4, "22").unwrap();
        let before = engine.grid().hash();
        for _ in 0..25 {
            engine.step();
            assert_eq!(engine.grid().hash(), before);
            assert_eq!(engine.population(), (0, 4));
        }
    }

    #[test]
    fn identically_seeded_engines_are_deterministic() {
        let mut a = random_engine(40, 30, 99);
        let mut b = random_engine(40, 30, 99);
        for _ in 0..50 {
            a.step();
            b.step();
        }
        assert_eq!(a.grid().hash(), b.grid().hash());
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation(), 50);
    }

    #[test]
    fn pattern_crossing_the_seam_matches_reference() {
        for width in [16, 17] {
            let mut engine = Engine::new(width, 7).unwrap();
            // straddles the vertical seam and the word boundary
            engine.seed_row(3, width as i64 - 2, "12221").unwrap();
            engine.seed_row(-1, -1, "22").unwrap();
            let mut reference = Reference::from_engine(&engine);
            for _ in 0..8 {
                engine.step();
                reference.step();
                reference.assert_matches(&engine);
            }
        }
    }

    #[test]
    fn host_drives_engine_through_the_trait() {
        let mut engine = Engine::new(12, 12).unwrap();
        let host: &mut dyn Automaton = &mut engine;
        host.set_cell(5, 5, CellState::Old).unwrap();
        host.toggle_cell(6, 5).unwrap(); // -> Young
        host.step();
        assert_eq!(host.generation(), 1);
        assert_eq!(host.cell_at(6, 5).unwrap(), CellState::Old);
    }

    #[test]
    fn seeded_frame_renders_like_the_host_expects() {
        let mut engine = Engine::new(7, 3).unwrap();
        engine.seed_row(1, 2, "212").unwrap();
        let frame = engine.grid().to_string();
        assert_eq!(frame, ".......\n..XoX..\n.......\n");
    }
}
