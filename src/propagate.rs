//! Fixed-point constraint propagation
//!
//! Two elimination rules run until neither changes anything: a determined
//! cell removes its digit from every peer in its row, column and block, and
//! naked groups (k cells of a house sharing the same k-candidate set) remove
//! their digits from the rest of the house. Candidate sets only ever shrink,
//! so the loop terminates after at most 81 × 9 eliminations.

use crate::board::{Cell, Grid, House};
use crate::digit_set::DigitSet;

impl Grid {
    /// Removes the single-digit set `fixed` from every cell of `house`
    /// whose candidates differ from it.
    ///
    /// Returns whether a previously ambiguous cell became determined, the
    /// signal that another propagation sweep is worthwhile.
    pub fn eliminate(&mut self, house: House, fixed: DigitSet) -> bool {
        debug_assert_eq!(fixed.len(), 1);
        let mut newly_determined = false;
        for cell in house.cells() {
            let before = self[cell];
            if before == fixed {
                continue;
            }
            self.set_candidates(cell, before.without(fixed));
            if before.len() != 1 && self[cell].len() == 1 {
                newly_determined = true;
            }
        }
        newly_determined
    }

    /// Applies naked-group elimination to one house.
    ///
    /// Cells are grouped by identical candidate set. A set shared by exactly
    /// as many cells as it has candidates is locked to those cells, so its
    /// digits are stripped from every other cell of the house. Pairs are the
    /// common case, but the same rule covers triples and larger groups.
    pub fn eliminate_naked_groups(&mut self, house: House) -> bool {
        let mut cells = [Cell::new(0); 9];
        let mut sets = [DigitSet::NONE; 9];
        for (i, cell) in house.cells().enumerate() {
            cells[i] = cell;
            sets[i] = self[cell];
        }

        let mut newly_determined = false;
        for &locked in &sets {
            let sharers = sets.iter().filter(|&&set| set == locked).count();
            if usize::from(locked.len()) != sharers {
                continue;
            }
            for &cell in &cells {
                let before = self[cell];
                if before == locked {
                    continue;
                }
                self.set_candidates(cell, before.without(locked));
                if before.len() != 1 && self[cell].len() == 1 {
                    newly_determined = true;
                }
            }
        }
        newly_determined
    }

    /// Runs elimination over the whole board until a fixed point.
    ///
    /// Determined cells eliminate their digit from all three of their
    /// houses; two-candidate cells trigger naked-group elimination on their
    /// row and column. Sweeps repeat as long as any cell becomes newly
    /// determined.
    pub fn propagate(&mut self) {
        let mut check_again = true;
        while check_again {
            check_again = false;
            for cell in Cell::all() {
                let candidates = self[cell];
                match candidates.len() {
                    1 => {
                        for house in cell.houses() {
                            check_again |= self.eliminate(house, candidates);
                        }
                    }
                    2 => {
                        check_again |= self.eliminate_naked_groups(House::Row(cell.row()));
                        check_again |= self.eliminate_naked_groups(House::Col(cell.col()));
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Col, Row};
    use crate::digit_set::Digit;
    use proptest::prelude::*;

    fn set(digits: &[u8]) -> DigitSet {
        digits.iter().map(|&d| Digit::new(d)).collect()
    }

    #[test]
    fn eliminate_strips_fixed_digit_from_peers() {
        let mut grid = Grid::unconstrained();
        let fixed = Digit::new(5).as_set();
        grid.set_candidates(Cell::new(0), fixed);

        let determined = grid.eliminate(House::Row(Row::new(0)), fixed);
        assert!(!determined);
        for col in Col::all().skip(1) {
            let cell = Cell::from_coords(Row::new(0), col);
            assert!(!grid[cell].contains(Digit::new(5)));
            assert_eq!(grid[cell].len(), 8);
        }
        // the fixed cell itself is untouched
        assert_eq!(grid[Cell::new(0)], fixed);
    }

    #[test]
    fn eliminate_reports_newly_determined_cells() {
        let mut grid = Grid::unconstrained();
        let fixed = Digit::new(3).as_set();
        grid.set_candidates(Cell::new(0), fixed);
        grid.set_candidates(Cell::new(1), set(&[3, 7]));

        assert!(grid.eliminate(House::Row(Row::new(0)), fixed));
        assert_eq!(grid[Cell::new(1)], Digit::new(7).as_set());
    }

    #[test]
    fn naked_pair_locks_its_two_cells() {
        let mut grid = Grid::unconstrained();
        let pair = set(&[4, 6]);
        grid.set_candidates(Cell::new(2), pair);
        grid.set_candidates(Cell::new(5), pair);

        grid.eliminate_naked_groups(House::Row(Row::new(0)));

        for col in Col::all() {
            let cell = Cell::from_coords(Row::new(0), col);
            if cell == Cell::new(2) || cell == Cell::new(5) {
                assert_eq!(grid[cell], pair);
            } else {
                assert!(!grid[cell].contains(Digit::new(4)));
                assert!(!grid[cell].contains(Digit::new(6)));
            }
        }
    }

    #[test]
    fn lone_pair_set_is_not_locked() {
        let mut grid = Grid::unconstrained();
        grid.set_candidates(Cell::new(0), set(&[1, 2]));

        // one cell sharing a 2-candidate set locks nothing
        assert!(!grid.eliminate_naked_groups(House::Row(Row::new(0))));
        assert_eq!(grid[Cell::new(1)], DigitSet::ALL);
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut grid = Grid::from_str_rows(
            "008020090\n030007001\n000080070\n900704006\n003800200\n\
             600300008\n060030000\n300500080\n050010600",
        )
        .unwrap();
        grid.propagate();
        let fixed_point = grid;
        grid.propagate();
        assert_eq!(grid, fixed_point);
    }

    proptest! {
        // elimination never grows a candidate set
        #[test]
        fn elimination_is_monotonic(masks in prop::collection::vec(1u16..=0o777, 81)) {
            let mut grid = Grid::unconstrained();
            for (cell, &mask) in Cell::all().zip(&masks) {
                grid.set_candidates(cell, DigitSet::from_bits(mask));
            }
            let before = grid;
            grid.propagate();
            for cell in Cell::all() {
                prop_assert!(before[cell].contains(grid[cell]));
                prop_assert!(grid[cell].len() <= before[cell].len());
            }
        }
    }
}
