use crate::board::{Cell, Col, House, Row};
use crate::digit_set::{Digit, DigitSet};
use crate::errors::{GridParseError, RowParseError};
use std::fmt;
use std::ops::Index;

/// Candidate sets for all 81 cells of one solving attempt.
///
/// The board is a flat array of [`DigitSet`]s indexed by [`Cell`], so a
/// speculative trial gets its own independent board by plain value copy.
/// No cell is ever shared between two boards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Grid([DigitSet; 81]);

/// Completion status of a house or of the whole board.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Status {
    /// Every cell is determined and all nine digits are present.
    Solved,
    /// Every cell is determined but some digit occurs twice.
    DuplicateDigit,
    /// Some cell has no candidate left.
    Contradiction,
    /// At least one cell still has more than one candidate.
    Incomplete,
}

impl Grid {
    /// Constructs a board where every cell still allows all nine digits.
    pub fn unconstrained() -> Self {
        Grid([DigitSet::ALL; 81])
    }

    /// Overwrites the candidate set of one cell.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.0[cell.as_index()] = candidates;
    }

    /// Enters one row of a puzzle from its text form.
    ///
    /// The line must hold 9 digit characters. `1`-`9` fix the cell to that
    /// digit, `0` leaves it open. Open cells start out with every digit the
    /// line itself does not already contain; cross-row refinement is the
    /// propagator's job, not the loader's.
    pub fn set_row_line(&mut self, row: Row, line: &str) -> Result<(), RowParseError> {
        let line = line.trim();
        let n_chars = line.chars().count();
        if n_chars != 9 {
            return Err(RowParseError::WrongLength(n_chars));
        }

        let mut entries = [None; 9];
        let mut rest = DigitSet::ALL;
        for (entry, ch) in entries.iter_mut().zip(line.chars()) {
            match ch {
                '0' => {}
                '1'..='9' => {
                    let digit = Digit::new(ch as u8 - b'0');
                    rest ^= digit.as_set();
                    *entry = Some(digit);
                }
                _ => return Err(RowParseError::InvalidCharacter(ch)),
            }
        }

        for (col, entry) in Col::all().zip(entries) {
            let cell = Cell::from_coords(row, col);
            match entry {
                Some(digit) => self.set_candidates(cell, digit.as_set()),
                None => self.set_candidates(cell, rest),
            }
        }
        Ok(())
    }

    /// Parses a whole puzzle from 9 lines of 9 digit characters each.
    pub fn from_str_rows(s: &str) -> Result<Self, GridParseError> {
        let mut grid = Grid::unconstrained();
        let mut n_rows = 0;
        for (row, line) in Row::all().zip(s.lines()) {
            grid.set_row_line(row, line)
                .map_err(|source| GridParseError::Row {
                    row: row.get() + 1,
                    source,
                })?;
            n_rows += 1;
        }
        if n_rows < 9 {
            return Err(GridParseError::NotEnoughRows(n_rows));
        }
        Ok(grid)
    }

    /// Classifies the 9 cells of one house.
    pub fn house_status(&self, house: House) -> Status {
        let mut union = DigitSet::NONE;
        let mut min_len = 9;
        let mut max_len = 0;
        for cell in house.cells() {
            let candidates = self[cell];
            union |= candidates;
            min_len = min_len.min(candidates.len());
            max_len = max_len.max(candidates.len());
        }

        if min_len == 0 {
            Status::Contradiction
        } else if max_len == 1 {
            // all cells determined: a digit is missing iff another repeats
            match union.is_full() {
                true => Status::Solved,
                false => Status::DuplicateDigit,
            }
        } else {
            Status::Incomplete
        }
    }

    /// Classifies the whole board by folding all 27 houses.
    ///
    /// Contradiction dominates duplicate digits, which dominate
    /// incompleteness. Solved means every house is solved.
    pub fn status(&self) -> Status {
        let mut status = Status::Solved;
        for house in House::all() {
            match self.house_status(house) {
                Status::Contradiction => return Status::Contradiction,
                Status::DuplicateDigit => status = Status::DuplicateDigit,
                Status::Incomplete if status == Status::Solved => {
                    status = Status::Incomplete;
                }
                _ => {}
            }
        }
        status
    }

    /// Returns the cells that still have more than one candidate.
    pub fn ambiguous_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self[cell].len() > 1)
    }

    /// Returns a wrapper that displays the raw candidate mask of every cell.
    pub fn display_candidates(&self) -> DisplayCandidates<'_> {
        DisplayCandidates(self)
    }
}

impl Index<Cell> for Grid {
    type Output = DigitSet;

    fn index(&self, cell: Cell) -> &DigitSet {
        &self.0[cell.as_index()]
    }
}

/// Resolved-value rendering: one 9-character line per row, where a
/// determined cell shows its digit and an ambiguous cell shows `0`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in Row::all() {
            for col in Col::all() {
                match self[Cell::from_coords(row, col)].unique() {
                    Ok(Some(digit)) => write!(f, "{}", digit.get())?,
                    _ => write!(f, "0")?,
                }
            }
            if row.get() != 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Raw rendering of a [`Grid`]: the 9-bit candidate mask of every cell.
pub struct DisplayCandidates<'a>(&'a Grid);

impl fmt::Display for DisplayCandidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in Row::all() {
            for col in Col::all() {
                if col.get() != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:b}", self.0[Cell::from_coords(row, col)])?;
            }
            if row.get() != 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_refines_open_cells_by_row() {
        let mut grid = Grid::unconstrained();
        grid.set_row_line(Row::new(0), "008020090").unwrap();

        let known: DigitSet = [8, 2, 9].into_iter().map(Digit::new).collect();
        assert_eq!(grid[Cell::new(2)], Digit::new(8).as_set());
        assert_eq!(grid[Cell::new(4)], Digit::new(2).as_set());
        assert_eq!(grid[Cell::new(7)], Digit::new(9).as_set());
        assert_eq!(grid[Cell::new(0)], DigitSet::ALL.without(known));
        // other rows untouched
        assert_eq!(grid[Cell::new(9)], DigitSet::ALL);
    }

    #[test]
    fn loader_rejects_malformed_rows() {
        let mut grid = Grid::unconstrained();
        assert_eq!(
            grid.set_row_line(Row::new(0), "12345"),
            Err(RowParseError::WrongLength(5))
        );
        assert_eq!(
            grid.set_row_line(Row::new(0), "12345678x"),
            Err(RowParseError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn house_status_classification() {
        let mut grid = Grid::unconstrained();
        let row = House::Row(Row::new(0));

        // all nine digits once: solved
        for (pos, digit) in Digit::all().enumerate() {
            grid.set_candidates(Cell::new(pos as u8), digit.as_set());
        }
        assert_eq!(grid.house_status(row), Status::Solved);

        // repeat a digit: determined but invalid
        grid.set_candidates(Cell::new(0), Digit::new(2).as_set());
        assert_eq!(grid.house_status(row), Status::DuplicateDigit);

        // empty a cell: contradiction
        grid.set_candidates(Cell::new(0), DigitSet::NONE);
        assert_eq!(grid.house_status(row), Status::Contradiction);

        // leave a cell open: incomplete
        grid.set_candidates(Cell::new(0), DigitSet::ALL);
        assert_eq!(grid.house_status(row), Status::Incomplete);
    }

    #[test]
    fn copies_are_independent() {
        let original = Grid::unconstrained();
        let mut trial = original;
        trial.set_candidates(Cell::new(40), Digit::new(5).as_set());
        assert_eq!(original[Cell::new(40)], DigitSet::ALL);
        assert_eq!(trial[Cell::new(40)], Digit::new(5).as_set());
    }

    #[test]
    fn resolved_display_shows_zero_for_ambiguous_cells() {
        let mut grid = Grid::unconstrained();
        grid.set_candidates(Cell::new(0), Digit::new(7).as_set());
        let rendered = grid.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "700000000");
    }

    #[test]
    fn raw_display_shows_candidate_masks() {
        let mut grid = Grid::unconstrained();
        grid.set_candidates(Cell::new(0), Digit::new(1).as_set());
        let rendered = grid.display_candidates().to_string();
        let first_line = rendered.lines().next().unwrap();
        assert!(first_line.starts_with("000000001 111111111"));
    }
}
