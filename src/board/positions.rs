//! Cell positions and the houses (rows, columns, blocks) they belong to
//!
//! Cells are numbered 0..=80, left to right, top to bottom. Every coordinate
//! question is answered by integer arithmetic on that flat index, so looking
//! up a cell on the board is a direct array access.

use std::fmt;

macro_rules! define_index_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[doc = concat!("Typed `", stringify!($name), "` index, 0-based.")]
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new instance.
                ///
                /// # Panic
                /// Panics in debug mode, if the index is out of range.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Constructs a new instance, if the index is in range.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the contained index.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the contained index as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all instances.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_index_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
);

impl Cell {
    /// Constructs the cell at the given row and column.
    pub fn from_coords(row: Row, col: Col) -> Self {
        Cell::new(row.get() * 9 + col.get())
    }

    /// Returns the row of this cell. Topmost row is 0.
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    /// Returns the column of this cell. Leftmost column is 0.
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    /// Returns the 3×3 block of this cell, numbered left to right, top to bottom.
    pub fn block(self) -> Block {
        Block::new(self.0 / 9 / 3 * 3 + self.0 % 9 / 3)
    }

    /// Returns the row, column and block houses containing this cell.
    pub fn houses(self) -> [House; 3] {
        [
            House::Row(self.row()),
            House::Col(self.col()),
            House::Block(self.block()),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}c{}", self.row().get() + 1, self.col().get() + 1)
    }
}

/// A group of 9 cells that must contain each digit exactly once: a row,
/// a column or a 3×3 block.
///
/// A house is a pure view. It never owns cells, it only names which 9 of
/// the 81 board positions share the constraint.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum House {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl House {
    /// Returns an iterator over all 27 houses.
    pub fn all() -> impl Iterator<Item = Self> {
        Row::all()
            .map(House::Row)
            .chain(Col::all().map(House::Col))
            .chain(Block::all().map(House::Block))
    }

    /// Returns the cell at the given position within this house, 0..=8.
    pub fn cell_at(self, pos: u8) -> Cell {
        debug_assert!(pos < 9);
        match self {
            House::Row(row) => Cell::new(row.get() * 9 + pos),
            House::Col(col) => Cell::new(pos * 9 + col.get()),
            House::Block(block) => {
                let corner = block.get() / 3 * 27 + block.get() % 3 * 3;
                Cell::new(corner + pos / 3 * 9 + pos % 3)
            }
        }
    }

    /// Returns the 9 member cells of this house.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..9).map(move |pos| self.cell_at(pos))
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            House::Row(row) => write!(f, "row {}", row.get() + 1),
            House::Col(col) => write!(f, "column {}", col.get() + 1),
            House::Block(block) => write!(f, "block {}", block.get() + 1),
        }
    }
}
