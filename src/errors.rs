//! Errors that may be encountered when reading a puzzle from text
#[cfg(doc)]
use crate::board::Grid;

/// Error for [`Grid::set_row_line`].
///
/// Malformed rows are recoverable: the caller is expected to re-prompt for
/// the row until it parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RowParseError {
    /// Row does not consist of exactly 9 characters.
    #[error("row should have 9 cells, found {0}")]
    WrongLength(usize),
    /// Accepted characters are `1`-`9` for givens and `0` for open cells.
    #[error("invalid character {0:?}, expected digits 0-9")]
    InvalidCharacter(char),
}

/// Error for [`Grid::from_str_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// Input ended before 9 rows were read.
    #[error("puzzle should have 9 rows, found {0}")]
    NotEnoughRows(u8),
    /// One of the rows failed to parse. Row numbers start at 1.
    #[error("row {row}: {source}")]
    Row {
        /// 1-based number of the offending row.
        row: u8,
        /// What was wrong with it.
        source: RowParseError,
    },
}
