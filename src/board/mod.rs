//! Types for cells, houses and the board of a sudoku
mod grid;
pub mod positions;

pub use self::{
    grid::{DisplayCandidates, Grid, Status},
    positions::{Block, Cell, Col, House, Row},
};
