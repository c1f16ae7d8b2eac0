#![warn(missing_docs)]
//! A concurrent, propagation-first sudoku solver
//!
//! ## Overview
//!
//! Every cell carries a 9-bit [`DigitSet`] of the digits it may still hold.
//! [`Grid::propagate`] shrinks those sets to a fixed point with two human
//! techniques, naked singles and naked groups. Boards that propagation
//! leaves undetermined go to [`solve`], which speculatively forces every
//! remaining candidate of every ambiguous cell on its own thread, propagates
//! each copy independently and keeps the first board that classifies as
//! solved.
//!
//! ## Example
//!
//! ```
//! use parudoku::{Grid, Status};
//!
//! let grid = Grid::from_str_rows(
//!     "008020090\n\
//!      030007001\n\
//!      000080070\n\
//!      900704006\n\
//!      003800200\n\
//!      600300008\n\
//!      060030000\n\
//!      300500080\n\
//!      050010600",
//! )
//! .unwrap();
//!
//! if let Some(solution) = parudoku::solve(grid) {
//!     assert_eq!(solution.grid.status(), Status::Solved);
//!     println!("{}", solution.grid);
//! }
//! ```

mod board;
pub mod digit_set;
pub mod errors;
mod propagate;
mod search;

pub use crate::board::{Block, Cell, Col, DisplayCandidates, Grid, House, Row, Status};
pub use crate::digit_set::{Digit, DigitSet, Empty};
pub use crate::search::{solve, Solution, Trial};
