//! Speculative concurrent search
//!
//! When propagation alone cannot finish a puzzle, the engine branches: every
//! remaining candidate of every ambiguous cell becomes one trial that runs
//! on its own thread with its own copy of the board. Each trial forces its
//! candidate, propagates to a fixed point and reports the classified result
//! over a shared channel. Trials that stay incomplete fan out again, so the
//! search is breadth-first over speculative assignments with propagation
//! pruning almost every dead branch within one step.
//!
//! Boards are `Copy` and never shared, so the channel is the only
//! synchronized resource. A stop flag makes trials spawned before a solution
//! was found exit without doing work.

use crate::board::{Cell, Grid, Status};
use crate::digit_set::{Digit, DigitSet};
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

/// One speculative assignment: a single candidate forced into one cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Trial {
    /// The cell that was forced.
    pub cell: Cell,
    /// The cell's candidate set before the trial.
    pub before: DigitSet,
    /// The digit the trial committed to.
    pub forced: Digit,
}

/// Result of running one trial to its propagation fixed point.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Outcome {
    status: Status,
    grid: Grid,
    trial: Trial,
    elapsed: Duration,
}

/// A solved board, together with how the solver got there.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Solution {
    /// The fully determined board.
    pub grid: Grid,
    /// The forcing step that finished the puzzle, if search was needed.
    /// `None` means propagation alone solved it.
    pub step: Option<Trial>,
    /// Time from the start of solving until this solution was found.
    pub elapsed: Duration,
}

/// Solves a puzzle, or returns `None` if the search space holds no solution.
///
/// Propagation runs first; only boards it leaves incomplete enter the
/// concurrent search. The first trial classified solved wins, sibling
/// trials are discarded. If every branch dies in a contradiction or a
/// duplicate digit, the search space is exhausted and the puzzle has no
/// solution.
pub fn solve(grid: Grid) -> Option<Solution> {
    let start = Instant::now();
    let mut grid = grid;
    grid.propagate();
    match grid.status() {
        Status::Solved => Some(Solution {
            grid,
            step: None,
            elapsed: start.elapsed(),
        }),
        Status::Incomplete => search(grid, start),
        Status::Contradiction | Status::DuplicateDigit => None,
    }
}

/// Breadth-first speculative search over all ambiguous cells.
fn search(grid: Grid, start: Instant) -> Option<Solution> {
    let (tx, rx): (Sender<Outcome>, Receiver<Outcome>) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));

    // every spawned trial sends exactly one outcome, so counting them is
    // enough to notice when the whole search space has been exhausted
    let mut in_flight = spawn_trials(&grid, &tx, &stop, start);

    while in_flight > 0 {
        let Ok(outcome) = rx.recv() else {
            break;
        };
        in_flight -= 1;
        match outcome.status {
            Status::Solved => {
                stop.store(true, Ordering::Relaxed);
                debug!(
                    "solved by forcing {} at {} after {:.2?}",
                    outcome.trial.forced.get(),
                    outcome.trial.cell,
                    outcome.elapsed,
                );
                return Some(Solution {
                    grid: outcome.grid,
                    step: Some(outcome.trial),
                    elapsed: outcome.elapsed,
                });
            }
            Status::Incomplete => {
                in_flight += spawn_trials(&outcome.grid, &tx, &stop, start);
            }
            // dead branch, drop it
            Status::Contradiction | Status::DuplicateDigit => {}
        }
    }

    debug!("search space exhausted after {:.2?}", start.elapsed());
    None
}

/// Spawns one trial thread per remaining candidate of every ambiguous cell.
/// Returns the number of trials spawned.
fn spawn_trials(
    grid: &Grid,
    tx: &Sender<Outcome>,
    stop: &Arc<AtomicBool>,
    start: Instant,
) -> usize {
    let mut spawned = 0;
    for cell in grid.ambiguous_cells() {
        let before = grid[cell];
        for forced in before {
            let mut trial_grid = *grid;
            let tx = tx.clone();
            let stop = Arc::clone(stop);
            thread::spawn(move || {
                if stop.load(Ordering::Relaxed) {
                    // a sibling already solved the puzzle
                    return;
                }
                trial_grid.set_candidates(cell, forced.as_set());
                trial_grid.propagate();
                let outcome = Outcome {
                    status: trial_grid.status(),
                    grid: trial_grid,
                    trial: Trial {
                        cell,
                        before,
                        forced,
                    },
                    elapsed: start.elapsed(),
                };
                trace!("trial {} = {} -> {:?}", cell, forced.get(), outcome.status);
                let _ = tx.send(outcome);
            });
            spawned += 1;
        }
    }
    debug!("spawned {} trials", spawned);
    spawned
}
