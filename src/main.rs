use log::info;
use parudoku::{Grid, Row};
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Reads one puzzle row, re-prompting until a line parses.
fn read_row(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    grid: &mut Grid,
    row: Row,
) -> Result<(), String> {
    loop {
        eprintln!("row {} (9 digits, 0 for unknown):", row.get() + 1);
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => return Err(err.to_string()),
            None => return Err("input ended before 9 rows were read".to_string()),
        };
        match grid.set_row_line(row, &line) {
            Ok(()) => return Ok(()),
            Err(err) => eprintln!("{}", err),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut grid = Grid::unconstrained();
    for row in Row::all() {
        if let Err(err) = read_row(&mut lines, &mut grid, row) {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    }

    info!("puzzle loaded");
    log::debug!("candidate masks:\n{}", grid.display_candidates());
    println!("puzzle:\n{}\n", grid);

    match parudoku::solve(grid) {
        Some(solution) => {
            if let Some(step) = solution.step {
                println!(
                    "solved in {:.2?} by forcing {} at {} (was {:b}):",
                    solution.elapsed,
                    step.forced.get(),
                    step.cell,
                    step.before,
                );
            } else {
                println!("solved in {:.2?} by propagation alone:", solution.elapsed);
            }
            println!("{}", solution.grid);
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution exists");
            ExitCode::FAILURE
        }
    }
}
