//! Run-length scanning along precomputed lines

use crate::board::Board;
use crate::lines::Line;

/// Streak run lengths per color, aligned with the board's turn order.
/// Single pieces are not streaks, so every recorded run is at least 2 long.
pub type StreakTable = Vec<Vec<usize>>;

/// Scans every line of the board and collects each color's runs
pub fn scan(board: &Board) -> StreakTable {
    let mut table = vec![Vec::new(); board.colors().len()];
    for line in board.line_index().lines() {
        scan_line(board, line, &mut table);
    }
    table
}

/// Scans a single line, appending any runs found to `table`
pub(crate) fn scan_line(board: &Board, line: &Line, table: &mut [Vec<usize>]) {
    let mut current: Option<usize> = None;
    let mut run = 0;

    for &(row, column) in line.cells() {
        let occupant = board
            .cell(row, column)
            .and_then(|color| board.color_position(color));

        match (occupant, current) {
            (Some(position), Some(running)) if position == running => run += 1,
            (Some(position), _) => {
                flush(current, run, table);
                current = Some(position);
                run = 1;
            }
            (None, _) => {
                flush(current, run, table);
                current = None;
                run = 0;
            }
        }
    }
    flush(current, run, table);
}

fn flush(current: Option<usize>, run: usize, table: &mut [Vec<usize>]) {
    if let Some(position) = current {
        if run > 1 {
            table[position].push(run);
        }
    }
}
