//! Precomputed line coordinates for streak scanning
//!
//! Every maximal straight line of a grid is enumerated exactly once when a
//! board size is first seen, then shared read-only by every board of that
//! size, search clones included.

/// The orientation family a line belongs to
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Orientation {
    Row,
    Column,
    /// walks (row - 1, column + 1), bottom-left towards top-right
    DiagonalUp,
    /// walks (row + 1, column + 1), top-left towards bottom-right
    DiagonalDown,
}

/// An ordered run of cell coordinates, traversed start to end in a single
/// consistent direction
#[derive(Clone, Debug)]
pub struct Line {
    pub orientation: Orientation,
    cells: Vec<(usize, usize)>,
}

impl Line {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every maximal line on a `rows` x `columns` grid
///
/// Each cell appears in exactly one line of each orientation family. The
/// diagonal families include the length-1 corner lines; they simply never
/// produce a streak.
#[derive(Debug)]
pub struct LineIndex {
    rows: usize,
    columns: usize,
    lines: Vec<Line>,
}

impl LineIndex {
    pub fn build(rows: usize, columns: usize) -> Self {
        let mut lines = Vec::with_capacity(3 * (rows + columns) - 2);

        for row in 0..rows {
            lines.push(walk(Orientation::Row, row, 0, rows, columns, 0, 1));
        }
        for column in 0..columns {
            lines.push(walk(Orientation::Column, 0, column, rows, columns, 1, 0));
        }
        // diagonals start on the left edge, then continue along the bottom
        // (or top) edge skipping the corner already covered
        for row in 0..rows {
            lines.push(walk(Orientation::DiagonalUp, row, 0, rows, columns, -1, 1));
        }
        for column in 1..columns {
            lines.push(walk(
                Orientation::DiagonalUp,
                rows - 1,
                column,
                rows,
                columns,
                -1,
                1,
            ));
        }
        for row in 0..rows {
            lines.push(walk(Orientation::DiagonalDown, row, 0, rows, columns, 1, 1));
        }
        for column in 1..columns {
            lines.push(walk(
                Orientation::DiagonalDown,
                0,
                column,
                rows,
                columns,
                1,
                1,
            ));
        }

        Self {
            rows,
            columns,
            lines,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

fn walk(
    orientation: Orientation,
    start_row: usize,
    start_column: usize,
    rows: usize,
    columns: usize,
    row_step: isize,
    column_step: isize,
) -> Line {
    let mut cells = Vec::new();
    let mut row = start_row as isize;
    let mut column = start_column as isize;
    while 0 <= row && row < rows as isize && 0 <= column && column < columns as isize {
        cells.push((row as usize, column as usize));
        row += row_step;
        column += column_step;
    }
    Line { orientation, cells }
}
