//! The playing grid, its pieces and the rules bound to them

use std::sync::Arc;

use crate::lines::LineIndex;
use crate::search::{self, MoveSearch};
use crate::streak;

/// A piece color, one of a small fixed palette
///
/// Colors are opaque tokens to the engine; mapping them to display colors
/// is the front-end's business.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// A placed piece. Immutable once created.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    pub color: Color,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 1x1, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("the turn order must contain at least one color")]
    NoColors,

    #[error("color {0:?} appears twice in the turn order")]
    DuplicateColor(Color),

    #[error("streak target must be at least 2, got {0}")]
    StreakTarget(usize),

    #[error("color {0:?} is not in this board's turn order")]
    UnknownColor(Color),
}

/// A gravity-fed grid of colored pieces
///
/// Rows are indexed from the top; a dropped piece lands on the highest empty
/// row index of its column. Turn order is the order of the color list given
/// at construction, cycling.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    colors: Vec<Color>,
    streak_target: usize,
    // row-major, row 0 at the top
    cells: Vec<Option<Color>>,
    pieces: Vec<Piece>,
    available: Vec<usize>,
    central: Vec<usize>,
    lines: Arc<LineIndex>,
}

impl Board {
    /// Creates an empty board with the given dimensions, cyclic turn order
    /// and winning streak length
    pub fn new(
        rows: usize,
        columns: usize,
        colors: Vec<Color>,
        streak_target: usize,
    ) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::EmptyGrid { rows, columns });
        }
        if colors.is_empty() {
            return Err(BoardError::NoColors);
        }
        for (i, &color) in colors.iter().enumerate() {
            if colors[..i].contains(&color) {
                return Err(BoardError::DuplicateColor(color));
            }
        }
        if streak_target < 2 {
            return Err(BoardError::StreakTarget(streak_target));
        }

        let central = if columns % 2 != 0 {
            vec![columns / 2]
        } else {
            vec![columns / 2 - 1, columns / 2]
        };

        Ok(Self {
            cells: vec![None; rows * columns],
            pieces: Vec::new(),
            available: (0..columns).collect(),
            central,
            lines: Arc::new(LineIndex::build(rows, columns)),
            rows,
            columns,
            colors,
            streak_target,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn streak_target(&self) -> usize {
        self.streak_target
    }

    /// The configured colors in turn order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Every piece placed so far, in placement order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Columns that still have room, in ascending order
    pub fn available_columns(&self) -> &[usize] {
        &self.available
    }

    /// The occupant of a cell, if any
    pub fn cell(&self, row: usize, column: usize) -> Option<Color> {
        self.cells[row * self.columns + column]
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }

    pub(crate) fn color_position(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    fn require_color(&self, color: Color) -> Result<usize, BoardError> {
        self.color_position(color)
            .ok_or(BoardError::UnknownColor(color))
    }

    /// Drops a piece of `color` into `column`
    ///
    /// A full or out-of-range column is not an error: the drop is skipped
    /// and `Ok(None)` says so. A color outside the turn order is rejected
    /// outright and the board is left untouched.
    pub fn place(&mut self, column: usize, color: Color) -> Result<Option<Piece>, BoardError> {
        self.require_color(color)?;
        if !self.available.contains(&column) {
            return Ok(None);
        }

        let row = self.landing_row(column);
        let piece = Piece { color, row, column };
        self.cells[row * self.columns + column] = Some(color);
        self.pieces.push(piece);
        self.refresh_available();
        Ok(Some(piece))
    }

    // lowest empty row of a column known to have room
    fn landing_row(&self, column: usize) -> usize {
        let filled = (0..self.rows)
            .filter(|&row| self.cell(row, column).is_some())
            .count();
        self.rows - filled - 1
    }

    // a column is available exactly while its top cell is empty
    fn refresh_available(&mut self) {
        self.available = (0..self.columns)
            .filter(|&column| self.cell(0, column).is_none())
            .collect();
    }

    /// The first color in turn order holding a streak at least as long as
    /// the target, if any
    pub fn winner(&self) -> Option<Color> {
        let table = streak::scan(self);
        self.colors
            .iter()
            .zip(table.iter())
            .find(|(_, runs)| runs.iter().any(|&length| length >= self.streak_target))
            .map(|(&color, _)| color)
    }

    /// The color whose turn follows `color`, wrapping around the turn order
    pub fn next_color(&self, color: Color) -> Result<Color, BoardError> {
        let position = self.require_color(color)?;
        Ok(self.colors[(position + 1) % self.colors.len()])
    }

    /// Scores every color: `streak_weight` per cell of each of its streaks
    /// plus `center_weight` per piece sitting in a central column
    ///
    /// Central columns are the middle column when the board is odd-width,
    /// the middle two when it is even. Scores align with the turn order.
    pub fn heuristic_score(&self, streak_weight: i64, center_weight: i64) -> Vec<i64> {
        let table = streak::scan(self);
        self.colors
            .iter()
            .enumerate()
            .map(|(position, &color)| {
                let streaks: i64 = table[position]
                    .iter()
                    .map(|&length| length as i64 * streak_weight)
                    .sum();
                let central = self
                    .pieces
                    .iter()
                    .filter(|piece| piece.color == color && self.central.contains(&piece.column))
                    .count() as i64;
                streaks + central * center_weight
            })
            .collect()
    }

    /// Picks a column for `color` with the default search depth and weights
    ///
    /// Returns `Ok(None)` when no move exists: the game is already decided
    /// or every column is full.
    pub fn find_move(&self, color: Color) -> Result<Option<usize>, BoardError> {
        let mut searcher = MoveSearch::new(self.clone());
        Ok(searcher
            .choose(color, search::DEFAULT_DEPTH)?
            .map(|(column, _)| column))
    }
}
