//! Fixed-depth maxN search over board clones

use rayon::prelude::*;

use crate::board::{Board, BoardError, Color};

/// Score handed to the winner of a decided position; every other color
/// receives the negation
pub const WIN_SCORE: i64 = 1_000_000;

/// Search depth used by [`Board::find_move`]
pub const DEFAULT_DEPTH: usize = 3;

/// Default weight per cell of a streak in the position heuristic
pub const STREAK_WEIGHT: i64 = 2;

/// Default weight per piece sitting in a central column
pub const CENTER_WEIGHT: i64 = 4;

/// A maxN searcher over a snapshot of a board
///
/// Every ply maximizes the score component of the color that moves at that
/// ply; the colors that follow in turn order are not modelled as
/// adversaries. Columns are evaluated in ascending order and ties go to the
/// column evaluated last, so move choice is reproducible.
pub struct MoveSearch {
    board: Board,
    streak_weight: i64,
    center_weight: i64,

    /// Number of positions visited by this searcher so far (diagnostics only)
    pub node_count: usize,
}

impl MoveSearch {
    /// Creates a searcher over a snapshot of `board` with the default
    /// heuristic weights
    pub fn new(board: Board) -> Self {
        Self {
            board,
            streak_weight: STREAK_WEIGHT,
            center_weight: CENTER_WEIGHT,
            node_count: 0,
        }
    }

    /// Replaces the heuristic weights
    pub fn with_weights(mut self, streak_weight: i64, center_weight: i64) -> Self {
        self.streak_weight = streak_weight;
        self.center_weight = center_weight;
        self
    }

    /// Searches `depth` placements ahead for the best column for `color`,
    /// returning it with the score vector of the line chosen
    ///
    /// The root ply always places, so a zero depth ranks the immediate
    /// placements by heuristic alone. `Ok(None)` means no move exists: the
    /// position is already won or every column is full.
    pub fn choose(
        &mut self,
        color: Color,
        depth: usize,
    ) -> Result<Option<(usize, Vec<i64>)>, BoardError> {
        let mover = self
            .board
            .color_position(color)
            .ok_or(BoardError::UnknownColor(color))?;

        if self.board.winner().is_some() || self.board.available_columns().is_empty() {
            return Ok(None);
        }

        let next = (mover + 1) % self.board.colors().len();
        let child_depth = depth.saturating_sub(1);
        let streak_weight = self.streak_weight;
        let center_weight = self.center_weight;
        let board = &self.board;

        // every branch owns an independent clone, so the root ply can fan
        // out across workers; collecting preserves ascending column order
        let evaluated: Vec<(usize, Vec<i64>, usize)> = board
            .available_columns()
            .par_iter()
            .map(|&column| {
                let mut nodes = 0;
                let mut clone = board.clone();
                let scores = match clone.place(column, color) {
                    Ok(Some(_)) => max_n(
                        &clone,
                        next,
                        child_depth,
                        streak_weight,
                        center_weight,
                        &mut nodes,
                    ),
                    // a legal column cannot refuse the drop
                    _ => vec![i64::MIN; board.colors().len()],
                };
                (column, scores, nodes)
            })
            .collect();

        self.node_count += 1 + evaluated.iter().map(|(_, _, nodes)| nodes).sum::<usize>();

        let mut best: Option<(usize, Vec<i64>)> = None;
        for (column, scores, _) in evaluated {
            match &best {
                Some((_, top)) if scores[mover] < top[mover] => {}
                _ => best = Some((column, scores)),
            }
        }
        Ok(best)
    }
}

/// Scores a position for the color at turn-order position `mover`
///
/// Terminal checks run before any recursion: a decided position scores
/// `WIN_SCORE` for the winner and `-WIN_SCORE` for everyone else, a full
/// grid scores zero all round, and exhausted depth falls back to the
/// heuristic.
fn max_n(
    board: &Board,
    mover: usize,
    depth: usize,
    streak_weight: i64,
    center_weight: i64,
    nodes: &mut usize,
) -> Vec<i64> {
    *nodes += 1;

    if let Some(winner) = board.winner() {
        let mut scores = vec![-WIN_SCORE; board.colors().len()];
        if let Some(position) = board.color_position(winner) {
            scores[position] = WIN_SCORE;
        }
        return scores;
    }
    if board.available_columns().is_empty() {
        return vec![0; board.colors().len()];
    }
    if depth == 0 {
        return board.heuristic_score(streak_weight, center_weight);
    }

    let color = board.colors()[mover];
    let next = (mover + 1) % board.colors().len();

    let mut best: Option<Vec<i64>> = None;
    for &column in board.available_columns() {
        let mut clone = board.clone();
        if !matches!(clone.place(column, color), Ok(Some(_))) {
            continue;
        }
        let scores = max_n(&clone, next, depth - 1, streak_weight, center_weight, nodes);
        // >= keeps the branch evaluated last on a tie
        match &best {
            Some(current) if scores[mover] < current[mover] => {}
            _ => best = Some(scores),
        }
    }
    best.unwrap_or_else(|| vec![0; board.colors().len()])
}
