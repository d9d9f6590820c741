//! An engine for generalized N-in-a-row board games
//!
//! The engine keeps a gravity-fed grid of colored pieces for any number of
//! cycling players, detects winning streaks along every row, column and
//! diagonal, and picks a move for any color with a fixed-depth maxN search.
//!
//! # Basic Usage
//!
//! ```
//! use connectn_ai::{Board, Color};
//!
//!# fn main() -> anyhow::Result<()> {
//! let mut board = Board::new(6, 7, vec![Color::Red, Color::Yellow], 4)?;
//! board.place(3, Color::Red)?;
//!
//! let reply = board.find_move(Color::Yellow)?;
//! assert!(reply.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod lines;

pub mod search;

pub mod streak;

mod test;

pub use board::{Board, BoardError, Color, Piece};
pub use search::MoveSearch;

/// The board width used by the terminal front-end
pub const DEFAULT_COLUMNS: usize = 9;

/// The board height used by the terminal front-end
pub const DEFAULT_ROWS: usize = 9;

/// The streak length needed to win under the default rules
pub const DEFAULT_STREAK_TARGET: usize = 4;

// the winning streak must fit on the default board or no game can be won
const_assert!(DEFAULT_STREAK_TARGET <= DEFAULT_ROWS);
const_assert!(DEFAULT_STREAK_TARGET <= DEFAULT_COLUMNS);
