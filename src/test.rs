#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, BoardError, Color};
    use crate::lines::{LineIndex, Orientation};
    use crate::search::{MoveSearch, CENTER_WEIGHT, STREAK_WEIGHT};
    use crate::streak;

    fn two_color_board() -> Result<Board> {
        Ok(Board::new(6, 7, vec![Color::Red, Color::Yellow], 4)?)
    }

    #[test]
    pub fn line_count() {
        for &(rows, columns) in &[(6usize, 7usize), (9, 9), (4, 4), (1, 1)] {
            let index = LineIndex::build(rows, columns);
            assert_eq!(
                index.lines().len(),
                3 * (rows + columns) - 2,
                "{}x{} grid",
                rows,
                columns
            );
        }
    }

    #[test]
    pub fn every_cell_in_every_family_exactly_once() {
        let (rows, columns) = (6, 7);
        let index = LineIndex::build(rows, columns);

        let families = [
            Orientation::Row,
            Orientation::Column,
            Orientation::DiagonalUp,
            Orientation::DiagonalDown,
        ];
        for family in families.iter() {
            let mut seen = vec![0usize; rows * columns];
            for line in index
                .lines()
                .iter()
                .filter(|line| line.orientation == *family)
            {
                for &(row, column) in line.cells() {
                    seen[row * columns + column] += 1;
                }
            }
            assert!(
                seen.iter().all(|&count| count == 1),
                "family {:?} misses or repeats a cell",
                family
            );
        }
    }

    #[test]
    pub fn empty_board_has_no_streaks() -> Result<()> {
        let board = two_color_board()?;
        let table = streak::scan(&board);
        assert!(table.iter().all(|runs| runs.is_empty()));
        Ok(())
    }

    #[test]
    pub fn horizontal_streak_wins() -> Result<()> {
        let mut board = two_color_board()?;
        for column in 2..6 {
            board.place(column, Color::Red)?;
        }
        assert_eq!(board.winner(), Some(Color::Red));
        Ok(())
    }

    #[test]
    pub fn column_fills_up() -> Result<()> {
        let mut board = two_color_board()?;
        for _ in 0..6 {
            assert!(board.available_columns().contains(&3));
            board.place(3, Color::Red)?;
        }
        assert_eq!(board.available_columns(), &[0, 1, 2, 4, 5, 6]);

        // a full column is skipped, not an error
        assert!(board.place(3, Color::Yellow)?.is_none());
        assert_eq!(board.pieces().len(), 6);
        Ok(())
    }

    #[test]
    pub fn unknown_color_is_rejected() -> Result<()> {
        let mut board = two_color_board()?;
        board.place(0, Color::Red)?;

        let result = board.place(0, Color::Purple);
        assert!(matches!(
            result,
            Err(BoardError::UnknownColor(Color::Purple))
        ));
        assert_eq!(board.pieces().len(), 1);
        assert_eq!(board.available_columns().len(), 7);
        Ok(())
    }

    #[test]
    pub fn bad_configurations_are_rejected() {
        assert!(matches!(
            Board::new(0, 7, vec![Color::Red, Color::Yellow], 4),
            Err(BoardError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Board::new(6, 7, vec![], 4),
            Err(BoardError::NoColors)
        ));
        assert!(matches!(
            Board::new(6, 7, vec![Color::Red, Color::Red], 4),
            Err(BoardError::DuplicateColor(Color::Red))
        ));
        assert!(matches!(
            Board::new(6, 7, vec![Color::Red, Color::Yellow], 1),
            Err(BoardError::StreakTarget(1))
        ));
    }

    #[test]
    pub fn clones_do_not_touch_the_original() -> Result<()> {
        let mut board = two_color_board()?;
        board.place(2, Color::Red)?;

        let mut clone = board.clone();
        for _ in 0..5 {
            clone.place(2, Color::Yellow)?;
        }

        assert_eq!(board.pieces().len(), 1);
        assert_eq!(board.cell(5, 2), Some(Color::Red));
        assert_eq!(board.cell(4, 2), None);
        assert_eq!(board.available_columns().len(), 7);
        assert!(!clone.available_columns().contains(&2));
        Ok(())
    }

    #[test]
    pub fn turn_order_cycles() -> Result<()> {
        let board = Board::new(4, 5, vec![Color::Red, Color::Green, Color::Blue], 3)?;
        assert_eq!(board.next_color(Color::Red)?, Color::Green);
        assert_eq!(board.next_color(Color::Green)?, Color::Blue);
        assert_eq!(board.next_color(Color::Blue)?, Color::Red);
        assert!(board.next_color(Color::Purple).is_err());
        Ok(())
    }

    #[test]
    pub fn red_wins_with_a_vertical_four() -> Result<()> {
        let mut board = two_color_board()?;
        for drop in 0..4 {
            assert_eq!(board.winner(), None);
            board.place(3, Color::Red)?;
            if drop < 3 {
                board.place(0, Color::Yellow)?;
            }
        }
        assert_eq!(board.winner(), Some(Color::Red));

        // the run shows up in the vertical line of column 3
        let line = board
            .line_index()
            .lines()
            .iter()
            .find(|line| line.orientation == Orientation::Column && line.cells()[0].1 == 3)
            .unwrap();
        let mut table = vec![Vec::new(); 2];
        streak::scan_line(&board, line, &mut table);
        assert_eq!(table[0], vec![4]);
        Ok(())
    }

    #[test]
    pub fn heuristic_counts_streaks_and_central_pieces() -> Result<()> {
        let mut board = two_color_board()?;
        // two reds stacked in the central column, two yellows side by side
        // at the left edge
        board.place(3, Color::Red)?;
        board.place(3, Color::Red)?;
        board.place(0, Color::Yellow)?;
        board.place(1, Color::Yellow)?;

        let scores = board.heuristic_score(2, 4);
        // red: a vertical run of 2, both pieces central
        assert_eq!(scores[0], 2 * 2 + 2 * 4);
        // yellow: a horizontal run of 2, nothing central
        assert_eq!(scores[1], 2 * 2);
        Ok(())
    }

    #[test]
    pub fn short_lines_still_feed_the_heuristic() -> Result<()> {
        let mut board = Board::new(2, 2, vec![Color::Red, Color::Yellow], 3)?;
        board.place(0, Color::Red)?;
        board.place(0, Color::Red)?;

        // the vertical run sits on a line shorter than the streak target
        let scores = board.heuristic_score(2, 4);
        assert_eq!(scores[0], 2 * 2 + 2 * 4);
        assert_eq!(board.winner(), None);
        Ok(())
    }

    #[test]
    pub fn search_takes_an_immediate_win() -> Result<()> {
        let mut board = two_color_board()?;
        for column in 0..3 {
            board.place(column, Color::Red)?;
            board.place(column, Color::Yellow)?;
        }

        // red completes the bottom row at column 3
        assert_eq!(board.find_move(Color::Red)?, Some(3));
        Ok(())
    }

    #[test]
    pub fn zero_depth_search_matches_the_heuristic() -> Result<()> {
        let mut board = two_color_board()?;
        board.place(2, Color::Red)?;
        board.place(4, Color::Yellow)?;
        board.place(2, Color::Red)?;

        let mut searcher = MoveSearch::new(board.clone());
        let chosen = searcher.choose(Color::Yellow, 0)?.map(|(column, _)| column);

        // argmax by hand, later columns winning ties
        let mut best: Option<(usize, i64)> = None;
        for &column in board.available_columns() {
            let mut clone = board.clone();
            clone.place(column, Color::Yellow)?;
            let score = clone.heuristic_score(STREAK_WEIGHT, CENTER_WEIGHT)[1];
            match best {
                Some((_, top)) if score < top => {}
                _ => best = Some((column, score)),
            }
        }
        assert_eq!(chosen, best.map(|(column, _)| column));
        // joining the piece at column 4 from the central column is best here
        assert_eq!(chosen, Some(3));
        Ok(())
    }

    #[test]
    pub fn no_move_on_a_decided_board() -> Result<()> {
        let mut board = two_color_board()?;
        for column in 0..4 {
            board.place(column, Color::Red)?;
        }
        assert_eq!(board.winner(), Some(Color::Red));
        assert_eq!(board.find_move(Color::Yellow)?, None);
        Ok(())
    }

    #[test]
    pub fn no_move_when_the_grid_is_full() -> Result<()> {
        let mut board = Board::new(2, 2, vec![Color::Red, Color::Yellow], 3)?;
        board.place(0, Color::Red)?;
        board.place(0, Color::Yellow)?;
        board.place(1, Color::Yellow)?;
        board.place(1, Color::Red)?;

        assert_eq!(board.winner(), None);
        assert!(board.available_columns().is_empty());
        assert_eq!(board.find_move(Color::Red)?, None);
        Ok(())
    }

    #[test]
    pub fn search_reports_visited_nodes() -> Result<()> {
        let board = two_color_board()?;
        let mut searcher = MoveSearch::new(board);
        searcher.choose(Color::Red, 2)?;

        // root, 7 first placements, 7x7 replies
        assert_eq!(searcher.node_count, 1 + 7 + 49);
        Ok(())
    }

    #[test]
    pub fn unknown_color_cannot_search() -> Result<()> {
        let board = two_color_board()?;
        assert!(matches!(
            board.find_move(Color::Green),
            Err(BoardError::UnknownColor(Color::Green))
        ));
        Ok(())
    }
}
