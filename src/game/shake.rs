//! Board shake: column-wise gravity for one side's pegs.
//!
//! Shaking for an edge drops every peg that edge inserted as far toward the
//! bottom of its column as it can go. Pegs inserted from the other edge are
//! obstacles: they never move, and nothing above them may fall past them.
//! Columns are independent of each other.

use super::{Board, Cell, Edge};

/// Shake every column of the board for `side`.
pub fn shake_board(board: &mut Board, side: Edge) {
    let cols = board.cols();
    for index in 0..cols {
        // Right shakes walk the columns mirrored; the result is the same.
        let col = match side {
            Edge::Left => index,
            Edge::Right => cols - 1 - index,
        };
        shake_column(board, col, side);
    }
}

/// Compact the `side` pegs of a single column toward the bottom.
///
/// Two cursors walk up the column. `low` is the lowest slot not yet
/// settled and `high` searches above it for a peg to pull down. When `high`
/// meets an obstacle, both cursors restart above it: the obstacle becomes the
/// floor for everything higher up.
pub(crate) fn shake_column(board: &mut Board, col: usize, side: Edge) {
    if col >= board.cols() || board.rows() < 2 {
        return;
    }

    let mut low = board.rows() as isize - 1;
    let mut high = low - 1;

    while high >= 0 {
        let (lo, hi) = (low as usize, high as usize);

        if board.cell(lo, col).is_empty() {
            let above = board.cell(hi, col);
            if above.is_empty() {
                high -= 1;
            } else if above.inserted_from() == Some(side) {
                board.put(lo, col, above);
                board.put(hi, col, Cell::EMPTY);
            } else {
                low = high - 1;
                high = low - 1;
            }
        } else {
            low -= 1;
            if high >= low {
                high = low - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    const L: Option<Edge> = Some(Edge::Left);
    const R: Option<Edge> = Some(Edge::Right);
    const E: Option<Edge> = None;

    /// Build a single-column board from top-to-bottom provenance tags.
    fn column(tags: &[Option<Edge>]) -> Board {
        let mut board = Board::new(tags.len(), 1);
        for (row, tag) in tags.iter().enumerate() {
            if let Some(edge) = tag {
                board.set(row, 0, Cell::peg(Player::First, *edge)).unwrap();
            }
        }
        board
    }

    fn tags(board: &Board, col: usize) -> Vec<Option<Edge>> {
        (0..board.rows())
            .map(|row| board.get(row, col).unwrap().inserted_from())
            .collect()
    }

    #[test]
    fn test_blocked_by_obstacle() {
        let mut board = column(&[E, L, E, R, E]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![E, E, L, R, E]);
    }

    #[test]
    fn test_falls_to_floor() {
        let mut board = column(&[L, E, L, E, E]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![E, E, E, L, L]);
    }

    #[test]
    fn test_other_side_does_not_move() {
        let mut board = column(&[R, E, E, R, E]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![R, E, E, R, E]);
    }

    #[test]
    fn test_lands_on_settled_peg() {
        let mut board = column(&[L, E, E, R, L]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![E, E, L, R, L]);
    }

    #[test]
    fn test_multiple_obstacles() {
        let mut board = column(&[L, E, R, L, E, R, E, L, E]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![E, L, R, E, L, R, E, E, L]);
    }

    #[test]
    fn test_right_shake_mirrors() {
        let mut board = column(&[R, L, E, E]);
        shake_column(&mut board, 0, Edge::Right);
        assert_eq!(tags(&board, 0), vec![R, L, E, E]);

        let mut board = column(&[R, E, L, E, R, E]);
        shake_column(&mut board, 0, Edge::Right);
        assert_eq!(tags(&board, 0), vec![E, R, L, E, E, R]);
    }

    #[test]
    fn test_occupant_travels_with_peg() {
        let mut board = Board::new(3, 1);
        board.set(0, 0, Cell::peg(Player::Second, Edge::Left)).unwrap();
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(board.get(2, 0).unwrap(), Cell::peg(Player::Second, Edge::Left));
        assert!(board.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_tiny_columns_are_untouched() {
        let mut board = column(&[L]);
        shake_column(&mut board, 0, Edge::Left);
        assert_eq!(tags(&board, 0), vec![L]);

        let mut board = Board::square(0);
        shake_board(&mut board, Edge::Left);
        assert_eq!(board, Board::square(0));
    }

    #[test]
    fn test_column_outside_board_is_ignored() {
        let mut board = column(&[L, E, E]);
        shake_column(&mut board, 1, Edge::Left);
        assert_eq!(tags(&board, 0), vec![L, E, E]);
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let mut board = Board::new(4, 3);
        board.set(0, 0, Cell::peg(Player::First, Edge::Left)).unwrap();
        board.set(2, 0, Cell::peg(Player::Second, Edge::Right)).unwrap();
        board.set(1, 1, Cell::peg(Player::Second, Edge::Left)).unwrap();
        board.set(0, 2, Cell::peg(Player::First, Edge::Right)).unwrap();
        board.set(1, 2, Cell::peg(Player::First, Edge::Left)).unwrap();

        for side in [Edge::Left, Edge::Right] {
            let mut forward = board.clone();
            for col in 0..board.cols() {
                shake_column(&mut forward, col, side);
            }
            let mut backward = board.clone();
            for col in (0..board.cols()).rev() {
                shake_column(&mut backward, col, side);
            }
            let mut whole = board.clone();
            shake_board(&mut whole, side);

            assert_eq!(forward, backward);
            assert_eq!(forward, whole);
        }
    }

    #[test]
    fn test_shake_board_handles_every_column() {
        let mut board = Board::new(3, 3);
        board.set(0, 0, Cell::peg(Player::First, Edge::Left)).unwrap();
        board.set(0, 2, Cell::peg(Player::Second, Edge::Left)).unwrap();
        board.set(0, 1, Cell::peg(Player::Second, Edge::Right)).unwrap();

        shake_board(&mut board, Edge::Left);

        assert_eq!(board.get(2, 0).unwrap().inserted_from(), L);
        assert_eq!(board.get(2, 2).unwrap().inserted_from(), L);
        assert_eq!(board.get(0, 1).unwrap().inserted_from(), R);
        assert_eq!(board.peg_count(), 3);
    }
}
