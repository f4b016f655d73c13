//! Edge insertion: a peg enters a row from one edge and stops in the first
//! open slot.

use super::{Board, Cell, Edge, Player};
use crate::error::InsertError;

/// Insert a peg for `player` into `row` from `edge`, returning the column it
/// landed in. Turn order is left to the caller.
pub fn insert(board: &mut Board, row: usize, edge: Edge, player: Player) -> Result<usize, InsertError> {
    if row >= board.rows() {
        return Err(InsertError::OutOfBounds {
            row,
            rows: board.rows(),
        });
    }

    let col = first_open_slot(board, row, edge).ok_or(InsertError::RowFull { row })?;
    board.put(row, col, Cell::peg(player, edge));
    Ok(col)
}

/// First empty column in `row` scanning inward from `edge`. Rows off the
/// board have no open slot.
pub fn first_open_slot(board: &Board, row: usize, edge: Edge) -> Option<usize> {
    if row >= board.rows() {
        return None;
    }
    let cells = board.row(row);
    match edge {
        Edge::Left => cells.iter().position(Cell::is_empty),
        Edge::Right => cells.iter().rposition(Cell::is_empty),
    }
}
