use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::BoardError;

/// Side length of the standard board.
pub const DEFAULT_SIZE: usize = 7;

/// The board edge a peg is inserted from, and the side a shake acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn other(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// Single-letter form used in move notation
    pub fn letter(self) -> char {
        match self {
            Edge::Left => 'L',
            Edge::Right => 'R',
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => f.write_str("left"),
            Edge::Right => f.write_str("right"),
        }
    }
}

/// Occupancy of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PegState {
    Empty,
    PlayedBy(Player),
}

/// A board slot: who occupies it and which edge put the occupant there.
///
/// `inserted_from` is `None` exactly when the slot is empty. The fields are
/// private so that a cell can only be built through [`Cell::EMPTY`] or
/// [`Cell::peg`]; deserialization rejects cells that break the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    state: PegState,
    inserted_from: Option<Edge>,
}

#[derive(Deserialize)]
struct RawCell {
    state: PegState,
    inserted_from: Option<Edge>,
}

impl TryFrom<RawCell> for Cell {
    type Error = &'static str;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match (raw.state, raw.inserted_from) {
            (PegState::Empty, None) => Ok(Cell::EMPTY),
            (PegState::PlayedBy(player), Some(edge)) => Ok(Cell::peg(player, edge)),
            (PegState::Empty, Some(_)) => Err("empty cell cannot have an insertion edge"),
            (PegState::PlayedBy(_), None) => Err("occupied cell must have an insertion edge"),
        }
    }
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        state: PegState::Empty,
        inserted_from: None,
    };

    pub fn peg(player: Player, edge: Edge) -> Cell {
        Cell {
            state: PegState::PlayedBy(player),
            inserted_from: Some(edge),
        }
    }

    pub fn state(&self) -> PegState {
        self.state
    }

    pub fn inserted_from(&self) -> Option<Edge> {
        self.inserted_from
    }

    pub fn is_empty(&self) -> bool {
        self.state == PegState::Empty
    }

    /// The player occupying this cell, if any
    pub fn occupant(&self) -> Option<Player> {
        match self.state {
            PegState::Empty => None,
            PegState::PlayedBy(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// A `rows` x `cols` grid of cells, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.rows * raw.cols {
            return Err(format!(
                "{}x{} board needs {} cells, found {}",
                raw.rows,
                raw.cols,
                raw.rows * raw.cols,
                raw.cells.len()
            ));
        }
        Ok(Board {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    /// Create a new empty square board
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Number of rows (the length of each column)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the length of each row)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cell(row, col))
    }

    /// Overwrite the cell at a specific position. No game rules are checked.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        self.put(row, col, cell);
        Ok(())
    }

    /// Check if a row has no empty slot left
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return true;
        }
        self.row(row).iter().all(|cell| !cell.is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Row-major grid of occupants, for presentation.
    pub fn render(&self) -> Vec<Vec<Option<Player>>> {
        (0..self.rows)
            .map(|row| self.row(row).iter().map(Cell::occupant).collect())
            .collect()
    }

    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Unchecked read; callers guarantee the position is in range.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Unchecked write; callers guarantee the position is in range.
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE)
    }
}

/// Plain-text rendering: `.` empty, `X` first player, `O` second player.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<&str> = self
                .row(row)
                .iter()
                .map(|cell| match cell.occupant() {
                    None => ".",
                    Some(Player::First) => "X",
                    Some(Player::Second) => "O",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.rows(), DEFAULT_SIZE);
        assert_eq!(board.cols(), DEFAULT_SIZE);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let cell = board.get(row, col).unwrap();
                assert_eq!(cell, Cell::EMPTY);
                assert_eq!(cell.inserted_from(), None);
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::square(5);
        board.set(2, 4, Cell::peg(Player::Second, Edge::Right)).unwrap();

        let cell = board.get(2, 4).unwrap();
        assert_eq!(cell.state(), PegState::PlayedBy(Player::Second));
        assert_eq!(cell.inserted_from(), Some(Edge::Right));
        assert_eq!(board.peg_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3, 4);
        assert_eq!(
            board.get(3, 0),
            Err(BoardError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(board.get(0, 4).is_err());
        assert!(board.set(5, 5, Cell::peg(Player::First, Edge::Left)).is_err());
        assert_eq!(board, Board::new(3, 4));
    }

    #[test]
    fn test_row_full() {
        let mut board = Board::square(3);
        for col in 0..3 {
            board.set(1, col, Cell::peg(Player::First, Edge::Left)).unwrap();
        }
        assert!(board.is_row_full(1));
        assert!(!board.is_row_full(0));
        assert!(board.is_row_full(3)); // nonexistent rows have no room
        assert!(!board.is_full());
    }

    #[test]
    fn test_render_is_row_major() {
        let mut board = Board::new(2, 3);
        board.set(0, 2, Cell::peg(Player::First, Edge::Right)).unwrap();
        board.set(1, 0, Cell::peg(Player::Second, Edge::Left)).unwrap();

        assert_eq!(
            board.render(),
            vec![
                vec![None, None, Some(Player::First)],
                vec![Some(Player::Second), None, None],
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 3);
        board.set(1, 0, Cell::peg(Player::First, Edge::Left)).unwrap();
        board.set(1, 2, Cell::peg(Player::Second, Edge::Right)).unwrap();
        assert_eq!(board.to_string(), ". . .\nX . O\n");
    }

    #[test]
    fn test_deserialize_rejects_broken_cells() {
        let orphan_edge = r#"{"state":"empty","inserted_from":"left"}"#;
        assert!(serde_json::from_str::<Cell>(orphan_edge).is_err());

        let missing_edge = r#"{"state":{"played_by":"first"},"inserted_from":null}"#;
        assert!(serde_json::from_str::<Cell>(missing_edge).is_err());

        let peg = r#"{"state":{"played_by":"second"},"inserted_from":"right"}"#;
        assert_eq!(
            serde_json::from_str::<Cell>(peg).unwrap(),
            Cell::peg(Player::Second, Edge::Right)
        );
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let mut json = serde_json::to_value(Board::new(2, 2)).unwrap();
        json["rows"] = serde_json::json!(3);
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn test_zero_sized_board() {
        let board = Board::square(0);
        assert!(board.get(0, 0).is_err());
        assert!(board.render().is_empty());
    }
}
