use log::debug;
use serde::{Deserialize, Serialize};

use super::board::DEFAULT_SIZE;
use super::{insertion, shake, Board, Edge, Player};
use crate::error::{ActionError, InsertError, ReplayError, ShakeError};
use crate::notation::Action;

/// Which edges have spent their one shake this game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeUsed {
    pub left: bool,
    pub right: bool,
}

impl ShakeUsed {
    pub fn get(&self, edge: Edge) -> bool {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    fn mark(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.left = true,
            Edge::Right => self.right = true,
        }
    }
}

/// Owned view of a game handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
    pub shake_used: ShakeUsed,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    shake_used: ShakeUsed,
}

/// Start a game on an empty `size` x `size` board.
pub fn new_game(size: usize) -> GameState {
    GameState::new(size, size)
}

impl GameState {
    /// Create a game on an empty board; `First` moves first
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            turn: Player::First,
            shake_used: ShakeUsed::default(),
        }
    }

    /// Create the standard 7x7 game
    pub fn initial() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Hand the opening move to `player`
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.turn = player;
        self
    }

    /// Player whose move it is
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shake_used(&self, edge: Edge) -> bool {
        self.shake_used.get(edge)
    }

    pub fn shake_available(&self, edge: Edge) -> bool {
        !self.shake_used(edge)
    }

    /// Every (row, edge) insertion that would currently succeed
    pub fn legal_moves(&self) -> Vec<(usize, Edge)> {
        (0..self.board.rows())
            .filter(|&row| !self.board.is_row_full(row))
            .flat_map(|row| [(row, Edge::Left), (row, Edge::Right)])
            .collect()
    }

    /// Insert a peg for the current player and pass the turn. Returns the
    /// column the peg landed in.
    pub fn play_move_mut(&mut self, row: usize, edge: Edge) -> Result<usize, InsertError> {
        let player = self.turn;
        let col = insertion::insert(&mut self.board, row, edge, player)?;
        debug!("{} inserted from {} into row {} -> column {}", player.name(), edge, row, col);

        self.turn = self.turn.other();
        Ok(col)
    }

    /// Apply a move and return new state (immutable)
    pub fn play_move(&self, row: usize, edge: Edge) -> Result<GameState, InsertError> {
        let mut next = self.clone();
        next.play_move_mut(row, edge)?;
        Ok(next)
    }

    /// Spend the shake for `edge`. The turn does not change.
    pub fn trigger_shake_mut(&mut self, edge: Edge) -> Result<(), ShakeError> {
        if self.shake_used(edge) {
            return Err(ShakeError::AlreadyUsed(edge));
        }

        shake::shake_board(&mut self.board, edge);
        self.shake_used.mark(edge);
        debug!("{} shake applied", edge);
        Ok(())
    }

    /// Shake and return new state (immutable)
    pub fn trigger_shake(&self, edge: Edge) -> Result<GameState, ShakeError> {
        let mut next = self.clone();
        next.trigger_shake_mut(edge)?;
        Ok(next)
    }

    /// Apply a parsed action in place
    pub fn apply_mut(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Insert { row, edge } => {
                self.play_move_mut(row, edge)?;
            }
            Action::Shake(edge) => self.trigger_shake_mut(edge)?,
        }
        Ok(())
    }

    /// Apply a parsed action and return new state (immutable)
    pub fn apply(&self, action: Action) -> Result<GameState, ActionError> {
        let mut next = self.clone();
        next.apply_mut(action)?;
        Ok(next)
    }

    /// Apply actions in order, stopping at the first one that fails. Actions
    /// before the failure stay applied.
    pub fn replay(&mut self, actions: &[Action]) -> Result<(), ReplayError> {
        for (index, &action) in actions.iter().enumerate() {
            self.apply_mut(action).map_err(|source| ReplayError {
                number: index + 1,
                action,
                source,
            })?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            shake_used: self.shake_used,
        }
    }

    /// Row-major occupant grid for the view layer
    pub fn render(&self) -> Vec<Vec<Option<Player>>> {
        self.board.render()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
