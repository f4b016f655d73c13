//! Core game logic: board and cells, edge insertion, the board shake, and the
//! game state that ties them together.

mod board;
pub mod insertion;
mod player;
pub mod shake;
mod state;

pub use board::{Board, Cell, Edge, PegState, DEFAULT_SIZE};
pub use player::Player;
pub use state::{new_game, GameState, ShakeUsed, Snapshot};
