use std::path::PathBuf;

use crate::game::Edge;
use crate::notation::Action;

/// Errors from raw cell access on a [`Board`](crate::game::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors from inserting a peg into a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("row {row} is outside the board (rows: {rows})")]
    OutOfBounds { row: usize, rows: usize },

    #[error("row {row} is full")]
    RowFull { row: usize },
}

/// Errors from shaking the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShakeError {
    #[error("the {0} shake has already been used this game")]
    AlreadyUsed(Edge),
}

/// Either kind of failure when applying an [`Action`](crate::notation::Action).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Insert(#[from] InsertError),

    #[error(transparent)]
    Shake(#[from] ShakeError),
}

/// A scripted replay stopped at a failing action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("move {number} ({action}) failed: {source}")]
pub struct ReplayError {
    /// 1-based position of the failing action in the script
    pub number: usize,
    pub action: Action,
    pub source: ActionError,
}

/// Errors from parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("empty move")]
    Empty,

    #[error("unknown edge in '{0}' (expected L or R)")]
    UnknownEdge(String),

    #[error("invalid row in '{0}' (expected a row number starting at 1)")]
    InvalidRow(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_error_display() {
        let err = InsertError::RowFull { row: 3 };
        assert_eq!(err.to_string(), "row 3 is full");

        let err = InsertError::OutOfBounds { row: 9, rows: 7 };
        assert_eq!(err.to_string(), "row 9 is outside the board (rows: 7)");
    }

    #[test]
    fn test_shake_error_display() {
        let err = ShakeError::AlreadyUsed(Edge::Left);
        assert_eq!(
            err.to_string(),
            "the left shake has already been used this game"
        );
    }

    #[test]
    fn test_action_error_is_transparent() {
        let err: ActionError = ShakeError::AlreadyUsed(Edge::Right).into();
        assert_eq!(
            err.to_string(),
            "the right shake has already been used this game"
        );
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError {
            number: 3,
            action: Action::Insert { row: 0, edge: Edge::Left },
            source: InsertError::RowFull { row: 0 }.into(),
        };
        assert_eq!(err.to_string(), "move 3 (L1) failed: row 0 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be >= 1"
        );
    }
}
