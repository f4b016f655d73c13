//! Move notation: `L4` inserts from the left into row 4, `R1` from the right
//! into row 1 (rows count from 1, top first), and `SL` / `SR` shake for the
//! left / right edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseActionError;
use crate::game::Edge;

/// A single thing a player can do to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Insert into a zero-based row from an edge
    Insert { row: usize, edge: Edge },
    Shake(Edge),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Insert { row, edge } => write!(f, "{}{}", edge.letter(), row + 1),
            Action::Shake(edge) => write!(f, "S{}", edge.letter()),
        }
    }
}

fn parse_edge(c: char, token: &str) -> Result<Edge, ParseActionError> {
    match c.to_ascii_uppercase() {
        'L' => Ok(Edge::Left),
        'R' => Ok(Edge::Right),
        _ => Err(ParseActionError::UnknownEdge(token.to_string())),
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let first = chars.next().ok_or(ParseActionError::Empty)?;

        if first.eq_ignore_ascii_case(&'s') {
            let mut rest = chars;
            let edge = match (rest.next(), rest.next()) {
                (Some(c), None) => parse_edge(c, token)?,
                _ => return Err(ParseActionError::UnknownEdge(token.to_string())),
            };
            return Ok(Action::Shake(edge));
        }

        let edge = parse_edge(first, token)?;
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| ParseActionError::InvalidRow(token.to_string()))?;
        if row == 0 {
            return Err(ParseActionError::InvalidRow(token.to_string()));
        }
        Ok(Action::Insert { row: row - 1, edge })
    }
}

/// Parse a whitespace- or comma-separated list of actions.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ParseActionError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
