//! # Vertical Endeavors
//!
//! A two-player peg game. Pegs enter a row from its left or right edge and
//! slide inward to the first open slot. Each edge may "shake" the board once
//! per game, dropping its own pegs down their columns while the other edge's
//! pegs stay put as obstacles.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, insertion, shake, game state
//! - [`notation`] — Text notation for moves (`L4`, `R1`, `SL`)
//! - [`ui`] — Terminal UI: board view and message log
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod ui;
