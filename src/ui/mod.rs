//! Terminal UI: the interactive board view that drives the game core.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
