use std::collections::VecDeque;
use std::io;

use crate::config::AppConfig;
use crate::error::{ActionError, InsertError, ShakeError};
use crate::game::{Edge, GameState};
use crate::notation::Action;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use log::info;
use ratatui::{backend::Backend, Terminal};

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_row: usize,
    should_quit: bool,
    log: VecDeque<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game_state = config.game.new_game();
        let mut app = App {
            selected_row: game_state.board().rows() / 2, // Start in middle
            game_state,
            config,
            should_quit: false,
            log: VecDeque::new(),
        };
        app.push_log("New game started!".to_string());
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_row + 1 < self.game_state.board().rows() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Left => self.act(Action::Insert {
                row: self.selected_row,
                edge: Edge::Left,
            }),
            KeyCode::Right => self.act(Action::Insert {
                row: self.selected_row,
                edge: Edge::Right,
            }),
            KeyCode::Char('a') => self.act(Action::Shake(Edge::Left)),
            KeyCode::Char('d') => self.act(Action::Shake(Edge::Right)),
            KeyCode::Char('r') => {
                self.game_state = self.config.game.new_game();
                self.selected_row = self.game_state.board().rows() / 2;
                self.log.clear();
                self.push_log("New game started!".to_string());
                info!("new game started");
            }
            _ => {}
        }
    }

    /// Apply an action for the player on turn and log the outcome
    fn act(&mut self, action: Action) {
        let mover = self.config.ui.name_of(self.game_state.turn()).to_string();

        let entry = match self.game_state.apply_mut(action) {
            Ok(()) => match action {
                Action::Insert { .. } => format!("{mover} plays at {action}"),
                Action::Shake(Edge::Left) => "Left side SHAKES the table!".to_string(),
                Action::Shake(Edge::Right) => "Right side SHAKES the table!".to_string(),
            },
            Err(ActionError::Insert(InsertError::RowFull { row })) => {
                format!("Row {} is full!", row + 1)
            }
            Err(ActionError::Insert(InsertError::OutOfBounds { .. })) => {
                "Invalid row!".to_string()
            }
            Err(ActionError::Shake(ShakeError::AlreadyUsed(edge))) => {
                format!("The {edge} shake is already used!")
            }
        };
        self.push_log(entry);
    }

    fn push_log(&mut self, entry: String) {
        self.log.push_back(entry);
        while self.log.len() > self.config.ui.log_capacity {
            self.log.pop_front();
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_row,
            &self.log,
            &self.config.ui,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
