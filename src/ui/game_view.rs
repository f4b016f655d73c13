use std::collections::VecDeque;

use crate::config::UiConfig;
use crate::game::{Edge, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, player_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_row: usize,
    log: &VecDeque<String>,
    ui: &UiConfig,
) {
    let board_height = game_state.board().rows() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Min(board_height),           // Board
            Constraint::Length(log.len() as u16 + 2), // Message log
            Constraint::Length(3),                   // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, ui, chunks[0]);
    render_board(frame, game_state, selected_row, chunks[1]);
    render_log(frame, log, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn shake_status(game_state: &GameState, edge: Edge) -> Span<'static> {
    if game_state.shake_available(edge) {
        Span::styled("ready", Style::default().fg(Color::Green))
    } else {
        Span::styled("used", Style::default().fg(Color::DarkGray))
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, ui: &UiConfig, area: Rect) {
    let turn = game_state.turn();

    let status = Line::from(vec![
        Span::styled(
            format!("Turn: {}", ui.name_of(turn)),
            Style::default()
                .fg(player_color(turn))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  Shake L: "),
        shake_status(game_state, Edge::Left),
        Span::raw("  R: "),
        shake_status(game_state, Edge::Right),
    ]);

    let header = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Vertical Endeavors"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_row: usize, area: Rect) {
    let board_widget =
        Paragraph::new(board_lines(game_state.board(), selected_row)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_log(frame: &mut Frame, log: &VecDeque<String>, area: Rect) {
    let lines: Vec<Line> = log.iter().map(|entry| Line::from(entry.as_str())).collect();
    let log_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));

    frame.render_widget(log_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("↑/↓: Row  |  ←/→: Insert  |  A/D: Shake L/R  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
