use crate::game::{Board, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Display color for a player's pegs.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::First => Color::Blue,
        Player::Second => Color::Red,
    }
}

/// Board rows as styled lines, with insertion arrows on both edges of the
/// selected row.
pub fn board_lines(board: &Board, selected_row: usize) -> Vec<Line<'static>> {
    let width = board.cols() * 3;
    let mut lines = Vec::with_capacity(board.rows() + 2);

    lines.push(Line::from(format!("     ╔{}╗    ", "═".repeat(width))));

    for (row, occupants) in board.render().into_iter().enumerate() {
        let selected = row == selected_row;
        let arrow_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let (left, right) = if selected { ("▶", "◀") } else { (" ", " ") };

        let mut spans = vec![
            Span::raw(format!("{:>2} ", row + 1)),
            Span::styled(left, arrow_style),
            Span::raw(" ║"),
        ];
        for occupant in occupants {
            let (symbol, color) = match occupant {
                None => (" . ", Color::DarkGray),
                Some(player) => (" ● ", player_color(player)),
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        spans.push(Span::raw("║ "));
        spans.push(Span::styled(right, arrow_style));
        spans.push(Span::raw("   "));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("     ╚{}╝    ", "═".repeat(width))));
    lines
}
