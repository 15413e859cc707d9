use std::str::FromStr;

use crate::game::{GameBoard, GameState, Player, PlayerProfile};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, board: &GameBoard, selected_column: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(board_rows(board)),        // Board
            Constraint::Length(3),                     // Message
            Constraint::Length(3),                     // Controls
        ])
        .split(frame.area());

    render_header(frame, board, chunks[0]);
    render_board(frame, board, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Lines the board section needs: the grid plus labels, borders and the
/// selection marker. Saturates for boards taller than a terminal can be.
pub fn board_rows(board: &GameBoard) -> u16 {
    u16::try_from(board.height()).unwrap_or(u16::MAX).saturating_add(4)
}

/// Terminal color for a player's pieces. Unparseable profile colors fall back
/// to red for the first player and yellow for the second.
pub fn piece_color(profile: &PlayerProfile, player: Player) -> Color {
    Color::from_str(&profile.color).unwrap_or(match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    })
}

/// Header text for the current state of the game.
pub fn status_text(board: &GameBoard) -> String {
    let goal = format!("Connect {}", board.victory_condition());
    match board.state() {
        GameState::InProgress => {
            let name = &board.player_profile(board.current_player()).name;
            format!("Current Player: {}  |  {}", name, goal)
        }
        GameState::Won(player) => {
            format!("Game Over: {} wins  |  {}", board.player_profile(player).name, goal)
        }
        GameState::Draw => format!("Game Over: draw  |  {}", goal),
    }
}

fn render_header(frame: &mut Frame, board: &GameBoard, area: Rect) {
    let player = board.state().winner().unwrap_or(board.current_player());
    let color = match board.state() {
        GameState::Draw => Color::White,
        _ => piece_color(board.player_profile(player), player),
    };

    let header = Paragraph::new(status_text(board))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &GameBoard, selected_column: usize, area: Rect) {
    let width = board.width();
    let grid = board.grid();
    let winning = board.winning_line().unwrap_or_default();
    let colors = [
        piece_color(board.player_profile(Player::One), Player::One),
        piece_color(board.player_profile(Player::Two), Player::Two),
    ];

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Board rows, top row first
    for row in (0..board.height()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let owner = grid.get(col, row).and_then(|cell| cell.owner());
            let span = match owner {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(colors[player.index()]);
                    if winning.contains(&(col, row)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !board.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 1-9: Select  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardConfig;

    #[test]
    fn test_piece_color_parses_names_and_hex() {
        let named = PlayerProfile::new("a", "blue");
        assert_eq!(piece_color(&named, Player::One), Color::Blue);

        let hex = PlayerProfile::new("b", "#ff8800");
        assert_eq!(piece_color(&hex, Player::Two), Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_piece_color_falls_back_per_player() {
        let bogus = PlayerProfile::new("c", "not a color");
        assert_eq!(piece_color(&bogus, Player::One), Color::Red);
        assert_eq!(piece_color(&bogus, Player::Two), Color::Yellow);
    }

    #[test]
    fn test_status_text() {
        let players = [
            PlayerProfile::new("Ada", "red"),
            PlayerProfile::new("Grace", "yellow"),
        ];
        let mut board = GameBoard::with_players(BoardConfig::default(), players).unwrap();
        assert_eq!(status_text(&board), "Current Player: Ada  |  Connect 4");

        board.drop_piece(0).unwrap();
        assert_eq!(status_text(&board), "Current Player: Grace  |  Connect 4");

        for col in [1, 0, 1, 0, 1, 0] {
            board.drop_piece(col).unwrap();
        }
        assert_eq!(status_text(&board), "Game Over: Ada wins  |  Connect 4");
    }

    #[test]
    fn test_board_rows_saturates() {
        assert_eq!(board_rows(&GameBoard::default()), 10);
        assert_eq!(board_rows(&GameBoard::new(1, 70_000, 4).unwrap()), u16::MAX);
        assert_eq!(board_rows(&GameBoard::new(1, 65_533, 4).unwrap()), u16::MAX);
    }

    #[test]
    fn test_status_text_draw() {
        let mut board = GameBoard::new(1, 1, 3).unwrap();
        board.drop_piece(0).unwrap();
        assert_eq!(status_text(&board), "Game Over: draw  |  Connect 3");
    }
}
