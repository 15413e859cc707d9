use crate::error::GameError;
use crate::game::{DropOutcome, GameBoard, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

/// Interactive front end. Owns the one [`GameBoard`] for the session and
/// translates key presses into board calls.
pub struct App {
    board: GameBoard,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: GameBoard) -> Self {
        let selected_column = board.width() / 2; // Start in middle
        App {
            board,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
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
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.board.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                // 1-based column shortcut
                let col = c as usize - '1' as usize;
                if col < self.board.width() {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.board.reset();
                self.selected_column = self.board.width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.board.drop_piece(self.selected_column) {
            Ok(DropOutcome::Placed { state, .. }) => {
                self.message = match state {
                    GameState::InProgress => None,
                    GameState::Won(player) => {
                        Some(format!("{} wins!", self.board.player_profile(player).name))
                    }
                    GameState::Draw => Some("It's a draw!".to_string()),
                };
            }
            Ok(DropOutcome::Rejected { column, .. }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(e) => {
                debug!(error = %e, "drop failed");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.board, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameBoard::default())
    }
}
