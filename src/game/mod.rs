//! Core Connect Four logic: the grid, player identities, the game board state
//! machine and win detection from the last move.

mod board;
mod player;
mod replay;
mod state;
pub mod win;

pub use board::{Cell, Grid, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::{Player, PlayerProfile};
pub use replay::{replay, ReplaySummary};
pub use state::{BoardConfig, DropOutcome, GameBoard, GameState, Move, DEFAULT_VICTORY_CONDITION};
