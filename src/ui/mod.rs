//! Terminal UI: a ratatui view that drives a [`GameBoard`](crate::game::GameBoard)
//! from the keyboard.

mod app;
pub mod game_view;

pub use app::App;
