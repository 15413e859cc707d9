//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built with
//! Ratatui. Board size and the run length needed to win are configurable.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, board state machine, win detection
//! - [`ui`] — Terminal UI: game view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
