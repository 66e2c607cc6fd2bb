//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Keyboard or mouse drops pieces into a 6x7 grid; wins and draws are
//! detected by the core board state machine, and the rest is decoration:
//! a drop animation, a landing bounce, a winning-line blink, and fireworks
//! on the game-over screen.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, per-game session
//! - [`ui`] — Terminal UI: menu, game, and game-over screens plus effects
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
