//! Core Connect Four game logic: board representation, player types, and the
//! per-game session state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coord, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameSession, MoveError};
