//! Core Connect Four game logic: board representation, player types, win
//! detection, and a game state with immutable transitions.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, LegalMask, COLS, ROWS};
pub use player::Player;
pub use state::GameState;
pub use win::{has_four_in_row, outcome, Outcome};
