//! # Connect Four AI
//!
//! Move selection for Connect Four: given a 6x7 board, the legal columns and
//! the player to move, pick a column. Two strategies are available: an ordered
//! chain of tactical rules, and a depth-limited minimax search with alpha-beta
//! pruning over a windowed positional evaluator.
//!
//! ## Modules
//!
//! - [`game`]: Board, player, win detection, and an immutable game state
//! - [`ai`]: Evaluator, rule engine, minimax search, the `MoveSelector` facade
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
