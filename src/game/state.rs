use super::win::{self, Outcome};
use super::{Board, LegalMask, Player};
use crate::error::TurnError;

/// One turn's snapshot of a game, owned by the game loop and advanced by
/// value: `apply_move` returns the next state and leaves this one untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::A, // A starts
            outcome: Outcome::InProgress,
        }
    }

    /// Resume from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            board,
            current_player: to_move,
            outcome: win::outcome(&board),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Legal columns as a mask; all false once the game is over
    pub fn legal_mask(&self) -> LegalMask {
        if self.is_terminal() {
            return [false; super::COLS];
        }
        self.board.legal_mask()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }

        let board = self.board.drop_piece(column, self.current_player)?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            outcome: win::outcome(&board),
        })
    }
}
