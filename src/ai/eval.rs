use crate::game::win::{window_cells, WINDOWS};
use crate::game::{Board, Cell, Player};

pub const FOUR_SCORE: i64 = 100_000;
pub const OWN_THREE_SCORE: i64 = 50;
pub const OWN_TWO_SCORE: i64 = 2;
pub const OPP_THREE_SCORE: i64 = -40;
pub const OPP_TWO_SCORE: i64 = -2;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: the sum of [`score_window`] over all 69 windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvaluator;

impl Heuristic for WindowEvaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        score_position(board, player)
    }
}

/// Score one 4-cell window. Offence outweighs defence at the three-disc
/// threshold (50 vs 40).
pub fn score_window(window: [Cell; 4], perspective: Player) -> i64 {
    let own_cell = perspective.to_cell();
    let opp_cell = perspective.other().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for cell in window {
        match cell {
            c if c == own_cell => own += 1,
            c if c == opp_cell => opp += 1,
            _ => empty += 1,
        }
    }

    if own == 4 {
        FOUR_SCORE
    } else if opp == 4 {
        -FOUR_SCORE
    } else if own == 3 && empty == 1 {
        OWN_THREE_SCORE
    } else if own == 2 && empty == 2 {
        OWN_TWO_SCORE
    } else if opp == 3 && empty == 1 {
        OPP_THREE_SCORE
    } else if opp == 2 && empty == 2 {
        OPP_TWO_SCORE
    } else {
        0
    }
}

/// Static evaluation of a whole board for `perspective`.
pub fn score_position(board: &Board, perspective: Player) -> i64 {
    WINDOWS
        .iter()
        .map(|window| score_window(window_cells(board, window), perspective))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell::{Empty as E, A, B};

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn window_table() {
        let cases = [
            ([A, A, A, A], 100_000),
            ([B, B, B, B], -100_000),
            ([A, A, E, A], 50),
            ([E, A, A, E], 2),
            ([B, E, B, B], -40),
            ([B, E, E, B], -2),
            ([A, B, E, E], 0),
            ([A, A, A, B], 0),
            ([A, E, E, E], 0),
            ([E, E, E, E], 0),
        ];
        for (window, expected) in cases {
            assert_eq!(
                score_window(window, Player::A),
                expected,
                "window {window:?}"
            );
        }
        assert_eq!(score_window([A, A, E, A], Player::B), -40);
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score_position(&board, Player::A), 0);
        assert_eq!(score_position(&board, Player::B), 0);
    }

    #[test]
    fn swapping_colours_and_perspective_is_invariant() {
        let b = board(
            "
            . . . . . . .
            . . . . . . .
            . . . X . . .
            . . O X . . .
            . . O O X . .
            . X X O X O .
            ",
        );
        assert_eq!(
            score_position(&b, Player::A),
            score_position(&b.swap_players(), Player::B)
        );
        assert_eq!(
            score_position(&b, Player::B),
            score_position(&b.swap_players(), Player::A)
        );
    }

    #[test]
    fn negated_under_swap_without_threes() {
        // Only two-disc windows are present, and those score symmetrically.
        let b = board(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            X X . . . O O
            ",
        );
        let score = score_position(&b, Player::A);
        assert_eq!(score, -score_position(&b.swap_players(), Player::A));
        assert_eq!(score, 0);
    }

    #[test]
    fn three_in_a_row_scores_high() {
        let b = board(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            X X X . . . .
            ",
        );
        let score = score_position(&b, Player::A);
        assert!(score > 40, "3-in-a-row should score high, got {score}");
        assert!(score_position(&b, Player::B) < 0);
    }

    #[test]
    fn completed_four_dominates() {
        let b = board(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . O O O . . .
            X X X X . . .
            ",
        );
        assert!(score_position(&b, Player::A) > 90_000);
        assert!(score_position(&b, Player::B) < -90_000);
    }

    #[test]
    fn heuristic_trait_matches_free_function() {
        let b = board(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . O . . .
            . . X X . . .
            ",
        );
        assert_eq!(
            WindowEvaluator.evaluate(&b, Player::B),
            score_position(&b, Player::B)
        );
    }
}
