//! Four-in-a-row detection over the fixed set of 4-cell windows.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Four `(row, col)` coordinates along one line.
pub type Window = [(usize, usize); 4];

/// 24 horizontal + 21 vertical + 12 + 12 diagonal.
pub const WINDOW_COUNT: usize = 69;

/// Every window on the board: horizontal, vertical, rising and falling diagonals.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); 4]; WINDOW_COUNT];
    let mut n = 0;

    // Horizontal
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + 3 < COLS {
            windows[n] = [(row, col), (row, col + 1), (row, col + 2), (row, col + 3)];
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Vertical
    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row + 3 < ROWS {
            windows[n] = [(row, col), (row + 1, col), (row + 2, col), (row + 3, col)];
            n += 1;
            row += 1;
        }
        col += 1;
    }

    // Diagonal (/) and anti-diagonal (\)
    let mut row = 0;
    while row + 3 < ROWS {
        let mut col = 0;
        while col + 3 < COLS {
            windows[n] = [
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ];
            windows[n + 1] = [
                (row + 3, col),
                (row + 2, col + 1),
                (row + 1, col + 2),
                (row, col + 3),
            ];
            n += 2;
            col += 1;
        }
        row += 1;
    }

    windows
}

/// Read the four cells of a window.
pub fn window_cells(board: &Board, window: &Window) -> [Cell; 4] {
    window.map(|(row, col)| board.get(row, col))
}

/// True if `player` owns all four cells of any window.
pub fn has_four_in_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&(row, col)| board.get(row, col) == cell))
}

/// Number of windows holding exactly three of `player`'s discs and one empty cell.
pub fn count_open_threes(board: &Board, player: Player) -> usize {
    let own = player.to_cell();
    WINDOWS
        .iter()
        .filter(|window| {
            let cells = window_cells(board, window);
            let mine = cells.iter().filter(|&&c| c == own).count();
            let empty = cells.iter().filter(|&&c| c == Cell::Empty).count();
            mine == 3 && empty == 1
        })
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Derive the game outcome from the position alone.
pub fn outcome(board: &Board) -> Outcome {
    if has_four_in_row(board, Player::A) {
        Outcome::Win(Player::A)
    } else if has_four_in_row(board, Player::B) {
        Outcome::Win(Player::B)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
