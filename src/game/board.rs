use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// One flag per column, `true` when the column can still take a disc.
pub type LegalMask = [bool; COLS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'X',
            Cell::B => 'O',
        }
    }
}

/// Immutable 6x7 grid. Row 0 is the bottom row; discs stack upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from the environment's integer encoding
    /// (0 empty, 1 player A, 2 player B), top row first.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != ROWS {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (top_index, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            let row = ROWS - 1 - top_index;
            if codes.len() != COLS {
                return Err(BoardError::RowWidth {
                    row,
                    found: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                cells[row][col] = match code {
                    0 => Cell::Empty,
                    1 => Cell::A,
                    2 => Cell::B,
                    _ => return Err(BoardError::InvalidCode { row, col, code }),
                };
            }
        }

        Self::from_cells(cells)
    }

    fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Result<Self, BoardError> {
        for col in 0..COLS {
            for row in 1..ROWS {
                if cells[row][col] != Cell::Empty && cells[row - 1][col] == Cell::Empty {
                    return Err(BoardError::Floating { row, col });
                }
            }
        }
        Ok(Board { cells })
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Lowest empty row of a column, if any
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    pub fn legal_mask(&self) -> LegalMask {
        let mut mask = [false; COLS];
        for (col, slot) in mask.iter_mut().enumerate() {
            *slot = !self.is_column_full(col);
        }
        mask
    }

    /// Return a copy of the board with `player`'s disc dropped into `col`.
    pub fn drop_piece(&self, col: usize, player: Player) -> Result<Board, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let mut next = *self;
        next.cells[row][col] = player.to_cell();
        Ok(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// The same position with every A disc turned into B and vice versa.
    pub fn swap_players(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut().flatten() {
            *cell = match *cell {
                Cell::Empty => Cell::Empty,
                Cell::A => Cell::B,
                Cell::B => Cell::A,
            };
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows printed top first, one symbol per cell: `.` empty, `X` A, `O` B.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the `Display` form. Blank lines and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(BoardError::RowCount { found: lines.len() });
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (top_index, line) in lines.iter().enumerate() {
            let row = ROWS - 1 - top_index;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardError::RowWidth {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells[row][col] = match symbol {
                    '.' | '·' => Cell::Empty,
                    'X' | 'x' => Cell::A,
                    'O' | 'o' => Cell::B,
                    _ => return Err(BoardError::InvalidSymbol { row, col, symbol }),
                };
            }
        }

        Self::from_cells(cells)
    }
}
