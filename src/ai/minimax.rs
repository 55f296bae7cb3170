use crate::error::{MoveError, SelectError};
use crate::game::{has_four_in_row, Board, Player, COLS};

use super::eval::{Heuristic, WindowEvaluator};

/// Score of a decided game, far outside anything the heuristic produces.
pub const WIN_SCORE: i64 = 999_999_999;
pub const DEFAULT_DEPTH: usize = 3;
pub const MAX_DEPTH: usize = 10;

/// Column ordering: center-first for better alpha-beta pruning.
const CENTER_OUT: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];
const ASCENDING: [usize; COLS] = [0, 1, 2, 3, 4, 5, 6];

/// Order in which sibling columns are expanded. Ties keep the first column
/// expanded, so this also decides tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    #[default]
    CenterOut,
    Ascending,
}

impl MoveOrder {
    fn columns(self) -> &'static [usize; COLS] {
        match self {
            MoveOrder::CenterOut => &CENTER_OUT,
            MoveOrder::Ascending => &ASCENDING,
        }
    }
}

/// Search hyperparameters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    /// Once this many nodes have been visited, unexpanded nodes are scored
    /// statically instead of searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<u64>,
    pub move_order: MoveOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            max_nodes: None,
            move_order: MoveOrder::CenterOut,
        }
    }
}

/// Value of one search node. `column` is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i64,
    pub column: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            score,
            column: None,
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub score: i64,
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
pub struct MinimaxSearch {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl MinimaxSearch {
    pub fn new(config: SearchConfig) -> Self {
        MinimaxSearch {
            config,
            heuristic: Box::new(WindowEvaluator),
            nodes: 0,
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch {
            config,
            heuristic,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `board` with `ai` to move and maximizing.
    pub fn search(&mut self, board: &Board, ai: Player) -> Result<SearchReport, SelectError> {
        let order = self.config.move_order.columns();
        let fallback = order
            .iter()
            .copied()
            .find(|&col| !board.is_column_full(col))
            .ok_or(SelectError::NoLegalMove)?;

        self.nodes = 0;
        let depth = self.config.depth.max(1);
        let result = self.minimax(board, depth, i64::MIN, i64::MAX, true, ai)?;

        Ok(SearchReport {
            column: result.column.unwrap_or(fallback),
            score: result.score,
            nodes: self.nodes,
        })
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        ai: Player,
    ) -> Result<SearchResult, MoveError> {
        self.nodes += 1;

        if has_four_in_row(board, ai) {
            return Ok(SearchResult::leaf(WIN_SCORE));
        }
        if has_four_in_row(board, ai.other()) {
            return Ok(SearchResult::leaf(-WIN_SCORE));
        }
        if board.is_full() {
            return Ok(SearchResult::leaf(0));
        }
        let over_budget = self.config.max_nodes.is_some_and(|limit| self.nodes > limit);
        if depth == 0 || over_budget {
            return Ok(SearchResult::leaf(self.heuristic.evaluate(board, ai)));
        }

        let mover = if maximizing { ai } else { ai.other() };
        let legal: Vec<usize> = self
            .config
            .move_order
            .columns()
            .iter()
            .copied()
            .filter(|&col| !board.is_column_full(col))
            .collect();

        let mut best = SearchResult {
            score: if maximizing { i64::MIN } else { i64::MAX },
            column: legal.first().copied(),
        };

        for col in legal {
            let child = board.drop_piece(col, mover)?;
            let score = self
                .minimax(&child, depth - 1, alpha, beta, !maximizing, ai)?
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}

/// Best column for `ai` at the given depth, using the default evaluator.
pub fn select_column(board: &Board, ai: Player, depth: usize) -> Result<usize, SelectError> {
    let mut search = MinimaxSearch::new(SearchConfig {
        depth,
        ..SearchConfig::default()
    });
    Ok(search.search(board, ai)?.column)
}
