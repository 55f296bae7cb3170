use std::fmt;

use rand::Rng;

use crate::error::{MoveError, SelectError};
use crate::game::win::count_open_threes;
use crate::game::{has_four_in_row, Board, Player};

/// Center-out column preference used by rule 6.
pub const CENTER_OUT: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Rule-engine tuning, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Column preference for rule 6. Columns missing from the list fall
    /// through to the random rules.
    pub priority_columns: Vec<usize>,
    /// Check for a double threat before a single open three.
    pub double_threat_first: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            priority_columns: CENTER_OUT.to_vec(),
            double_threat_first: false,
        }
    }
}

/// The rule that produced a decision, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ImmediateWin,
    Block,
    OpenThree,
    DoubleThreat,
    PreemptiveBlock,
    CenterPreference,
    SafeRandom,
    Random,
}

impl Rule {
    pub fn number(self) -> u8 {
        match self {
            Rule::ImmediateWin => 1,
            Rule::Block => 2,
            Rule::OpenThree => 3,
            Rule::DoubleThreat => 4,
            Rule::PreemptiveBlock => 5,
            Rule::CenterPreference => 6,
            Rule::SafeRandom => 7,
            Rule::Random => 8,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::ImmediateWin => "immediate win",
            Rule::Block => "block opponent win",
            Rule::OpenThree => "create open three",
            Rule::DoubleThreat => "create double threat",
            Rule::PreemptiveBlock => "block opponent open three",
            Rule::CenterPreference => "center preference",
            Rule::SafeRandom => "random safe move",
            Rule::Random => "random move",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}: {}", self.number(), self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDecision {
    pub column: usize,
    pub rule: Rule,
}

/// Ordered chain of tactical rules. The first rule that applies decides.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    pub fn new(config: RuleConfig) -> Self {
        RuleEngine { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Pick a column for `player` among `legal`, which must list only
    /// playable columns of `board`.
    pub fn select<R: Rng>(
        &self,
        board: &Board,
        legal: &[usize],
        player: Player,
        rng: &mut R,
    ) -> Result<RuleDecision, SelectError> {
        if legal.is_empty() {
            return Err(SelectError::NoLegalMove);
        }
        let opponent = player.other();
        let decide = |column: usize, rule: Rule| -> Result<RuleDecision, SelectError> {
            Ok(RuleDecision { column, rule })
        };

        if let Some(col) = first_where(legal, |col| {
            Ok(has_four_in_row(&board.drop_piece(col, player)?, player))
        })? {
            return decide(col, Rule::ImmediateWin);
        }

        if let Some(col) = first_where(legal, |col| {
            Ok(has_four_in_row(&board.drop_piece(col, opponent)?, opponent))
        })? {
            return decide(col, Rule::Block);
        }

        let open_three = |col: usize| -> Result<bool, MoveError> {
            Ok(count_open_threes(&board.drop_piece(col, player)?, player) >= 1)
        };
        let double_threat = |col: usize| -> Result<bool, MoveError> {
            Ok(count_open_threes(&board.drop_piece(col, player)?, player) >= 2)
        };
        if self.config.double_threat_first {
            if let Some(col) = first_where(legal, double_threat)? {
                return decide(col, Rule::DoubleThreat);
            }
            if let Some(col) = first_where(legal, open_three)? {
                return decide(col, Rule::OpenThree);
            }
        } else {
            if let Some(col) = first_where(legal, open_three)? {
                return decide(col, Rule::OpenThree);
            }
            if let Some(col) = first_where(legal, double_threat)? {
                return decide(col, Rule::DoubleThreat);
            }
        }

        if let Some(col) = first_where(legal, |col| {
            Ok(count_open_threes(&board.drop_piece(col, opponent)?, opponent) >= 1)
        })? {
            return decide(col, Rule::PreemptiveBlock);
        }

        if let Some(&col) = self
            .config
            .priority_columns
            .iter()
            .find(|&&col| legal.contains(&col))
        {
            return decide(col, Rule::CenterPreference);
        }

        let mut safe = Vec::with_capacity(legal.len());
        for &col in legal {
            if !opponent_wins_next(&board.drop_piece(col, player)?, opponent)? {
                safe.push(col);
            }
        }
        if !safe.is_empty() {
            return decide(safe[rng.random_range(0..safe.len())], Rule::SafeRandom);
        }

        decide(legal[rng.random_range(0..legal.len())], Rule::Random)
    }
}

fn first_where<F>(legal: &[usize], mut pred: F) -> Result<Option<usize>, MoveError>
where
    F: FnMut(usize) -> Result<bool, MoveError>,
{
    for &col in legal {
        if pred(col)? {
            return Ok(Some(col));
        }
    }
    Ok(None)
}

/// Whether `opponent` has a winning drop on `board`.
fn opponent_wins_next(board: &Board, opponent: Player) -> Result<bool, MoveError> {
    for col in board.legal_columns() {
        if has_four_in_row(&board.drop_piece(col, opponent)?, opponent) {
            return Ok(true);
        }
    }
    Ok(false)
}
