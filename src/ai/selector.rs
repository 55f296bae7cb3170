use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SelectError;
use crate::game::{Board, GameState, LegalMask, Player, COLS};

use super::agent::Agent;
use super::minimax::{MinimaxSearch, SearchConfig};
use super::rules::{Rule, RuleConfig, RuleEngine};

/// Which decision procedure picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RuleBased,
    #[default]
    Minimax,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::RuleBased => "rule-based",
            Strategy::Minimax => "minimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule-based" | "rules" => Ok(Strategy::RuleBased),
            "minimax" => Ok(Strategy::Minimax),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'rule-based' or 'minimax')"
            )),
        }
    }
}

/// Why a column was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Rule(Rule),
    Search { score: i64, nodes: u64 },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Rule(rule) => write!(f, "{rule}"),
            Reason::Search { score, nodes } => {
                write!(f, "minimax score {score}, {nodes} nodes")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub reason: Reason,
}

/// Facade over the rule engine and the search, consumed by game loops.
pub struct MoveSelector {
    strategy: Strategy,
    rules: RuleEngine,
    search: MinimaxSearch,
    rng: StdRng,
}

impl MoveSelector {
    /// `seed` makes the random rules reproducible; `None` seeds from the OS.
    pub fn new(
        strategy: Strategy,
        rules: RuleConfig,
        search: SearchConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        MoveSelector {
            strategy,
            rules: RuleEngine::new(rules),
            search: MinimaxSearch::new(search),
            rng,
        }
    }

    /// The strategy used when acting as an [`Agent`].
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn select(
        &mut self,
        board: &Board,
        mask: &LegalMask,
        player: Player,
        strategy: Strategy,
    ) -> Result<usize, SelectError> {
        Ok(self.select_explained(board, mask, player, strategy)?.column)
    }

    /// Like [`select`](Self::select), also reporting the rule or search
    /// result behind the choice.
    pub fn select_explained(
        &mut self,
        board: &Board,
        mask: &LegalMask,
        player: Player,
        strategy: Strategy,
    ) -> Result<Selection, SelectError> {
        let legal = legal_from_mask(board, mask)?;

        match strategy {
            Strategy::RuleBased => {
                let decision = self.rules.select(board, &legal, player, &mut self.rng)?;
                Ok(Selection {
                    column: decision.column,
                    reason: Reason::Rule(decision.rule),
                })
            }
            Strategy::Minimax => {
                let report = self.search.search(board, player)?;
                Ok(Selection {
                    column: report.column,
                    reason: Reason::Search {
                        score: report.score,
                        nodes: report.nodes,
                    },
                })
            }
        }
    }
}

/// Legal columns from `mask`, checked against the board.
fn legal_from_mask(board: &Board, mask: &LegalMask) -> Result<Vec<usize>, SelectError> {
    if !mask.iter().any(|&legal| legal) {
        return Err(SelectError::NoLegalMove);
    }
    for (column, &legal) in mask.iter().enumerate() {
        if legal == board.is_column_full(column) {
            return Err(SelectError::MaskMismatch { column });
        }
    }
    Ok((0..COLS).filter(|&col| mask[col]).collect())
}

impl Agent for MoveSelector {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SelectError> {
        let strategy = self.strategy;
        self.select(
            state.board(),
            &state.legal_mask(),
            state.current_player(),
            strategy,
        )
    }

    fn name(&self) -> &str {
        match self.strategy {
            Strategy::RuleBased => "Rule-based",
            Strategy::Minimax => "Minimax",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::agent::play_game;
    use crate::ai::RandomAgent;
    use crate::game::{Outcome, ROWS};

    fn selector(strategy: Strategy, seed: u64) -> MoveSelector {
        MoveSelector::new(
            strategy,
            RuleConfig::default(),
            SearchConfig::default(),
            Some(seed),
        )
    }

    fn three_in_bottom_row() -> Board {
        "
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        O O . . . . .
        X X X . . . O
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn both_strategies_complete_the_row() {
        let b = three_in_bottom_row();
        for strategy in [Strategy::RuleBased, Strategy::Minimax] {
            let mut s = selector(strategy, 1);
            assert_eq!(
                s.select(&b, &b.legal_mask(), Player::A, strategy).unwrap(),
                3,
                "{strategy}"
            );
        }
    }

    #[test]
    fn explains_the_choice() {
        let b = three_in_bottom_row();
        let mut s = selector(Strategy::Minimax, 1);
        let rule = s
            .select_explained(&b, &b.legal_mask(), Player::A, Strategy::RuleBased)
            .unwrap();
        assert_eq!(rule.reason, Reason::Rule(Rule::ImmediateWin));
        assert_eq!(rule.reason.to_string(), "rule 1: immediate win");

        let search = s
            .select_explained(&b, &b.legal_mask(), Player::A, Strategy::Minimax)
            .unwrap();
        assert!(matches!(search.reason, Reason::Search { nodes, .. } if nodes > 0));
    }

    #[test]
    fn full_board_has_no_legal_move() {
        let b: Board = "
            X X O O X X O
            O O X X O O X
            X X O O X X O
            O O X X O O X
            X X O O X X O
            O O X X O O X
        "
        .parse()
        .unwrap();
        for strategy in [Strategy::RuleBased, Strategy::Minimax] {
            let mut s = selector(strategy, 0);
            assert_eq!(
                s.select(&b, &b.legal_mask(), Player::A, strategy),
                Err(SelectError::NoLegalMove)
            );
        }
    }

    #[test]
    fn empty_mask_is_rejected() {
        let mut s = selector(Strategy::RuleBased, 0);
        assert_eq!(
            s.select(&Board::new(), &[false; COLS], Player::A, Strategy::RuleBased),
            Err(SelectError::NoLegalMove)
        );
    }

    #[test]
    fn mask_must_match_board() {
        let mut b = Board::new();
        for _ in 0..ROWS / 2 {
            b = b.drop_piece(5, Player::A).unwrap();
            b = b.drop_piece(5, Player::B).unwrap();
        }
        let mut s = selector(Strategy::Minimax, 0);

        let mut claims_full_open = b.legal_mask();
        claims_full_open[5] = true;
        assert_eq!(
            s.select(&b, &claims_full_open, Player::A, Strategy::Minimax),
            Err(SelectError::MaskMismatch { column: 5 })
        );

        let mut hides_open = b.legal_mask();
        hides_open[0] = false;
        assert_eq!(
            s.select(&b, &hides_open, Player::A, Strategy::RuleBased),
            Err(SelectError::MaskMismatch { column: 0 })
        );
    }

    #[test]
    fn seeded_selectors_agree() {
        let config = RuleConfig {
            priority_columns: vec![],
            ..RuleConfig::default()
        };
        let mut first = MoveSelector::new(
            Strategy::RuleBased,
            config.clone(),
            SearchConfig::default(),
            Some(5),
        );
        let mut second =
            MoveSelector::new(Strategy::RuleBased, config, SearchConfig::default(), Some(5));
        let mut state = GameState::initial();
        while !state.is_terminal() {
            let a = first.select_action(&state).unwrap();
            let b = second.select_action(&state).unwrap();
            assert_eq!(a, b);
            state = state.apply_move(a).unwrap();
        }
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("minimax".parse::<Strategy>(), Ok(Strategy::Minimax));
        assert_eq!("rule-based".parse::<Strategy>(), Ok(Strategy::RuleBased));
        assert_eq!("rules".parse::<Strategy>(), Ok(Strategy::RuleBased));
        assert!("mcts".parse::<Strategy>().is_err());
        assert_eq!(Strategy::RuleBased.to_string(), "rule-based");
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut a = selector(Strategy::Minimax, 1);
        let mut b = selector(Strategy::RuleBased, 2);
        let end = play_game(GameState::initial(), &mut a, &mut b).unwrap();
        assert!(end.is_terminal());
    }

    #[test]
    fn minimax_beats_random_agent() {
        let games_per_side = 10;
        let mut wins = 0;

        for seed in 0..games_per_side {
            let mut ai = selector(Strategy::Minimax, seed);
            let mut random = RandomAgent::with_seed(seed);
            let end = play_game(GameState::initial(), &mut ai, &mut random).unwrap();
            if end.outcome() == Outcome::Win(Player::A) {
                wins += 1;
            }

            let mut ai = selector(Strategy::Minimax, seed);
            let mut random = RandomAgent::with_seed(seed + 100);
            let end = play_game(GameState::initial(), &mut random, &mut ai).unwrap();
            if end.outcome() == Outcome::Win(Player::B) {
                wins += 1;
            }
        }

        let total = games_per_side * 2;
        assert!(
            wins * 10 >= total * 8,
            "minimax should beat random at least 80% of the time, got {wins}/{total}"
        );
    }

    #[test]
    fn agent_names() {
        assert_eq!(selector(Strategy::Minimax, 0).name(), "Minimax");
        assert_eq!(selector(Strategy::RuleBased, 0).name(), "Rule-based");
    }
}
