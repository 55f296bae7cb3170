mod agent;
pub mod eval;
pub mod minimax;
mod random;
pub mod rules;
pub mod selector;

pub use agent::{play_game, Agent};
pub use eval::{score_position, score_window, Heuristic, WindowEvaluator};
pub use minimax::{select_column, MinimaxSearch, MoveOrder, SearchConfig, SearchReport};
pub use random::RandomAgent;
pub use rules::{Rule, RuleConfig, RuleDecision, RuleEngine};
pub use selector::{MoveSelector, Reason, Selection, Strategy};
