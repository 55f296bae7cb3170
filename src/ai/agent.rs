use crate::error::{MatchError, SelectError};
use crate::game::GameState;

/// Universal interface for anything that picks moves in a game loop.
pub trait Agent {
    /// Select a column given the current game state.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SelectError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Play a full game from `state`, `first` moving for whoever is on turn.
/// Returns the terminal state.
pub fn play_game(
    mut state: GameState,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
) -> Result<GameState, MatchError> {
    let mut turn = 0;
    while !state.is_terminal() {
        let agent: &mut dyn Agent = if turn % 2 == 0 {
            &mut *first
        } else {
            &mut *second
        };
        let action = agent
            .select_action(&state)
            .map_err(|source| MatchError::Select {
                agent: agent.name().to_string(),
                source,
            })?;
        state = state
            .apply_move(action)
            .map_err(|source| MatchError::Turn {
                agent: agent.name().to_string(),
                source,
            })?;
        turn += 1;
    }
    Ok(state)
}
