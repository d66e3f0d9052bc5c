//! Fixed timestep simulation tick
//!
//! Advances the round deterministically: player first, then each ghost, then
//! pellet pickup and the win/loss checks. Terminal outcomes freeze the state.

use super::state::{Dir, GameState, RoundOutcome};
use crate::consts::PELLET_SCORE;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Requested player heading, if any was sampled this frame
    pub turn: Option<Dir>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.outcome.is_terminal() {
        return;
    }

    if let Some(dir) = input.turn {
        state.player.set_direction(dir);
    }

    state.player.update(&state.walls);

    let GameState {
        walls, ghosts, rng, ..
    } = state;
    for ghost in ghosts.iter_mut() {
        ghost.update(walls, rng);
    }

    let tile = state.player_tile();
    if state.pellets.remove(&(tile.x, tile.y)) {
        state.score += PELLET_SCORE;
        if state.pellets.is_empty() {
            state.outcome = RoundOutcome::Won;
            log::info!(
                "maze cleared at tick {} with score {}",
                state.time_ticks,
                state.score
            );
        }
    }

    // Contact check runs last, so a tick that both clears the maze and
    // touches a ghost ends in a loss.
    if state
        .ghosts
        .iter()
        .any(|ghost| ghost.rect.overlaps(&state.player.rect))
    {
        state.outcome = RoundOutcome::Lost;
        log::info!(
            "caught at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }

    state.time_ticks += 1;
}
