/// Normal/hard mode switching and full resets.
///
/// A mode only selects values out of `Tuning` (patrol speed, burst interval)
/// and the backdrop; switching always starts a fresh game.

use crate::compute::init_state;
use crate::entities::{GameState, Mode};

/// Flip between normal and hard mode and start over.
pub fn toggle_mode(state: &GameState) -> GameState {
    let mode = state.mode.toggled();
    log::info!(
        "switching to {:?} mode (background {})",
        mode,
        mode.background().asset()
    );
    reset(state, mode)
}

/// Rebuild ship, formation and clock from scratch in `mode`.
///
/// Pending events survive in the queue but belong to the old generation, so
/// the next tick discards them instead of letting them fire into the new game.
pub fn reset(state: &GameState, mode: Mode) -> GameState {
    let mut fresh = init_state(mode, state.tuning);
    fresh.generation = state.generation + 1;
    fresh.events = state.events.clone();
    log::info!("game reset (generation {})", fresh.generation);
    fresh
}
