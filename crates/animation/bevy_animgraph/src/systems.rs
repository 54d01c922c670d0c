use bevy::prelude::*;

use crate::components::{AnimGraphSelector, PredictedAnimState};
use crate::resources::GameClock;

/// Advance the simulation clock, tracking the fixed timestep's rate.
pub fn advance_game_clock(mut clock: ResMut<GameClock>, time: Res<Time>) {
    let dt = time.delta_seconds();
    if dt > 0.0 {
        clock.0.tick_rate = (1.0 / dt).round() as u32;
    }
    clock.0.advance();
}

/// Logic phase: runs in `FixedUpdate` with the fixed timestep.
pub fn update_graph_logic_system(
    clock: Res<GameClock>,
    time: Res<Time>,
    mut selectors: Query<(&PredictedAnimState, &mut AnimGraphSelector)>,
) {
    let dt = time.delta_seconds();
    for (state, mut selector) in selectors.iter_mut() {
        selector.0.update_graph_logic(&state.0, clock.0, dt);
    }
}

/// Presentation phase: runs in `Update` with the frame delta.
pub fn apply_presentation_state_system(
    clock: Res<GameClock>,
    time: Res<Time>,
    mut selectors: Query<(&PredictedAnimState, &mut AnimGraphSelector)>,
) {
    let dt = time.delta_seconds();
    for (state, mut selector) in selectors.iter_mut() {
        selector.0.apply_presentation_state(&state.0, clock.0, dt);
    }
}
