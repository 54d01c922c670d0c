//! Bevy integration for animgraph state selectors.
//!
//! Entities carrying both [`PredictedAnimState`] and [`AnimGraphSelector`] get their
//! selector's logic advanced in `FixedUpdate` and its presentation applied in `Update`.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{AnimGraphSelector, PredictedAnimState};
pub use resources::GameClock;

/// Ordering handles for the selector systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimGraphSet {
    Logic,
    Presentation,
}

pub struct AnimGraphPlugin;

impl Plugin for AnimGraphPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .add_systems(
                FixedUpdate,
                (
                    systems::advance_game_clock,
                    systems::update_graph_logic_system,
                )
                    .chain()
                    .in_set(AnimGraphSet::Logic),
            )
            .add_systems(
                Update,
                systems::apply_presentation_state_system.in_set(AnimGraphSet::Presentation),
            );
    }
}
