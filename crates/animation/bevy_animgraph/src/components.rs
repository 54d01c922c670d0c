use bevy::prelude::*;

use animgraph_core::{CharAnimState, StateSelector};

/// Predicted locomotion snapshot of the owning entity. Written by gameplay/netcode.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictedAnimState(pub CharAnimState);

/// State selector owned by an entity.
///
/// The selector shuts its controllers down when dropped, so removing or
/// replacing the component (or despawning the entity) tears them down.
#[derive(Component, Debug)]
pub struct AnimGraphSelector(pub StateSelector);

impl From<StateSelector> for AnimGraphSelector {
    fn from(selector: StateSelector) -> Self {
        Self(selector)
    }
}
