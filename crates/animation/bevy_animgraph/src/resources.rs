use bevy::prelude::*;

use animgraph_core::GameTime;

/// Simulation clock shared by every selector. Advanced once per `FixedUpdate`.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GameClock(pub GameTime);
