//! Core configuration for animgraph-core.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a state selector's blending.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Controllers whose mixer weight is at or below this value are not evaluated
    /// during the presentation phase.
    pub weight_epsilon: f32,
}
