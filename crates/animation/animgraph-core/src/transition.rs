//! Cross-fading between mixer inputs.

use crate::mixer::Mixer;

/// Moves `current` toward `target` by at most `max_delta`.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Fades one active mixer input in while fading every other managed input out.
///
/// Weights are written raw; normalizing them is left to the mixer.
#[derive(Clone, Debug)]
pub struct CrossFade {
    ports: Vec<usize>,
}

impl CrossFade {
    pub fn new(ports: Vec<usize>) -> Self {
        Self { ports }
    }

    /// Advance weights by `blend_velocity * dt` toward 1 for `active_port` and 0 for the rest.
    ///
    /// Nothing changes when `dt` is not a positive finite number.
    pub fn update(&self, mixer: &mut dyn Mixer, active_port: usize, blend_velocity: f32, dt: f32) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        let mut max_delta = (blend_velocity * dt).max(0.0);
        // Weights live in [0, 1]; a step that rounds just short of 1 still completes the fade.
        if max_delta >= 1.0 - f32::EPSILON {
            max_delta = 1.0;
        }

        for &port in &self.ports {
            let target = if port == active_port { 1.0 } else { 0.0 };
            let weight = move_towards(mixer.input_weight(port), target, max_delta);
            mixer.set_input_weight(port, weight);
        }
    }
}
