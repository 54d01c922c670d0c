//! Per-instance selection state, advanced once per phase.

use crate::state::AnimState;

/// Mutable selection state of a selector.
///
/// `previous` is the state whose transition time is used when blending into
/// `current`. It only moves when the controller instance behind `current`
/// actually changes, so states sharing a controller do not restart the blend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlendState {
    /// Last state seen by the logic phase.
    pub last_observed: Option<AnimState>,
    /// State being blended to by the presentation phase.
    pub current: Option<AnimState>,
    /// Locomotion tick that produced `current`.
    pub current_tick: u32,
    pub previous: Option<AnimState>,
}

/// What a presentation-phase observation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// Same state and tick as before.
    Unchanged,
    /// New state or tick, same controller instance.
    Restamped,
    /// The active controller instance changed.
    ControllerChanged,
}

impl BlendState {
    /// Logic phase: record `state` and report whether it differs from the last one seen.
    pub fn observe_logic(&mut self, state: AnimState) -> bool {
        let first_update = self.last_observed != Some(state);
        self.last_observed = Some(state);
        first_update
    }

    /// Presentation phase: move to `state` stamped with `tick`.
    ///
    /// `controller_of` resolves the controller instance bound to a state, if any.
    pub fn observe_presentation<F>(
        &mut self,
        state: AnimState,
        tick: u32,
        controller_of: F,
    ) -> Observation
    where
        F: Fn(AnimState) -> Option<usize>,
    {
        if self.current == Some(state) && self.current_tick == tick {
            return Observation::Unchanged;
        }

        let old_state = self.current;
        let old_controller = old_state.and_then(&controller_of);

        self.current = Some(state);
        self.current_tick = tick;

        if controller_of(state) == old_controller {
            return Observation::Restamped;
        }

        self.previous = if self.previous.is_none() {
            Some(state)
        } else {
            old_state
        };
        Observation::ControllerChanged
    }
}
