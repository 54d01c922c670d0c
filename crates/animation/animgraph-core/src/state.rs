//! Animation states, predicted locomotion snapshots and the table that classifies
//! one into the other.

use serde::{Deserialize, Serialize};

/// Animation state a selector can blend to.
///
/// The "not yet initialized" sentinel is expressed as `Option::<AnimState>::None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimState {
    Stand,
    Run,
    Jump,
    InAir,
    Dead,
}

impl AnimState {
    pub const COUNT: usize = 5;

    pub const ALL: [AnimState; AnimState::COUNT] = [
        AnimState::Stand,
        AnimState::Run,
        AnimState::Jump,
        AnimState::InAir,
        AnimState::Dead,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Predicted locomotion state as produced by character movement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocoState {
    Stand,
    GroundMove,
    Jump,
    DoubleJump,
    InAir,
    Dead,
    /// Any value this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl LocoState {
    pub const COUNT: usize = 7;

    /// Decode a raw discriminant; out-of-range values become [`LocoState::Unknown`].
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => LocoState::Stand,
            1 => LocoState::GroundMove,
            2 => LocoState::Jump,
            3 => LocoState::DoubleJump,
            4 => LocoState::InAir,
            5 => LocoState::Dead,
            _ => LocoState::Unknown,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Tick-stamped predicted state snapshot driving a selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharAnimState {
    pub loco_state: LocoState,
    /// Tick at which `loco_state` was entered. Non-decreasing.
    pub loco_tick: u32,
}

impl CharAnimState {
    pub fn new(loco_state: LocoState, loco_tick: u32) -> Self {
        Self {
            loco_state,
            loco_tick,
        }
    }
}

impl Default for CharAnimState {
    fn default() -> Self {
        Self::new(LocoState::Stand, 0)
    }
}

/// One row of a serialized classification table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMapping {
    pub loco: LocoState,
    pub anim: AnimState,
}

/// Lookup table from [`LocoState`] to [`AnimState`].
///
/// Unmapped locomotion states classify to [`AnimState::Stand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMap {
    table: [Option<AnimState>; LocoState::COUNT],
}

impl StateMap {
    /// A table with no rows; everything classifies to `Stand`.
    pub fn empty() -> Self {
        Self {
            table: [None; LocoState::COUNT],
        }
    }

    pub fn from_mappings(rows: &[StateMapping]) -> Self {
        let mut map = Self::empty();
        for row in rows {
            map.set(row.loco, row.anim);
        }
        map
    }

    pub fn set(&mut self, loco: LocoState, anim: AnimState) {
        self.table[loco.index()] = Some(anim);
    }

    pub fn get(&self, loco: LocoState) -> Option<AnimState> {
        self.table[loco.index()]
    }

    #[inline]
    pub fn classify(&self, loco: LocoState) -> AnimState {
        self.get(loco).unwrap_or(AnimState::Stand)
    }
}

impl Default for StateMap {
    fn default() -> Self {
        Self::from_mappings(&[
            StateMapping {
                loco: LocoState::Stand,
                anim: AnimState::Stand,
            },
            StateMapping {
                loco: LocoState::GroundMove,
                anim: AnimState::Run,
            },
            StateMapping {
                loco: LocoState::Jump,
                anim: AnimState::Jump,
            },
            StateMapping {
                loco: LocoState::DoubleJump,
                anim: AnimState::InAir,
            },
            StateMapping {
                loco: LocoState::InAir,
                anim: AnimState::InAir,
            },
            StateMapping {
                loco: LocoState::Dead,
                anim: AnimState::Dead,
            },
        ])
    }
}
