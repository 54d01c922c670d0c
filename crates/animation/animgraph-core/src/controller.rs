//! Contracts between a selector and the sub-controllers it drives.
//!
//! Hosts implement [`AnimGraphInstance`] for each kind of sub-controller and a
//! [`ControllerFactory`] that turns template references into live instances.

use serde::{Deserialize, Serialize};

use crate::data::TemplateRef;
use crate::error::SelectorError;
use crate::ids::NodeId;
use crate::mixer::Mixer;
use crate::time::GameTime;

/// A node output that can be connected to a mixer input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputPort {
    pub node: NodeId,
    pub port: u32,
}

impl OutputPort {
    pub fn new(node: NodeId, port: u32) -> Self {
        Self { node, port }
    }
}

/// A live sub-controller producing one blendable output.
pub trait AnimGraphInstance: Send + Sync {
    /// Output connected to the owning selector's mixer.
    fn output(&self) -> OutputPort;

    /// Evaluate presentation for this frame. Called while the controller carries weight.
    fn apply_presentation_state(&mut self, time: GameTime, dt: f32);

    /// Release host resources. Called exactly once by the owner.
    fn shutdown(&mut self);

    /// Optional logic-advance capability.
    fn graph_logic(&mut self) -> Option<&mut dyn GraphLogic> {
        None
    }
}

/// Logic-advance capability of a sub-controller.
pub trait GraphLogic {
    /// `first_update` is set on the first logic tick after the selected state changed,
    /// so the controller can restart timers or phase.
    fn update_presentation_state(&mut self, first_update: bool, time: GameTime, dt: f32);
}

/// Instantiates controller templates and mixers for a selector.
pub trait ControllerFactory {
    fn create_mixer(&mut self) -> Box<dyn Mixer>;

    fn instantiate(
        &mut self,
        template: &TemplateRef,
    ) -> Result<Box<dyn AnimGraphInstance>, SelectorError>;
}
