//! animgraph core (engine-agnostic)
//!
//! A locomotion-driven state selector for animation graphs. Each animation state
//! is bound to a sub-controller; every tick the selector classifies a predicted
//! locomotion snapshot, advances the selected controller's logic and cross-fades
//! mixer weight toward it. Hosts provide the sub-controllers and the mixer through
//! the traits in [`controller`] and [`mixer`].

pub mod blend_state;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod ids;
pub mod mixer;
pub mod registry;
pub mod selector;
pub mod state;
pub mod time;
pub mod transition;

// Re-exports for consumers (adapters)
pub use blend_state::{BlendState, Observation};
pub use config::Config;
pub use controller::{AnimGraphInstance, ControllerFactory, GraphLogic, OutputPort};
pub use data::{parse_selector_json, ControllerDef, SelectorDef, TemplateRef, TransitionDef};
pub use error::SelectorError;
pub use ids::{NodeId, NodeIdAllocator};
pub use mixer::{Mixer, MixerInput, WeightMixer};
pub use registry::{TemplateBuilder, TemplateRegistry};
pub use selector::{RuntimeEntry, StateSelector};
pub use state::{AnimState, CharAnimState, LocoState, StateMap, StateMapping};
pub use time::GameTime;
pub use transition::CrossFade;
