//! State selector: picks an animation state from the predicted locomotion state
//! and cross-fades between the sub-controllers bound to those states.
//!
//! Methods:
//! - new / with_config (instantiate controllers, dedup by template, build transition tables)
//! - update_graph_logic (classify → advance logic of the selected controller)
//! - apply_presentation_state (classify → blend state transition → cross-fade → evaluate weighted controllers)
//! - shutdown

use std::fmt;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::blend_state::{BlendState, Observation};
use crate::config::Config;
use crate::controller::{AnimGraphInstance, ControllerFactory, OutputPort};
use crate::data::{is_valid_time, ControllerDef, SelectorDef, TemplateRef};
use crate::error::SelectorError;
use crate::mixer::Mixer;
use crate::state::{AnimState, CharAnimState, StateMap};
use crate::time::GameTime;
use crate::transition::CrossFade;

/// Resolved binding of one animation state.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeEntry {
    /// Index of the controller instance (shared by states using the same template).
    pub controller: usize,
    /// Mixer input the controller is connected to.
    pub port: usize,
    /// Transition time into this state, indexed by the previous state.
    pub transition_times: [f32; AnimState::COUNT],
}

pub struct StateSelector {
    cfg: Config,
    state_map: StateMap,
    controllers: Vec<Box<dyn AnimGraphInstance>>,
    controller_ports: Vec<usize>,
    entries: [Option<RuntimeEntry>; AnimState::COUNT],
    mixer: Box<dyn Mixer>,
    fade: CrossFade,
    blend: BlendState,
    shut_down: bool,
}

impl StateSelector {
    /// Build a selector with the default [`Config`].
    pub fn new(
        def: &SelectorDef,
        factory: &mut dyn ControllerFactory,
    ) -> Result<Self, SelectorError> {
        Self::with_config(def, Config::default(), factory)
    }

    /// Build a selector, instantiating one controller per distinct template.
    ///
    /// A state bound more than once keeps its first binding. If the factory fails,
    /// controllers created so far are shut down before the error is returned.
    pub fn with_config(
        def: &SelectorDef,
        cfg: Config,
        factory: &mut dyn ControllerFactory,
    ) -> Result<Self, SelectorError> {
        let mut mixer = factory.create_mixer();
        let mut controllers: Vec<Box<dyn AnimGraphInstance>> = Vec::new();
        let mut controller_ports: Vec<usize> = Vec::new();
        let mut tables: Vec<[f32; AnimState::COUNT]> = Vec::new();
        let mut by_template: HashMap<&TemplateRef, usize> = HashMap::new();
        let mut entries: [Option<RuntimeEntry>; AnimState::COUNT] = Default::default();

        for binding in &def.controllers {
            let controller = match by_template.get(&binding.template) {
                Some(&idx) => idx,
                None => {
                    let instance = match factory.instantiate(&binding.template) {
                        Ok(instance) => instance,
                        Err(err) => {
                            for c in controllers.iter_mut() {
                                c.shutdown();
                            }
                            return Err(err);
                        }
                    };
                    let idx = controllers.len();
                    controller_ports.push(mixer.add_input(instance.output()));
                    controllers.push(instance);
                    tables.push(transition_table(binding));
                    by_template.insert(&binding.template, idx);
                    idx
                }
            };

            let slot = &mut entries[binding.state.index()];
            if slot.is_some() {
                warn!(
                    "selector '{}': animation state {:?} already registered; ignoring template '{}'",
                    def.name,
                    binding.state,
                    binding.template.as_str()
                );
                continue;
            }
            *slot = Some(RuntimeEntry {
                controller,
                port: controller_ports[controller],
                transition_times: tables[controller],
            });
        }

        debug!(
            "selector '{}': {} controllers for {} states",
            def.name,
            controllers.len(),
            entries.iter().filter(|e| e.is_some()).count()
        );

        let fade = CrossFade::new(controller_ports.clone());
        Ok(Self {
            cfg,
            state_map: def.state_map(),
            controllers,
            controller_ports,
            entries,
            mixer,
            fade,
            blend: BlendState::default(),
            shut_down: false,
        })
    }

    /// Logic phase: advance the controller bound to the selected state.
    pub fn update_graph_logic(&mut self, snapshot: &CharAnimState, time: GameTime, dt: f32) {
        if self.shut_down {
            return;
        }
        let state = self.state_map.classify(snapshot.loco_state);
        let first_update = self.blend.observe_logic(state);

        let Some(controller) = self.entries[state.index()].as_ref().map(|e| e.controller) else {
            return;
        };
        if let Some(logic) = self.controllers[controller].graph_logic() {
            logic.update_presentation_state(first_update, time, dt);
        }
    }

    /// Presentation phase: blend toward the selected state and evaluate every
    /// controller that still carries weight.
    pub fn apply_presentation_state(
        &mut self,
        snapshot: &CharAnimState,
        time: GameTime,
        dt: f32,
    ) {
        if self.shut_down {
            return;
        }
        let state = self.state_map.classify(snapshot.loco_state);
        let entries = &self.entries;
        let observation = self.blend.observe_presentation(state, snapshot.loco_tick, |s| {
            entries[s.index()].as_ref().map(|e| e.controller)
        });
        if observation == Observation::ControllerChanged {
            debug!(
                "selector: {:?} -> {:?} at tick {}",
                self.blend.previous, state, snapshot.loco_tick
            );
        }

        if let Some(entry) = &self.entries[state.index()] {
            let duration = self
                .blend
                .previous
                .map_or(0.0, |p| entry.transition_times[p.index()]);
            let blend_velocity = if duration > 0.0 { 1.0 / duration } else { 1.0 / dt };
            self.fade.update(&mut *self.mixer, entry.port, blend_velocity, dt);
        }

        for (controller, &port) in self.controllers.iter_mut().zip(&self.controller_ports) {
            if self.mixer.input_weight(port) > self.cfg.weight_epsilon {
                controller.apply_presentation_state(time, dt);
            }
        }
    }

    /// Shut down every controller instance once. Later calls and updates are ignored.
    ///
    /// Dropping the selector shuts it down as well.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        for controller in self.controllers.iter_mut() {
            controller.shutdown();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Output of the selector's mixer.
    pub fn output(&self) -> OutputPort {
        self.mixer.output()
    }

    pub fn mixer(&self) -> &dyn Mixer {
        &*self.mixer
    }

    pub fn blend_state(&self) -> &BlendState {
        &self.blend
    }

    pub fn current_state(&self) -> Option<AnimState> {
        self.blend.current
    }

    pub fn previous_state(&self) -> Option<AnimState> {
        self.blend.previous
    }

    /// Number of distinct controller instances.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn entry(&self, state: AnimState) -> Option<&RuntimeEntry> {
        self.entries[state.index()].as_ref()
    }

    /// Transition time used when blending into `to` from `from`.
    pub fn transition_time(&self, to: AnimState, from: AnimState) -> Option<f32> {
        self.entry(to).map(|e| e.transition_times[from.index()])
    }

    /// Raw mixer weight of the controller bound to `state` (0 when unbound).
    pub fn state_weight(&self, state: AnimState) -> f32 {
        self.entry(state).map_or(0.0, |e| self.mixer.input_weight(e.port))
    }

    /// Share of the mixer output held by the controller bound to `state`.
    pub fn blend_weight(&self, state: AnimState) -> f32 {
        self.entry(state).map_or(0.0, |e| self.mixer.normalized_weight(e.port))
    }
}

impl Drop for StateSelector {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for StateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSelector")
            .field("cfg", &self.cfg)
            .field("controllers", &self.controllers.len())
            .field("entries", &self.entries)
            .field("blend", &self.blend)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

fn transition_table(binding: &ControllerDef) -> [f32; AnimState::COUNT] {
    let mut times = [checked_time(binding, None, binding.transition_time); AnimState::COUNT];
    for t in &binding.custom_transitions {
        times[t.source.index()] = checked_time(binding, Some(t.source), t.time);
    }
    times
}

fn checked_time(binding: &ControllerDef, source: Option<AnimState>, time: f32) -> f32 {
    if is_valid_time(time) {
        return time;
    }
    warn!(
        "transition time {} into {:?} (from {:?}) is not a finite non-negative number; using 0",
        time, binding.state, source
    );
    0.0
}
