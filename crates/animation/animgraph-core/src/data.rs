//! Serializable selector definitions.

use serde::{Deserialize, Serialize};

use crate::error::SelectorError;
use crate::state::{AnimState, StateMap, StateMapping};

/// Identity of a controller template. Bindings naming the same template share one instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRef(pub String);

impl TemplateRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Overrides the default transition time when blending in from `source`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDef {
    pub source: AnimState,
    pub time: f32,
}

/// Binds one animation state to a controller template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerDef {
    pub state: AnimState,
    pub template: TemplateRef,
    /// Default transition time from any other state (unless overridden).
    #[serde(default)]
    pub transition_time: f32,
    /// Custom transition times from specific states.
    #[serde(default)]
    pub custom_transitions: Vec<TransitionDef>,
}

impl ControllerDef {
    pub fn new(state: AnimState, template: impl Into<String>, transition_time: f32) -> Self {
        Self {
            state,
            template: TemplateRef(template.into()),
            transition_time,
            custom_transitions: Vec::new(),
        }
    }

    /// Builder-style helper adding a custom transition.
    pub fn with_transition(mut self, source: AnimState, time: f32) -> Self {
        self.custom_transitions.push(TransitionDef { source, time });
        self
    }
}

/// A complete state selector definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorDef {
    #[serde(default)]
    pub name: String,
    pub controllers: Vec<ControllerDef>,
    /// Optional replacement for the default locomotion classification table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_map: Option<Vec<StateMapping>>,
}

impl SelectorDef {
    pub fn new(controllers: Vec<ControllerDef>) -> Self {
        Self {
            name: String::new(),
            controllers,
            state_map: None,
        }
    }

    /// Classification table in effect for this definition.
    pub fn state_map(&self) -> StateMap {
        match &self.state_map {
            Some(rows) => StateMap::from_mappings(rows),
            None => StateMap::default(),
        }
    }

    /// Validate basic invariants (named templates, finite non-negative transition times).
    pub fn validate_basic(&self) -> Result<(), String> {
        for def in &self.controllers {
            if def.template.0.is_empty() {
                return Err(format!("controller for {:?} has an empty template", def.state));
            }
            if !is_valid_time(def.transition_time) {
                return Err(format!(
                    "transition_time for {:?} must be finite and >= 0 (got {})",
                    def.state, def.transition_time
                ));
            }
            for t in &def.custom_transitions {
                if !is_valid_time(t.time) {
                    return Err(format!(
                        "custom transition {:?} -> {:?} must be finite and >= 0 (got {})",
                        t.source, def.state, t.time
                    ));
                }
            }
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn is_valid_time(t: f32) -> bool {
    t.is_finite() && t >= 0.0
}

/// Parse a selector definition from JSON and validate it.
pub fn parse_selector_json(s: &str) -> Result<SelectorDef, SelectorError> {
    let def: SelectorDef = serde_json::from_str(s)?;
    def.validate_basic().map_err(SelectorError::InvalidDefinition)?;
    Ok(def)
}
