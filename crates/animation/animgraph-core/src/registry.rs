//! Name-keyed controller templates backing a [`ControllerFactory`].

use hashbrown::HashMap;
use log::debug;

use crate::controller::{AnimGraphInstance, ControllerFactory};
use crate::data::TemplateRef;
use crate::error::SelectorError;
use crate::ids::{NodeId, NodeIdAllocator};
use crate::mixer::{Mixer, WeightMixer};

/// Builds a controller instance for a freshly allocated node.
pub type TemplateBuilder =
    Box<dyn Fn(NodeId) -> Result<Box<dyn AnimGraphInstance>, String> + Send + Sync>;

/// Registry of controller templates. Mixers it hands out are [`WeightMixer`]s.
#[derive(Default)]
pub struct TemplateRegistry {
    ids: NodeIdAllocator,
    templates: HashMap<TemplateRef, TemplateBuilder>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `builder` under `name`, replacing any previous template with that name.
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F) -> &mut Self
    where
        F: Fn(NodeId) -> Result<Box<dyn AnimGraphInstance>, String> + Send + Sync + 'static,
    {
        let key = TemplateRef(name.into());
        if self.templates.insert(key.clone(), Box::new(builder)).is_some() {
            debug!("template '{}' replaced", key.as_str());
        }
        self
    }
}

impl ControllerFactory for TemplateRegistry {
    fn create_mixer(&mut self) -> Box<dyn Mixer> {
        Box::new(WeightMixer::new(self.ids.alloc()))
    }

    fn instantiate(
        &mut self,
        template: &TemplateRef,
    ) -> Result<Box<dyn AnimGraphInstance>, SelectorError> {
        let builder = self
            .templates
            .get(template)
            .ok_or_else(|| SelectorError::UnknownTemplate(template.0.clone()))?;
        builder(self.ids.alloc()).map_err(|reason| SelectorError::Instantiate {
            template: template.0.clone(),
            reason,
        })
    }
}
