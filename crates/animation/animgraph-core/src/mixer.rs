//! Weighted mixer capability and the stock in-memory implementation.

use crate::controller::OutputPort;
use crate::ids::NodeId;

/// Weighted sum over a set of node outputs.
///
/// Stored weights are raw; the mixer normalizes them when blending.
pub trait Mixer: Send + Sync {
    /// Connect an output; returns the local input port. Ports are numbered from 0.
    fn add_input(&mut self, source: OutputPort) -> usize;

    fn set_input_weight(&mut self, port: usize, weight: f32);

    /// Weight of a local input; unknown ports read as 0.
    fn input_weight(&self, port: usize) -> f32;

    fn input_count(&self) -> usize;

    /// The mixer's own output.
    fn output(&self) -> OutputPort;

    fn total_weight(&self) -> f32 {
        (0..self.input_count()).map(|port| self.input_weight(port)).sum()
    }

    /// Weight of `port` relative to all inputs; 0 everywhere while the mixer is silent.
    fn normalized_weight(&self, port: usize) -> f32 {
        let total = self.total_weight();
        if total > 0.0 {
            self.input_weight(port) / total
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MixerInput {
    pub source: OutputPort,
    pub weight: f32,
}

/// Mixer that just records its inputs and their weights.
#[derive(Clone, Debug)]
pub struct WeightMixer {
    node: NodeId,
    inputs: Vec<MixerInput>,
}

impl WeightMixer {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            inputs: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &[MixerInput] {
        &self.inputs
    }
}

impl Mixer for WeightMixer {
    fn add_input(&mut self, source: OutputPort) -> usize {
        self.inputs.push(MixerInput {
            source,
            weight: 0.0,
        });
        self.inputs.len() - 1
    }

    fn set_input_weight(&mut self, port: usize, weight: f32) {
        if let Some(input) = self.inputs.get_mut(port) {
            input.weight = weight;
        }
    }

    fn input_weight(&self, port: usize) -> f32 {
        self.inputs.get(port).map_or(0.0, |i| i.weight)
    }

    fn input_count(&self) -> usize {
        self.inputs.len()
    }

    fn output(&self) -> OutputPort {
        OutputPort::new(self.node, 0)
    }
}
