//! Network model: layer descriptors, parameters, persistence, initialization
//!
//! The on-disk format is a JSON object
//! `{"meta": {...}, "layers": [...], "weights": [[[..]]], "biases": [[..]]}`
//! with `weights[layer][output_unit][input_unit]` and
//! `biases[layer][output_unit]`. Shape invariants are validated on load, so
//! the numeric engine never has to defend against ragged parameters.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::error::{Error, Result};

/// Learning rate used when a network file carries no explicit value.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// Shape and activation of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Width of the vector this layer consumes.
    pub inputs: usize,
    /// Number of units, i.e. width of the vector this layer produces.
    pub outputs: usize,
    pub activation: Activation,
}

/// Training metadata stored alongside the parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

/// A plain multilayer feedforward network.
///
/// `weights[i]` is an `outputs x inputs` matrix for layer `i` (one row per
/// unit) and `biases[i]` holds one bias per unit. Mutated in place by the
/// training engine, read-only during inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub meta: Meta,
    pub layers: Vec<LayerSpec>,
    pub weights: Vec<Vec<Vec<f64>>>,
    pub biases: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a freshly initialized network.
    ///
    /// Weights are drawn uniformly from the Xavier range
    /// `±sqrt(6 / (fan_in + fan_out))`; biases start at zero. Callers pass
    /// one activation per layer size.
    pub fn with_random_weights(
        input_size: usize,
        layer_sizes: &[usize],
        activations: &[Activation],
        learning_rate: f64,
    ) -> Self {
        let mut rng = rand::thread_rng();
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut weights = Vec::with_capacity(layer_sizes.len());
        let mut biases = Vec::with_capacity(layer_sizes.len());

        let mut prev = input_size;
        for (&size, &activation) in layer_sizes.iter().zip(activations) {
            layers.push(LayerSpec {
                inputs: prev,
                outputs: size,
                activation,
            });
            let limit = (6.0 / (prev + size) as f64).sqrt();
            weights.push(
                (0..size)
                    .map(|_| (0..prev).map(|_| rng.gen_range(-limit..limit)).collect())
                    .collect(),
            );
            biases.push(vec![0.0; size]);
            prev = size;
        }

        Network {
            meta: Meta { learning_rate },
            layers,
            weights,
            biases,
        }
    }

    /// Width of the input vector the network expects.
    pub fn input_size(&self) -> usize {
        self.layers.first().map(|l| l.inputs).unwrap_or(0)
    }

    /// Width of the output vector the network produces.
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.outputs).unwrap_or(0)
    }

    /// Checks the shape invariants the rest of the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.layers.len() != self.weights.len() || self.layers.len() != self.biases.len() {
            return Err(Error::MalformedNetwork(format!(
                "expected one weight matrix and one bias vector per layer, \
                 got {} layers, {} matrices, {} bias vectors",
                self.layers.len(),
                self.weights.len(),
                self.biases.len()
            )));
        }
        if self.layers.is_empty() {
            return Err(Error::MalformedNetwork("network has no layers".to_string()));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 && layer.inputs != self.layers[i - 1].outputs {
                return Err(Error::MalformedNetwork(format!(
                    "layer {} consumes {} values but layer {} produces {}",
                    i,
                    layer.inputs,
                    i - 1,
                    self.layers[i - 1].outputs
                )));
            }
            if self.weights[i].len() != layer.outputs {
                return Err(Error::MalformedNetwork(format!(
                    "layer {} weight matrix has {} rows, expected {}",
                    i,
                    self.weights[i].len(),
                    layer.outputs
                )));
            }
            if let Some(row) = self.weights[i].iter().find(|row| row.len() != layer.inputs) {
                return Err(Error::MalformedNetwork(format!(
                    "layer {} weight row has {} columns, expected {}",
                    i,
                    row.len(),
                    layer.inputs
                )));
            }
            if self.biases[i].len() != layer.outputs {
                return Err(Error::MalformedNetwork(format!(
                    "layer {} has {} biases, expected {}",
                    i,
                    self.biases[i].len(),
                    layer.outputs
                )));
            }
        }
        Ok(())
    }

    /// Loads and validates a network from a JSON file.
    pub fn load(path: &Path) -> Result<Network> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::MalformedNetwork(format!("failed to read {}: {}", path.display(), e))
        })?;
        let network: Network = serde_json::from_str(&contents).map_err(|e| {
            Error::MalformedNetwork(format!("failed to parse {}: {}", path.display(), e))
        })?;
        network.validate()?;
        Ok(network)
    }

    /// Saves the network as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            Error::MalformedNetwork(format!("failed to serialize network: {}", e))
        })?;
        fs::write(path, json).map_err(|e| {
            Error::MalformedNetwork(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Saves the network as compact JSON, the form emitted by the generator.
    pub fn save_compact(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).map_err(|e| {
            Error::MalformedNetwork(format!("failed to serialize network: {}", e))
        })?;
        fs::write(path, json).map_err(|e| {
            Error::MalformedNetwork(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod network_tests;
