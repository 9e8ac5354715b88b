//! Weather classifier: a fixed 5 → 64 → 32 → N dense network.
//!
//! Training-time dropout has no inference counterpart, so the network holds
//! exactly three dense layers.

use crate::error::{NimbusError, Result};
use crate::features::FEATURE_DIM;

use super::dense::{Activation, DenseNetwork};

/// Hidden layer widths and activations, in order.
pub const HIDDEN_LAYERS: [(usize, Activation); 2] = [(64, Activation::Relu), (32, Activation::Relu)];

#[derive(Debug, Clone)]
pub struct Classifier {
    network: DenseNetwork,
}

impl Classifier {
    /// Wrap a network after checking it has the classifier topology.
    pub fn new(network: DenseNetwork) -> std::result::Result<Self, String> {
        network.validate()?;

        if network.input_dim != FEATURE_DIM {
            return Err(format!(
                "input_dim {} != feature count {FEATURE_DIM}",
                network.input_dim
            ));
        }
        let expected_layers = HIDDEN_LAYERS.len() + 1;
        if network.layers.len() != expected_layers {
            return Err(format!(
                "expected {expected_layers} dense layers, found {}",
                network.layers.len()
            ));
        }
        for (idx, (width, activation)) in HIDDEN_LAYERS.iter().enumerate() {
            let layer = &network.layers[idx];
            if layer.out_dim() != *width || layer.activation != *activation {
                return Err(format!(
                    "layer[{idx}] must be {width} units with {activation:?}, found {} units with {:?}",
                    layer.out_dim(),
                    layer.activation
                ));
            }
        }
        let output = &network.layers[expected_layers - 1];
        if output.activation != Activation::Softmax {
            return Err(format!(
                "output layer must use Softmax, found {:?}",
                output.activation
            ));
        }

        Ok(Self { network })
    }

    pub fn network(&self) -> &DenseNetwork {
        &self.network
    }

    pub fn input_dim(&self) -> usize {
        self.network.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.network.output_dim()
    }

    /// Class probabilities for one normalized feature vector.
    pub fn probabilities(&self, input: &[f64], class_count: usize) -> Result<Vec<f64>> {
        if input.len() != self.input_dim() {
            return Err(NimbusError::ShapeMismatch(format!(
                "classifier expects {} inputs, got {}",
                self.input_dim(),
                input.len()
            )));
        }
        if self.output_dim() != class_count {
            return Err(NimbusError::ShapeMismatch(format!(
                "classifier has {} outputs but label map has {class_count} classes",
                self.output_dim()
            )));
        }
        self.network.forward(input)
    }
}
