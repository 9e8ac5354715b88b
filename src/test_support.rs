//! Deterministic fixtures for unit tests.

use crate::artifacts::{ArtifactSet, LabelMap, NetworkWeights, ScalingParameters};
use crate::features::FEATURE_DIM;
use crate::ml::{Activation, DenseLayer, DenseNetwork, HIDDEN_LAYERS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_layer(rng: &mut StdRng, in_dim: usize, out_dim: usize, activation: Activation) -> DenseLayer {
    let scale = (1.0 / in_dim as f64).sqrt();
    DenseLayer {
        weights: (0..out_dim)
            .map(|_| {
                (0..in_dim)
                    .map(|_| rng.gen_range(-1.0f64..1.0) * scale)
                    .collect::<Vec<f64>>()
            })
            .collect(),
        bias: (0..out_dim).map(|_| rng.gen_range(-1.0f64..1.0) * 0.1).collect(),
        activation,
    }
}

/// A 5 → 64 → 32 → `classes` network with seeded weights.
pub fn synthetic_network(classes: usize, seed: u64) -> DenseNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layers = Vec::new();
    let mut in_dim = FEATURE_DIM;
    for (width, activation) in HIDDEN_LAYERS {
        layers.push(random_layer(&mut rng, in_dim, width, activation));
        in_dim = width;
    }
    layers.push(random_layer(&mut rng, in_dim, classes, Activation::Softmax));
    DenseNetwork {
        input_dim: FEATURE_DIM,
        layers,
        metadata: serde_json::json!({ "seed": seed }),
    }
}

pub fn seattle_labels() -> LabelMap {
    LabelMap::new(["drizzle", "fog", "rain", "snow", "sun"]).unwrap()
}

pub fn seattle_scaling() -> ScalingParameters {
    ScalingParameters::new(
        [3.03, 16.44, 8.23, 3.24, 8.21],
        [6.68, 7.35, 5.02, 1.44, 3.98],
    )
    .unwrap()
}

pub fn seattle_artifacts() -> ArtifactSet {
    let labels = seattle_labels();
    ArtifactSet {
        scaling: seattle_scaling(),
        weights: NetworkWeights::aligned_with(synthetic_network(labels.len(), 42), &labels),
        labels,
    }
}
