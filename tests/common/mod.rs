use nimbus::ml::{Activation, DenseLayer, DenseNetwork};
use nimbus::{ArtifactPaths, ArtifactSet, LabelMap, NetworkWeights, ScalingParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

// Not every test binary asserts on class names.
#[allow(dead_code)]
pub const CLASSES: [&str; 5] = ["drizzle", "fog", "rain", "snow", "sun"];

fn layer(rng: &mut StdRng, in_dim: usize, out_dim: usize, activation: Activation) -> DenseLayer {
    let scale = (1.0 / in_dim as f64).sqrt();
    let weights: Vec<Vec<f64>> = (0..out_dim)
        .map(|_| {
            (0..in_dim)
                .map(|_| rng.gen_range(-1.0f64..1.0) * scale)
                .collect()
        })
        .collect();
    let bias: Vec<f64> = (0..out_dim).map(|_| rng.gen_range(-1.0f64..1.0) * 0.1).collect();
    DenseLayer {
        weights,
        bias,
        activation,
    }
}

pub fn network(classes: usize, seed: u64) -> DenseNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    DenseNetwork {
        input_dim: 5,
        layers: vec![
            layer(&mut rng, 5, 64, Activation::Relu),
            layer(&mut rng, 64, 32, Activation::Relu),
            layer(&mut rng, 32, classes, Activation::Softmax),
        ],
        metadata: serde_json::json!({ "trained_on": "seattle-weather", "seed": seed }),
    }
}

pub fn artifacts() -> ArtifactSet {
    let labels = LabelMap::new(["drizzle", "fog", "rain", "snow", "sun"]).unwrap();
    ArtifactSet {
        scaling: ScalingParameters::new(
            [3.03, 16.44, 8.23, 3.24, 8.21],
            [6.68, 7.35, 5.02, 1.44, 3.98],
        )
        .unwrap(),
        weights: NetworkWeights::aligned_with(network(labels.len(), 42), &labels),
        labels,
    }
}

/// Write `set` into a fresh temp dir and return it with its paths.
#[allow(dead_code)]
pub fn write_artifacts(set: &ArtifactSet) -> (TempDir, ArtifactPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    set.write_to(&paths).unwrap();
    (dir, paths)
}
