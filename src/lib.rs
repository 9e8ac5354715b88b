pub mod api;
pub mod artifacts;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod features;
pub mod ml;
pub mod predictor;

#[cfg(test)]
pub(crate) mod test_support;

pub use artifacts::{ArtifactPaths, ArtifactSet, LabelMap, NetworkWeights, ScalingParameters};
pub use config::AppConfig;
pub use decoder::{decode, Decoded};
pub use error::{NimbusError, Result};
pub use features::{FeatureVector, FEATURE_DIM, FEATURE_NAMES};
pub use ml::Classifier;
pub use predictor::{PredictionResult, Predictor};
