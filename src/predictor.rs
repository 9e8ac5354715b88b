//! Inference entry point: features → normalize → classify → decode.
//!
//! A [`Predictor`] owns its artifacts. It is constructed once at startup and
//! then shared (`Arc<Predictor>`) across requests; `predict` only reads it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::artifacts::{ArtifactPaths, ArtifactSet, LabelMap, ScalingParameters};
use crate::decoder::decode;
use crate::error::{NimbusError, Result};
use crate::features::FeatureVector;
use crate::ml::Classifier;

/// Outcome of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    /// Probability of `label`, in [0, 1].
    pub confidence: f64,
    /// Derived feature vector, before scaling.
    pub features: FeatureVector,
}

#[derive(Debug, Clone)]
pub struct Predictor {
    scaling: ScalingParameters,
    labels: LabelMap,
    classifier: Classifier,
}

impl Predictor {
    /// Load and cross-validate all artifacts. Any failure is an
    /// `ArtifactLoad` error and no predictor is produced.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        Self::from_artifacts(ArtifactSet::load(paths)?)
    }

    pub fn from_artifacts(set: ArtifactSet) -> Result<Self> {
        let ArtifactSet {
            scaling,
            labels,
            weights,
        } = set;
        scaling
            .validate()
            .map_err(|reason| NimbusError::artifact_load("scaler", reason))?;
        let classifier = weights.into_classifier(&labels)?;
        Ok(Self {
            scaling,
            labels,
            classifier,
        })
    }

    pub fn predict(
        &self,
        precipitation: f64,
        temp_max: f64,
        temp_min: f64,
        wind: f64,
    ) -> Result<PredictionResult> {
        let features = FeatureVector::build(precipitation, temp_max, temp_min, wind)?;
        let scaled = self.scaling.normalize(&features)?;
        let probabilities = self.classifier.probabilities(&scaled, self.labels.len())?;
        let decoded = decode(&probabilities, &self.labels)?;

        debug!(
            label = %decoded.label,
            confidence = decoded.confidence,
            features = ?features.as_slice(),
            "Prediction"
        );

        Ok(PredictionResult {
            label: decoded.label,
            confidence: decoded.confidence,
            features,
        })
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn scaling(&self) -> &ScalingParameters {
        &self.scaling
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
