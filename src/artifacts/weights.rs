//! Trained network parameters plus the label alignment they were trained with.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NimbusError, Result};
use crate::ml::{Classifier, DenseNetwork};

use super::labels::LabelMap;

const ARTIFACT: &str = "weights";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkWeights {
    #[serde(flatten)]
    pub network: DenseNetwork,

    /// Number of classes the output layer was trained on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_count: Option<usize>,

    /// Fingerprint of the label map the output layer was trained against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_fingerprint: Option<String>,
}

impl NetworkWeights {
    /// Bundle a network with the label map its outputs are aligned to.
    pub fn aligned_with(network: DenseNetwork, labels: &LabelMap) -> Self {
        Self {
            network,
            class_count: Some(labels.len()),
            label_fingerprint: Some(labels.fingerprint()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })?;
        let weights: Self = serde_json::from_str(&content).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })?;
        weights
            .network
            .validate()
            .map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))?;
        Ok(weights)
    }

    /// Check that the output layer lines up with `labels`.
    pub fn check_alignment(&self, labels: &LabelMap) -> std::result::Result<(), String> {
        let output_dim = self.network.output_dim();
        if output_dim != labels.len() {
            return Err(format!(
                "network has {output_dim} outputs but label map has {} classes",
                labels.len()
            ));
        }
        if let Some(count) = self.class_count {
            if count != labels.len() {
                return Err(format!(
                    "weights were trained on {count} classes, label map has {}",
                    labels.len()
                ));
            }
        }
        if let Some(expected) = &self.label_fingerprint {
            let actual = labels.fingerprint();
            if !expected.eq_ignore_ascii_case(&actual) {
                return Err(format!(
                    "label fingerprint {expected} does not match label map ({actual})"
                ));
            }
        }
        Ok(())
    }

    /// Validate alignment and topology, producing a ready classifier.
    pub fn into_classifier(self, labels: &LabelMap) -> Result<Classifier> {
        self.check_alignment(labels)
            .map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))?;
        Classifier::new(self.network).map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))
    }
}
