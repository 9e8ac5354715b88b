//! Frozen per-feature standardization statistics.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NimbusError, Result};
use crate::features::{FeatureVector, FEATURE_DIM, FEATURE_NAMES};

const ARTIFACT: &str = "scaler";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingParameters {
    /// Feature names in the order the statistics were fitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl ScalingParameters {
    pub fn new(mean: [f64; FEATURE_DIM], std: [f64; FEATURE_DIM]) -> Result<Self> {
        let params = Self {
            features: Some(FEATURE_NAMES.iter().map(|s| s.to_string()).collect()),
            mean: mean.to_vec(),
            std: std.to_vec(),
        };
        params
            .validate()
            .map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))?;
        Ok(params)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })?;
        let params: Self = serde_json::from_str(&content).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })?;
        params
            .validate()
            .map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))?;
        Ok(params)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(features) = &self.features {
            if features.iter().map(String::as_str).ne(FEATURE_NAMES) {
                return Err(format!(
                    "feature order {features:?} != expected {FEATURE_NAMES:?}"
                ));
            }
        }
        if self.mean.len() != FEATURE_DIM {
            return Err(format!(
                "mean length {} != feature count {FEATURE_DIM}",
                self.mean.len()
            ));
        }
        if self.std.len() != FEATURE_DIM {
            return Err(format!(
                "std length {} != feature count {FEATURE_DIM}",
                self.std.len()
            ));
        }
        if self.mean.iter().any(|v| !v.is_finite()) {
            return Err("mean must be finite".to_string());
        }
        if let Some(idx) = self.std.iter().position(|v| !v.is_finite() || *v <= 0.0) {
            return Err(format!(
                "std for {} must be finite and > 0, got {}",
                FEATURE_NAMES.get(idx).unwrap_or(&"?"),
                self.std[idx]
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize a feature vector: `(x - mean) / std` per element.
    pub fn normalize(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let x = features.as_slice();
        self.check_len(x.len())?;
        Ok(x
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    /// Inverse of [`normalize`](Self::normalize): `z * std + mean`.
    pub fn denormalize(&self, scaled: &[f64]) -> Result<Vec<f64>> {
        self.check_len(scaled.len())?;
        Ok(scaled
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(z, (m, s))| z * s + m)
            .collect())
    }

    fn check_len(&self, got: usize) -> Result<()> {
        if got != self.mean.len() || got != self.std.len() {
            return Err(NimbusError::ArtifactMismatch(format!(
                "feature vector has {got} values but scaler has {} means and {} stds",
                self.mean.len(),
                self.std.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seattle_scaling;
    use proptest::prelude::*;

    #[test]
    fn normalizes_each_feature() {
        let params =
            ScalingParameters::new([1.0, 2.0, 3.0, 4.0, 5.0], [2.0, 2.0, 2.0, 2.0, 0.5]).unwrap();
        let fv = FeatureVector::build(3.0, 10.0, 4.0, 4.0).unwrap();
        let z = params.normalize(&fv).unwrap();
        assert_eq!(z, vec![1.0, 4.0, 0.5, 0.0, 2.0]);
    }

    #[test]
    fn zero_std_is_a_load_error() {
        let err = ScalingParameters::new([0.0; 5], [1.0, 1.0, 0.0, 1.0, 1.0]).unwrap_err();
        match err {
            NimbusError::ArtifactLoad { artifact, reason } => {
                assert_eq!(artifact, "scaler");
                assert!(reason.contains("temp_min"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_std_rejected() {
        assert!(ScalingParameters::new([0.0; 5], [1.0, 1.0, 1.0, -1.0, 1.0]).is_err());
    }

    #[test]
    fn wrong_feature_order_rejected() {
        let mut params = seattle_scaling();
        params.features = Some(
            ["temp_max", "precipitation", "temp_min", "wind", "temp_range"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert!(params.validate().unwrap_err().contains("feature order"));
    }

    #[test]
    fn stale_scaler_is_an_artifact_mismatch() {
        // Bypass validation to mimic a corrupted pairing.
        let params = ScalingParameters {
            features: None,
            mean: vec![0.0; 4],
            std: vec![1.0; 4],
        };
        let fv = FeatureVector::build(0.0, 1.0, 0.0, 1.0).unwrap();
        let err = params.normalize(&fv).unwrap_err();
        assert!(matches!(err, NimbusError::ArtifactMismatch(_)));
    }

    #[test]
    fn parses_without_feature_names() {
        let params: ScalingParameters = serde_json::from_str(
            r#"{"mean": [0, 0, 0, 0, 0], "std": [1, 1, 1, 1, 1]}"#,
        )
        .unwrap();
        assert!(params.validate().is_ok());
        assert!(params.features.is_none());
    }

    proptest! {
        #[test]
        fn denormalize_inverts_normalize(
            p in 0.0f64..60.0,
            lo in -20.0f64..40.0,
            spread in 0.0f64..25.0,
            w in 0.0f64..10.0,
        ) {
            let params = seattle_scaling();
            let fv = FeatureVector::build(p, lo + spread, lo, w).unwrap();
            let z = params.normalize(&fv).unwrap();
            let back = params.denormalize(&z).unwrap();
            for (orig, rec) in fv.as_slice().iter().zip(&back) {
                prop_assert!((orig - rec).abs() < 1e-9);
            }
        }
    }
}
