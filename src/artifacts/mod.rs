//! Trained artifacts: scaler statistics, label map, network weights.
//!
//! All three are produced together by training and must be loaded together;
//! [`ArtifactSet::load`] cross-checks them before anything can serve requests.

pub mod labels;
pub mod scaling;
pub mod weights;

pub use labels::LabelMap;
pub use scaling::ScalingParameters;
pub use weights::NetworkWeights;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{NimbusError, Result};

pub const DEFAULT_SCALER_FILE: &str = "scaler.json";
pub const DEFAULT_LABELS_FILE: &str = "labels.json";
pub const DEFAULT_WEIGHTS_FILE: &str = "weights.json";

/// Locations of the three artifact files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub labels: PathBuf,
    pub weights: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler: dir.join(DEFAULT_SCALER_FILE),
            labels: dir.join(DEFAULT_LABELS_FILE),
            weights: dir.join(DEFAULT_WEIGHTS_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSet {
    pub scaling: ScalingParameters,
    pub labels: LabelMap,
    pub weights: NetworkWeights,
}

impl ArtifactSet {
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        debug!(
            scaler = %paths.scaler.display(),
            labels = %paths.labels.display(),
            weights = %paths.weights.display(),
            "Loading artifacts"
        );

        let set = Self {
            scaling: ScalingParameters::from_file(&paths.scaler)?,
            labels: LabelMap::from_file(&paths.labels)?,
            weights: NetworkWeights::from_file(&paths.weights)?,
        };
        set.weights
            .check_alignment(&set.labels)
            .map_err(|reason| NimbusError::artifact_load("weights", reason))?;

        info!(
            classes = set.labels.len(),
            fingerprint = %set.labels.fingerprint(),
            "Artifacts loaded"
        );
        Ok(set)
    }

    /// Write the set as pretty-printed JSON, creating `paths`' parents.
    pub fn write_to(&self, paths: &ArtifactPaths) -> Result<()> {
        write_json(&paths.scaler, &self.scaling)?;
        write_json(&paths.labels, &self.labels)?;
        write_json(&paths.weights, &self.weights)?;
        Ok(())
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
