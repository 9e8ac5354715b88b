//! Feature construction from raw daily observations.
//!
//! The feature order is part of the trained model's contract and must never
//! change: `[precipitation, temp_max, temp_min, wind, temp_range]`.

use serde::{Deserialize, Serialize};

use crate::error::{NimbusError, Result};

/// Number of model input features.
pub const FEATURE_DIM: usize = 5;

/// Canonical feature names, in model input order.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] =
    ["precipitation", "temp_max", "temp_min", "wind", "temp_range"];

/// The five derived model inputs, in canonical order.
///
/// Serialized as a plain array. Deserializing re-runs [`FeatureVector::build`]
/// and rejects a `temp_range` that was not derived from the temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; FEATURE_DIM]", into = "[f64; FEATURE_DIM]")]
pub struct FeatureVector([f64; FEATURE_DIM]);

impl FeatureVector {
    /// Build the feature vector from raw observations.
    ///
    /// `temp_range` is derived here and nowhere else. Rejects non-finite
    /// readings and days whose minimum exceeds their maximum.
    pub fn build(precipitation: f64, temp_max: f64, temp_min: f64, wind: f64) -> Result<Self> {
        let raw = [
            ("precipitation", precipitation),
            ("temp_max", temp_max),
            ("temp_min", temp_min),
            ("wind", wind),
        ];
        if let Some((name, value)) = raw.iter().find(|(_, v)| !v.is_finite()) {
            return Err(NimbusError::InvalidInput(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
        if temp_min > temp_max {
            return Err(NimbusError::InvalidInput(format!(
                "temp_min ({temp_min}) is greater than temp_max ({temp_max})"
            )));
        }

        let temp_range = temp_max - temp_min;
        // Finite operands can still overflow to infinity.
        if !temp_range.is_finite() {
            return Err(NimbusError::InvalidInput(format!(
                "temp_range overflowed for temp_max={temp_max}, temp_min={temp_min}"
            )));
        }

        Ok(Self([precipitation, temp_max, temp_min, wind, temp_range]))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; FEATURE_DIM] {
        self.0
    }

    pub fn precipitation(&self) -> f64 {
        self.0[0]
    }

    pub fn temp_max(&self) -> f64 {
        self.0[1]
    }

    pub fn temp_min(&self) -> f64 {
        self.0[2]
    }

    pub fn wind(&self) -> f64 {
        self.0[3]
    }

    pub fn temp_range(&self) -> f64 {
        self.0[4]
    }
}

impl TryFrom<[f64; FEATURE_DIM]> for FeatureVector {
    type Error = NimbusError;

    fn try_from(raw: [f64; FEATURE_DIM]) -> Result<Self> {
        let [precipitation, temp_max, temp_min, wind, temp_range] = raw;
        let built = Self::build(precipitation, temp_max, temp_min, wind)?;
        if built.temp_range() != temp_range {
            return Err(NimbusError::InvalidInput(format!(
                "temp_range {temp_range} does not match temp_max - temp_min = {}",
                built.temp_range()
            )));
        }
        Ok(built)
    }
}

impl From<FeatureVector> for [f64; FEATURE_DIM] {
    fn from(features: FeatureVector) -> Self {
        features.0
    }
}
