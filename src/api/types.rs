use serde::{Deserialize, Serialize};

use crate::predictor::PredictionResult;

// ============================================================================
// Prediction Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFeatures {
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub wind: f64,
    pub temp_range: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
    /// Raw probability, in [0, 1]
    pub confidence: f64,
    /// Confidence as a percentage, rounded to 2 decimals
    pub confidence_percent: f64,
    pub input_features: InputFeatures,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        let f = &result.features;
        Self {
            input_features: InputFeatures {
                precipitation: f.precipitation(),
                temp_max: f.temp_max(),
                temp_min: f.temp_min(),
                wind: f.wind(),
                temp_range: f.temp_range(),
            },
            confidence_percent: round2(result.confidence * 100.0),
            confidence: result.confidence,
            prediction: result.label,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ============================================================================
// System Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub classes: usize,
    pub uptime_secs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesResponse {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;

    #[test]
    fn response_scales_confidence_for_display() {
        let result = PredictionResult {
            label: "rain".to_string(),
            confidence: 0.876543,
            features: FeatureVector::build(1.5, 10.0, 4.0, 3.0).unwrap(),
        };
        let resp = PredictResponse::from(result);
        assert_eq!(resp.prediction, "rain");
        assert_eq!(resp.confidence, 0.876543);
        assert_eq!(resp.confidence_percent, 87.65);
        assert_eq!(resp.input_features.temp_range, 6.0);
    }
}
