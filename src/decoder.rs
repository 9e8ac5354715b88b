//! Turns a class distribution into a label and its confidence.

use serde::{Deserialize, Serialize};

use crate::artifacts::LabelMap;
use crate::error::{NimbusError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoded {
    pub index: usize,
    pub label: String,
    /// Probability of the chosen class, in [0, 1].
    pub confidence: f64,
}

/// Arg-max decode. Ties go to the lowest index.
pub fn decode(probabilities: &[f64], labels: &LabelMap) -> Result<Decoded> {
    if probabilities.len() != labels.len() {
        return Err(NimbusError::ArtifactMismatch(format!(
            "distribution has {} entries but label map has {} classes",
            probabilities.len(),
            labels.len()
        )));
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, &p) in probabilities.iter().enumerate() {
        // Strict `>` keeps the first occurrence of the maximum.
        if best.map_or(true, |(_, max)| p > max) {
            best = Some((idx, p));
        }
    }

    let (index, confidence) = best.ok_or_else(|| {
        NimbusError::ArtifactMismatch("cannot decode an empty distribution".to_string())
    })?;
    let label = labels.get(index).ok_or_else(|| {
        NimbusError::ArtifactMismatch(format!("no label at index {index}"))
    })?;

    Ok(Decoded {
        index,
        label: label.to_string(),
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seattle_labels;

    #[test]
    fn picks_the_most_likely_class() {
        let labels = seattle_labels();
        let decoded = decode(&[0.05, 0.1, 0.6, 0.05, 0.2], &labels).unwrap();
        assert_eq!(decoded.index, 2);
        assert_eq!(decoded.label, "rain");
        assert_eq!(decoded.confidence, 0.6);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let labels = seattle_labels();
        let decoded = decode(&[0.1, 0.35, 0.1, 0.35, 0.1], &labels).unwrap();
        assert_eq!(decoded.index, 1);
        assert_eq!(decoded.label, "fog");
    }

    #[test]
    fn uniform_distribution_picks_first() {
        let labels = seattle_labels();
        let decoded = decode(&[0.2; 5], &labels).unwrap();
        assert_eq!(decoded.index, 0);
    }

    #[test]
    fn length_mismatch_is_artifact_mismatch() {
        let labels = seattle_labels();
        let err = decode(&[0.5, 0.5], &labels).unwrap_err();
        assert!(matches!(err, NimbusError::ArtifactMismatch(_)));
    }
}
