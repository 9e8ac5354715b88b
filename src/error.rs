use thiserror::Error;

/// Main error type for the weather classifier
#[derive(Error, Debug)]
pub enum NimbusError {
    // Request errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Artifact consistency errors
    #[error("Artifact mismatch: {0}")]
    ArtifactMismatch(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Non-finite network output: {0}")]
    NonFiniteOutput(String),

    #[error("Failed to load {artifact} artifact: {reason}")]
    ArtifactLoad { artifact: String, reason: String },

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NimbusError {
    pub fn artifact_load(artifact: impl Into<String>, reason: impl Into<String>) -> Self {
        NimbusError::ArtifactLoad {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }

    /// True when the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NimbusError::InvalidInput(_))
    }
}

/// Result type alias for NimbusError
pub type Result<T> = std::result::Result<T, NimbusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_input_is_client_error() {
        assert!(NimbusError::InvalidInput("x".into()).is_client_error());
        assert!(!NimbusError::ShapeMismatch("x".into()).is_client_error());
        assert!(!NimbusError::ArtifactMismatch("x".into()).is_client_error());
        assert!(!NimbusError::artifact_load("labels", "missing").is_client_error());
        assert!(!NimbusError::NonFiniteOutput("x".into()).is_client_error());
    }

    #[test]
    fn artifact_load_names_the_artifact() {
        let err = NimbusError::artifact_load("weights", "file not found");
        assert_eq!(
            err.to_string(),
            "Failed to load weights artifact: file not found"
        );
    }
}
