use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::artifacts::{
    ArtifactPaths, DEFAULT_LABELS_FILE, DEFAULT_SCALER_FILE, DEFAULT_WEIGHTS_FILE,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory holding the trained artifacts
    #[serde(default = "default_artifact_dir")]
    pub dir: PathBuf,
    /// Scaler statistics file, relative to `dir`
    #[serde(default = "default_scaler_file")]
    pub scaler: String,
    /// Label map file, relative to `dir`
    #[serde(default = "default_labels_file")]
    pub labels: String,
    /// Network weights file, relative to `dir`
    #[serde(default = "default_weights_file")]
    pub weights: String,
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_scaler_file() -> String {
    DEFAULT_SCALER_FILE.to_string()
}

fn default_labels_file() -> String {
    DEFAULT_LABELS_FILE.to_string()
}

fn default_weights_file() -> String {
    DEFAULT_WEIGHTS_FILE.to_string()
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifact_dir(),
            scaler: default_scaler_file(),
            labels: default_labels_file(),
            weights: default_weights_file(),
        }
    }
}

impl ArtifactsConfig {
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            scaler: self.dir.join(&self.scaler),
            labels: self.dir.join(&self.labels),
            weights: self.dir.join(&self.weights),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow requests from any origin
    #[serde(default = "default_cors_allow_any")]
    pub cors_allow_any: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_allow_any() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_any: default_cors_allow_any(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Also write daily-rotated log files here
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("artifacts.dir", "models")?
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("NIMBUS_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (NIMBUS_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("NIMBUS")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }
        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        for (key, value) in [
            ("artifacts.scaler", &self.artifacts.scaler),
            ("artifacts.labels", &self.artifacts.labels),
            ("artifacts.weights", &self.artifacts.weights),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{key} must not be empty"));
            }
        }

        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            errors.push(format!("unknown logging.level {:?}", self.logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
