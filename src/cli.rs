use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::predictor::Predictor;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author = "Nimbus Team")]
#[command(version = "0.1.0")]
#[command(about = "Daily weather category classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (default.toml, <NIMBUS_ENV>.toml)
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Artifact directory, overrides `artifacts.dir`
    #[arg(short, long, env = "NIMBUS_MODEL_DIR")]
    pub models: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the prediction API
    Serve {
        /// Listen port, overrides `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Classify a single day
    Predict {
        /// Precipitation (mm)
        #[arg(long, allow_negative_numbers = true)]
        precipitation: f64,
        /// Maximum temperature (°C)
        #[arg(long, allow_negative_numbers = true)]
        temp_max: f64,
        /// Minimum temperature (°C)
        #[arg(long, allow_negative_numbers = true)]
        temp_min: f64,
        /// Wind speed (m/s)
        #[arg(long, allow_negative_numbers = true)]
        wind: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List label classes in encoder order
    Classes,
    /// Load and cross-check the artifact set
    Check,
}

pub fn run_predict(
    predictor: &Predictor,
    precipitation: f64,
    temp_max: f64,
    temp_min: f64,
    wind: f64,
    json: bool,
) -> Result<()> {
    let result = predictor.predict(precipitation, temp_max, temp_min, wind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Features {:?} -> \x1b[32m{}\x1b[0m (conf={:.3})",
        result.features.as_slice(),
        result.label,
        result.confidence
    );
    Ok(())
}

pub fn show_classes(predictor: &Predictor) {
    println!("Label classes (encoder order):");
    for (idx, class) in predictor.labels().iter().enumerate() {
        println!("  {idx}: {class}");
    }
}

pub fn show_artifact_summary(predictor: &Predictor) {
    let labels = predictor.labels();
    let scaling = predictor.scaling();

    println!("\x1b[32m✓ Artifacts consistent\x1b[0m\n");
    println!("  Classes:      {}", labels.len());
    println!("  Fingerprint:  {}", labels.fingerprint());
    println!("  Layer widths: {:?}", predictor.classifier().network().shape());
    println!("\n  Scaler:");
    for (idx, name) in crate::features::FEATURE_NAMES.iter().enumerate() {
        println!(
            "    {:<14} mean={:>9.4} std={:>9.4}",
            name, scaling.mean[idx], scaling.std[idx]
        );
    }
}
