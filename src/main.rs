use anyhow::Context;
use clap::Parser;
use nimbus::api::{create_router, AppState};
use nimbus::cli::{self, Cli, Commands};
use nimbus::config::AppConfig;
use nimbus::predictor::Predictor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod main_runtime;

use main_runtime::{init_logging, init_logging_simple, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config))?;
    if let Some(dir) = &cli.models {
        config.artifacts.dir = PathBuf::from(dir);
    }
    if let Commands::Serve { port: Some(port) } = &cli.command {
        config.server.port = *port;
    }
    if let Err(errors) = config.validate() {
        anyhow::bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }

    match &cli.command {
        Commands::Serve { .. } => {
            init_logging(&config.logging);
            run_server(&config).await?;
        }
        Commands::Predict {
            precipitation,
            temp_max,
            temp_min,
            wind,
            json,
        } => {
            init_logging_simple();
            let predictor = Predictor::load(&config.artifacts.paths())?;
            cli::run_predict(&predictor, *precipitation, *temp_max, *temp_min, *wind, *json)?;
        }
        Commands::Classes => {
            init_logging_simple();
            let predictor = Predictor::load(&config.artifacts.paths())?;
            cli::show_classes(&predictor);
        }
        Commands::Check => {
            init_logging_simple();
            let predictor = Predictor::load(&config.artifacts.paths())?;
            cli::show_artifact_summary(&predictor);
        }
    }

    Ok(())
}

async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    // Artifacts must load before the listener binds; a bad set aborts startup.
    let predictor = Arc::new(
        Predictor::load(&config.artifacts.paths()).context("loading model artifacts")?,
    );
    info!(
        classes = predictor.labels().len(),
        dir = %config.artifacts.dir.display(),
        "Model ready"
    );

    let app = create_router(AppState::new(predictor), config.server.cors_allow_any);
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Prediction API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
