//! Engine binary for the Lifeclaim automaton.
//!
//! Loads configuration, builds the simulation, and runs the generation
//! loop until an end condition is met.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `LIFECLAIM_CONFIG` or `lifeclaim-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the grid, owner roster and seed cells
//! 4. Register the logging listener
//! 5. Run the simulation loop
//! 6. Log the result

mod error;
mod listener;

use std::path::PathBuf;

use lifeclaim_core::config::{LoggingConfig, SimulationConfig};
use lifeclaim_core::runner;
use lifeclaim_core::simulation::Simulation;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::listener::LoggingListener;

/// Environment variable naming the config file.
const CONFIG_PATH_ENV: &str = "LIFECLAIM_CONFIG";

/// Config file used when `LIFECLAIM_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "lifeclaim-config.yaml";

/// Generations between per-owner census log lines.
const CENSUS_EVERY: u64 = 10;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step or the run loop fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("lifeclaim-engine starting");
    match source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        columns = config.grid.columns,
        rows = config.grid.rows,
        owners = config.owners.len(),
        seed_cells = config.seed_cells().len(),
        "Configuration summary"
    );

    // 3. Build the simulation.
    let mut sim = Simulation::from_config(&config)?;
    info!(population = sim.grid().population(), "Grid seeded");

    // 4. Register the logging listener.
    let listener = LoggingListener::new(sim.roster(), CENSUS_EVERY);
    let _ = sim.register_listener(listener);

    // 5. Run the simulation.
    let result = runner::run_simulation(&mut sim, &config.run).await?;

    // 6. Log results.
    runner::log_simulation_end(&result);
    if let Some(report) = result.final_report {
        match serde_json::to_string(&report) {
            Ok(json) => info!(report = %json, "Final report"),
            Err(e) => warn!(error = %e, "failed to serialize final report"),
        }
    }

    info!(
        end_reason = ?result.end_reason,
        total_generations = result.total_generations,
        "lifeclaim-engine shutdown complete"
    );

    Ok(())
}

/// Load configuration, returning the path it came from.
///
/// Falls back to defaults when the file does not exist. Nothing is logged
/// here because the subscriber is not installed yet.
fn load_config() -> Result<(SimulationConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = SimulationConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        let mut config = SimulationConfig::default();
        config.logging.apply_env_overrides();
        Ok((config, None))
    }
}

/// Install the global tracing subscriber.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| EngineError::Logging {
        message: format!("{e}"),
    })
}
