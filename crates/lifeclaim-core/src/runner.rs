//! Bounded simulation loop.
//!
//! [`run_simulation`] drives [`Simulation::step`] until an end condition is
//! met:
//!
//! - **Generation limit**: stop after `max_generations` steps (0 disables)
//! - **Extinction**: stop once no cell is alive
//! - **Still-life**: stop once a step leaves the live/dead layout unchanged
//!
//! Each generation is computed synchronously; the loop only yields while
//! sleeping between generations.
//!
//! [`Simulation::step`]: crate::simulation::Simulation::step

use lifeclaim_grid::GenerationReport;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::simulation::{Simulation, SimulationError};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A generation step failed.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: SimulationError,
    },
}

/// Reason why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimulationEndReason {
    /// Reached the configured `max_generations` limit.
    MaxGenerationsReached,
    /// Every cell is dead.
    Extinction,
    /// The last step left the live/dead layout unchanged.
    StillLife,
}

/// Result of the simulation run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last generation report.
    pub final_report: Option<GenerationReport>,
    /// Generations executed by this run.
    pub total_generations: u64,
}

/// Run the simulation loop until an end condition is met.
///
/// With `max_generations == 0` and both stop flags off the loop never
/// returns on its own.
///
/// # Errors
///
/// Returns [`RunnerError`] if a generation step fails.
pub async fn run_simulation(
    sim: &mut Simulation,
    run: &RunConfig,
) -> Result<SimulationResult, RunnerError> {
    let mut total_generations: u64 = 0;

    info!(
        max_generations = run.max_generations,
        generation_interval_ms = run.generation_interval_ms,
        stop_on_extinction = run.stop_on_extinction,
        stop_on_still_life = run.stop_on_still_life,
        population = sim.grid().population(),
        "Simulation starting"
    );

    loop {
        let previous = run.stop_on_still_life.then(|| sim.grid().clone());

        let report = sim.step()?;
        total_generations = total_generations.saturating_add(1);

        let end_reason = if run.stop_on_extinction && report.population == 0 {
            info!(generation = sim.generation(), "All cells dead -- extinction");
            Some(SimulationEndReason::Extinction)
        } else if previous.is_some_and(|grid| grid.same_layout(sim.grid())) {
            info!(
                generation = sim.generation(),
                population = report.population,
                "Layout unchanged -- still life"
            );
            Some(SimulationEndReason::StillLife)
        } else if run.max_generations > 0 && total_generations >= run.max_generations {
            info!(
                generation = sim.generation(),
                max_generations = run.max_generations,
                "Generation limit reached"
            );
            Some(SimulationEndReason::MaxGenerationsReached)
        } else {
            None
        };

        if let Some(end_reason) = end_reason {
            return Ok(SimulationResult {
                end_reason,
                final_report: Some(report),
                total_generations,
            });
        }

        if run.generation_interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(run.generation_interval_ms))
                .await;
        }
    }
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_generations = result.total_generations,
        final_population = result.final_report.as_ref().map(|r| r.population),
        "Simulation ended"
    );

    if let Some(ref report) = result.final_report {
        info!(
            owner = %report.owner,
            births = report.births,
            survivals = report.survivals,
            deaths = report.deaths,
            population = report.population,
            "Final generation report"
        );
    } else {
        warn!("Simulation ended with no generations executed");
    }
}
