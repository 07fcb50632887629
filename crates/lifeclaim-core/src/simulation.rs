//! A grid bundled with the machinery that drives it.
//!
//! [`Simulation`] owns the [`Grid`], the [`OwnerRoster`] deciding whose
//! turn it is, the [`AdvanceGenerationEvent`] that performs each advance,
//! and the generation counter. One [`Simulation::step`] is one generation.

use lifeclaim_grid::{GenerationReport, Grid};
use lifeclaim_types::ListenerId;
use tracing::{debug, trace};

use crate::config::{ConfigError, SimulationConfig};
use crate::event::{AdvanceGenerationEvent, GenerationListener};
use crate::roster::OwnerRoster;

/// Errors that can occur while stepping a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The roster has no owner to take the turn.
    #[error("owner roster is empty")]
    EmptyRoster,

    /// Generation counter would overflow.
    #[error("generation counter overflow: cannot advance beyond u64::MAX")]
    GenerationOverflow,
}

/// Grid, owner turn order, advance trigger, and generation counter.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    roster: OwnerRoster,
    event: AdvanceGenerationEvent,
    /// Generations completed so far; 0 before the first step.
    generation: u64,
}

impl Simulation {
    /// Wrap an existing grid and roster.
    pub const fn new(grid: Grid, roster: OwnerRoster) -> Self {
        Self {
            grid,
            roster,
            event: AdvanceGenerationEvent::new(),
            generation: 0,
        }
    }

    /// Build the grid, roster and seed cells described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoOwners`] or [`ConfigError::DuplicateOwner`]
    /// for a bad owner list, [`ConfigError::Grid`] for rejected dimensions
    /// or seed coordinates, and [`ConfigError::UnknownOwner`] for a seed
    /// naming an owner not in the list.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let roster = OwnerRoster::from_names(config.owners.iter().map(|o| o.name.as_str()))?;
        let mut grid = Grid::new(config.grid.columns, config.grid.rows)?;

        for seed in &config.seed_cells() {
            let owner = roster
                .by_name(&seed.owner)
                .ok_or_else(|| ConfigError::UnknownOwner {
                    name: seed.owner.clone(),
                    x: seed.x,
                    y: seed.y,
                })?;
            grid.set_owner(seed.x, seed.y, Some(owner.id))?;
        }

        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            owners = roster.len(),
            seeded = grid.population(),
            "Simulation built from config"
        );

        Ok(Self::new(grid, roster))
    }

    /// The current generation's grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, for placing cells between steps.
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The owner roster.
    pub const fn roster(&self) -> &OwnerRoster {
        &self.roster
    }

    /// Number of generations completed.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Register a listener for every subsequent generation.
    pub fn register_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: GenerationListener + 'static,
    {
        self.event.register(listener)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        self.event.unregister(id)
    }

    /// Advance one generation on behalf of whichever owner's turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyRoster`] if no owner is available,
    /// or [`SimulationError::GenerationOverflow`] if the counter is
    /// exhausted. The grid is untouched in both cases.
    pub fn step(&mut self) -> Result<GenerationReport, SimulationError> {
        let next_generation = self
            .generation
            .checked_add(1)
            .ok_or(SimulationError::GenerationOverflow)?;
        let owner = self
            .roster
            .take_turn()
            .map(|owner| owner.id)
            .ok_or(SimulationError::EmptyRoster)?;

        let report = self.event.raise(next_generation, owner, &mut self.grid);
        self.generation = next_generation;

        trace!(
            generation = self.generation,
            owner = %owner,
            births = report.births,
            survivals = report.survivals,
            deaths = report.deaths,
            population = report.population,
            "Generation advanced"
        );
        Ok(report)
    }
}
