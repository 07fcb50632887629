//! Generation listener that writes each step to the tracing log.

use std::collections::BTreeMap;

use lifeclaim_core::event::GenerationListener;
use lifeclaim_core::roster::OwnerRoster;
use lifeclaim_grid::{GenerationReport, Grid};
use lifeclaim_types::OwnerId;
use tracing::{debug, info};

/// Logs every generation at `debug` and a per-owner census at `info`
/// every `census_every` generations.
pub struct LoggingListener {
    names: BTreeMap<OwnerId, String>,
    census_every: u64,
}

impl LoggingListener {
    /// Create a listener that resolves owner names through `roster`.
    ///
    /// A `census_every` of 0 disables the periodic census.
    pub fn new(roster: &OwnerRoster, census_every: u64) -> Self {
        let names = roster
            .owners()
            .iter()
            .map(|owner| (owner.id, owner.name.clone()))
            .collect();
        Self {
            names,
            census_every,
        }
    }

    fn name_of(&self, owner: OwnerId) -> String {
        self.names
            .get(&owner)
            .cloned()
            .unwrap_or_else(|| owner.to_string())
    }

    /// Live-cell count per owner name, including owners with no cells.
    pub fn census(&self, grid: &Grid) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> =
            self.names.values().map(|name| (name.clone(), 0)).collect();
        for (owner, count) in grid.populations_by_owner() {
            counts.insert(self.name_of(owner), count);
        }
        counts
    }

    const fn census_due(&self, generation: u64) -> bool {
        matches!(generation.checked_rem(self.census_every), Some(0))
    }
}

impl GenerationListener for LoggingListener {
    fn on_generation(&mut self, generation: u64, report: &GenerationReport, grid: &Grid) {
        debug!(
            generation,
            owner = %self.name_of(report.owner),
            births = report.births,
            survivals = report.survivals,
            deaths = report.deaths,
            population = report.population,
            "Generation complete"
        );

        if self.census_due(generation) {
            for (name, count) in self.census(grid) {
                info!(generation, owner = %name, cells = count, "Owner census");
            }
        }
    }
}
