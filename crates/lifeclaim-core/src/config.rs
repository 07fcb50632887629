//! Configuration loading and typed config structures for Lifeclaim.
//!
//! The canonical configuration lives in `lifeclaim-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure and a
//! loader that reads the file. Semantic checks (owner names, grid size,
//! seed coordinates) happen when the config is turned into a
//! [`Simulation`](crate::simulation::Simulation).

use std::path::Path;

use lifeclaim_grid::GridError;
use serde::Deserialize;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "LIFECLAIM_LOG";

/// Errors that can occur when loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The owner list is empty.
    #[error("at least one owner must be configured")]
    NoOwners,

    /// Two owners share a name.
    #[error("duplicate owner name: {name}")]
    DuplicateOwner {
        /// The repeated name.
        name: String,
    },

    /// A seed cell names an owner that is not in the owner list.
    #[error("seed cell ({x}, {y}) references unknown owner: {name}")]
    UnknownOwner {
        /// The unknown name.
        name: String,
        /// Seed column.
        x: usize,
        /// Seed row.
        y: usize,
    },

    /// Grid dimensions or seed coordinates were rejected by the grid.
    #[error("invalid grid configuration: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: GridError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `lifeclaim-config.yaml`. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Board dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Owners in turn order.
    #[serde(default = "default_owners")]
    pub owners: Vec<OwnerConfig>,

    /// Initially live cells. When absent, an R-pentomino owned by the
    /// first owner is placed at the center of the grid.
    #[serde(default)]
    pub seed: Option<Vec<SeedCell>>,

    /// Run-loop bounds and pacing.
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            owners: default_owners(),
            seed: None,
            run: RunConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `LIFECLAIM_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// The cells to seed: the configured list, or the default pattern
    /// centered on `grid` and owned by the first owner.
    ///
    /// Empty when no seed is configured and the owner list is empty.
    pub fn seed_cells(&self) -> Vec<SeedCell> {
        match &self.seed {
            Some(cells) => cells.clone(),
            None => self
                .owners
                .first()
                .map_or_else(Vec::new, |owner| default_seed(self.grid, &owner.name)),
        }
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Number of columns (at least 3).
    #[serde(default = "default_dimension")]
    pub columns: usize,

    /// Number of rows (at least 3).
    #[serde(default = "default_dimension")]
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_dimension(),
            rows: default_dimension(),
        }
    }
}

/// One owner entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwnerConfig {
    /// Display name; must be unique.
    pub name: String,
}

/// A cell that starts alive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCell {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Name of the owning entry in `owners`.
    pub owner: String,
}

/// Run-loop bounds and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Stop after this many generations. `0` means no generation limit.
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,

    /// Real-time milliseconds between generations.
    #[serde(default = "default_generation_interval_ms")]
    pub generation_interval_ms: u64,

    /// Stop once no cell is alive.
    #[serde(default = "default_true")]
    pub stop_on_extinction: bool,

    /// Stop once a generation leaves the live/dead layout unchanged.
    #[serde(default = "default_true")]
    pub stop_on_still_life: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: default_max_generations(),
            generation_interval_ms: default_generation_interval_ms(),
            stop_on_extinction: true,
            stop_on_still_life: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Replace `level` with `LIFECLAIM_LOG` when that variable is set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_dimension() -> usize {
    32
}

fn default_owners() -> Vec<OwnerConfig> {
    ["red", "blue"]
        .into_iter()
        .map(|name| OwnerConfig {
            name: name.to_owned(),
        })
        .collect()
}

/// An R-pentomino around the center of `grid`, owned by `owner`.
///
/// Fits any grid of at least 3x3: the center is never on the first row or
/// column and always has a column to its right.
fn default_seed(grid: GridConfig, owner: &str) -> Vec<SeedCell> {
    let cx = grid.columns.checked_div(2).unwrap_or(0);
    let cy = grid.rows.checked_div(2).unwrap_or(0);
    [
        (cx, cy.saturating_sub(1)),
        (cx.saturating_add(1), cy.saturating_sub(1)),
        (cx.saturating_sub(1), cy),
        (cx, cy),
        (cx, cy.saturating_add(1)),
    ]
    .into_iter()
    .map(|(x, y)| SeedCell {
        x,
        y,
        owner: owner.to_owned(),
    })
    .collect()
}

const fn default_max_generations() -> u64 {
    200
}

const fn default_generation_interval_ms() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}
