//! End-to-end tests: YAML config -> simulation -> run loop.

#![allow(clippy::unwrap_used)]

use lifeclaim_core::config::{ConfigError, SimulationConfig};
use lifeclaim_core::runner::{SimulationEndReason, run_simulation};
use lifeclaim_core::simulation::Simulation;

fn build(yaml: &str) -> Simulation {
    let config = SimulationConfig::parse(yaml).unwrap();
    Simulation::from_config(&config).unwrap()
}

const THREE_IN_A_ROW: &str = r"
grid: { columns: 5, rows: 5 }
owners:
  - name: seeder
  - name: advancer
seed:
  - { x: 1, y: 1, owner: seeder }
  - { x: 1, y: 2, owner: seeder }
  - { x: 1, y: 3, owner: seeder }
run: { max_generations: 1, generation_interval_ms: 0 }
";

#[tokio::test]
async fn birth_is_owned_by_the_owner_whose_turn_it_was() {
    let mut sim = build(THREE_IN_A_ROW);
    let seeder = sim.roster().by_name("seeder").map(|o| o.id);
    let config = SimulationConfig::parse(THREE_IN_A_ROW).unwrap();

    let result = run_simulation(&mut sim, &config.run).await.unwrap();

    assert_eq!(result.end_reason, SimulationEndReason::MaxGenerationsReached);
    // First turn belongs to the first listed owner.
    assert_eq!(sim.grid().get_cell(2, 2).unwrap().owner(), seeder);
    assert!(!sim.grid().get_cell(1, 2).unwrap().is_alive());
}

#[tokio::test]
async fn overcrowded_center_dies() {
    let yaml = r"
grid: { columns: 5, rows: 5 }
owners: [ { name: solo } ]
seed:
  - { x: 1, y: 1, owner: solo }
  - { x: 1, y: 2, owner: solo }
  - { x: 1, y: 3, owner: solo }
  - { x: 2, y: 2, owner: solo }
  - { x: 2, y: 3, owner: solo }
run: { max_generations: 1, generation_interval_ms: 0, stop_on_still_life: false }
";
    let mut sim = build(yaml);
    assert_eq!(sim.grid().count_live_neighbors(2, 2), Ok(4));

    let run = SimulationConfig::parse(yaml).unwrap().run;
    let _ = run_simulation(&mut sim, &run).await.unwrap();

    assert!(!sim.grid().get_cell(2, 2).unwrap().is_alive());
}

#[tokio::test]
async fn isolated_cell_extinction() {
    let yaml = r"
grid: { columns: 5, rows: 5 }
owners: [ { name: solo } ]
seed: [ { x: 1, y: 1, owner: solo } ]
run: { max_generations: 10, generation_interval_ms: 0 }
";
    let mut sim = build(yaml);
    let run = SimulationConfig::parse(yaml).unwrap().run;

    let result = run_simulation(&mut sim, &run).await.unwrap();

    assert_eq!(result.end_reason, SimulationEndReason::Extinction);
    assert_eq!(result.total_generations, 1);
    assert!(!sim.grid().get_cell(2, 2).unwrap().is_alive());
}

#[tokio::test]
async fn block_alternates_owner_every_generation() {
    let yaml = r"
grid: { columns: 6, rows: 6 }
owners: [ { name: red }, { name: blue } ]
seed:
  - { x: 2, y: 2, owner: red }
  - { x: 3, y: 2, owner: red }
  - { x: 2, y: 3, owner: red }
  - { x: 3, y: 3, owner: red }
run: { max_generations: 3, generation_interval_ms: 0, stop_on_still_life: false }
";
    let mut sim = build(yaml);
    let red = sim.roster().by_name("red").map(|o| o.id).unwrap();
    let blue = sim.roster().by_name("blue").map(|o| o.id).unwrap();
    let run = SimulationConfig::parse(yaml).unwrap().run;

    let result = run_simulation(&mut sim, &run).await.unwrap();

    // Turns: red, blue, red.
    assert_eq!(result.total_generations, 3);
    assert_eq!(result.final_report.map(|r| r.owner), Some(red));
    assert_eq!(sim.grid().population_of(red), 4);
    assert_eq!(sim.grid().population_of(blue), 0);
}

#[test]
fn default_config_builds_a_simulation() {
    let sim = Simulation::from_config(&SimulationConfig::default()).unwrap();
    assert_eq!(sim.grid().columns(), 32);
    assert_eq!(sim.grid().population(), 5);
}

#[test]
fn duplicate_owner_names_rejected() {
    let config = SimulationConfig::parse("owners: [ { name: a }, { name: a } ]\n").unwrap();
    assert!(matches!(
        Simulation::from_config(&config),
        Err(ConfigError::DuplicateOwner { .. })
    ));
}

#[test]
fn oversized_grid_rejected() {
    let config = SimulationConfig::parse("grid: { columns: 100, rows: 100 }\n").unwrap();
    assert!(matches!(
        Simulation::from_config(&config),
        Err(ConfigError::Grid { .. })
    ));
}

#[test]
fn owners_only_config_seeds_the_first_owner() {
    let sim = build("owners: [ { name: north }, { name: south } ]\n");
    let north = sim.roster().by_name("north").map(|o| o.id).unwrap();

    assert_eq!(sim.grid().population(), 5);
    assert_eq!(sim.grid().population_of(north), 5);
}

#[test]
fn small_grid_without_seed_section_builds() {
    let sim = build("grid: { columns: 4, rows: 4 }\n");
    let red = sim.roster().by_name("red").map(|o| o.id).unwrap();

    assert_eq!(sim.grid().population_of(red), 5);
    assert!(sim.grid().get_cell(2, 2).unwrap().is_alive());
}

#[tokio::test]
async fn default_seed_runs_on_the_smallest_grid() {
    let yaml = "grid: { columns: 3, rows: 3 }\nrun: { max_generations: 5, generation_interval_ms: 0 }\n";
    let mut sim = build(yaml);
    let run = SimulationConfig::parse(yaml).unwrap().run;

    let result = run_simulation(&mut sim, &run).await.unwrap();

    assert!(result.total_generations >= 1);
    assert!(result.total_generations <= 5);
}
