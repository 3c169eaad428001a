// Library exports for gridlife
// Shared by the GUI binary, the headless runner and the integration tests

pub mod action;
pub mod behavior;
pub mod chromosome;
pub mod config;
pub mod creature;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod genetics;
pub mod grid;
pub mod monster;
pub mod ui;
pub mod vision;
pub mod world;

pub use chromosome::Chromosome;
pub use config::SimConfig;
pub use error::SimError;
pub use grid::{Grid, ItemKind};
pub use world::{GenerationSummary, Phase, RunSummary, World};
