//! Headless runner - drive a full simulation without a window and print
//! per-generation fitness plus the final gene profile
//! Run with: cargo run --bin headless --release -- --seed 42

use anyhow::{Context, Result};
use clap::Parser;
use gridlife::diagnostics::analyze_population;
use gridlife::{RunSummary, SimConfig, World};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gridlife-headless",
    version,
    about = "Run the creature evolution simulation without a window"
)]
struct Cli {
    /// Board rows.
    #[arg(long)]
    rows: Option<usize>,
    /// Board columns.
    #[arg(long)]
    cols: Option<usize>,
    /// Generations to run.
    #[arg(long)]
    generations: Option<u32>,
    /// Time steps per generation.
    #[arg(long)]
    steps: Option<u32>,
    /// Starting life-force of every creature.
    #[arg(long)]
    life_force: Option<i32>,
    /// Strawberries placed each generation.
    #[arg(long)]
    strawberries: Option<usize>,
    /// Mushrooms placed each generation.
    #[arg(long)]
    mushrooms: Option<usize>,
    /// Creatures spawned each generation.
    #[arg(long)]
    creatures: Option<usize>,
    /// Monsters spawned each generation.
    #[arg(long)]
    monsters: Option<usize>,
    /// Monsters act on every Nth step.
    #[arg(long)]
    monster_step: Option<u32>,
    /// Creature sight radius.
    #[arg(long)]
    creature_sight: Option<usize>,
    /// Monster sight radius.
    #[arg(long)]
    monster_sight: Option<usize>,
    /// Life-force gained per strawberry.
    #[arg(long)]
    strawberry_energy: Option<i32>,
    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> SimConfig {
        let defaults = SimConfig::default();
        SimConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            generations: self.generations.unwrap_or(defaults.generations),
            steps_per_generation: self.steps.unwrap_or(defaults.steps_per_generation),
            life_force: self.life_force.unwrap_or(defaults.life_force),
            strawberry_population: self.strawberries.unwrap_or(defaults.strawberry_population),
            mushroom_population: self.mushrooms.unwrap_or(defaults.mushroom_population),
            creature_population: self.creatures.unwrap_or(defaults.creature_population),
            monster_population: self.monsters.unwrap_or(defaults.monster_population),
            monster_step: self.monster_step.unwrap_or(defaults.monster_step),
            creature_sight: self.creature_sight.unwrap_or(defaults.creature_sight),
            monster_sight: self.monster_sight.unwrap_or(defaults.monster_sight),
            strawberry_energy: self.strawberry_energy.unwrap_or(defaults.strawberry_energy),
            seed: self.seed,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Cli::parse().into_config();
    tracing::info!(?config, "starting headless run");

    let mut world = World::new(config).context("invalid simulation config")?;

    println!("generation\taverage");
    let mut final_profile = None;
    while !world.is_finished() {
        let summary = world.run_generation().context("simulation failed")?;
        println!("{}\t{}", summary.generation, summary.average_life_force);
        if world.is_finished() {
            final_profile = Some(analyze_population(world.creatures()));
        }
    }

    let history = world.history().to_vec();
    let run = RunSummary::new(history);
    println!("Average fitness per generation: {:.2}", run.mean_fitness);

    if let Some(profile) = final_profile {
        println!();
        print!("{}", profile);
    }
    Ok(())
}
