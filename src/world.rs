use crate::action::Action;
use crate::behavior;
use crate::chromosome::Chromosome;
use crate::config::SimConfig;
use crate::creature::{Creature, DeathCause};
use crate::error::SimError;
use crate::events::EventLog;
use crate::genetics;
use crate::grid::{Grid, ItemKind};
use crate::monster::{Monster, MonsterTurn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but nothing placed yet
    Uninitialized,
    /// Board is being reset and filled for a generation
    Populating,
    /// Time steps are running
    Stepping,
    /// Every step of the generation has run; waiting to score and breed
    Evaluating,
    /// Last generation has been scored
    Finished,
}

/// Outcome of one generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Zero-based generation index
    pub generation: u32,
    /// Creatures alive after the last step
    pub survivors: usize,
    /// Sum of the survivors' life-force
    pub total_life_force: i64,
    /// Total life-force divided by the configured creature population
    pub average_life_force: f64,
    pub starved: usize,
    pub poisoned: usize,
    pub eaten: usize,
    pub strawberries_eaten: usize,
    /// Whether the chromosomes were bred from survivors rather than drawn at random
    pub bred: bool,
}

/// Every generation of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub generations: Vec<GenerationSummary>,
    /// Mean of the per-generation total life-force
    pub mean_fitness: f64,
}

impl RunSummary {
    pub fn new(generations: Vec<GenerationSummary>) -> Self {
        let mean_fitness = if generations.is_empty() {
            0.0
        } else {
            generations
                .iter()
                .map(|g| g.total_life_force as f64)
                .sum::<f64>()
                / generations.len() as f64
        };
        Self {
            generations,
            mean_fitness,
        }
    }
}

/// Counters for the generation in progress
#[derive(Debug, Clone, Copy, Default)]
struct GenerationTally {
    starved: usize,
    poisoned: usize,
    eaten: usize,
    strawberries_eaten: usize,
    bred: bool,
}

/// The simulation: board, agents, random source and generation state machine
pub struct World {
    config: SimConfig,
    grid: Grid,
    creatures: Vec<Creature>,
    monsters: Vec<Monster>,

    /// Single random source for every draw in the run
    rng: SmallRng,

    phase: Phase,
    generation: u32,

    /// Steps completed in the current generation
    step: u32,

    tally: GenerationTally,
    history: Vec<GenerationSummary>,
    events: EventLog,
}

impl World {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            creatures: Vec::with_capacity(config.creature_population),
            monsters: Vec::with_capacity(config.monster_population),
            rng,
            phase: Phase::Uninitialized,
            generation: 0,
            step: 0,
            tally: GenerationTally::default(),
            history: Vec::with_capacity(config.generations as usize),
            events: EventLog::new(),
            config,
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SimError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SimError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Place the first generation with random chromosomes
    pub fn initialize_first_generation(&mut self) -> Result<(), SimError> {
        self.expect_phase(Phase::Uninitialized)?;
        self.populate(None)
    }

    /// Run one time step: monsters on their cadence, then every creature
    pub fn step_once(&mut self) -> Result<(), SimError> {
        self.expect_phase(Phase::Stepping)?;

        if self.step % self.config.monster_step == 0 {
            for monster in &mut self.monsters {
                let turn = monster.take_turn(
                    &mut self.grid,
                    &mut self.creatures,
                    self.config.monster_sight,
                    &mut self.rng,
                );
                if let MonsterTurn::Ate(count) = turn {
                    if count > 0 {
                        debug!(
                            monster = monster.tracking_number,
                            row = monster.row,
                            col = monster.col,
                            count,
                            "monster fed"
                        );
                    }
                }
            }
            self.purge_dead();
        }

        for creature in self.creatures.iter_mut().filter(|c| c.is_alive()) {
            let action = behavior::take_turn(
                creature,
                &mut self.grid,
                self.config.creature_sight,
                self.config.strawberry_energy,
                &mut self.rng,
            );
            if action == Action::EatStrawberry {
                self.tally.strawberries_eaten += 1;
            }
        }
        self.purge_dead();

        self.step += 1;
        if self.step >= self.config.steps_per_generation {
            self.phase = Phase::Evaluating;
        }
        Ok(())
    }

    /// Score the finished generation, then breed and place the next one.
    ///
    /// After the last configured generation the world moves to
    /// [`Phase::Finished`] and nothing new is placed.
    pub fn advance_generation(&mut self) -> Result<GenerationSummary, SimError> {
        self.expect_phase(Phase::Evaluating)?;

        let summary = self.summarize();
        info!(
            generation = summary.generation,
            survivors = summary.survivors,
            total_life_force = summary.total_life_force,
            average = summary.average_life_force,
            starved = summary.starved,
            poisoned = summary.poisoned,
            eaten = summary.eaten,
            "generation complete"
        );
        self.events.record(format!(
            "generation {} ended with {} survivors (average {:.2})",
            summary.generation, summary.survivors, summary.average_life_force
        ));
        self.history.push(summary.clone());

        if self.generation + 1 >= self.config.generations {
            self.phase = Phase::Finished;
            info!(generations = self.history.len(), "run finished");
            return Ok(summary);
        }

        let survivors = std::mem::take(&mut self.creatures);
        self.generation += 1;
        self.populate(Some(survivors.as_slice()))?;
        Ok(summary)
    }

    /// Step the current generation to its end and advance
    pub fn run_generation(&mut self) -> Result<GenerationSummary, SimError> {
        if self.phase == Phase::Uninitialized {
            self.initialize_first_generation()?;
        }
        while self.phase == Phase::Stepping {
            self.step_once()?;
        }
        self.advance_generation()
    }

    /// Run every remaining generation
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        while !self.is_finished() {
            self.run_generation()?;
        }
        Ok(RunSummary::new(self.history.clone()))
    }

    /// Reset the board and place monsters, creatures, strawberries and
    /// mushrooms in that order.
    ///
    /// Creature chromosomes are bred from `survivors` when any exist and
    /// drawn at random otherwise.
    fn populate(&mut self, survivors: Option<&[Creature]>) -> Result<(), SimError> {
        self.phase = Phase::Populating;
        self.grid.reset();
        self.creatures.clear();
        self.monsters.clear();
        self.step = 0;

        let breeding_pool = survivors.filter(|s| !s.is_empty());
        if let Some([]) = survivors {
            warn!(
                generation = self.generation,
                "no survivors to breed from; drawing random chromosomes"
            );
            self.events.record(format!(
                "extinction: generation {} restarts from random chromosomes",
                self.generation
            ));
        }
        self.tally = GenerationTally {
            bred: breeding_pool.is_some(),
            ..GenerationTally::default()
        };

        for n in 1..=self.config.monster_population {
            let (row, col) = self.random_cell();
            self.grid.place(ItemKind::Monster, row, col);
            self.monsters.push(Monster::new(row, col, n as u32));
        }

        for n in 1..=self.config.creature_population {
            let (row, col) = self.random_cell();
            self.grid.place(ItemKind::Creature, row, col);
            let chromosome = match breeding_pool {
                Some(pool) => genetics::offspring(pool, &mut self.rng),
                None => Chromosome::random(&mut self.rng),
            };
            self.creatures.push(Creature::new(
                row,
                col,
                self.config.life_force,
                chromosome,
                n as u32,
            ));
        }

        for _ in 0..self.config.strawberry_population {
            let (row, col) = self.random_cell();
            self.grid.place(ItemKind::Strawberry, row, col);
        }

        if self.config.mushroom_population > 0
            && !self.grid.layer(ItemKind::Strawberry).contains(&0)
        {
            return Err(SimError::NoFreeCell);
        }
        let mut mushrooms = 0;
        while mushrooms < self.config.mushroom_population {
            let (row, col) = self.random_cell();
            if self.grid.occupancy_at(ItemKind::Strawberry, row, col) == 0 {
                self.grid.place(ItemKind::Mushroom, row, col);
                mushrooms += 1;
            }
        }

        debug!(
            generation = self.generation,
            bred = self.tally.bred,
            creatures = self.creatures.len(),
            monsters = self.monsters.len(),
            "generation placed"
        );
        self.phase = Phase::Stepping;
        Ok(())
    }

    fn random_cell(&mut self) -> (usize, usize) {
        let row = self.rng.gen_range(0..self.config.rows);
        let col = self.rng.gen_range(0..self.config.cols);
        (row, col)
    }

    /// Drop dead creatures from the population, tallying why they died
    fn purge_dead(&mut self) {
        for creature in self.creatures.iter().filter(|c| !c.is_alive()) {
            let cause = match creature.death_cause() {
                Some(DeathCause::Starved) => {
                    self.tally.starved += 1;
                    "starved"
                }
                Some(DeathCause::Poisoned) => {
                    self.tally.poisoned += 1;
                    "was poisoned"
                }
                Some(DeathCause::Eaten) => {
                    self.tally.eaten += 1;
                    "was eaten"
                }
                None => continue,
            };
            self.events.record(format!(
                "gen {} step {}: creature #{} {} at ({}, {})",
                self.generation,
                self.step,
                creature.tracking_number,
                cause,
                creature.row,
                creature.col
            ));
        }
        self.creatures.retain(Creature::is_alive);
    }

    fn summarize(&self) -> GenerationSummary {
        let total_life_force: i64 = self
            .creatures
            .iter()
            .map(|c| i64::from(c.life_force))
            .sum();
        let average_life_force = if self.config.creature_population > 0 {
            total_life_force as f64 / self.config.creature_population as f64
        } else {
            0.0
        };

        GenerationSummary {
            generation: self.generation,
            survivors: self.creatures.len(),
            total_life_force,
            average_life_force,
            starved: self.tally.starved,
            poisoned: self.tally.poisoned,
            eaten: self.tally.eaten,
            strawberries_eaten: self.tally.strawberries_eaten,
            bred: self.tally.bred,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only occupancy counters for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Creatures standing on a cell
    pub fn creatures_at(&self, row: usize, col: usize) -> impl Iterator<Item = &Creature> {
        self.creatures
            .iter()
            .filter(move |c| c.position() == (row, col))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Zero-based index of the current generation
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Steps completed in the current generation
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn history(&self) -> &[GenerationSummary] {
        &self.history
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Put a hand-built creature on the board
    #[cfg(test)]
    pub(crate) fn inject_creature(&mut self, creature: Creature) {
        self.grid
            .place(ItemKind::Creature, creature.row, creature.col);
        self.creatures.push(creature);
    }

    #[cfg(test)]
    pub(crate) fn inject_monster(&mut self, monster: Monster) {
        self.grid.place(ItemKind::Monster, monster.row, monster.col);
        self.monsters.push(monster);
    }
}
