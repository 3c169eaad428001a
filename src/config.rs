//! Run configuration for the simulation
//! Defaults reproduce the classic 40x40 board with 100 creatures and 10 monsters

use crate::error::SimError;

/// Static configuration for one simulation run.
///
/// Supplied once when the [`World`](crate::world::World) is built and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of board rows.
    pub rows: usize,
    /// Number of board columns.
    pub cols: usize,
    /// Number of generations in a run.
    pub generations: u32,
    /// Time steps per generation.
    pub steps_per_generation: u32,
    /// Life-force every creature starts a generation with.
    pub life_force: i32,
    /// Strawberries scattered at the start of each generation.
    pub strawberry_population: usize,
    /// Mushrooms scattered at the start of each generation.
    pub mushroom_population: usize,
    /// Creatures spawned each generation.
    pub creature_population: usize,
    /// Monsters spawned each generation.
    pub monster_population: usize,
    /// Monsters act on every Nth step.
    pub monster_step: u32,
    /// Sight radius used by creatures.
    pub creature_sight: usize,
    /// Sight radius used by monsters.
    pub monster_sight: usize,
    /// Life-force gained from eating one strawberry.
    pub strawberry_energy: i32,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 40,
            generations: 50,
            steps_per_generation: 50,
            life_force: 40,
            strawberry_population: 200,
            mushroom_population: 100,
            creature_population: 100,
            monster_population: 10,
            monster_step: 2,
            creature_sight: 2,
            monster_sight: 2,
            strawberry_energy: 5,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::InvalidConfig("board dimensions must be non-zero"));
        }
        match self.cell_count() {
            Some(cells) if cells <= isize::MAX as usize => {}
            _ => return Err(SimError::InvalidConfig("board is too large")),
        }
        let board_span = self.rows.max(self.cols);
        if self.creature_sight > board_span || self.monster_sight > board_span {
            return Err(SimError::InvalidConfig(
                "sight radius must not exceed the board size",
            ));
        }
        if self.generations == 0 {
            return Err(SimError::InvalidConfig("generations must be non-zero"));
        }
        if self.steps_per_generation == 0 {
            return Err(SimError::InvalidConfig(
                "steps_per_generation must be non-zero",
            ));
        }
        if self.monster_step == 0 {
            return Err(SimError::InvalidConfig("monster_step must be non-zero"));
        }
        if self.life_force <= 0 {
            return Err(SimError::InvalidConfig("life_force must be positive"));
        }
        if self.strawberry_energy < 0 {
            return Err(SimError::InvalidConfig(
                "strawberry_energy must be non-negative",
            ));
        }
        Ok(())
    }

    /// Number of cells on the board, `None` if it overflows `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}
