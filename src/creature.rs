use crate::action::Direction;
use crate::chromosome::Chromosome;
use crate::grid::{Grid, ItemKind};

/// Why a creature left the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Life-force ran out after a move
    Starved,
    /// Ate a mushroom
    Poisoned,
    /// Shared a cell with a monster on its turn
    Eaten,
}

/// A prey agent steered by its chromosome
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    /// Board row
    pub row: usize,

    /// Board column
    pub col: usize,

    /// Remaining life-force; every move costs 1, death at <= 0
    pub life_force: i32,

    /// Behavior policy, fixed for the creature's lifetime
    chromosome: Chromosome,

    /// Bookkeeping number assigned at spawn
    pub tracking_number: u32,

    /// Set once the creature has died; it stays in the list until the
    /// end of the current sub-phase
    death: Option<DeathCause>,
}

impl Creature {
    pub fn new(
        row: usize,
        col: usize,
        life_force: i32,
        chromosome: Chromosome,
        tracking_number: u32,
    ) -> Self {
        Self {
            row,
            col,
            life_force,
            chromosome,
            tracking_number,
            death: None,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death
    }

    /// Mark the creature dead. Grid bookkeeping is the caller's job.
    pub(crate) fn kill(&mut self, cause: DeathCause) {
        if self.death.is_none() {
            self.death = Some(cause);
        }
    }

    /// Try to step in `direction`.
    ///
    /// The move costs 1 life-force even when the target is off the board, in
    /// which case the creature stays put. A creature whose life-force drops to
    /// zero is taken off the grid and marked starved.
    pub fn attempt_move(&mut self, grid: &mut Grid, direction: Direction) {
        grid.remove(ItemKind::Creature, self.row, self.col);
        self.life_force -= 1;

        let (d_row, d_col) = direction.offset();
        let target_row = self.row as isize + d_row;
        let target_col = self.col as isize + d_col;
        if grid.in_bounds(target_row, target_col) {
            self.row = target_row as usize;
            self.col = target_col as usize;
        }

        grid.place(ItemKind::Creature, self.row, self.col);

        if self.life_force <= 0 {
            grid.remove(ItemKind::Creature, self.row, self.col);
            self.kill(DeathCause::Starved);
        }
    }

    /// Eat one strawberry from the current cell
    pub fn eat_strawberry(&mut self, grid: &mut Grid, energy: i32) {
        grid.remove(ItemKind::Strawberry, self.row, self.col);
        self.life_force = self.life_force.saturating_add(energy);
    }

    /// Eat one mushroom from the current cell, which is always fatal
    pub fn eat_mushroom(&mut self, grid: &mut Grid) {
        grid.remove(ItemKind::Mushroom, self.row, self.col);
        grid.remove(ItemKind::Creature, self.row, self.col);
        self.life_force = 0;
        self.kill(DeathCause::Poisoned);
    }
}
