use crate::action::Direction;
use crate::creature::{Creature, DeathCause};
use crate::grid::{Grid, ItemKind};
use crate::vision::nearest_direction;
use rand::Rng;

/// A predator. Monsters never die and are never bred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub row: usize,
    pub col: usize,
    pub tracking_number: u32,
}

/// What a monster did on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterTurn {
    /// Ate this many creatures on its own cell
    Ate(usize),
    /// Stepped (or tried to step) in a direction
    Moved(Direction),
}

impl Monster {
    pub fn new(row: usize, col: usize, tracking_number: u32) -> Self {
        Self {
            row,
            col,
            tracking_number,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Step in `direction`; off-board moves are ignored
    pub fn attempt_move(&mut self, grid: &mut Grid, direction: Direction) -> bool {
        let (d_row, d_col) = direction.offset();
        let target_row = self.row as isize + d_row;
        let target_col = self.col as isize + d_col;
        if !grid.in_bounds(target_row, target_col) {
            return false;
        }

        grid.remove(ItemKind::Monster, self.row, self.col);
        self.row = target_row as usize;
        self.col = target_col as usize;
        grid.place(ItemKind::Monster, self.row, self.col);
        true
    }

    /// Eat every live creature on this cell, or else chase the nearest
    /// visible creature, or else wander
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        creatures: &mut [Creature],
        sight: usize,
        rng: &mut R,
    ) -> MonsterTurn {
        let here = self.position();
        if grid.occupancy_at(ItemKind::Creature, self.row, self.col) > 0 {
            let mut eaten = 0;
            for creature in creatures
                .iter_mut()
                .filter(|c| c.is_alive() && c.position() == here)
            {
                grid.remove(ItemKind::Creature, creature.row, creature.col);
                creature.kill(DeathCause::Eaten);
                eaten += 1;
            }
            return MonsterTurn::Ate(eaten);
        }

        let direction = nearest_direction(grid, here, ItemKind::Creature, sight)
            .unwrap_or_else(|| Direction::random(rng));
        self.attempt_move(grid, direction);
        MonsterTurn::Moved(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::{Chromosome, GENE_COUNT};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn creature_at(grid: &mut Grid, row: usize, col: usize, tracking_number: u32) -> Creature {
        grid.place(ItemKind::Creature, row, col);
        Creature::new(row, col, 40, Chromosome::from_genes([0; GENE_COUNT]).unwrap(), tracking_number)
    }

    fn monster_at(grid: &mut Grid, row: usize, col: usize) -> Monster {
        grid.place(ItemKind::Monster, row, col);
        Monster::new(row, col, 1)
    }

    #[test]
    fn test_monster_eats_all_colocated_creatures() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut grid = Grid::new(10, 10);
        let mut monster = monster_at(&mut grid, 4, 4);
        let mut creatures = vec![
            creature_at(&mut grid, 4, 4, 1),
            creature_at(&mut grid, 4, 4, 2),
            creature_at(&mut grid, 4, 5, 3),
        ];

        let turn = monster.take_turn(&mut grid, &mut creatures, 2, &mut rng);

        assert_eq!(turn, MonsterTurn::Ate(2));
        assert_eq!(monster.position(), (4, 4));
        assert_eq!(grid.occupancy_at(ItemKind::Creature, 4, 4), 0);
        assert_eq!(grid.occupancy_at(ItemKind::Creature, 4, 5), 1);
        assert_eq!(creatures[0].death_cause(), Some(DeathCause::Eaten));
        assert_eq!(creatures[1].death_cause(), Some(DeathCause::Eaten));
        assert!(creatures[2].is_alive());
    }

    #[test]
    fn test_dead_creatures_are_not_eaten_twice() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut grid = Grid::new(10, 10);
        let mut first = monster_at(&mut grid, 4, 4);
        let mut second = monster_at(&mut grid, 4, 4);
        let mut creatures = vec![creature_at(&mut grid, 4, 4, 1)];

        assert_eq!(
            first.take_turn(&mut grid, &mut creatures, 2, &mut rng),
            MonsterTurn::Ate(1)
        );
        // The cell is empty now, so the second monster moves instead
        assert!(matches!(
            second.take_turn(&mut grid, &mut creatures, 2, &mut rng),
            MonsterTurn::Moved(_)
        ));
        assert_eq!(grid.total(ItemKind::Creature), 0);
    }

    #[test]
    fn test_monster_chases_nearest_creature() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut grid = Grid::new(10, 10);
        let mut monster = monster_at(&mut grid, 4, 4);
        let mut creatures = vec![creature_at(&mut grid, 6, 4, 1)];

        let turn = monster.take_turn(&mut grid, &mut creatures, 2, &mut rng);

        assert_eq!(turn, MonsterTurn::Moved(Direction::Down));
        assert_eq!(monster.position(), (5, 4));
        assert_eq!(grid.occupancy_at(ItemKind::Monster, 4, 4), 0);
        assert_eq!(grid.occupancy_at(ItemKind::Monster, 5, 4), 1);
    }

    #[test]
    fn test_monster_wanders_when_nothing_in_sight() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut grid = Grid::new(10, 10);
        let mut monster = monster_at(&mut grid, 5, 5);
        let mut creatures = Vec::new();

        let turn = monster.take_turn(&mut grid, &mut creatures, 2, &mut rng);

        assert!(matches!(turn, MonsterTurn::Moved(_)));
        let (row, col) = monster.position();
        let distance = (row as isize - 5).abs() + (col as isize - 5).abs();
        assert_eq!(distance, 1);
        assert_eq!(grid.total(ItemKind::Monster), 1);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut grid = Grid::new(10, 10);
        let mut monster = monster_at(&mut grid, 0, 9);
        assert!(!monster.attempt_move(&mut grid, Direction::Up));
        assert!(!monster.attempt_move(&mut grid, Direction::Right));
        assert_eq!(monster.position(), (0, 9));
        assert_eq!(grid.occupancy_at(ItemKind::Monster, 0, 9), 1);
    }
}
