//! Action vocabulary shared by creatures and monsters

use rand::Rng;

/// The four cardinal moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,    // row - 1
    Down,  // row + 1
    Right, // col + 1
    Left,  // col - 1
}

impl Direction {
    /// Decode a default-move gene (1=up, 2=down, 3=right, 4=left)
    pub fn from_gene(gene: u8) -> Option<Self> {
        match gene {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Right),
            4 => Some(Direction::Left),
            _ => None,
        }
    }

    /// Encode as a default-move gene
    pub fn to_gene(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Right => 3,
            Direction::Left => 4,
        }
    }

    /// (row, col) delta of one step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Uniformly random cardinal direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::all()[rng.gen_range(0..4)]
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Right,
            Direction::Left,
        ]
    }
}

/// Everything a creature can do in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveRight,
    MoveLeft,
    EatStrawberry,
    EatMushroom,
}

impl Action {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::MoveUp,
            Direction::Down => Action::MoveDown,
            Direction::Right => Action::MoveRight,
            Direction::Left => Action::MoveLeft,
        }
    }

    /// Direction of a move action, `None` for eating
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            Action::MoveRight => Some(Direction::Right),
            Action::MoveLeft => Some(Direction::Left),
            Action::EatStrawberry | Action::EatMushroom => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::MoveUp => "move-up",
            Action::MoveDown => "move-down",
            Action::MoveRight => "move-right",
            Action::MoveLeft => "move-left",
            Action::EatStrawberry => "eat-strawberry",
            Action::EatMushroom => "eat-mushroom",
        }
    }
}

/// Environmental triggers a chromosome can react to.
///
/// The discriminant is both the gene index of the reaction and the offset of
/// its priority weight (gene `7 + discriminant`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    StrawberryHere = 0,
    MushroomHere = 1,
    StrawberryNear = 2,
    MushroomNear = 3,
    MonsterNear = 4,
    CreatureNear = 5,
}

/// Order in which conditions are evaluated. Earlier entries win weight ties.
pub const EVALUATION_ORDER: [Condition; 6] = [
    Condition::StrawberryHere,
    Condition::MushroomHere,
    Condition::StrawberryNear,
    Condition::MushroomNear,
    Condition::MonsterNear,
    Condition::CreatureNear,
];

impl Condition {
    /// Gene holding the reaction to this condition
    pub fn gene_index(self) -> usize {
        self as usize
    }

    /// Gene holding the priority weight of this condition
    pub fn weight_index(self) -> usize {
        7 + self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Condition::StrawberryHere => "strawberry-here",
            Condition::MushroomHere => "mushroom-here",
            Condition::StrawberryNear => "strawberry-near",
            Condition::MushroomNear => "mushroom-near",
            Condition::MonsterNear => "monster-near",
            Condition::CreatureNear => "creature-near",
        }
    }
}

/// Reaction to a sighted item (genes 2-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Response {
    Ignore,   // 0
    Approach, // 1
    Flee,     // 2
    Wander,   // 3 - random direction
}

impl Response {
    /// Decode a reaction gene; values outside 0..=3 are ignored
    pub fn from_gene(gene: u8) -> Self {
        match gene {
            1 => Response::Approach,
            2 => Response::Flee,
            3 => Response::Wander,
            _ => Response::Ignore,
        }
    }

    /// Concrete move for an item seen in `toward`
    pub fn resolve<R: Rng + ?Sized>(self, toward: Direction, rng: &mut R) -> Option<Direction> {
        match self {
            Response::Ignore => None,
            Response::Approach => Some(toward),
            Response::Flee => Some(toward.opposite()),
            Response::Wander => Some(Direction::random(rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_direction_gene_roundtrip() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_gene(direction.to_gene()), Some(direction));
        }
        assert_eq!(Direction::from_gene(0), None);
        assert_eq!(Direction::from_gene(5), None);
    }

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.offset(), (-1, 0));
        assert_eq!(Direction::Down.offset(), (1, 0));
        assert_eq!(Direction::Right.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (0, -1));
    }

    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Direction::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_action_direction() {
        for direction in Direction::all() {
            assert_eq!(Action::from_direction(direction).direction(), Some(direction));
        }
        assert_eq!(Action::EatStrawberry.direction(), None);
        assert_eq!(Action::EatMushroom.direction(), None);
    }

    #[test]
    fn test_condition_indices() {
        for (i, condition) in EVALUATION_ORDER.iter().enumerate() {
            assert_eq!(condition.gene_index(), i);
            assert_eq!(condition.weight_index(), 7 + i);
        }
    }

    #[test]
    fn test_response_resolve() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(Response::Ignore.resolve(Direction::Up, &mut rng), None);
        assert_eq!(
            Response::Approach.resolve(Direction::Left, &mut rng),
            Some(Direction::Left)
        );
        assert_eq!(
            Response::Flee.resolve(Direction::Left, &mut rng),
            Some(Direction::Right)
        );
        assert!(Response::Wander.resolve(Direction::Up, &mut rng).is_some());
    }

    #[test]
    fn test_response_from_gene() {
        assert_eq!(Response::from_gene(0), Response::Ignore);
        assert_eq!(Response::from_gene(1), Response::Approach);
        assert_eq!(Response::from_gene(2), Response::Flee);
        assert_eq!(Response::from_gene(3), Response::Wander);
    }
}
