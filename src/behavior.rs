use crate::action::{Action, Condition, Direction, EVALUATION_ORDER};
use crate::chromosome::Chromosome;
use crate::creature::Creature;
use crate::grid::{Grid, ItemKind};
use crate::vision::nearest_direction;
use rand::Rng;

/// Item layer watched by each "near" condition
fn watched_kind(condition: Condition) -> Option<ItemKind> {
    match condition {
        Condition::StrawberryNear => Some(ItemKind::Strawberry),
        Condition::MushroomNear => Some(ItemKind::Mushroom),
        Condition::MonsterNear => Some(ItemKind::Monster),
        Condition::CreatureNear => Some(ItemKind::Creature),
        Condition::StrawberryHere | Condition::MushroomHere => None,
    }
}

/// Whether `condition` currently holds for a creature at `position`
fn condition_holds(grid: &Grid, position: (usize, usize), condition: Condition, sight: usize) -> bool {
    let (row, col) = position;
    match condition {
        Condition::StrawberryHere => grid.occupancy_at(ItemKind::Strawberry, row, col) > 0,
        Condition::MushroomHere => grid.occupancy_at(ItemKind::Mushroom, row, col) > 0,
        _ => watched_kind(condition)
            .and_then(|kind| nearest_direction(grid, position, kind, sight))
            .is_some(),
    }
}

/// Conditions that hold right now and that the chromosome reacts to,
/// in evaluation order
pub fn candidate_conditions(creature: &Creature, grid: &Grid, sight: usize) -> Vec<Condition> {
    EVALUATION_ORDER
        .iter()
        .copied()
        .filter(|&condition| {
            creature.chromosome().reacts_to(condition)
                && condition_holds(grid, creature.position(), condition, sight)
        })
        .collect()
}

/// Candidate with the strictly greatest priority weight.
/// On equal weights the candidate listed first is kept.
pub fn strongest_condition(chromosome: &Chromosome, candidates: &[Condition]) -> Option<Condition> {
    let mut best: Option<(u8, Condition)> = None;
    for &condition in candidates {
        let weight = chromosome.weight(condition);
        if best.map_or(true, |(best_weight, _)| weight > best_weight) {
            best = Some((weight, condition));
        }
    }
    best.map(|(_, condition)| condition)
}

/// Pick the creature's action for this tick
pub fn select_action<R: Rng + ?Sized>(
    creature: &Creature,
    grid: &Grid,
    sight: usize,
    rng: &mut R,
) -> Action {
    let chromosome = creature.chromosome();
    let candidates = candidate_conditions(creature, grid, sight);

    let Some(condition) = strongest_condition(chromosome, &candidates) else {
        let direction = chromosome
            .default_move()
            .unwrap_or_else(|| Direction::random(rng));
        return Action::from_direction(direction);
    };

    match condition {
        Condition::StrawberryHere => Action::EatStrawberry,
        Condition::MushroomHere => Action::EatMushroom,
        _ => Action::from_direction(decide_move(creature, grid, condition, sight, rng)),
    }
}

/// Turn a "near" condition into a concrete move using its reaction gene
fn decide_move<R: Rng + ?Sized>(
    creature: &Creature,
    grid: &Grid,
    condition: Condition,
    sight: usize,
    rng: &mut R,
) -> Direction {
    let toward = watched_kind(condition)
        .and_then(|kind| nearest_direction(grid, creature.position(), kind, sight))
        .expect("candidate condition must have a sighted item");

    creature
        .chromosome()
        .response(condition)
        .resolve(toward, rng)
        .expect("candidate condition must have a non-ignore reaction")
}

/// Apply `action` to the creature and the grid
pub fn act(creature: &mut Creature, grid: &mut Grid, action: Action, strawberry_energy: i32) {
    match action {
        Action::EatStrawberry => creature.eat_strawberry(grid, strawberry_energy),
        Action::EatMushroom => creature.eat_mushroom(grid),
        _ => {
            if let Some(direction) = action.direction() {
                creature.attempt_move(grid, direction);
            }
        }
    }
}

/// Decide and execute one tick for a creature; returns the action taken
pub fn take_turn<R: Rng + ?Sized>(
    creature: &mut Creature,
    grid: &mut Grid,
    sight: usize,
    strawberry_energy: i32,
    rng: &mut R,
) -> Action {
    let action = select_action(creature, grid, sight, rng);
    act(creature, grid, action, strawberry_energy);
    action
}
