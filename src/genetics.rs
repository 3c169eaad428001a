//! Tournament selection, single-point crossover and mutation
//! used to breed each new generation from the survivors of the last

use crate::chromosome::{Chromosome, DEFAULT_ACTION_GENE, GENE_COUNT, WEIGHT_START};
use crate::creature::Creature;
use rand::seq::index;
use rand::Rng;

/// Survivors drawn into each tournament
pub const TOURNAMENT_SIZE: usize = 6;

/// Parents picked by tournaments when there are enough survivors
pub const PARENT_COUNT: usize = 4;

/// Chance that an offspring receives one point mutation
pub const MUTATION_RATE: f64 = 0.05;

/// Pick the parent pool for one offspring, as indices into `survivors`.
///
/// With at most [`TOURNAMENT_SIZE`] survivors every survivor is a parent.
/// Otherwise tournaments are run until [`PARENT_COUNT`] winners are in the
/// pool. The same survivor may win more than one tournament.
pub fn select_parents<R: Rng + ?Sized>(survivors: &[Creature], rng: &mut R) -> Vec<usize> {
    if survivors.len() <= TOURNAMENT_SIZE {
        return (0..survivors.len()).collect();
    }

    let mut parents = Vec::with_capacity(PARENT_COUNT);
    while parents.len() < PARENT_COUNT {
        let subset = index::sample(rng, survivors.len(), TOURNAMENT_SIZE).into_vec();
        let winner = tournament_winner(survivors, &subset, &parents);
        parents.push(winner);
    }
    parents
}

/// Best of one tournament.
///
/// The first subset member is the starting champion even if it is already a
/// parent. Later members that are already parents are skipped; the rest
/// replace the champion only with strictly higher life-force.
pub fn tournament_winner(survivors: &[Creature], subset: &[usize], parents: &[usize]) -> usize {
    let (&first, rest) = subset
        .split_first()
        .expect("tournament subset must not be empty");

    let mut best = first;
    for &candidate in rest {
        if parents.contains(&candidate) {
            continue;
        }
        if survivors[best].life_force < survivors[candidate].life_force {
            best = candidate;
        }
    }
    best
}

/// Two parent indices, distinct whenever the pool has two or more members
pub fn parent_pair<R: Rng + ?Sized>(pool_len: usize, rng: &mut R) -> (usize, usize) {
    assert!(pool_len > 0, "cannot pick parents from an empty pool");
    let first = rng.gen_range(0..pool_len);
    if pool_len == 1 {
        return (first, first);
    }
    let step = rng.gen_range(1..pool_len);
    (first, (first + step) % pool_len)
}

/// Genes `[0, point)` from `first`, `[point, GENE_COUNT)` from `second`
pub fn crossover_at(first: &Chromosome, second: &Chromosome, point: usize) -> Chromosome {
    assert!(point <= GENE_COUNT, "crossover point {} out of range", point);
    let mut child = *second;
    for index in 0..point {
        child.set_gene(index, first.gene(index));
    }
    child
}

/// Single-point crossover at a uniformly drawn point in `[0, GENE_COUNT)`
pub fn crossover<R: Rng + ?Sized>(first: &Chromosome, second: &Chromosome, rng: &mut R) -> Chromosome {
    let point = rng.gen_range(0..GENE_COUNT);
    crossover_at(first, second, point)
}

/// Overwrite gene `index` with a fresh draw from that gene's range.
///
/// Eat genes draw from `0..1`, so they always reset to 0.
pub fn mutate_gene<R: Rng + ?Sized>(chromosome: &mut Chromosome, index: usize, rng: &mut R) {
    let value = match index {
        0 | 1 => rng.gen_range(0..1),
        2..=DEFAULT_ACTION_GENE => rng.gen_range(0..4),
        _ => rng.gen_range(0..10),
    };
    debug_assert!(index < WEIGHT_START || value < 10);
    chromosome.set_gene(index, value);
}

/// With probability [`MUTATION_RATE`], mutate one random gene.
/// Returns the mutated index.
pub fn mutate<R: Rng + ?Sized>(chromosome: &mut Chromosome, rng: &mut R) -> Option<usize> {
    if rng.gen::<f64>() >= MUTATION_RATE {
        return None;
    }
    let index = rng.gen_range(0..GENE_COUNT);
    mutate_gene(chromosome, index, rng);
    Some(index)
}

/// Cross two parents from `pool` and maybe mutate the child.
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn breed<R: Rng + ?Sized>(pool: &[Chromosome], rng: &mut R) -> Chromosome {
    let (a, b) = parent_pair(pool.len(), rng);
    let mut child = crossover(&pool[a], &pool[b], rng);
    mutate(&mut child, rng);
    child
}

/// Run a fresh parent selection over `survivors` and breed one child
pub fn offspring<R: Rng + ?Sized>(survivors: &[Creature], rng: &mut R) -> Chromosome {
    let pool: Vec<Chromosome> = select_parents(survivors, rng)
        .into_iter()
        .map(|idx| *survivors[idx].chromosome())
        .collect();
    breed(&pool, rng)
}
