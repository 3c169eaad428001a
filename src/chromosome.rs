use crate::action::{Condition, Direction, Response};
use crate::error::SimError;
use rand::Rng;
use std::fmt;

/// Number of genes in every chromosome
pub const GENE_COUNT: usize = 13;

/// Index of the first priority weight gene
pub const WEIGHT_START: usize = 7;

/// Index of the default-action gene
pub const DEFAULT_ACTION_GENE: usize = 6;

/// Fixed-layout behavior policy of a creature
///
/// | genes | meaning |
/// |---|---|
/// | 0, 1 | eat a strawberry / mushroom on the current cell (0 or 1) |
/// | 2..=5 | reaction to a nearby strawberry, mushroom, monster, creature |
/// | 6 | default move: 0 = random, 1..=4 = up, down, right, left |
/// | 7..=12 | priority weight of each condition 0..=5 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: [u8; GENE_COUNT],
}

impl Chromosome {
    /// Build a chromosome from raw genes, rejecting any gene outside its range
    pub fn from_genes(genes: [u8; GENE_COUNT]) -> Result<Self, SimError> {
        for (index, &value) in genes.iter().enumerate() {
            if value > max_gene_value(index) {
                return Err(SimError::InvalidGene { index, value });
            }
        }
        Ok(Self { genes })
    }

    /// Draw a first-generation chromosome
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut genes = [0u8; GENE_COUNT];

        genes[0] = eat_gene(rng.gen::<f64>());
        genes[1] = eat_gene(rng.gen::<f64>() + 0.01);
        for gene in &mut genes[2..5] {
            *gene = response_gene(rng.gen::<f64>() + 0.01);
        }
        genes[5] = response_gene(rng.gen::<f64>());
        genes[DEFAULT_ACTION_GENE] = default_action_gene(rng.gen::<f64>());
        for gene in &mut genes[WEIGHT_START..] {
            *gene = rng.gen_range(0..10);
        }

        Self { genes }
    }

    pub fn genes(&self) -> &[u8; GENE_COUNT] {
        &self.genes
    }

    pub fn gene(&self, index: usize) -> u8 {
        self.genes[index]
    }

    pub(crate) fn set_gene(&mut self, index: usize, value: u8) {
        self.genes[index] = value;
    }

    /// Whether the gate gene for `condition` allows it to trigger.
    /// A "near" condition only triggers when it maps to an actual reaction.
    pub fn reacts_to(&self, condition: Condition) -> bool {
        match condition {
            Condition::StrawberryHere | Condition::MushroomHere => {
                self.genes[condition.gene_index()] != 0
            }
            _ => self.response(condition) != Response::Ignore,
        }
    }

    /// Reaction to a sighted item; eat conditions map to `Ignore`
    pub fn response(&self, condition: Condition) -> Response {
        match condition {
            Condition::StrawberryHere | Condition::MushroomHere => Response::Ignore,
            _ => Response::from_gene(self.genes[condition.gene_index()]),
        }
    }

    pub fn weight(&self, condition: Condition) -> u8 {
        self.genes[condition.weight_index()]
    }

    /// Fixed default move, `None` when the default is random
    pub fn default_move(&self) -> Option<Direction> {
        Direction::from_gene(self.genes[DEFAULT_ACTION_GENE])
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gene) in self.genes.iter().enumerate() {
            if i == WEIGHT_START {
                write!(f, " |")?;
            }
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}

/// Largest value gene `index` may hold
pub fn max_gene_value(index: usize) -> u8 {
    match index {
        0 | 1 => 1,
        2..=5 => 3,
        DEFAULT_ACTION_GENE => 4,
        _ => 9,
    }
}

fn eat_gene(r: f64) -> u8 {
    if r < 0.5 {
        1
    } else {
        0
    }
}

// Bin edges are exclusive on both sides, so exact edge values fall to 0.
fn response_gene(r: f64) -> u8 {
    if r > 0.25 && r < 0.5 {
        1
    } else if r > 0.5 && r < 0.75 {
        2
    } else if r > 0.75 && r < 1.0 {
        3
    } else {
        0
    }
}

fn default_action_gene(r: f64) -> u8 {
    if r > 0.2 && r <= 0.4 {
        1
    } else if r > 0.4 && r <= 0.6 {
        2
    } else if r > 0.6 && r <= 0.8 {
        3
    } else if r > 0.8 && r <= 1.0 {
        4
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::EVALUATION_ORDER;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_chromosome_gene_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let chromosome = Chromosome::random(&mut rng);
            let genes = chromosome.genes();
            assert!(genes[0] <= 1);
            assert!(genes[1] <= 1);
            for gene in &genes[2..6] {
                assert!(*gene <= 3);
            }
            assert!(genes[6] <= 4);
            for gene in &genes[7..] {
                assert!(*gene < 10);
            }
        }
    }

    #[test]
    fn test_random_chromosomes_vary() {
        let mut rng = SmallRng::seed_from_u64(3);
        let first = Chromosome::random(&mut rng);
        let differs = (0..50).any(|_| Chromosome::random(&mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_response_bins() {
        assert_eq!(response_gene(0.1), 0);
        assert_eq!(response_gene(0.25), 0);
        assert_eq!(response_gene(0.3), 1);
        assert_eq!(response_gene(0.5), 0);
        assert_eq!(response_gene(0.6), 2);
        assert_eq!(response_gene(0.75), 0);
        assert_eq!(response_gene(0.9), 3);
        assert_eq!(response_gene(1.005), 0);
    }

    #[test]
    fn test_default_action_bins() {
        assert_eq!(default_action_gene(0.1), 0);
        assert_eq!(default_action_gene(0.2), 0);
        assert_eq!(default_action_gene(0.4), 1);
        assert_eq!(default_action_gene(0.5), 2);
        assert_eq!(default_action_gene(0.7), 3);
        assert_eq!(default_action_gene(0.95), 4);
    }

    #[test]
    fn test_accessors() {
        let chromosome =
            Chromosome::from_genes([1, 0, 1, 2, 3, 0, 2, 9, 8, 7, 6, 5, 4]).unwrap();
        assert!(chromosome.reacts_to(Condition::StrawberryHere));
        assert!(!chromosome.reacts_to(Condition::MushroomHere));
        assert_eq!(chromosome.response(Condition::StrawberryNear), Response::Approach);
        assert_eq!(chromosome.response(Condition::MushroomNear), Response::Flee);
        assert_eq!(chromosome.response(Condition::MonsterNear), Response::Wander);
        assert_eq!(chromosome.response(Condition::CreatureNear), Response::Ignore);
        assert_eq!(chromosome.default_move(), Some(Direction::Down));

        let weights: Vec<u8> = EVALUATION_ORDER
            .iter()
            .map(|&c| chromosome.weight(c))
            .collect();
        assert_eq!(weights, vec![9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_from_genes_rejects_out_of_range() {
        let cases = [(0, 2), (1, 9), (2, 7), (5, 4), (6, 5), (7, 10), (12, 255)];
        for (index, value) in cases {
            let mut genes = [0; GENE_COUNT];
            genes[index] = value;
            assert_eq!(
                Chromosome::from_genes(genes),
                Err(SimError::InvalidGene { index, value })
            );
        }
    }

    #[test]
    fn test_from_genes_accepts_upper_bounds() {
        let genes = [1, 1, 3, 3, 3, 3, 4, 9, 9, 9, 9, 9, 9];
        let chromosome = Chromosome::from_genes(genes).unwrap();
        assert_eq!(chromosome.genes(), &genes);
    }

    #[test]
    fn test_unknown_reaction_does_not_react() {
        let mut chromosome = Chromosome::from_genes([0; GENE_COUNT]).unwrap();
        chromosome.set_gene(Condition::StrawberryNear.gene_index(), 7);
        assert_eq!(chromosome.response(Condition::StrawberryNear), Response::Ignore);
        assert!(!chromosome.reacts_to(Condition::StrawberryNear));
    }

    #[test]
    fn test_random_default_move() {
        let chromosome = Chromosome::from_genes([0; GENE_COUNT]).unwrap();
        assert_eq!(chromosome.default_move(), None);
    }

    #[test]
    fn test_display() {
        let chromosome =
            Chromosome::from_genes([1, 0, 1, 2, 3, 0, 2, 9, 8, 7, 6, 5, 4]).unwrap();
        assert_eq!(chromosome.to_string(), "1 0 1 2 3 0 2 | 9 8 7 6 5 4");
    }
}
