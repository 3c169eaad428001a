//! Diagnostic tools for analyzing how chromosomes evolve

use crate::action::{Condition, EVALUATION_ORDER};
use crate::chromosome::GENE_COUNT;
use crate::creature::Creature;
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use std::fmt;

/// Distinct values a gene can hold (weights go up to 9)
pub const GENE_VALUES: usize = 10;

/// Aggregate gene statistics over a population
#[derive(Debug, Clone, PartialEq)]
pub struct GeneProfile {
    pub population: usize,
    /// `histograms[gene][value]` = creatures carrying `value` at `gene`
    pub histograms: [[usize; GENE_VALUES]; GENE_COUNT],
    /// Share of creatures whose chromosome eats strawberries
    pub eats_strawberries: f64,
    /// Share of creatures whose chromosome eats mushrooms
    pub eats_mushrooms: f64,
    /// Mean priority weight per condition, in evaluation order
    pub mean_weights: [f64; 6],
    pub mean_life_force: f64,
}

impl GeneProfile {
    /// Most common value of `gene`; lower values win ties
    pub fn dominant_value(&self, gene: usize) -> Option<usize> {
        if self.population == 0 {
            return None;
        }
        let histogram = &self.histograms[gene];
        let mut best = 0;
        for value in 1..GENE_VALUES {
            if histogram[value] > histogram[best] {
                best = value;
            }
        }
        Some(best)
    }

    /// Mean weight for one condition
    pub fn mean_weight(&self, condition: Condition) -> f64 {
        self.mean_weights[condition as usize]
    }
}

#[derive(Debug, Clone, Copy)]
struct GeneCounts {
    population: usize,
    histograms: [[usize; GENE_VALUES]; GENE_COUNT],
    life_force: i64,
}

impl GeneCounts {
    fn empty() -> Self {
        Self {
            population: 0,
            histograms: [[0; GENE_VALUES]; GENE_COUNT],
            life_force: 0,
        }
    }

    fn add(mut self, creature: &Creature) -> Self {
        self.population += 1;
        self.life_force += i64::from(creature.life_force);
        for (gene, &value) in creature.chromosome().genes().iter().enumerate() {
            if let Some(slot) = self.histograms[gene].get_mut(value as usize) {
                *slot += 1;
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.population += other.population;
        self.life_force += other.life_force;
        for (mine, theirs) in self.histograms.iter_mut().zip(other.histograms.iter()) {
            for (a, b) in mine.iter_mut().zip(theirs.iter()) {
                *a += b;
            }
        }
        self
    }

    fn into_profile(self) -> GeneProfile {
        let share = |count: usize| {
            if self.population > 0 {
                count as f64 / self.population as f64
            } else {
                0.0
            }
        };

        let mut mean_weights = [0.0; 6];
        for (slot, condition) in mean_weights.iter_mut().zip(EVALUATION_ORDER) {
            let weighted: usize = self.histograms[condition.weight_index()]
                .iter()
                .enumerate()
                .map(|(value, count)| value * count)
                .sum();
            *slot = share(weighted);
        }

        GeneProfile {
            population: self.population,
            histograms: self.histograms,
            eats_strawberries: share(self.histograms[0][1..].iter().sum()),
            eats_mushrooms: share(self.histograms[1][1..].iter().sum()),
            mean_weights,
            mean_life_force: if self.population > 0 {
                self.life_force as f64 / self.population as f64
            } else {
                0.0
            },
        }
    }
}

/// Summarize the chromosomes of a population (parallel)
#[cfg(not(target_arch = "wasm32"))]
pub fn analyze_population(creatures: &[Creature]) -> GeneProfile {
    creatures
        .par_iter()
        .fold(GeneCounts::empty, GeneCounts::add)
        .reduce(GeneCounts::empty, GeneCounts::merge)
        .into_profile()
}

/// Summarize the chromosomes of a population (sequential on wasm)
#[cfg(target_arch = "wasm32")]
pub fn analyze_population(creatures: &[Creature]) -> GeneProfile {
    creatures
        .iter()
        .fold(GeneCounts::empty(), GeneCounts::add)
        .into_profile()
}

impl fmt::Display for GeneProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Gene Profile ({} creatures) ===", self.population)?;
        if self.population == 0 {
            return writeln!(f, "(empty population)");
        }
        writeln!(f, "Mean life-force: {:.2}", self.mean_life_force)?;
        writeln!(
            f,
            "Eat strawberries: {:.1}%",
            100.0 * self.eats_strawberries
        )?;
        writeln!(f, "Eat mushrooms: {:.1}%", 100.0 * self.eats_mushrooms)?;

        writeln!(f, "\nMean priority weights:")?;
        for condition in EVALUATION_ORDER {
            writeln!(
                f,
                "  {:<16} {:.2}",
                condition.name(),
                self.mean_weight(condition)
            )?;
        }

        writeln!(f, "\nGene histograms:")?;
        for (gene, histogram) in self.histograms.iter().enumerate() {
            write!(f, "  gene {:>2}:", gene)?;
            for count in histogram {
                write!(f, " {:>4}", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
