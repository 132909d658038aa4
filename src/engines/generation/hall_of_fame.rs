use crate::engines::generation::genome::{Genome, Individual};
use std::collections::HashSet;

/// Bounded archive of the best individuals seen during a run.
///
/// Members are kept in ascending cost order and are owned copies, so later
/// changes to the population never reach the archive.
#[derive(Debug, Clone)]
pub struct HallOfFame {
    members: Vec<Individual>,
    max_size: usize,
    seen_genomes: HashSet<Genome>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            members: Vec::with_capacity(max_size),
            max_size,
            seen_genomes: HashSet::new(),
        }
    }

    /// Merge evaluated individuals into the archive.
    ///
    /// Equal costs keep insertion order. Unevaluated individuals and genomes
    /// that are already archived are ignored.
    pub fn update<'a, I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = &'a Individual>,
    {
        for candidate in candidates {
            self.try_add(candidate);
        }
    }

    /// Attempt to add a copy of `candidate`; returns whether it was archived
    pub fn try_add(&mut self, candidate: &Individual) -> bool {
        if self.max_size == 0 {
            return false;
        }
        let Some(fitness) = candidate.fitness() else {
            return false;
        };
        if self.is_full() && self.worst_fitness().is_some_and(|worst| fitness >= worst) {
            return false;
        }
        if self.seen_genomes.contains(candidate.genome()) {
            return false;
        }

        let position = self
            .members
            .partition_point(|member| member.fitness().is_some_and(|f| f <= fitness));
        self.members.insert(position, candidate.clone());
        self.seen_genomes.insert(candidate.genome().clone());

        // Trim to max size
        while self.members.len() > self.max_size {
            if let Some(removed) = self.members.pop() {
                self.seen_genomes.remove(removed.genome());
            }
        }
        true
    }

    /// Archive in ascending cost order
    pub fn items(&self) -> &[Individual] {
        &self.members
    }

    pub fn best(&self) -> Option<&Individual> {
        self.members.first()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best().and_then(Individual::fitness)
    }

    pub fn worst_fitness(&self) -> Option<f64> {
        self.members.last().and_then(Individual::fitness)
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_size
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
