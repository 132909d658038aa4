use crate::config::evolution::{CrossoverMethod, MutationMethod, SelectionMethod};
use crate::engines::generation::genome::{Genome, Individual};
use crate::engines::generation::population::{by_fitness, Population};
use rand::{Rng, RngCore};
use std::cmp::Ordering;

/// Picks the parents of the next generation
pub trait SelectionOperator: Send {
    /// Returns `count` independent copies drawn from `population`.
    fn select(
        &self,
        population: &Population,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Individual>;
}

/// Recombines two parent genomes in place into two children
pub trait CrossoverOperator: Send {
    fn crossover(&self, first: &mut Genome, second: &mut Genome, rng: &mut dyn RngCore);
}

/// Perturbs a genome in place; returns whether any gene changed
pub trait MutationOperator: Send {
    fn mutate(&self, genome: &mut Genome, rng: &mut dyn RngCore) -> bool;
}

/// Tournament selection: pick best of K random candidates
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    pub size: usize,
}

impl TournamentSelection {
    fn pick<'a>(&self, candidates: &'a [Individual], rng: &mut dyn RngCore) -> &'a Individual {
        let mut best = &candidates[rng.gen_range(0..candidates.len())];
        for _ in 1..self.size {
            let challenger = &candidates[rng.gen_range(0..candidates.len())];
            // strict: ties stay with the earlier draw
            if by_fitness(challenger, best) == Ordering::Less {
                best = challenger;
            }
        }
        best
    }
}

impl SelectionOperator for TournamentSelection {
    fn select(
        &self,
        population: &Population,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Individual> {
        let candidates = population.individuals();
        if candidates.is_empty() {
            return Vec::new();
        }
        (0..count).map(|_| self.pick(candidates, rng).clone()).collect()
    }
}

/// Two-point crossover: swap the segment between two distinct cut points
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl CrossoverOperator for TwoPointCrossover {
    fn crossover(&self, first: &mut Genome, second: &mut Genome, rng: &mut dyn RngCore) {
        let len = first.len().min(second.len());
        if len < 2 {
            return;
        }

        // second cut may land on `len` so the final gene can move
        let start = rng.gen_range(1..=len);
        let mut end = rng.gen_range(1..=len - 1);
        if end >= start {
            end += 1;
        }
        let (start, end) = if start < end { (start, end) } else { (end, start) };

        first[start..end].swap_with_slice(&mut second[start..end]);
    }
}

/// Single-point crossover: swap genome tails
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl CrossoverOperator for OnePointCrossover {
    fn crossover(&self, first: &mut Genome, second: &mut Genome, rng: &mut dyn RngCore) {
        let len = first.len().min(second.len());
        if len <= 1 {
            return;
        }

        let point = rng.gen_range(1..len);
        first[point..len].swap_with_slice(&mut second[point..len]);
    }
}

/// Uniform crossover: swap each gene independently
#[derive(Debug, Clone, Copy)]
pub struct UniformCrossover {
    pub swap_prob: f64,
}

impl CrossoverOperator for UniformCrossover {
    fn crossover(&self, first: &mut Genome, second: &mut Genome, rng: &mut dyn RngCore) {
        for (a, b) in first.iter_mut().zip(second.iter_mut()) {
            if rng.gen::<f64>() < self.swap_prob {
                std::mem::swap(a, b);
            }
        }
    }
}

/// Bit-flip mutation: invert each gene with a fixed probability
#[derive(Debug, Clone, Copy)]
pub struct FlipBitMutation {
    pub probability: f64,
}

impl MutationOperator for FlipBitMutation {
    fn mutate(&self, genome: &mut Genome, rng: &mut dyn RngCore) -> bool {
        let mut changed = false;
        for gene in genome.iter_mut() {
            if rng.gen::<f64>() < self.probability {
                *gene = !*gene;
                changed = true;
            }
        }
        changed
    }
}

/// Generate random genome
pub fn random_genome(length: usize, rng: &mut dyn RngCore) -> Genome {
    (0..length).map(|_| rng.gen::<bool>()).collect()
}

pub fn selection_operator(
    method: &SelectionMethod,
    tournament_size: usize,
) -> Box<dyn SelectionOperator> {
    match method {
        SelectionMethod::Tournament => Box::new(TournamentSelection {
            size: tournament_size,
        }),
    }
}

pub fn crossover_operator(method: &CrossoverMethod) -> Box<dyn CrossoverOperator> {
    match *method {
        CrossoverMethod::TwoPoint => Box::new(TwoPointCrossover),
        CrossoverMethod::OnePoint => Box::new(OnePointCrossover),
        CrossoverMethod::Uniform { swap_prob } => Box::new(UniformCrossover { swap_prob }),
    }
}

pub fn mutation_operator(method: &MutationMethod, mutation_prob: f64) -> Box<dyn MutationOperator> {
    match method {
        MutationMethod::FlipBit => Box::new(FlipBitMutation {
            probability: mutation_prob,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ones_and_zeros(len: usize) -> (Genome, Genome) {
        (vec![true; len], vec![false; len])
    }

    #[test]
    fn test_two_point_swaps_one_segment() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (mut a, mut b) = ones_and_zeros(12);
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng);

            // children stay complementary
            assert!(a.iter().zip(&b).all(|(x, y)| x != y));
            // first gene never moves; exactly one contiguous run was swapped
            assert!(a[0]);
            let swapped: Vec<usize> = (0..12).filter(|&i| !a[i]).collect();
            assert!(!swapped.is_empty());
            assert_eq!(swapped.last().unwrap() - swapped[0] + 1, swapped.len());
        }
    }

    #[test]
    fn test_two_point_reaches_final_gene() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tail_swaps = 0;
        for _ in 0..1000 {
            let (mut a, mut b) = ones_and_zeros(12);
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng);
            if !a[11] {
                tail_swaps += 1;
            }
        }
        assert!(tail_swaps > 0);

        let children: std::collections::HashSet<Genome> = (0..200)
            .map(|_| {
                let (mut a, mut b) = ones_and_zeros(3);
                TwoPointCrossover.crossover(&mut a, &mut b, &mut rng);
                a
            })
            .collect();
        assert!(children.len() > 1);
        assert!(children.iter().all(|child| child[0]));
    }

    #[test]
    fn test_two_point_short_genomes() {
        let mut rng = StdRng::seed_from_u64(4);
        let (mut a, mut b) = ones_and_zeros(1);
        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng);
        assert_eq!((a, b), (vec![true], vec![false]));

        let (mut a, mut b) = ones_and_zeros(2);
        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng);
        assert_eq!((a, b), (vec![true, false], vec![false, true]));
    }

    #[test]
    fn test_one_point_swaps_tail() {
        let mut rng = StdRng::seed_from_u64(3);
        let (mut a, mut b) = ones_and_zeros(10);
        OnePointCrossover.crossover(&mut a, &mut b, &mut rng);
        let point = a.iter().position(|&g| !g).unwrap();
        assert!(point >= 1);
        assert!(a[point..].iter().all(|&g| !g));
        assert!(b[point..].iter().all(|&g| g));
    }

    #[test]
    fn test_uniform_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let (mut a, mut b) = ones_and_zeros(16);
        UniformCrossover { swap_prob: 0.0 }.crossover(&mut a, &mut b, &mut rng);
        assert!(a.iter().all(|&g| g));

        UniformCrossover { swap_prob: 1.0 }.crossover(&mut a, &mut b, &mut rng);
        assert!(a.iter().all(|&g| !g));
        assert!(b.iter().all(|&g| g));
    }

    #[test]
    fn test_flip_bit_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut genome = vec![true, false, true, false];

        assert!(!FlipBitMutation { probability: 0.0 }.mutate(&mut genome, &mut rng));
        assert_eq!(genome, vec![true, false, true, false]);

        assert!(FlipBitMutation { probability: 1.0 }.mutate(&mut genome, &mut rng));
        assert_eq!(genome, vec![false, true, false, true]);
    }

    #[test]
    fn test_tournament_prefers_lower_cost() {
        use crate::engines::evaluation::{ConstraintModel, FitnessEvaluator, Worker};

        let workers = vec![Worker::new("w", &[false, false, false]).unwrap()];
        let model = ConstraintModel::new(workers, &[0, 0, 0], &[1, 1, 1], 21, 1, 0.0).unwrap();
        let eval = FitnessEvaluator::new(model);
        let mut pop: Population = (0..5)
            .map(|n| {
                let mut genome = vec![false; 21];
                genome.iter_mut().take(n).for_each(|g| *g = true);
                Individual::new(genome)
            })
            .collect();
        pop.evaluate(&eval).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let whole = TournamentSelection { size: 64 }.select(&pop, 10, &mut rng);
        assert_eq!(whole.len(), 10);
        assert!(whole.iter().all(|ind| ind.fitness() == Some(0.0)));

        let single = TournamentSelection { size: 1 }.select(&pop, 50, &mut rng);
        assert!(single.iter().any(|ind| ind.fitness() != Some(0.0)));
    }

    #[test]
    fn test_random_genome_is_seeded() {
        let a = random_genome(64, &mut StdRng::seed_from_u64(1));
        let b = random_genome(64, &mut StdRng::seed_from_u64(1));
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
    }
}
