use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::genome::Individual;
use crate::error::Result;
use std::cmp::Ordering;

/// Ordered, fixed-size set of individuals making up one generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Scores every individual without a cached fitness.
    /// Returns how many evaluations were actually performed.
    pub fn evaluate(&mut self, evaluator: &FitnessEvaluator) -> Result<usize> {
        let mut evaluations = 0;
        for individual in self.individuals.iter_mut().filter(|ind| !ind.is_evaluated()) {
            individual.evaluate(evaluator)?;
            evaluations += 1;
        }
        Ok(evaluations)
    }

    /// Evaluated fitness values in population order
    pub fn fitness_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.individuals.iter().filter_map(Individual::fitness)
    }

    pub fn min_fitness(&self) -> Option<f64> {
        self.fitness_values().min_by(f64::total_cmp)
    }

    pub fn max_fitness(&self) -> Option<f64> {
        self.fitness_values().max_by(f64::total_cmp)
    }

    pub fn mean_fitness(&self) -> Option<f64> {
        let (sum, count) = self
            .fitness_values()
            .fold((0.0, 0usize), |(sum, count), f| (sum + f, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Lowest-cost individual; the first one wins a tie
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|ind| ind.is_evaluated())
            .reduce(|best, ind| if by_fitness(ind, best) == Ordering::Less { ind } else { best })
    }

    /// Positions of the `count` highest-cost individuals, worst first.
    /// Unevaluated individuals rank as worst.
    pub fn worst_indices(&self, count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.individuals.len()).collect();
        order.sort_by(|&a, &b| by_fitness(&self.individuals[b], &self.individuals[a]));
        order.truncate(count);
        order
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Ascending cost; missing fitness sorts last
pub(crate) fn by_fitness(a: &Individual, b: &Individual) -> Ordering {
    match (a.fitness(), b.fitness()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
