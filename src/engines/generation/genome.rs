use crate::engines::evaluation::FitnessEvaluator;
use crate::error::Result;

/// Binary roster encoding.
///
/// One gene per (worker, week, day, shift) in worker-major order; `true` means
/// the worker is rostered on that shift. Any bit pattern of the right length is
/// a valid roster, so crossover and mutation never need a repair step.
pub type Genome = Vec<bool>;

/// A genome together with its cached cost
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    fitness: Option<f64>,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Mutable access; always drops the cached fitness.
    pub fn genome_mut(&mut self) -> &mut Genome {
        self.fitness = None;
        &mut self.genome
    }

    /// Applies `edit` and drops the cached fitness only if it reports a change.
    pub fn edit_genome<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Genome) -> bool,
    {
        if edit(&mut self.genome) {
            self.fitness = None;
        }
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Returns the cached cost, computing it first when missing.
    pub fn evaluate(&mut self, evaluator: &FitnessEvaluator) -> Result<f64> {
        match self.fitness {
            Some(fitness) => Ok(fitness),
            None => {
                let fitness = evaluator.evaluate(&self.genome)?;
                self.fitness = Some(fitness);
                Ok(fitness)
            }
        }
    }
}
