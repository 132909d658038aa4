use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::evaluation::{ConstraintModel, FitnessEvaluator};
use crate::engines::generation::{
    genome::Individual,
    hall_of_fame::HallOfFame,
    operators::{
        crossover_operator, mutation_operator, random_genome, selection_operator,
        CrossoverOperator, MutationOperator, SelectionOperator,
    },
    population::Population,
    progress::ProgressCallback,
    statistics::{GenerationStats, StatisticsTracker},
};
use crate::error::{Result, ShiftgaError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Where the engine is in its generational cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initialized,
    Evaluated,
    Selecting,
    Recombining,
    Mutating,
    Terminated,
}

/// Everything a finished (or cancelled) run produced
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub best: Individual,
    pub population: Population,
    pub hall_of_fame: Vec<Individual>,
    pub history: Vec<GenerationStats>,
    /// Generations stepped after the initial population
    pub generations: usize,
    pub cancelled: bool,
}

/// Generational GA with tournament selection and hall-of-fame elitism.
///
/// All randomness comes from one `StdRng` seeded from the configuration, so
/// two engines built from equal inputs produce identical runs.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    selection: Box<dyn SelectionOperator>,
    crossover: Box<dyn CrossoverOperator>,
    mutation: Box<dyn MutationOperator>,
    population: Population,
    hall_of_fame: HallOfFame,
    statistics: StatisticsTracker,
    generation: usize,
    state: EngineState,
    rng: StdRng,
    cancelled: Arc<AtomicBool>,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, model: ConstraintModel) -> Result<Self> {
        config.validate()?;

        let selection = selection_operator(&config.selection_method, config.tournament_size);
        let crossover = crossover_operator(&config.crossover_method);
        let mutation = mutation_operator(&config.mutation_method, config.mutation_prob);
        // the archive always keeps at least the best-ever individual
        let hall_of_fame = HallOfFame::new(config.elite_count.max(1));
        let rng = StdRng::seed_from_u64(config.random_seed);

        Ok(Self {
            evaluator: FitnessEvaluator::new(model),
            selection,
            crossover,
            mutation,
            population: Population::default(),
            hall_of_fame,
            statistics: StatisticsTracker::new(),
            generation: 0,
            state: EngineState::Initialized,
            rng,
            cancelled: Arc::new(AtomicBool::new(false)),
            config,
        })
    }

    pub fn with_selection(mut self, selection: Box<dyn SelectionOperator>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_crossover(mut self, crossover: Box<dyn CrossoverOperator>) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_mutation(mut self, mutation: Box<dyn MutationOperator>) -> Self {
        self.mutation = mutation;
        self
    }

    /// Setting the flag stops the run at the next generation boundary
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn statistics(&self) -> &StatisticsTracker {
        &self.statistics
    }

    pub fn best(&self) -> Option<&Individual> {
        self.hall_of_fame.best()
    }

    /// Build and score generation zero. Does nothing once the engine has started.
    pub fn initialize(&mut self) -> Result<()> {
        if self.state != EngineState::Initialized {
            return Ok(());
        }

        let genome_len = self.evaluator.model().genome_len();
        self.population = (0..self.config.population_size)
            .map(|_| Individual::new(random_genome(genome_len, &mut self.rng)))
            .collect();
        let evaluations = self.population.evaluate(&self.evaluator)?;
        self.state = EngineState::Evaluated;

        self.hall_of_fame.update(&self.population);
        let stats = self.statistics.record(0, &self.population, evaluations);
        log::debug!("Initial population: min {:.2}, avg {:.2}", stats.min, stats.mean);
        Ok(())
    }

    /// Advance one generation
    pub fn step(&mut self) -> Result<GenerationStats> {
        match self.state {
            EngineState::Initialized => self.initialize()?,
            EngineState::Terminated => {
                return Err(ShiftgaError::Configuration(
                    "cannot step a terminated evolution".to_string(),
                ))
            }
            _ => {}
        }
        let generation = self.generation + 1;
        let size = self.config.population_size;

        self.state = EngineState::Selecting;
        let mut offspring = self.selection.select(&self.population, size, &mut self.rng);

        self.state = EngineState::Recombining;
        for pair in offspring.chunks_exact_mut(2) {
            if self.rng.gen::<f64>() < self.config.crossover_prob {
                if let [first, second] = pair {
                    self.crossover
                        .crossover(first.genome_mut(), second.genome_mut(), &mut self.rng);
                }
            }
        }

        self.state = EngineState::Mutating;
        for child in offspring.iter_mut() {
            child.edit_genome(|genome| self.mutation.mutate(genome, &mut self.rng));
        }

        let mut offspring = Population::new(offspring);
        let evaluations = offspring.evaluate(&self.evaluator)?;
        self.state = EngineState::Evaluated;

        self.apply_elitism(&mut offspring);
        self.hall_of_fame.update(&offspring);
        self.population = offspring;
        self.generation = generation;

        let stats = self.statistics.record(generation, &self.population, evaluations);
        log::debug!(
            "Generation {}: {} evaluations, min {:.2}, avg {:.2}",
            generation,
            evaluations,
            stats.min,
            stats.mean
        );
        Ok(stats)
    }

    /// Swap the worst offspring for copies of the archived elites
    fn apply_elitism(&self, offspring: &mut Population) {
        let elites = self.hall_of_fame.items();
        let count = self.config.elite_count.min(elites.len());
        let worst = offspring.worst_indices(count);

        let slots = offspring.individuals_mut();
        for (index, elite) in worst.into_iter().zip(elites) {
            slots[index] = elite.clone();
        }
    }

    /// Run the remaining generations, or until cancelled
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<EvolutionOutcome> {
        log::info!(
            "Starting evolution: population {}, {} generations, genome length {}, seed {}",
            self.config.population_size,
            self.config.num_generations,
            self.evaluator.model().genome_len(),
            self.config.random_seed
        );
        self.initialize()?;

        let mut cancelled = false;
        while self.state != EngineState::Terminated
            && self.generation < self.config.num_generations
        {
            if self.cancelled.load(Ordering::Relaxed) {
                log::warn!("Evolution cancelled after generation {}", self.generation);
                cancelled = true;
                break;
            }

            callback.on_generation_start(self.generation + 1);
            let stats = self.step()?;
            let best_fitness = self.hall_of_fame.best_fitness().unwrap_or(stats.min);
            callback.on_generation_complete(&stats, best_fitness, self.hall_of_fame.len());
        }
        self.state = EngineState::Terminated;

        let outcome = self.outcome(cancelled)?;
        log::info!(
            "Evolution finished after {} generations, best fitness {:.2}",
            outcome.generations,
            outcome.best.fitness().unwrap_or(f64::NAN)
        );
        Ok(outcome)
    }

    fn outcome(&self, cancelled: bool) -> Result<EvolutionOutcome> {
        let best = self.hall_of_fame.best().cloned().ok_or_else(|| {
            ShiftgaError::Configuration("evolution produced no evaluated individual".to_string())
        })?;

        Ok(EvolutionOutcome {
            best,
            population: self.population.clone(),
            hall_of_fame: self.hall_of_fame.items().to_vec(),
            history: self.statistics.history().to_vec(),
            generations: self.generation,
            cancelled,
        })
    }
}
