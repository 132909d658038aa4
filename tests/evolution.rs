use rand::RngCore;
use shiftga::config::{EvolutionConfig, ProblemConfig};
use shiftga::engines::evaluation::ConstraintModel;
use shiftga::engines::generation::{
    EngineState, EvolutionEngine, GenerationStats, Genome, MutationOperator, NoProgress,
    ProgressCallback,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

fn model() -> ConstraintModel {
    ProblemConfig::default().build_model().unwrap()
}

fn config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size: 40,
        num_generations: 15,
        elite_count: 4,
        random_seed: seed,
        ..EvolutionConfig::default()
    }
}

/// Records the archive's best fitness after every generation
#[derive(Default)]
struct BestTrace {
    starts: Vec<usize>,
    best: Vec<f64>,
}

impl ProgressCallback for BestTrace {
    fn on_generation_start(&mut self, generation: usize) {
        self.starts.push(generation);
    }

    fn on_generation_complete(
        &mut self,
        _stats: &GenerationStats,
        best_fitness: f64,
        _hof_size: usize,
    ) {
        self.best.push(best_fitness);
    }
}

#[test]
fn test_same_seed_same_run() {
    let mut first = EvolutionEngine::new(config(7), model()).unwrap();
    let mut second = EvolutionEngine::new(config(7), model()).unwrap();

    let a = first.run(NoProgress).unwrap();
    let b = second.run(NoProgress).unwrap();

    assert_eq!(a.history, b.history);
    assert_eq!(a.best.genome(), b.best.genome());
    assert_eq!(a.best.fitness(), b.best.fitness());
}

#[test]
fn test_run_shape_and_monotone_archive() {
    let mut engine = EvolutionEngine::new(config(11), model()).unwrap();
    let mut trace = BestTrace::default();
    let outcome = engine.run(&mut trace).unwrap();

    assert_eq!(outcome.generations, 15);
    assert!(!outcome.cancelled);
    assert_eq!(outcome.history.len(), 16);
    assert_eq!(outcome.population.len(), 40);
    assert_eq!(engine.state(), EngineState::Terminated);
    assert_eq!(trace.starts, (1..=15).collect::<Vec<_>>());

    for (index, stats) in outcome.history.iter().enumerate() {
        assert_eq!(stats.generation, index);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }
    assert_eq!(outcome.history[0].evaluations, 40);

    assert!(trace.best.windows(2).all(|w| w[1] <= w[0]));

    let archive: Vec<f64> = outcome.hall_of_fame.iter().filter_map(|i| i.fitness()).collect();
    assert_eq!(archive.len(), 4);
    assert!(archive.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(outcome.best.fitness(), Some(archive[0]));

    let best_seen = outcome.history.iter().map(|s| s.min).fold(f64::INFINITY, f64::min);
    assert_eq!(outcome.best.fitness(), Some(best_seen));
}

#[test]
fn test_population_size_holds_after_every_step() {
    // odd size leaves one unpaired parent; every slot is open to elites
    let config = EvolutionConfig {
        population_size: 21,
        num_generations: 12,
        elite_count: 21,
        crossover_prob: 1.0,
        ..config(17)
    };
    let mut engine = EvolutionEngine::new(config, model()).unwrap();
    engine.initialize().unwrap();
    assert_eq!(engine.population().len(), 21);

    let mut previous_best = engine.hall_of_fame().best_fitness().unwrap();
    for generation in 1..=12 {
        let stats = engine.step().unwrap();
        assert_eq!(stats.generation, generation);
        assert_eq!(engine.population().len(), 21);
        assert!(engine.population().iter().all(|ind| ind.is_evaluated()));

        let best = engine.hall_of_fame().best_fitness().unwrap();
        assert!(best <= previous_best);
        previous_best = best;
    }
}

#[test]
fn test_search_improves_on_random_start() {
    let config = EvolutionConfig {
        population_size: 60,
        num_generations: 40,
        elite_count: 6,
        random_seed: 42,
        ..EvolutionConfig::default()
    };
    let mut engine = EvolutionEngine::new(config, model()).unwrap();
    let outcome = engine.run(NoProgress).unwrap();

    let initial_best = outcome.history[0].min;
    assert!(outcome.best.fitness().unwrap() < initial_best);
}

#[test]
fn test_without_variation_no_new_genomes_appear() {
    let config = EvolutionConfig {
        crossover_prob: 0.0,
        mutation_prob: 0.0,
        elite_count: 0,
        ..config(3)
    };
    let mut engine = EvolutionEngine::new(config, model()).unwrap();
    engine.initialize().unwrap();
    let initial: HashSet<Genome> = engine
        .population()
        .iter()
        .map(|i| i.genome().clone())
        .collect();

    let outcome = engine.run(NoProgress).unwrap();

    assert!(outcome.population.iter().all(|i| initial.contains(i.genome())));
    // every offspring is an unchanged copy with its fitness still cached
    assert!(outcome.history[1..].iter().all(|s| s.evaluations == 0));
}

struct CancelAfter {
    generation: usize,
    flag: Arc<AtomicBool>,
}

impl ProgressCallback for CancelAfter {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        stats: &GenerationStats,
        _best_fitness: f64,
        _hof_size: usize,
    ) {
        if stats.generation == self.generation {
            self.flag.store(true, Ordering::Relaxed);
        }
    }
}

#[test]
fn test_cancellation_stops_at_generation_boundary() {
    let mut engine = EvolutionEngine::new(config(5), model()).unwrap();
    let callback = CancelAfter {
        generation: 3,
        flag: engine.cancel_handle(),
    };

    let outcome = engine.run(callback).unwrap();

    assert!(outcome.cancelled);
    assert_eq!(outcome.generations, 3);
    assert_eq!(outcome.history.len(), 4);
    assert!(outcome.best.is_evaluated());
    assert_eq!(engine.state(), EngineState::Terminated);
}

#[test]
fn test_zero_generations_returns_initial_best() {
    let config = EvolutionConfig {
        num_generations: 0,
        ..config(1)
    };
    let mut engine = EvolutionEngine::new(config, model()).unwrap();
    let outcome = engine.run(NoProgress).unwrap();

    assert_eq!(outcome.generations, 0);
    assert_eq!(outcome.history.len(), 1);
    assert_eq!(outcome.best.fitness(), Some(outcome.history[0].min));
}

/// Counts calls and never touches the genome
struct CountingMutation {
    calls: Arc<AtomicUsize>,
}

impl MutationOperator for CountingMutation {
    fn mutate(&self, _genome: &mut Genome, _rng: &mut dyn RngCore) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        false
    }
}

#[test]
fn test_custom_mutation_operator_is_used() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = EvolutionConfig {
        crossover_prob: 0.0,
        ..config(8)
    };
    let mut engine = EvolutionEngine::new(config, model())
        .unwrap()
        .with_mutation(Box::new(CountingMutation {
            calls: Arc::clone(&calls),
        }));

    let outcome = engine.run(NoProgress).unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 40 * 15);
    assert!(outcome.history[1..].iter().all(|s| s.evaluations == 0));
}
