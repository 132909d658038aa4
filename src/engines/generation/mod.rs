pub mod genome;
pub mod population;
pub mod operators;
pub mod hall_of_fame;
pub mod statistics;
pub mod progress;
pub mod evolution_engine;

pub use genome::{Genome, Individual};
pub use population::Population;
pub use hall_of_fame::HallOfFame;
pub use statistics::{GenerationStats, StatisticsTracker};
pub use evolution_engine::{EngineState, EvolutionEngine, EvolutionOutcome};
pub use progress::{LogProgressCallback, NoProgress, ProgressCallback};
pub use operators::{
    CrossoverOperator, FlipBitMutation, MutationOperator, OnePointCrossover, SelectionOperator,
    TournamentSelection, TwoPointCrossover, UniformCrossover,
};
