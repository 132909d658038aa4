pub mod traits;
pub mod evolution;
pub mod problem;
pub mod manager;

pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use evolution::{CrossoverMethod, EvolutionConfig, MutationMethod, SelectionMethod};
pub use problem::{ProblemConfig, WorkerConfig};
pub use traits::ConfigSection;
