use crate::engines::generation::population::Population;
use serde::{Deserialize, Serialize};

/// Aggregate cost of one generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    /// Individuals that had to be scored this generation
    pub evaluations: usize,
}

/// Append-only log of per-generation statistics
#[derive(Debug, Clone, Default)]
pub struct StatisticsTracker {
    history: Vec<GenerationStats>,
}

impl StatisticsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        generation: usize,
        population: &Population,
        evaluations: usize,
    ) -> GenerationStats {
        let stats = GenerationStats {
            generation,
            min: population.min_fitness().unwrap_or(f64::NAN),
            mean: population.mean_fitness().unwrap_or(f64::NAN),
            max: population.max_fitness().unwrap_or(f64::NAN),
            evaluations,
        };
        self.history.push(stats);
        stats
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.history.last()
    }

    pub fn min_series(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.min).collect()
    }

    pub fn mean_series(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.mean).collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
