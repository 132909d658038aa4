use super::statistics::GenerationStats;

/// Observer of a running evolution, notified at generation boundaries
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(
        &mut self,
        stats: &GenerationStats,
        best_fitness: f64,
        hall_of_fame_size: usize,
    );
}

/// Writes progress through the `log` facade
pub struct LogProgressCallback {
    every: usize,
}

impl LogProgressCallback {
    /// Logs every `every`-th generation at info level; the rest at debug
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl Default for LogProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation);
    }

    fn on_generation_complete(
        &mut self,
        stats: &GenerationStats,
        best_fitness: f64,
        hof_size: usize,
    ) {
        if stats.generation % self.every == 0 {
            log::info!(
                "gen {:>4}  evals {:>4}  min {:>8.2}  avg {:>8.2}  best {:>8.2}  hof {}",
                stats.generation,
                stats.evaluations,
                stats.min,
                stats.mean,
                best_fitness,
                hof_size
            );
        } else {
            log::debug!(
                "gen {:>4}  evals {:>4}  min {:>8.2}  avg {:>8.2}  best {:>8.2}  hof {}",
                stats.generation,
                stats.evaluations,
                stats.min,
                stats.mean,
                best_fitness,
                hof_size
            );
        }
    }
}

/// Ignores all progress notifications
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        _stats: &GenerationStats,
        _best_fitness: f64,
        _hof_size: usize,
    ) {
    }
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(
        &mut self,
        stats: &GenerationStats,
        best_fitness: f64,
        hof_size: usize,
    ) {
        (**self).on_generation_complete(stats, best_fitness, hof_size);
    }
}
