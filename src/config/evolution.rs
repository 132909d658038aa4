use super::problem::ProblemConfig;
use super::traits::ConfigSection;
use crate::error::ShiftgaError;
use serde::{Deserialize, Serialize};

/// Search parameters of the evolutionary engine.
///
/// The numeric fields have no serde defaults: a configuration file has to
/// spell every one of them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub crossover_prob: f64,
    pub mutation_prob: f64,
    pub elite_count: usize,
    pub tournament_size: usize,
    pub random_seed: u64,
    #[serde(default)]
    pub selection_method: SelectionMethod,
    #[serde(default)]
    pub mutation_method: MutationMethod,
    #[serde(default)]
    pub crossover_method: CrossoverMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    #[default]
    Tournament,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverMethod {
    #[default]
    TwoPoint,
    OnePoint,
    Uniform { swap_prob: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationMethod {
    #[default]
    FlipBit,
}

impl EvolutionConfig {
    /// Per-gene flip probability giving about one flip per genome
    pub fn recommended_mutation_prob(genome_len: usize) -> f64 {
        1.0 / genome_len.max(1) as f64
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            num_generations: 200,
            crossover_prob: 0.9,
            mutation_prob: Self::recommended_mutation_prob(ProblemConfig::default().genome_len()),
            elite_count: 30,
            tournament_size: 2,
            random_seed: 42,
            selection_method: SelectionMethod::Tournament,
            mutation_method: MutationMethod::FlipBit,
            crossover_method: CrossoverMethod::TwoPoint,
        }
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ShiftgaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ShiftgaError::invalid(field, value, "must be between 0 and 1"))
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), ShiftgaError> {
        if self.population_size == 0 {
            return Err(ShiftgaError::invalid(
                "population_size",
                self.population_size,
                "must be positive",
            ));
        }
        if self.tournament_size == 0 {
            return Err(ShiftgaError::invalid(
                "tournament_size",
                self.tournament_size,
                "must be at least 1",
            ));
        }
        if self.elite_count > self.population_size {
            return Err(ShiftgaError::invalid(
                "elite_count",
                self.elite_count,
                format!("must not exceed population_size ({})", self.population_size),
            ));
        }
        check_probability("crossover_prob", self.crossover_prob)?;
        check_probability("mutation_prob", self.mutation_prob)?;
        if let CrossoverMethod::Uniform { swap_prob } = self.crossover_method {
            check_probability("crossover_method.swap_prob", swap_prob)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mutation_prob, 1.0 / 168.0);
    }

    #[test]
    fn test_rejections_name_the_field() {
        let cases: [(&str, fn(&mut EvolutionConfig)); 7] = [
            ("population_size", |c: &mut EvolutionConfig| c.population_size = 0),
            ("tournament_size", |c: &mut EvolutionConfig| c.tournament_size = 0),
            ("elite_count", |c: &mut EvolutionConfig| c.elite_count = c.population_size + 1),
            ("crossover_prob", |c: &mut EvolutionConfig| c.crossover_prob = 1.5),
            ("mutation_prob", |c: &mut EvolutionConfig| c.mutation_prob = -0.1),
            ("mutation_prob", |c: &mut EvolutionConfig| c.mutation_prob = f64::NAN),
            ("crossover_method.swap_prob", |c: &mut EvolutionConfig| {
                c.crossover_method = CrossoverMethod::Uniform { swap_prob: 2.0 }
            }),
        ];

        for (field, apply) in cases {
            let mut config = EvolutionConfig::default();
            apply(&mut config);
            match config.validate() {
                Err(ShiftgaError::InvalidParameter { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected {} to be rejected, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_boundary_values_accepted() {
        let config = EvolutionConfig {
            population_size: 1,
            num_generations: 0,
            crossover_prob: 0.0,
            mutation_prob: 1.0,
            elite_count: 1,
            tournament_size: 1,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
