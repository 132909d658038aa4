use super::traits::ConfigSection;
use crate::engines::evaluation::{ConstraintModel, Worker};
use crate::error::ShiftgaError;
use crate::types::SHIFTS_PER_WEEK;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerConfig {
    pub name: String,
    /// Morning, evening, night
    pub preferences: Vec<bool>,
}

/// Serializable form of a [`ConstraintModel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub shift_min: Vec<u32>,
    pub shift_max: Vec<u32>,
    pub max_shifts_per_week: u32,
    pub weeks: usize,
    pub hard_constraint_penalty: f64,
    pub workers: Vec<WorkerConfig>,
}

impl ProblemConfig {
    pub fn build_model(&self) -> Result<ConstraintModel, ShiftgaError> {
        let workers = self
            .workers
            .iter()
            .map(|w| Worker::new(w.name.clone(), &w.preferences))
            .collect::<Result<Vec<_>, _>>()?;

        ConstraintModel::new(
            workers,
            &self.shift_min,
            &self.shift_max,
            self.max_shifts_per_week,
            self.weeks,
            self.hard_constraint_penalty,
        )
    }

    pub fn genome_len(&self) -> usize {
        self.workers.len() * SHIFTS_PER_WEEK * self.weeks
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        let roster = [
            ("Avery", [true, false, false]),
            ("Blake", [true, true, false]),
            ("Casey", [false, false, true]),
            ("Devon", [false, true, false]),
            ("Emery", [false, false, true]),
            ("Finley", [true, true, true]),
            ("Gray", [false, true, true]),
            ("Harper", [true, true, true]),
        ];

        Self {
            shift_min: vec![2, 2, 1],
            shift_max: vec![3, 3, 2],
            max_shifts_per_week: 5,
            weeks: 1,
            hard_constraint_penalty: 10.0,
            workers: roster
                .iter()
                .map(|(name, preferences)| WorkerConfig {
                    name: name.to_string(),
                    preferences: preferences.to_vec(),
                })
                .collect(),
        }
    }
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), ShiftgaError> {
        self.build_model().map(|_| ())
    }
}
