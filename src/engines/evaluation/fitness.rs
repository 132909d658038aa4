use crate::engines::evaluation::constraint_model::ConstraintModel;
use crate::error::{Result, ShiftgaError};
use crate::types::{ShiftSlot, SHIFTS_PER_WEEK};
use serde::{Deserialize, Serialize};
use std::slice::Chunks;

/// Violation counts of one roster, per constraint category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationBreakdown {
    pub consecutive: usize,
    pub weekly_cap: usize,
    pub staffing: usize,
    pub preference: usize,
}

impl ViolationBreakdown {
    /// Sum of the three hard categories
    pub fn hard(&self) -> usize {
        self.consecutive + self.weekly_cap + self.staffing
    }

    pub fn soft(&self) -> usize {
        self.preference
    }
}

/// Scores rosters against a [`ConstraintModel`].
///
/// Evaluation only reads the model and the genome, so the same evaluator can
/// score any number of individuals in any order with identical results.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    model: ConstraintModel,
}

impl FitnessEvaluator {
    pub fn new(model: ConstraintModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    /// Cost of a roster; lower is better
    pub fn evaluate(&self, genome: &[bool]) -> Result<f64> {
        let breakdown = self.violations(genome)?;
        Ok(self.cost_of(&breakdown))
    }

    /// All hard categories share one penalty weight; soft violations count once each.
    pub fn cost_of(&self, breakdown: &ViolationBreakdown) -> f64 {
        self.model.hard_constraint_penalty() * breakdown.hard() as f64 + breakdown.soft() as f64
    }

    pub fn violations(&self, genome: &[bool]) -> Result<ViolationBreakdown> {
        self.check_len(genome)?;
        Ok(ViolationBreakdown {
            consecutive: self.consecutive_violations(genome),
            weekly_cap: self.weekly_cap_violations(genome),
            staffing: self.staffing_violations(genome),
            preference: self.preference_violations(genome),
        })
    }

    /// One block per worker, in worker order
    pub fn worker_blocks<'a>(&self, genome: &'a [bool]) -> Result<Chunks<'a, bool>> {
        self.check_len(genome)?;
        Ok(self.blocks(genome))
    }

    /// Shifts worked by each worker in each week
    pub fn weekly_totals(&self, genome: &[bool]) -> Result<Vec<Vec<usize>>> {
        self.check_len(genome)?;
        Ok(self.weekly_totals_unchecked(genome))
    }

    /// Number of workers rostered on each position of the period
    pub fn headcounts(&self, genome: &[bool]) -> Result<Vec<usize>> {
        self.check_len(genome)?;
        Ok(self.headcounts_unchecked(genome))
    }

    fn check_len(&self, genome: &[bool]) -> Result<()> {
        let expected = self.model.genome_len();
        if genome.len() != expected {
            return Err(ShiftgaError::GenomeLength {
                expected,
                actual: genome.len(),
            });
        }
        Ok(())
    }

    fn blocks<'a>(&self, genome: &'a [bool]) -> Chunks<'a, bool> {
        genome.chunks(self.model.shifts_per_worker())
    }

    fn consecutive_violations(&self, genome: &[bool]) -> usize {
        self.blocks(genome)
            .map(|block| block.windows(2).filter(|pair| pair[0] && pair[1]).count())
            .sum()
    }

    fn weekly_totals_unchecked(&self, genome: &[bool]) -> Vec<Vec<usize>> {
        self.blocks(genome)
            .map(|block| {
                block
                    .chunks(SHIFTS_PER_WEEK)
                    .map(|week| week.iter().filter(|&&on| on).count())
                    .collect()
            })
            .collect()
    }

    fn weekly_cap_violations(&self, genome: &[bool]) -> usize {
        let cap = self.model.max_shifts_per_week() as usize;
        self.weekly_totals_unchecked(genome)
            .iter()
            .flatten()
            .map(|&worked| worked.saturating_sub(cap))
            .sum()
    }

    fn headcounts_unchecked(&self, genome: &[bool]) -> Vec<usize> {
        let mut counts = vec![0; self.model.shifts_per_worker()];
        for block in self.blocks(genome) {
            for (count, &on) in counts.iter_mut().zip(block) {
                if on {
                    *count += 1;
                }
            }
        }
        counts
    }

    fn staffing_violations(&self, genome: &[bool]) -> usize {
        self.headcounts_unchecked(genome)
            .iter()
            .enumerate()
            .map(|(position, &staffed)| {
                let slot = ShiftSlot::from_index(position);
                let min = self.model.shift_min(slot) as usize;
                let max = self.model.shift_max(slot) as usize;
                if staffed > max {
                    staffed - max
                } else {
                    min.saturating_sub(staffed)
                }
            })
            .sum()
    }

    fn preference_violations(&self, genome: &[bool]) -> usize {
        self.model
            .workers()
            .iter()
            .zip(self.blocks(genome))
            .map(|(worker, block)| {
                block
                    .iter()
                    .enumerate()
                    .filter(|&(position, &on)| {
                        on && !worker.prefers(ShiftSlot::from_index(position))
                    })
                    .count()
            })
            .sum()
    }
}
