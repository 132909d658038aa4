use crate::error::{Result, ShiftgaError};
use crate::types::{ShiftSlot, DAYS_PER_WEEK, SHIFTS_PER_DAY, SHIFTS_PER_WEEK};

/// A worker and the daily slots they are happy to take
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub name: String,
    pub preferences: [bool; SHIFTS_PER_DAY],
}

impl Worker {
    pub fn new(name: impl Into<String>, preferences: &[bool]) -> Result<Self> {
        let name = name.into();
        let preferences: [bool; SHIFTS_PER_DAY] = preferences.try_into().map_err(|_| {
            ShiftgaError::InvalidModel(format!(
                "worker `{}` has {} shift preferences, expected {}",
                name,
                preferences.len(),
                SHIFTS_PER_DAY
            ))
        })?;
        Ok(Self { name, preferences })
    }

    pub fn prefers(&self, slot: ShiftSlot) -> bool {
        self.preferences[slot.index()]
    }
}

/// Static description of a rostering problem.
///
/// Built once and shared read-only by every fitness evaluation. The genome of
/// a candidate roster is the concatenation of one block per worker, in the
/// order of [`ConstraintModel::workers`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintModel {
    workers: Vec<Worker>,
    shift_min: [u32; SHIFTS_PER_DAY],
    shift_max: [u32; SHIFTS_PER_DAY],
    max_shifts_per_week: u32,
    weeks: usize,
    hard_constraint_penalty: f64,
}

impl ConstraintModel {
    pub fn new(
        workers: Vec<Worker>,
        shift_min: &[u32],
        shift_max: &[u32],
        max_shifts_per_week: u32,
        weeks: usize,
        hard_constraint_penalty: f64,
    ) -> Result<Self> {
        if workers.is_empty() {
            return Err(ShiftgaError::InvalidModel(
                "worker list must not be empty".to_string(),
            ));
        }
        let shift_min = slot_bounds("shift_min", shift_min)?;
        let shift_max = slot_bounds("shift_max", shift_max)?;

        for slot in ShiftSlot::ALL {
            let (lo, hi) = (shift_min[slot.index()], shift_max[slot.index()]);
            if lo > hi {
                return Err(ShiftgaError::InvalidModel(format!(
                    "{} shift has min {} above max {}",
                    slot, lo, hi
                )));
            }
        }
        if weeks == 0 {
            return Err(ShiftgaError::invalid("weeks", weeks, "must be at least 1"));
        }
        if !hard_constraint_penalty.is_finite() || hard_constraint_penalty < 0.0 {
            return Err(ShiftgaError::invalid(
                "hard_constraint_penalty",
                hard_constraint_penalty,
                "must be a finite, non-negative number",
            ));
        }

        Ok(Self {
            workers,
            shift_min,
            shift_max,
            max_shifts_per_week,
            weeks,
            hard_constraint_penalty,
        })
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn shift_min(&self, slot: ShiftSlot) -> u32 {
        self.shift_min[slot.index()]
    }

    pub fn shift_max(&self, slot: ShiftSlot) -> u32 {
        self.shift_max[slot.index()]
    }

    pub fn max_shifts_per_week(&self) -> u32 {
        self.max_shifts_per_week
    }

    pub fn weeks(&self) -> usize {
        self.weeks
    }

    pub fn hard_constraint_penalty(&self) -> f64 {
        self.hard_constraint_penalty
    }

    pub fn num_days(&self) -> usize {
        DAYS_PER_WEEK * self.weeks
    }

    /// Length of one worker's block in the genome
    pub fn shifts_per_worker(&self) -> usize {
        SHIFTS_PER_WEEK * self.weeks
    }

    /// Total genome length `L`
    pub fn genome_len(&self) -> usize {
        self.worker_count() * self.shifts_per_worker()
    }
}

fn slot_bounds(field: &'static str, values: &[u32]) -> Result<[u32; SHIFTS_PER_DAY]> {
    values.try_into().map_err(|_| {
        ShiftgaError::InvalidModel(format!(
            "`{}` has {} entries, expected one per daily shift ({})",
            field,
            values.len(),
            SHIFTS_PER_DAY
        ))
    })
}
