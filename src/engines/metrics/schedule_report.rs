use crate::engines::evaluation::{FitnessEvaluator, ViolationBreakdown};
use crate::error::Result;
use crate::types::{SlotPosition, Weekday, SHIFTS_PER_DAY};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub week: usize,
    pub weekday: Weekday,
    /// Morning, evening, night
    pub shifts: [bool; SHIFTS_PER_DAY],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerSchedule {
    pub name: String,
    pub days: Vec<DayRow>,
    pub weekly_totals: Vec<usize>,
}

/// Human-readable view of one roster and what it violates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub cost: f64,
    pub workers: Vec<WorkerSchedule>,
    pub headcounts: Vec<usize>,
    pub violations: ViolationBreakdown,
}

impl ScheduleReport {
    pub fn build(evaluator: &FitnessEvaluator, genome: &[bool]) -> Result<Self> {
        let violations = evaluator.violations(genome)?;
        let weekly_totals = evaluator.weekly_totals(genome)?;

        let workers = evaluator
            .model()
            .workers()
            .iter()
            .zip(evaluator.worker_blocks(genome)?)
            .zip(weekly_totals)
            .map(|((worker, block), weekly_totals)| WorkerSchedule {
                name: worker.name.clone(),
                days: block
                    .chunks(SHIFTS_PER_DAY)
                    .enumerate()
                    .map(|(day_index, day)| {
                        let position = SlotPosition::decode(day_index * SHIFTS_PER_DAY);
                        DayRow {
                            week: position.week,
                            weekday: position.weekday(),
                            shifts: [day[0], day[1], day[2]],
                        }
                    })
                    .collect(),
                weekly_totals,
            })
            .collect();

        Ok(Self {
            cost: evaluator.cost_of(&violations),
            workers,
            headcounts: evaluator.headcounts(genome)?,
            violations,
        })
    }
}

fn flag(on: bool) -> char {
    if on {
        '1'
    } else {
        '0'
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schedule for each worker:")?;
        for worker in &self.workers {
            writeln!(f, "{}:", worker.name)?;
            for row in &worker.days {
                let [morning, evening, night] = row.shifts;
                writeln!(
                    f,
                    "  week {} {:<10} [{} {} {}]",
                    row.week + 1,
                    row.weekday,
                    flag(morning),
                    flag(evening),
                    flag(night)
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Weekly shifts:")?;
        for worker in &self.workers {
            writeln!(f, "  {:<12} {:?}", worker.name, worker.weekly_totals)?;
        }
        writeln!(f)?;

        writeln!(f, "Shifts per week violations = {}", self.violations.weekly_cap)?;
        writeln!(f, "Consecutive shift violations = {}", self.violations.consecutive)?;
        writeln!(f, "Workers per shift = {:?}", self.headcounts)?;
        writeln!(f, "Workers per shift violations = {}", self.violations.staffing)?;
        writeln!(f, "Shift preference violations = {}", self.violations.preference)?;
        writeln!(f, "Total cost = {}", self.cost)
    }
}
