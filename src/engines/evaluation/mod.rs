pub mod constraint_model;
pub mod fitness;

pub use constraint_model::{ConstraintModel, Worker};
pub use fitness::{FitnessEvaluator, ViolationBreakdown};
