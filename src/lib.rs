//! Shift rostering by genetic search.
//!
//! A roster is a flat bit string (one gene per worker, week, day and shift).
//! [`engines::evaluation`] scores rosters against hard staffing rules and soft
//! worker preferences; [`engines::generation`] evolves a population of rosters
//! with tournament selection, crossover, bit-flip mutation and hall-of-fame
//! elitism.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{Result, ShiftgaError};
