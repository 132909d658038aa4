use serde::{Deserialize, Serialize};
use std::fmt;

pub const SHIFTS_PER_DAY: usize = 3;
pub const DAYS_PER_WEEK: usize = 7;
pub const SHIFTS_PER_WEEK: usize = DAYS_PER_WEEK * SHIFTS_PER_DAY;

/// Daily shift slot, in genome order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSlot {
    Morning,
    Evening,
    Night,
}

impl ShiftSlot {
    pub const ALL: [ShiftSlot; SHIFTS_PER_DAY] =
        [ShiftSlot::Morning, ShiftSlot::Evening, ShiftSlot::Night];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SHIFTS_PER_DAY]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftSlot::Morning => "morning",
            ShiftSlot::Evening => "evening",
            ShiftSlot::Night => "night",
        };
        f.pad(name)
    }
}

/// Day of the week. Only used when presenting a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_PER_WEEK]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        };
        f.pad(name)
    }
}

/// Decoded position of a gene inside one worker's block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub week: usize,
    pub day: usize,
    pub slot: ShiftSlot,
}

impl SlotPosition {
    /// Fixed-radix decoding: slot varies fastest, then day, then week.
    pub fn decode(index: usize) -> Self {
        Self {
            week: index / SHIFTS_PER_WEEK,
            day: (index / SHIFTS_PER_DAY) % DAYS_PER_WEEK,
            slot: ShiftSlot::from_index(index),
        }
    }

    pub fn encode(&self) -> usize {
        self.week * SHIFTS_PER_WEEK + self.day * SHIFTS_PER_DAY + self.slot.index()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day)
    }
}
