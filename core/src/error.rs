use crate::types::{DayIndex, WeekNumber, WorkerId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Roster has no workers")]
    EmptyRoster,

    #[error("Worker '{id}' appears more than once on the roster")]
    DuplicateWorker { id: WorkerId },

    #[error("Worker '{id}' has no recurring days")]
    EmptyPattern { id: WorkerId },

    #[error("Worker '{id}' lists day {day} twice")]
    DuplicateDay { id: WorkerId, day: DayIndex },

    #[error("Day index {day} is outside 0..=6")]
    DayOutOfRange { day: DayIndex },

    #[error("Worker '{id}' has invalid target hours {target}")]
    InvalidTarget { id: WorkerId, target: f64 },

    #[error("No calendar date for year {year}, week {week}, day {day}")]
    DateOutOfRange { year: i32, week: WeekNumber, day: DayIndex },

    #[error("Tunable '{name}' has invalid value {value}")]
    InvalidTunable { name: &'static str, value: f64 },

    #[error("Worker '{id}' not found")]
    UnknownWorker { id: WorkerId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
