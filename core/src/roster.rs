//! The crew: workers, their recurring weekly pattern, and annual targets.
//!
//! A Roster is validated once at construction and is immutable for the
//! rest of a generation run.

use crate::{
    calendar,
    error::{PlanError, PlanResult},
    types::{DayIndex, Hours, WorkerId, DAYS_PER_WEEK},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id:             WorkerId,
    pub name:           String,
    /// Sunday-first day indices; need not be sorted.
    pub recurring_days: Vec<DayIndex>,
    pub target_hours:   Hours,
    /// Display color, opaque to the planner.
    #[serde(default)]
    pub color:          String,
}

impl Worker {
    pub fn new(
        id: impl Into<WorkerId>,
        recurring_days: Vec<DayIndex>,
        target_hours: Hours,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            recurring_days,
            target_hours,
            color: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn works_on(&self, day: DayIndex) -> bool {
        self.recurring_days.contains(&day)
    }

    /// Sum of standard hours over the recurring days.
    pub fn base_weekly_hours(&self) -> Hours {
        self.recurring_days
            .iter()
            .map(|d| calendar::standard_hours(*d))
            .sum()
    }

    fn validate(&self) -> PlanResult<()> {
        if self.recurring_days.is_empty() {
            return Err(PlanError::EmptyPattern { id: self.id.clone() });
        }
        for (i, day) in self.recurring_days.iter().enumerate() {
            if *day >= DAYS_PER_WEEK {
                return Err(PlanError::DayOutOfRange { day: *day });
            }
            if self.recurring_days[..i].contains(day) {
                return Err(PlanError::DuplicateDay { id: self.id.clone(), day: *day });
            }
        }
        if !self.target_hours.is_finite() || self.target_hours <= 0.0 {
            return Err(PlanError::InvalidTarget {
                id:     self.id.clone(),
                target: self.target_hours,
            });
        }
        Ok(())
    }
}

/// Validated, ordered list of workers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Worker>", into = "Vec<Worker>")]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn new(workers: Vec<Worker>) -> PlanResult<Self> {
        if workers.is_empty() {
            return Err(PlanError::EmptyRoster);
        }
        for (i, worker) in workers.iter().enumerate() {
            worker.validate()?;
            if workers[..i].iter().any(|w| w.id == worker.id) {
                return Err(PlanError::DuplicateWorker { id: worker.id.clone() });
            }
        }
        Ok(Self { workers })
    }

    /// The seven-person crew the planner ships with: three recurring
    /// days each, 1950 hours a year.
    pub fn default_crew() -> Self {
        let spec: [(&str, [DayIndex; 3], &str); 7] = [
            ("e1", [1, 2, 3], "#3B82F6"),
            ("e2", [1, 3, 4], "#10B981"),
            ("e3", [2, 4, 5], "#F59E0B"),
            ("e4", [3, 4, 5], "#8B5CF6"),
            ("e5", [1, 2, 5], "#EC4899"),
            ("e6", [4, 5, 6], "#EF4444"),
            ("e7", [2, 4, 0], "#06B6D4"),
        ];
        let workers = spec
            .iter()
            .map(|(id, days, color)| Worker::new(*id, days.to_vec(), 1950.0).with_color(*color))
            .collect();
        Self { workers }
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn get(&self, id: &str) -> PlanResult<&Worker> {
        self.workers
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| PlanError::UnknownWorker { id: id.to_string() })
    }
}

impl TryFrom<Vec<Worker>> for Roster {
    type Error = PlanError;

    fn try_from(workers: Vec<Worker>) -> PlanResult<Self> {
        Self::new(workers)
    }
}

impl From<Roster> for Vec<Worker> {
    fn from(roster: Roster) -> Self {
        roster.workers
    }
}
