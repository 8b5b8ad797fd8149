//! The generated schedule and the read-only queries presentation code uses.
//!
//! Ordering is part of the contract: weeks ascend, shifts run Sunday
//! to Saturday inside a week, and each worker's worked days are
//! chronological. Consumers never need to sort.

use crate::{
    error::{PlanError, PlanResult},
    types::{DayIndex, Hours, Seed, WeekNumber, WorkerId},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Matches the worker's recurring pattern.
    Regular,
    /// Added to reach the annual target.
    Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub worker_id:     WorkerId,
    pub role:          Role,
    /// Set only by backfill when less than a full shift is needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_hours: Option<Hours>,
}

impl Assignment {
    pub fn regular(worker_id: impl Into<WorkerId>) -> Self {
        Self { worker_id: worker_id.into(), role: Role::Regular, partial_hours: None }
    }

    pub fn extra(worker_id: impl Into<WorkerId>) -> Self {
        Self { worker_id: worker_id.into(), role: Role::Extra, partial_hours: None }
    }

    pub fn partial(worker_id: impl Into<WorkerId>, hours: Hours) -> Self {
        Self { worker_id: worker_id.into(), role: Role::Extra, partial_hours: Some(hours) }
    }

    /// Hours this assignment credits on a shift of `standard` hours.
    pub fn hours(&self, standard: Hours) -> Hours {
        self.partial_hours.unwrap_or(standard)
    }
}

/// One calendar day and everybody working it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub date:           NaiveDate,
    pub day:            DayIndex,
    pub standard_hours: Hours,
    pub assignments:    Vec<Assignment>,
}

impl Shift {
    pub fn new(date: NaiveDate, day: DayIndex, standard_hours: Hours) -> Self {
        Self { date, day, standard_hours, assignments: Vec::new() }
    }

    pub fn has_worker(&self, worker_id: &str) -> bool {
        self.assignment_for(worker_id).is_some()
    }

    pub fn assignment_for(&self, worker_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.worker_id == worker_id)
    }

    /// Number of people on shift.
    pub fn coverage(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_weekday(&self) -> bool {
        crate::calendar::is_weekday(self.day)
    }

    /// Adds the assignment unless the worker is already on this shift.
    /// Returns whether it was added.
    pub(crate) fn assign(&mut self, assignment: Assignment) -> bool {
        if self.has_worker(&assignment.worker_id) {
            return false;
        }
        self.assignments.push(assignment);
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekBlock {
    pub week:   WeekNumber,
    /// Always seven, Sunday first.
    pub shifts: Vec<Shift>,
}

impl WeekBlock {
    /// Date of the week's Sunday.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.shifts.first().map(|s| s.date)
    }

    pub fn weekday_shifts(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().filter(|s| s.is_weekday())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkedDay {
    pub date:    NaiveDate,
    pub hours:   Hours,
    pub role:    Role,
    #[serde(default)]
    pub partial: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerStat {
    pub worker_id:    WorkerId,
    pub target_hours: Hours,
    pub hours_worked: Hours,
    pub regular_days: u32,
    /// Extra-day equivalents: a partial day counts as hours / standard hours.
    pub extra_days:   f64,
    /// Chronological.
    pub work_days:    Vec<WorkedDay>,
}

impl WorkerStat {
    pub fn new(worker_id: impl Into<WorkerId>, target_hours: Hours) -> Self {
        Self {
            worker_id: worker_id.into(),
            target_hours,
            hours_worked: 0.0,
            regular_days: 0,
            extra_days: 0.0,
            work_days: Vec::new(),
        }
    }

    /// Target minus hours worked. Positive means short, negative means over.
    pub fn deficit(&self) -> Hours {
        self.target_hours - self.hours_worked
    }

    pub fn days_in_month(&self, month: u32) -> impl Iterator<Item = &WorkedDay> {
        self.work_days.iter().filter(move |d| d.date.month() == month)
    }
}

/// A full generated year. The only thing presentation code reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearSchedule {
    pub seed:  Seed,
    pub year:  i32,
    pub weeks: Vec<WeekBlock>,
    pub stats: BTreeMap<WorkerId, WorkerStat>,
}

impl YearSchedule {
    /// Weeks whose Sunday falls in `month` (1..=12).
    pub fn weeks_in_month(&self, month: u32) -> impl Iterator<Item = &WeekBlock> {
        self.weeks
            .iter()
            .filter(move |w| w.first_date().is_some_and(|d| d.month() == month))
    }

    pub fn worker_days_in_month(
        &self,
        worker_id: &str,
        month: u32,
    ) -> PlanResult<impl Iterator<Item = &WorkedDay>> {
        Ok(self.stat(worker_id)?.days_in_month(month))
    }

    pub fn stat(&self, worker_id: &str) -> PlanResult<&WorkerStat> {
        self.stats
            .get(worker_id)
            .ok_or_else(|| PlanError::UnknownWorker { id: worker_id.to_string() })
    }

    pub fn shifts(&self) -> impl Iterator<Item = &Shift> {
        self.weeks.iter().flat_map(|w| w.shifts.iter())
    }

    pub fn shift_on(&self, date: NaiveDate) -> Option<&Shift> {
        self.shifts().find(|s| s.date == date)
    }
}
