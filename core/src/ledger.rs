//! Per-worker hour accounting.
//!
//! RULE: every assignment that lands in the schedule is recorded here
//! exactly once, at the moment it is created. hours_worked is only
//! ever changed together with a work_days append, so it always equals
//! the sum over work_days.

use crate::{
    error::{PlanError, PlanResult},
    roster::Roster,
    schedule::{Assignment, Role, Shift, WeekBlock, WorkedDay, WorkerStat},
    types::WorkerId,
};
use std::collections::BTreeMap;

pub struct HoursLedger {
    /// Roster order.
    stats: Vec<WorkerStat>,
}

impl HoursLedger {
    pub fn new(roster: &Roster) -> Self {
        Self {
            stats: roster
                .workers()
                .iter()
                .map(|w| WorkerStat::new(w.id.clone(), w.target_hours))
                .collect(),
        }
    }

    /// Credit one assignment on `shift`.
    pub fn record(&mut self, shift: &Shift, assignment: &Assignment) -> PlanResult<()> {
        let stat = self
            .stats
            .iter_mut()
            .find(|s| s.worker_id == assignment.worker_id)
            .ok_or_else(|| PlanError::UnknownWorker { id: assignment.worker_id.clone() })?;

        let hours = assignment.hours(shift.standard_hours);
        match assignment.role {
            Role::Regular => stat.regular_days += 1,
            Role::Extra => stat.extra_days += hours / shift.standard_hours,
        }
        stat.hours_worked += hours;

        let day = WorkedDay {
            date:    shift.date,
            hours,
            role:    assignment.role,
            partial: assignment.partial_hours.is_some(),
        };
        // Backfill credits dates that already have later records; keep the list sorted.
        let at = stat.work_days.partition_point(|d| d.date <= day.date);
        stat.work_days.insert(at, day);
        Ok(())
    }

    /// Credit every assignment in a finished week, in schedule order.
    pub fn record_week(&mut self, block: &WeekBlock) -> PlanResult<()> {
        for shift in &block.shifts {
            for assignment in &shift.assignments {
                self.record(shift, assignment)?;
            }
        }
        Ok(())
    }

    pub fn stat(&self, worker_id: &str) -> Option<&WorkerStat> {
        self.stats.iter().find(|s| s.worker_id == worker_id)
    }

    pub fn stats(&self) -> &[WorkerStat] {
        &self.stats
    }

    /// Immutable copy keyed by worker id.
    pub fn snapshot(&self) -> BTreeMap<WorkerId, WorkerStat> {
        self.stats
            .iter()
            .map(|s| (s.worker_id.clone(), s.clone()))
            .collect()
    }

    pub fn into_stats(self) -> BTreeMap<WorkerId, WorkerStat> {
        self.stats
            .into_iter()
            .map(|s| (s.worker_id.clone(), s))
            .collect()
    }
}
