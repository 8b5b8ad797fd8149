//! Regular shifts for one week.
//!
//! Pure function of (year, week, roster): no randomness, no prior state.
//! Runs before the extra-shift allocator for the same week.

use crate::{
    calendar,
    error::PlanResult,
    roster::Roster,
    schedule::{Assignment, Shift, WeekBlock},
    types::{WeekNumber, DAYS_PER_WEEK},
};

pub struct WeekBuilder {
    year: i32,
}

impl WeekBuilder {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Seven shifts, Sunday first, each holding a regular assignment for
    /// every worker whose pattern includes that day. Roster order is kept.
    pub fn build(&self, week: WeekNumber, roster: &Roster) -> PlanResult<WeekBlock> {
        let mut shifts = Vec::with_capacity(usize::from(DAYS_PER_WEEK));
        for day in 0..DAYS_PER_WEEK {
            let date = calendar::date_for(self.year, week, day)?;
            let mut shift = Shift::new(date, day, calendar::standard_hours(day));
            for worker in roster.workers().iter().filter(|w| w.works_on(day)) {
                shift.assign(Assignment::regular(worker.id.clone()));
            }
            shifts.push(shift);
        }
        Ok(WeekBlock { week, shifts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{roster::Worker, schedule::Role};

    #[test]
    fn regular_assignments_follow_pattern() {
        let roster = Roster::new(vec![
            Worker::new("a", vec![3, 1], 1000.0),
            Worker::new("b", vec![0, 6], 1000.0),
        ])
        .unwrap();
        let block = WeekBuilder::new(2026).build(10, &roster).unwrap();

        assert_eq!(block.week, 10);
        assert_eq!(block.shifts.len(), 7);
        for (i, shift) in block.shifts.iter().enumerate() {
            assert_eq!(usize::from(shift.day), i);
            assert!(shift.assignments.iter().all(|a| a.role == Role::Regular));
        }
        assert!(block.shifts[1].has_worker("a"));
        assert!(block.shifts[3].has_worker("a"));
        assert!(!block.shifts[2].has_worker("a"));
        assert!(block.shifts[0].has_worker("b"));
        assert!(block.shifts[6].has_worker("b"));
        assert_eq!(block.shifts[0].standard_hours, 11.0);
        assert_eq!(block.shifts[1].standard_hours, 12.0);
    }
}
