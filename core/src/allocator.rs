//! Stochastic extra shifts on weekdays.
//!
//! Each worker has a whole number of extra days to place across the
//! year. A worker is a candidate on a weekday when they are behind
//! their own pace (share of year elapsed > share of extra days placed)
//! and still owe days. The draw threshold grows with how far behind
//! they are, so placements spread out and catch up late in the year.
//!
//! Draw order is part of the output: weekdays ascend, and within a day
//! workers are visited in roster order. One value is drawn per
//! eligible, not-yet-working worker and nothing else consumes draws.

use crate::{
    config::Tunables,
    roster::{Roster, Worker},
    rng::SeededRandom,
    schedule::{Assignment, WeekBlock},
    types::WeekNumber,
};

#[derive(Debug, Clone, PartialEq)]
struct Pace {
    needed:   i64,
    assigned: u32,
}

impl Pace {
    /// Share of the required extra days already placed; 1 when none are required.
    fn target_progress(&self) -> f64 {
        if self.needed > 0 {
            f64::from(self.assigned) / self.needed as f64
        } else {
            1.0
        }
    }

    fn owes_days(&self) -> bool {
        i64::from(self.assigned) < self.needed
    }
}

pub struct ExtraShiftAllocator {
    /// Roster order.
    worker_ids:    Vec<String>,
    pace:          Vec<Pace>,
    weeks_in_year: WeekNumber,
    urgency_gain:  f64,
}

impl ExtraShiftAllocator {
    pub fn new(roster: &Roster, tunables: &Tunables) -> Self {
        let workers = roster.workers();
        Self {
            worker_ids: workers.iter().map(|w| w.id.clone()).collect(),
            pace: workers
                .iter()
                .map(|w| Pace { needed: Self::extra_days_needed(w, tunables), assigned: 0 })
                .collect(),
            weeks_in_year: tunables.weeks_in_year,
            urgency_gain:  tunables.urgency_gain,
        }
    }

    /// Whole extra shifts needed on top of the recurring pattern:
    /// `ceil((target - base_weekly * weeks) / extra_shift_hours)`.
    /// Zero or negative means the worker never gets a stochastic extra.
    pub fn extra_days_needed(worker: &Worker, tunables: &Tunables) -> i64 {
        let base_annual = worker.base_weekly_hours() * f64::from(tunables.weeks_in_year);
        let deficit = worker.target_hours - base_annual;
        (deficit / tunables.extra_shift_hours).ceil() as i64
    }

    /// Place extra shifts into the weekday shifts of `block`.
    /// Returns how many were placed.
    pub fn allocate(&mut self, block: &mut WeekBlock, rng: &mut SeededRandom) -> usize {
        let current_progress = f64::from(block.week) / f64::from(self.weeks_in_year);
        let mut placed = 0;

        for shift in block.shifts.iter_mut().filter(|s| s.is_weekday()) {
            for (id, pace) in self.worker_ids.iter().zip(self.pace.iter_mut()) {
                let target_progress = pace.target_progress();
                if !pace.owes_days() || current_progress <= target_progress {
                    continue;
                }
                if shift.has_worker(id) {
                    continue;
                }
                let urgency = (current_progress - target_progress) * self.urgency_gain;
                if rng.chance(urgency) {
                    shift.assign(Assignment::extra(id.clone()));
                    pace.assigned += 1;
                    placed += 1;
                }
            }
        }

        if placed > 0 {
            log::debug!("week={} extra shifts placed={placed}", block.week);
        }
        placed
    }

    /// Extra days placed so far for a worker.
    pub fn assigned(&self, worker_id: &str) -> Option<u32> {
        self.index_of(worker_id).map(|i| self.pace[i].assigned)
    }

    pub fn needed(&self, worker_id: &str) -> Option<i64> {
        self.index_of(worker_id).map(|i| self.pace[i].needed)
    }

    fn index_of(&self, worker_id: &str) -> Option<usize> {
        self.worker_ids.iter().position(|id| id == worker_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schedule::Role, week_builder::WeekBuilder};

    fn single(days: Vec<u8>, target: f64) -> Roster {
        Roster::new(vec![Worker::new("w", days, target)]).unwrap()
    }

    #[test]
    fn extra_days_needed_rounds_up() {
        let tunables = Tunables::default();
        // 24h/week * 52 = 1248; (1950 - 1248) / 12 = 58.5
        let w = Worker::new("w", vec![1, 3], 1950.0);
        assert_eq!(ExtraShiftAllocator::extra_days_needed(&w, &tunables), 59);

        // Sunday counts 11h: (12 + 12 + 11) * 52 = 1820; 130 / 12 = 10.83
        let w = Worker::new("w", vec![1, 2, 0], 1950.0);
        assert_eq!(ExtraShiftAllocator::extra_days_needed(&w, &tunables), 11);
    }

    #[test]
    fn over_target_pattern_needs_nothing() {
        let tunables = Tunables::default();
        let w = Worker::new("w", vec![0, 1, 2, 3, 4, 5, 6], 1000.0);
        assert!(ExtraShiftAllocator::extra_days_needed(&w, &tunables) <= 0);
    }

    #[test]
    fn worker_with_no_need_never_draws() {
        let roster = single(vec![0, 1, 2, 3, 4, 5, 6], 1000.0);
        let tunables = Tunables::default();
        let mut alloc = ExtraShiftAllocator::new(&roster, &tunables);
        let builder = WeekBuilder::new(2026);
        let mut rng = SeededRandom::new(5);

        for week in 1..=52 {
            let mut block = builder.build(week, &roster).unwrap();
            assert_eq!(alloc.allocate(&mut block, &mut rng), 0);
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn never_double_books_a_regular_day() {
        let roster = single(vec![1, 2, 3, 4, 5], 3000.0);
        let tunables = Tunables::default();
        let mut alloc = ExtraShiftAllocator::new(&roster, &tunables);
        let mut rng = SeededRandom::new(5);
        let mut block = WeekBuilder::new(2026).build(40, &roster).unwrap();

        assert_eq!(alloc.allocate(&mut block, &mut rng), 0);
        assert_eq!(rng.draws(), 0, "already-working worker must not consume a draw");
        for shift in &block.shifts {
            assert!(shift.assignments.len() <= 1);
        }
    }

    #[test]
    fn low_urgency_draw_can_place_nothing() {
        // Mon-Thu = 2496h; 12h short means one extra. Week 1 urgency is
        // (1/52 - 0) * 2, and Friday is the only free weekday.
        let roster = single(vec![1, 2, 3, 4], 2508.0);
        let tunables = Tunables::default();
        let mut alloc = ExtraShiftAllocator::new(&roster, &tunables);
        let mut rng = SeededRandom::new(5);
        let mut block = WeekBuilder::new(2026).build(1, &roster).unwrap();

        let urgency = 2.0 / 52.0;
        let roll = SeededRandom::new(5).next_f64();
        assert!(roll >= urgency, "seed 5 rolls {roll}");

        assert_eq!(alloc.needed("w"), Some(1));
        assert_eq!(alloc.allocate(&mut block, &mut rng), 0);
        assert_eq!(rng.draws(), 1, "Friday was eligible and drew once");
        assert_eq!(alloc.assigned("w"), Some(0));
        assert!(block.shifts[5].assignments.is_empty());
    }

    #[test]
    fn far_behind_worker_always_gets_extras() {
        // Needs 59 extras; at week 52 with none placed, urgency = 2.0.
        let roster = single(vec![1, 3], 1950.0);
        let tunables = Tunables::default();
        let mut alloc = ExtraShiftAllocator::new(&roster, &tunables);
        let mut rng = SeededRandom::new(77);
        let mut block = WeekBuilder::new(2026).build(52, &roster).unwrap();

        let placed = alloc.allocate(&mut block, &mut rng);
        assert_eq!(placed, 3, "Tue, Thu and Fri are free");
        assert_eq!(alloc.assigned("w"), Some(3));
        let extras = block
            .shifts
            .iter()
            .flat_map(|s| s.assignments.iter())
            .filter(|a| a.role == Role::Extra)
            .count();
        assert_eq!(extras, 3);
        assert!(block.shifts[0].assignments.is_empty());
        assert!(block.shifts[6].assignments.is_empty());
    }
}
