//! End-of-year deficit backfill.
//!
//! Runs once after every week is built. Any worker more than the
//! tolerance short of target gets extra shifts on free weekdays of the
//! trailing window, in date order, the last one truncated to the
//! remaining hours. Whatever the window cannot absorb stays visible as
//! a deficit.

use crate::{
    config::Tunables,
    error::{PlanError, PlanResult},
    ledger::HoursLedger,
    roster::Roster,
    schedule::{Assignment, WeekBlock},
    types::Hours,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BackfillOutcome {
    pub worker_id:    String,
    pub shifts_added: u32,
    pub hours_added:  Hours,
    /// Deficit still open after the window was exhausted.
    pub remaining:    Hours,
}

pub struct DeficitBackfill {
    window:    usize,
    tolerance: Hours,
}

impl DeficitBackfill {
    pub fn new(tunables: &Tunables) -> Self {
        Self {
            window:    tunables.backfill_weeks as usize,
            tolerance: tunables.backfill_tolerance,
        }
    }

    /// Backfill every worker in roster order. Returns one outcome per
    /// worker that was over the tolerance.
    pub fn apply(
        &self,
        weeks: &mut [WeekBlock],
        roster: &Roster,
        ledger: &mut HoursLedger,
    ) -> PlanResult<Vec<BackfillOutcome>> {
        // Resolve every worker up front so a roster/ledger mismatch
        // fails before any shift is touched.
        let worked = roster
            .workers()
            .iter()
            .map(|w| {
                ledger
                    .stat(&w.id)
                    .map(|s| s.hours_worked)
                    .ok_or_else(|| PlanError::UnknownWorker { id: w.id.clone() })
            })
            .collect::<PlanResult<Vec<Hours>>>()?;

        let start = weeks.len().saturating_sub(self.window);
        let mut outcomes = Vec::new();

        for (worker, worked) in roster.workers().iter().zip(worked) {
            let deficit = worker.target_hours - worked;
            if deficit <= self.tolerance {
                continue;
            }

            let mut outcome = BackfillOutcome {
                worker_id:    worker.id.clone(),
                shifts_added: 0,
                hours_added:  0.0,
                remaining:    deficit,
            };

            'window: for block in weeks[start..].iter_mut() {
                for shift in block.shifts.iter_mut() {
                    if outcome.remaining <= 0.0 {
                        break 'window;
                    }
                    if !shift.is_weekday() || shift.has_worker(&worker.id) {
                        continue;
                    }

                    let hours = outcome.remaining.min(shift.standard_hours);
                    let assignment = if hours < shift.standard_hours {
                        Assignment::partial(worker.id.clone(), hours)
                    } else {
                        Assignment::extra(worker.id.clone())
                    };
                    ledger.record(shift, &assignment)?;
                    shift.assign(assignment);

                    log::debug!(
                        "backfill {} on {} for {hours}h",
                        worker.id,
                        shift.date
                    );
                    outcome.shifts_added += 1;
                    outcome.hours_added += hours;
                    outcome.remaining -= hours;
                }
            }

            if outcome.remaining > 0.0 {
                log::warn!(
                    "{} still {:.1}h short of target after backfill",
                    worker.id,
                    outcome.remaining
                );
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
