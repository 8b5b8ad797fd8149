//! The generation engine.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. For each week 1..=weeks_in_year, ascending:
//!        a. Week builder     (regular shifts, no randomness)
//!        b. Extra allocator  (weekday extras, draws from the run's RNG)
//!        c. Ledger           (credits every assignment of the week)
//!   2. Deficit backfill      (trailing window, deterministic)
//!
//! RULES:
//!   - One SeededRandom per engine, owned exclusively by it.
//!   - Every step reads state built by all earlier steps, so weeks
//!     and workers within a week are never reordered or parallelised.
//!   - The same (seed, config) always yields an identical YearSchedule.

use crate::{
    allocator::ExtraShiftAllocator,
    backfill::{BackfillOutcome, DeficitBackfill},
    config::PlanConfig,
    error::PlanResult,
    ledger::HoursLedger,
    rng::SeededRandom,
    schedule::{WeekBlock, YearSchedule},
    types::{Seed, WeekNumber},
    week_builder::WeekBuilder,
};

pub struct PlanEngine<'a> {
    config:     &'a PlanConfig,
    seed:       Seed,
    rng:        SeededRandom,
    builder:    WeekBuilder,
    allocator:  ExtraShiftAllocator,
    ledger:     HoursLedger,
    weeks:      Vec<WeekBlock>,
    backfilled: Option<Vec<BackfillOutcome>>,
}

impl<'a> PlanEngine<'a> {
    pub fn new(seed: Seed, config: &'a PlanConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng:        SeededRandom::new(seed),
            builder:    WeekBuilder::new(config.year),
            allocator:  ExtraShiftAllocator::new(&config.roster, &config.tunables),
            ledger:     HoursLedger::new(&config.roster),
            weeks:      Vec::with_capacity(config.tunables.weeks_in_year as usize),
            backfilled: None,
        })
    }

    /// Next week to build, or None once the year is complete.
    pub fn next_week(&self) -> Option<WeekNumber> {
        let next = self.weeks.len() as WeekNumber + 1;
        (next <= self.config.tunables.weeks_in_year).then_some(next)
    }

    /// Build one week. Returns None when every week is already built.
    pub fn step_week(&mut self) -> PlanResult<Option<&WeekBlock>> {
        let Some(week) = self.next_week() else {
            return Ok(None);
        };

        let mut block = self.builder.build(week, &self.config.roster)?;
        self.allocator.allocate(&mut block, &mut self.rng);
        self.ledger.record_week(&block)?;

        log::debug!(
            "week={week} start={:?} assignments={}",
            block.first_date(),
            block.shifts.iter().map(|s| s.coverage()).sum::<usize>()
        );
        self.weeks.push(block);
        Ok(self.weeks.last())
    }

    pub fn run_weeks(&mut self) -> PlanResult<()> {
        while self.step_week()?.is_some() {}
        Ok(())
    }

    /// Build any remaining weeks, then run the backfill pass once.
    pub fn backfill(&mut self) -> PlanResult<&[BackfillOutcome]> {
        self.run_weeks()?;
        if self.backfilled.is_none() {
            let pass = DeficitBackfill::new(&self.config.tunables);
            let outcomes = pass.apply(&mut self.weeks, &self.config.roster, &mut self.ledger)?;
            self.backfilled = Some(outcomes);
        }
        Ok(self.backfilled.as_deref().unwrap_or_default())
    }

    pub fn finish(mut self) -> PlanResult<YearSchedule> {
        self.backfill()?;

        let stats = self.ledger.into_stats();
        log::info!(
            "Generated {} weeks for {} workers (seed={}, year={}, draws={})",
            self.weeks.len(),
            stats.len(),
            self.seed,
            self.config.year,
            self.rng.draws()
        );
        Ok(YearSchedule {
            seed:  self.seed,
            year:  self.config.year,
            weeks: self.weeks,
            stats,
        })
    }

    pub fn weeks(&self) -> &[WeekBlock] {
        &self.weeks
    }

    pub fn allocator(&self) -> &ExtraShiftAllocator {
        &self.allocator
    }

    pub fn ledger(&self) -> &HoursLedger {
        &self.ledger
    }

    pub fn rng(&self) -> &SeededRandom {
        &self.rng
    }
}

/// Generate a full year from a seed. Same inputs, same output.
pub fn generate(seed: Seed, config: &PlanConfig) -> PlanResult<YearSchedule> {
    PlanEngine::new(seed, config)?.finish()
}
