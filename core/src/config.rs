use crate::{
    error::{PlanError, PlanResult},
    roster::Roster,
    types::{Hours, WeekNumber},
};
use serde::{Deserialize, Serialize};

/// Weeks generated per planning year.
pub const WEEKS_IN_YEAR: WeekNumber = 52;

/// Trailing weeks the backfill pass may add shifts to.
pub const BACKFILL_WEEKS: WeekNumber = 4;

/// A deficit at or below this many hours is left alone by backfill,
/// so nobody is handed a one or two hour shift.
pub const BACKFILL_TOLERANCE_HOURS: Hours = 10.0;

/// Multiplier turning "how far behind pace" into a draw threshold.
/// Values above 1 make catch-up certain once a worker is far enough behind.
pub const URGENCY_GAIN: f64 = 2.0;

/// Length of the extra shift used to size the extra-day requirement.
pub const EXTRA_SHIFT_HOURS: Hours = 12.0;

pub const DEFAULT_YEAR: i32 = 2026;

/// Named knobs of the allocation heuristics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tunables {
    #[serde(default = "default_weeks_in_year")]
    pub weeks_in_year:      WeekNumber,
    #[serde(default = "default_backfill_weeks")]
    pub backfill_weeks:     WeekNumber,
    #[serde(default = "default_backfill_tolerance")]
    pub backfill_tolerance: Hours,
    #[serde(default = "default_urgency_gain")]
    pub urgency_gain:       f64,
    #[serde(default = "default_extra_shift_hours")]
    pub extra_shift_hours:  Hours,
}

fn default_weeks_in_year() -> WeekNumber { WEEKS_IN_YEAR }
fn default_backfill_weeks() -> WeekNumber { BACKFILL_WEEKS }
fn default_backfill_tolerance() -> Hours { BACKFILL_TOLERANCE_HOURS }
fn default_urgency_gain() -> f64 { URGENCY_GAIN }
fn default_extra_shift_hours() -> Hours { EXTRA_SHIFT_HOURS }

impl Default for Tunables {
    fn default() -> Self {
        Self {
            weeks_in_year:      WEEKS_IN_YEAR,
            backfill_weeks:     BACKFILL_WEEKS,
            backfill_tolerance: BACKFILL_TOLERANCE_HOURS,
            urgency_gain:       URGENCY_GAIN,
            extra_shift_hours:  EXTRA_SHIFT_HOURS,
        }
    }
}

impl Tunables {
    pub fn validate(&self) -> PlanResult<()> {
        if !(1..=53).contains(&self.weeks_in_year) {
            return Err(PlanError::InvalidTunable {
                name:  "weeks_in_year",
                value: f64::from(self.weeks_in_year),
            });
        }
        if self.backfill_weeks > self.weeks_in_year {
            return Err(PlanError::InvalidTunable {
                name:  "backfill_weeks",
                value: f64::from(self.backfill_weeks),
            });
        }
        if !self.backfill_tolerance.is_finite() || self.backfill_tolerance < 0.0 {
            return Err(PlanError::InvalidTunable {
                name:  "backfill_tolerance",
                value: self.backfill_tolerance,
            });
        }
        if !self.urgency_gain.is_finite() || self.urgency_gain <= 0.0 {
            return Err(PlanError::InvalidTunable {
                name:  "urgency_gain",
                value: self.urgency_gain,
            });
        }
        if !self.extra_shift_hours.is_finite() || self.extra_shift_hours <= 0.0 {
            return Err(PlanError::InvalidTunable {
                name:  "extra_shift_hours",
                value: self.extra_shift_hours,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanConfig {
    /// Anchor year for the week/day to date mapping.
    #[serde(default = "default_year")]
    pub year:     i32,
    pub roster:   Roster,
    #[serde(default)]
    pub tunables: Tunables,
}

fn default_year() -> i32 { DEFAULT_YEAR }

impl PlanConfig {
    pub fn new(year: i32, roster: Roster) -> Self {
        Self { year, roster, tunables: Tunables::default() }
    }

    /// Load from a JSON file. The roster is validated while parsing.
    /// In tests, use PlanConfig::default_crew().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: PlanConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        log::debug!(
            "Loaded plan config from {path}: year={} workers={}",
            config.year,
            config.roster.len()
        );
        Ok(config)
    }

    /// The shipped seven-person crew with default tunables.
    pub fn default_crew(year: i32) -> Self {
        Self::new(year, Roster::default_crew())
    }

    pub fn with_tunables(mut self, tunables: Tunables) -> Self {
        self.tunables = tunables;
        self
    }

    pub fn validate(&self) -> PlanResult<()> {
        self.tunables.validate()?;
        // chrono's NaiveDate covers roughly +/-262000 years; stay well inside.
        if !(1..=9999).contains(&self.year) {
            return Err(PlanError::InvalidTunable {
                name:  "year",
                value: f64::from(self.year),
            });
        }
        Ok(())
    }
}
