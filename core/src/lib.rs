//! Annual crew schedule generation.
//!
//! A fixed crew works a recurring weekly pattern; each worker is then
//! topped up toward an annual hours target, first by seeded stochastic
//! extra shifts spread across the year, then by a deterministic backfill
//! over the last weeks. Everything is a pure function of
//! (seed, PlanConfig): regenerate instead of storing.
//!
//! Entry point: [`engine::generate`].

pub mod allocator;
pub mod backfill;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod ledger;
pub mod rng;
pub mod roster;
pub mod schedule;
pub mod types;
pub mod week_builder;

pub use config::PlanConfig;
pub use engine::{generate, PlanEngine};
pub use error::{PlanError, PlanResult};
pub use schedule::YearSchedule;
