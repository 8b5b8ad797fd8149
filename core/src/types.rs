//! Shared primitive types used across the entire planner.

/// Seed for one generation run. The random source advances it by one per draw.
pub type Seed = u64;

/// A stable, unique identifier for a worker on the roster.
pub type WorkerId = String;

/// Hours credited for a shift. Fractional only for partial backfill days.
pub type Hours = f64;

/// Week of the planning year, 1-based.
pub type WeekNumber = u32;

/// Day of week, Sunday-first: 0 = Sunday .. 6 = Saturday.
pub type DayIndex = u8;

pub const DAYS_PER_WEEK: DayIndex = 7;

/// Standard hours on Monday..Friday.
pub const WEEKDAY_HOURS: Hours = 12.0;

/// Standard hours on Saturday and Sunday.
pub const WEEKEND_HOURS: Hours = 11.0;
