//! Delimited and JSON exports of a generated year.
//!
//! CSV layout: one row per calendar day with a status cell per worker
//! (`-`, `WORK`, `EXTRA`, or `EXTRA (6h)` for a partial day) and the
//! day's coverage, then a blank line and a per-worker summary. Worker
//! ids, names and patterns are quoted when they need it.

use crate::{
    calendar,
    error::PlanResult,
    roster::Roster,
    schedule::{Role, Shift, YearSchedule},
};
use std::{borrow::Cow, io::Write};

pub const STATUS_ABSENT: &str = "-";
pub const STATUS_REGULAR: &str = "WORK";
pub const STATUS_EXTRA: &str = "EXTRA";

/// Status cell for one worker on one shift.
pub fn status_cell(shift: &Shift, worker_id: &str) -> String {
    match shift.assignment_for(worker_id) {
        None => STATUS_ABSENT.to_string(),
        Some(a) => match (a.role, a.partial_hours) {
            (Role::Regular, _) => STATUS_REGULAR.to_string(),
            (Role::Extra, None) => STATUS_EXTRA.to_string(),
            (Role::Extra, Some(h)) => format!("{STATUS_EXTRA} ({}h)", format_hours(h)),
        },
    }
}

pub fn write_csv<W: Write>(
    schedule: &YearSchedule,
    roster: &Roster,
    mut out: W,
) -> PlanResult<()> {
    let ids: Vec<&str> = roster.workers().iter().map(|w| w.id.as_str()).collect();

    let header: Vec<Cow<'_, str>> = ids.iter().map(|id| csv_field(id)).collect();
    writeln!(out, "Week,Date,Day,{},Coverage", header.join(","))?;
    for block in &schedule.weeks {
        for shift in &block.shifts {
            let cells: Vec<String> = ids.iter().map(|id| status_cell(shift, id)).collect();
            writeln!(
                out,
                "{},{},{},{},{}",
                block.week,
                shift.date.format("%Y-%m-%d"),
                calendar::day_label(shift.day)?,
                cells.join(","),
                shift.coverage()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "Worker,Pattern,Extra days,Hours,Target,Deficit")?;
    for worker in roster.workers() {
        let stat = schedule.stat(&worker.id)?;
        let pattern = worker
            .recurring_days
            .iter()
            .map(|d| calendar::day_label(*d))
            .collect::<PlanResult<Vec<_>>>()?
            .join(", ");
        writeln!(
            out,
            "{},{},{:.1},{:.0},{},{:.0}",
            csv_field(&worker.name),
            csv_field(&pattern),
            stat.extra_days,
            stat.hours_worked,
            format_hours(worker.target_hours),
            stat.deficit()
        )?;
    }
    out.flush()?;
    Ok(())
}

pub fn to_json(schedule: &YearSchedule) -> PlanResult<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

pub fn from_json(json: &str) -> PlanResult<YearSchedule> {
    Ok(serde_json::from_str(json)?)
}

/// Quote a free-text field when it holds a delimiter, a quote or a line
/// break. Inner quotes are doubled.
pub fn csv_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Whole hours print without a decimal point.
fn format_hours(h: f64) -> String {
    if h.fract() == 0.0 {
        format!("{h:.0}")
    } else {
        format!("{h}")
    }
}
