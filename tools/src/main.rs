//! plan-runner: headless schedule generator.
//!
//! Usage:
//!   plan-runner --seed 12345 --year 2026
//!   plan-runner --config crew.json --csv schedule_2026.csv
//!   plan-runner --seed 12345 --month 3 --worker e1
//!   plan-runner --seed 12345 --json schedule.json

use anyhow::{Context, Result};
use crewplan_core::{
    config::DEFAULT_YEAR,
    engine::generate,
    export,
    schedule::{Role, YearSchedule},
    types::Seed,
    PlanConfig,
};
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::BufWriter;

#[derive(Serialize)]
struct WorkerSummary<'a> {
    worker_id:    &'a str,
    regular_days: u32,
    extra_days:   f64,
    hours_worked: f64,
    target_hours: f64,
    deficit:      f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", fresh_seed());
    let year = parse_arg(&args, "--year", DEFAULT_YEAR);
    let month = parse_arg(&args, "--month", 0u32);
    let config_path = str_arg(&args, "--config");
    let csv_path = str_arg(&args, "--csv");
    let json_path = str_arg(&args, "--json");
    let worker = str_arg(&args, "--worker");

    let config = match config_path {
        Some(path) => {
            let mut config = PlanConfig::load(path)?;
            if args.iter().any(|a| a == "--year") {
                config.year = year;
            }
            config
        }
        None => PlanConfig::default_crew(year),
    };

    println!("Crew schedule: plan-runner");
    println!("  seed:      {seed}");
    println!("  year:      {}", config.year);
    println!("  workers:   {}", config.roster.len());
    println!("  config:    {}", config_path.unwrap_or("(built-in crew)"));
    println!();

    let schedule = generate(seed, &config)?;

    if (1..=12).contains(&month) {
        print_month(&schedule, &config, month, worker)?;
    }
    print_summary(&schedule, &config)?;

    if let Some(path) = csv_path {
        let file = File::create(path).with_context(|| format!("Cannot create {path}"))?;
        export::write_csv(&schedule, &config.roster, BufWriter::new(file))?;
        println!("CSV written to {path}");
    }
    if let Some(path) = json_path {
        std::fs::write(path, export::to_json(&schedule)?)
            .with_context(|| format!("Cannot write {path}"))?;
        println!("JSON written to {path}");
    }
    Ok(())
}

fn print_month(
    schedule: &YearSchedule,
    config: &PlanConfig,
    month: u32,
    worker: Option<&str>,
) -> Result<()> {
    println!("=== MONTH {month:02} ===");
    match worker {
        Some(id) => {
            for day in schedule.worker_days_in_month(id, month)? {
                let tag = match (day.role, day.partial) {
                    (Role::Regular, _) => "work",
                    (Role::Extra, false) => "extra",
                    (Role::Extra, true) => "extra (partial)",
                };
                println!("  {} {:>5.1}h {tag}", day.date.format("%a %Y-%m-%d"), day.hours);
            }
        }
        None => {
            for block in schedule.weeks_in_month(month) {
                println!("  week {}", block.week);
                for shift in &block.shifts {
                    let cells: Vec<String> = config
                        .roster
                        .workers()
                        .iter()
                        .map(|w| format!("{}={}", w.id, export::status_cell(shift, &w.id)))
                        .collect();
                    println!(
                        "    {} ({}h) {}",
                        shift.date.format("%a %Y-%m-%d"),
                        shift.standard_hours,
                        cells.join(" ")
                    );
                }
            }
        }
    }
    println!();
    Ok(())
}

fn print_summary(schedule: &YearSchedule, config: &PlanConfig) -> Result<()> {
    println!("=== YEAR SUMMARY ===");
    for worker in config.roster.workers() {
        let stat = schedule.stat(&worker.id)?;
        let row = WorkerSummary {
            worker_id:    &worker.id,
            regular_days: stat.regular_days,
            extra_days:   stat.extra_days,
            hours_worked: stat.hours_worked,
            target_hours: stat.target_hours,
            deficit:      stat.deficit(),
        };
        log::debug!("{}", serde_json::to_string(&row)?);
        println!(
            "  {:<6} regular: {:>3} | extra: {:>5.1} | hours: {:>6.0} / {:<6.0} | deficit: {:>+5.0}",
            row.worker_id,
            row.regular_days,
            row.extra_days,
            row.hours_worked,
            row.target_hours,
            row.deficit
        );
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Wall-clock milliseconds; only used to pick a seed when none is given.
fn fresh_seed() -> Seed {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}
