use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use workout_nlp::{CardioSummary, LogEntry, LogFilter, Workout};

use crate::config::{Config, OutputFormat};
use crate::storage::Storage;
use crate::ui;

#[derive(Args)]
pub struct StatsCommand {
    /// Last 7 days
    #[arg(long, conflicts_with_all = ["month", "year"])]
    week: bool,

    /// Last 30 days
    #[arg(long, conflicts_with = "year")]
    month: bool,

    /// Last 365 days
    #[arg(long)]
    year: bool,
}

/// Strength totals over a period
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct StrengthTotals {
    pub exercises: u32,
    pub sets: u32,
    pub volume_kg: f64,
}

impl StrengthTotals {
    pub fn from_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Self {
        let mut totals = Self::default();
        for workout in workouts.into_iter().filter(|w| w.is_strength()) {
            totals.exercises += 1;
            totals.sets += workout.sets.unwrap_or(0);
            totals.volume_kg += workout.volume_kg().unwrap_or(0.0);
        }
        totals
    }
}

#[derive(Debug, Serialize)]
struct StatsReport {
    from: Option<NaiveDate>,
    entries: usize,
    cardio: CardioSummary,
    strength: StrengthTotals,
}

impl StatsCommand {
    fn period_days(&self) -> Option<i64> {
        if self.week {
            Some(7)
        } else if self.month {
            Some(30)
        } else if self.year {
            Some(365)
        } else {
            None
        }
    }

    fn period_label(&self) -> &'static str {
        match self.period_days() {
            Some(7) => "last 7 days",
            Some(30) => "last 30 days",
            Some(_) => "last 365 days",
            None => "all time",
        }
    }

    pub fn execute(self, config: &Config) -> Result<()> {
        let from = self
            .period_days()
            .map(|days| Local::now().date_naive() - Duration::days(days - 1));

        let storage = Storage::open(&config.db_path()?)?;
        let entries = storage.list_entries(&LogFilter {
            from_date: from,
            ..Default::default()
        })?;

        let report = build_report(&entries, from);

        if config.output.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{}",
            format!("Training stats ({}, {} entries)", self.period_label(), report.entries).bold()
        );
        println!();

        ui::print_cardio_summary(&report.cardio);
        println!();

        println!("{}", "Strength".bold());
        if report.strength.exercises == 0 {
            println!("  No strength workouts in this period");
        } else {
            println!("  Exercises: {}", report.strength.exercises);
            println!("  Sets:      {}", report.strength.sets);
            println!("  Volume:    {:.1}kg", report.strength.volume_kg);
        }

        Ok(())
    }
}

fn build_report(entries: &[LogEntry], from: Option<NaiveDate>) -> StatsReport {
    let workouts = entries.iter().flat_map(|e| e.workouts.iter());

    StatsReport {
        from,
        entries: entries.len(),
        cardio: CardioSummary::from_workouts(workouts.clone()),
        strength: StrengthTotals::from_workouts(workouts),
    }
}
