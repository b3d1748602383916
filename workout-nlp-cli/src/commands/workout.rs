use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use workout_nlp::{Category, LogEntry, LogFilter, WorkoutType};

use super::parse::{display_workouts, parse_with_config};
use super::read_text;
use crate::config::{Config, OutputFormat};
use crate::storage::Storage;
use crate::ui;

#[derive(Args)]
pub struct LogCommand {
    /// Workout description; read from stdin when omitted
    text: Option<String>,

    /// Date of the session (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Skip normalization and parse the text as given
    #[arg(long)]
    raw: bool,
}

fn open_storage(config: &Config) -> Result<Storage> {
    let path = config.db_path()?;
    Storage::open(&path)
}

impl LogCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let text = read_text(self.text)?;
        let (normalized, workouts) = parse_with_config(&text, config, self.raw);

        if workouts.is_empty() {
            println!("No workouts found in: {}", normalized);
            println!("Nothing was saved.");
            return Ok(());
        }

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let entry = LogEntry::new(date, text.trim().to_string(), normalized, workouts);

        let storage = open_storage(config)?;
        storage.save_entry(&entry)?;

        tracing::info!("Logged entry {} with {} workouts", entry.id, entry.workouts.len());

        println!(
            "{} Logged {} workout(s) for {}",
            "✓".green(),
            entry.workouts.len(),
            entry.date
        );
        println!("  ID: {}", entry.id.dimmed());
        println!();
        ui::print_workouts(
            &display_workouts(&entry.workouts, config),
            config.output.show_adjusted_distance,
        );

        Ok(())
    }
}

pub fn list_entries(
    config: &Config,
    category: Option<Category>,
    workout_type: Option<WorkoutType>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: usize,
) -> Result<()> {
    let storage = open_storage(config)?;

    let filter = LogFilter {
        category,
        workout_type,
        from_date: from,
        to_date: to,
    };

    let mut entries = storage.list_entries(&filter)?;
    entries.truncate(limit);

    if config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries found.");
        println!("Log one with: workout-log log \"스쿼트 80kg 4세트 8회\"");
        return Ok(());
    }

    println!("{}", format!("Workout log ({} entries)", entries.len()).bold());
    println!();

    for entry in &entries {
        ui::print_entry_header(entry);
        for workout in entry.workouts.iter().filter(|w| filter.matches_workout(w)) {
            println!(
                "    {} {} {}",
                workout.name,
                ui::workout_details(workout).dimmed(),
                format!("[{}]", ui::workout_tags(workout)).dimmed()
            );
        }
    }

    Ok(())
}

pub fn show_entry(config: &Config, id: &str) -> Result<()> {
    let storage = open_storage(config)?;
    let entry = storage
        .get_entry(id)?
        .with_context(|| format!("Log entry not found: {}", id))?;

    if config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    ui::print_entry_header(&entry);
    if entry.normalized_text != entry.raw_text {
        println!("  Normalized: {}", entry.normalized_text);
    }
    println!();
    ui::print_workouts(
        &display_workouts(&entry.workouts, config),
        config.output.show_adjusted_distance,
    );

    Ok(())
}

pub fn delete_entry(config: &Config, id: &str, force: bool) -> Result<()> {
    let storage = open_storage(config)?;
    let entry = storage
        .get_entry(id)?
        .with_context(|| format!("Log entry not found: {}", id))?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete entry from {} ({})?",
                entry.date, entry.raw_text
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    storage.delete_entry(id)?;
    println!("{} Deleted entry {}", "✓".green(), id);

    Ok(())
}
