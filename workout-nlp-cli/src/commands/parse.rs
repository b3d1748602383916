use anyhow::Result;
use clap::Args;

use workout_nlp::{fill_missing_cardio_fields, normalize, RuleBasedParser, Workout, WorkoutParser};

use super::read_text;
use crate::config::{Config, OutputFormat};
use crate::ui;

#[derive(Args)]
pub struct ParseCommand {
    /// Workout description (e.g., "스쿼트 80kg 4세트 8회, 러닝 30분"); read from stdin when omitted
    text: Option<String>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip normalization and parse the text as given
    #[arg(long)]
    raw: bool,
}

/// Normalize (unless disabled) and parse `text` the way the config asks
pub(crate) fn parse_with_config(text: &str, config: &Config, raw: bool) -> (String, Vec<Workout>) {
    let parser = RuleBasedParser;
    let normalized = if raw || !config.parser.normalize {
        text.trim().to_string()
    } else {
        normalize(text)
    };

    tracing::debug!(parser = parser.name(), "Parsing: {}", normalized);
    let workouts = parser.parse(&normalized);
    (normalized, workouts)
}

/// Workouts as displayed: cardio gaps filled on copies when enabled
pub(crate) fn display_workouts(workouts: &[Workout], config: &Config) -> Vec<Workout> {
    if config.parser.fill_cardio_fields {
        workouts.iter().map(fill_missing_cardio_fields).collect()
    } else {
        workouts.to_vec()
    }
}

impl ParseCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let text = read_text(self.text)?;
        let (normalized, workouts) = parse_with_config(&text, config, self.raw);
        let shown = display_workouts(&workouts, config);

        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            }
            OutputFormat::Table => {
                if shown.is_empty() {
                    println!("No workouts found in: {}", normalized);
                    return Ok(());
                }
                println!("Parsed: {}", normalized);
                println!();
                ui::print_workouts(&shown, config.output.show_adjusted_distance);
            }
        }

        Ok(())
    }
}
