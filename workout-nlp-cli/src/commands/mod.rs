mod config_cmd;
mod parse;
mod stats;
mod workout;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use workout_nlp::{Category, WorkoutType};

use crate::config::Config;

pub use parse::ParseCommand;
pub use stats::StatsCommand;
pub use workout::LogCommand;

#[derive(Parser)]
#[command(name = "workout-log")]
#[command(about = "Korean workout log that parses what you say into sets, reps and distances", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "WORKOUT_NLP_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a workout description without saving it
    Parse(ParseCommand),

    /// Parse a workout description and save it to the log
    Log(LogCommand),

    /// List logged entries
    List {
        /// Filter by category (gym, snowboard, running, sports, home)
        #[arg(short, long)]
        category: Option<Category>,

        /// Filter by type (strength, cardio, flexibility, skill, unknown)
        #[arg(short, long)]
        r#type: Option<WorkoutType>,

        /// Filter from date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Filter to date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show a logged entry
    Show {
        /// Entry ID
        id: String,
    },

    /// Delete a logged entry
    Delete {
        /// Entry ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show training statistics with adjusted cardio distances
    Stats(StatsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file(),
        }
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        let config_path = self.config_path()?;
        let config = Config::load_from(&config_path)?;

        match self.command {
            Commands::Parse(cmd) => cmd.execute(&config),
            Commands::Log(cmd) => cmd.execute(&config),
            Commands::List {
                category,
                r#type,
                from,
                to,
                limit,
            } => workout::list_entries(&config, category, r#type, from, to, limit),
            Commands::Show { id } => workout::show_entry(&config, &id),
            Commands::Delete { id, force } => workout::delete_entry(&config, &id, force),
            Commands::Stats(cmd) => cmd.execute(&config),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&config, &config_path),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&config_path, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Use the given text, or read the description from stdin
pub(crate) fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
