use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub fn show_config(config: &Config, path: &Path) -> Result<()> {
    let config_str = toml::to_string_pretty(config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!("File:     {}", path.display());
    println!("Database: {}", config.db_path()?.display());
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Configuration file already exists at: {}", path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save_to(path)?;

    println!("✓ Configuration initialized at: {}", path.display());

    Ok(())
}
