use anyhow::Result;
use eventboard_core::config::BoardConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let config_path = BoardConfig::config_path()?;

    if init {
        if config_path.exists() {
            anyhow::bail!("Config file already exists at {}", config_path.display());
        }
        BoardConfig::create_default_config(&config_path)?;
        println!("Created {}", config_path.display());
    }

    let config = BoardConfig::load_from(&config_path)?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    if !config_path.exists() {
        println!("  {}", "(not created yet, run `eventboard config --init`)".dimmed());
    }
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
