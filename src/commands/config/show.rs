use crate::config::ConfigManager;
use anyhow::Result;
use colored::*;

pub async fn execute(json: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let settings = manager.load_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let not_set = || "(not set)".dimmed().to_string();
    let server = if settings.server_address.is_empty() {
        not_set()
    } else {
        settings.server_address.clone()
    };
    let username = if settings.username.is_empty() {
        not_set()
    } else {
        settings.username.clone()
    };

    println!("Server:   {}", server);
    println!("Username: {}", username);
    println!("Interval: every {} minutes", settings.check_interval_minutes);
    println!("File:     {}", manager.get_config_path().display());
    Ok(())
}
