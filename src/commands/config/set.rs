use crate::config::ConfigManager;
use anyhow::Result;
use colored::*;

pub async fn execute(
    server: Option<String>,
    username: Option<String>,
    interval: Option<u64>,
) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut settings = manager.load_or_default();

    if let Some(server) = server {
        settings.server_address = server;
    }
    if let Some(username) = username {
        settings.username = username;
    }
    if let Some(interval) = interval {
        settings.check_interval_minutes = interval;
    }

    // Rejects an out-of-range interval before anything is written
    manager.save(&settings)?;
    println!("{} Configuration saved", "✓".green());

    if !settings.server_address.is_empty() {
        println!(
            "Store the password with {}",
            "sharewatch credentials set".cyan()
        );
    }
    Ok(())
}
