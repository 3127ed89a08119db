use crate::config::{ConfigManager, StateManager};
use anyhow::Result;
use colored::*;

pub async fn execute() -> Result<()> {
    let state = StateManager::new()?.load_or_default();
    let Some(target) = state.target else {
        println!("{}", "No target configured".yellow());
        println!(
            "Select a folder with {}",
            "sharewatch target set <path>".cyan()
        );
        return Ok(());
    };

    let config = ConfigManager::new()?;
    let settings = config.load_or_default();
    config.validate(&settings)?;

    let mut poller = super::build_poller()?;
    poller.watch(&target, settings.check_interval()).await?;
    Ok(())
}
