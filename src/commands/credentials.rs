use crate::config::ConfigManager;
use crate::secrets::{KeyringStore, SecretStore};
use anyhow::{Result, bail};
use colored::*;
use secrecy::SecretString;

pub async fn set() -> Result<()> {
    let settings = ConfigManager::new()?.load_or_default();
    if !settings.has_server_identity() {
        bail!(
            "Configure the server first: sharewatch config set --server <address> --username <name>"
        );
    }

    let prompt = format!(
        "Password for {} at {}: ",
        settings.username, settings.server_address
    );
    let password = rpassword::prompt_password(prompt)?;
    if password.is_empty() {
        bail!("Empty password not stored");
    }

    KeyringStore::new().save(&settings.server_address, SecretString::from(password))?;
    println!(
        "{} Password stored for {}",
        "✓".green(),
        settings.server_address
    );
    Ok(())
}

pub async fn clear() -> Result<()> {
    let settings = ConfigManager::new()?.load_or_default();
    if settings.server_address.is_empty() {
        bail!("No server address configured");
    }

    KeyringStore::new().delete(&settings.server_address)?;
    println!(
        "{} Password removed for {}",
        "✓".green(),
        settings.server_address
    );
    Ok(())
}
