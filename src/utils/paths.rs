use anyhow::Result;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in paths to home directory
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if let Some(stripped) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(stripped))
    } else if path_str == "~" {
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Directory holding all persisted sharewatch data
pub fn get_data_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home.join(".sharewatch"))
}

/// Settings file: server address, username, check interval
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("config.json"))
}

/// Watch state file: target folder and baseline count
pub fn get_state_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("state.json"))
}
