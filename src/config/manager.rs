use super::types::{
    MAX_CHECK_INTERVAL_MINUTES, MIN_CHECK_INTERVAL_MINUTES, Settings, WatchState, WatchTarget,
};
use crate::error::{Result, WatchError};
use crate::utils::paths;
use atomicwrites::{AllowOverwrite, AtomicFile};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings persistence: `~/.sharewatch/config.json`
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_path = paths::get_config_path()?;
        Ok(Self { config_path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.config_path.exists() {
            return Err(WatchError::ConfigNotFound {
                path: self.config_path.clone(),
            });
        }

        debug!("Loading settings from {:?}", self.config_path);
        let contents = fs::read_to_string(&self.config_path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        self.validate(&settings)?;
        Ok(settings)
    }

    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                debug!("Falling back to default settings: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.validate(settings)?;
        write_json(&self.config_path, settings)?;
        debug!("Settings saved to {:?}", self.config_path);
        Ok(())
    }

    pub fn validate(&self, settings: &Settings) -> Result<()> {
        if !(MIN_CHECK_INTERVAL_MINUTES..=MAX_CHECK_INTERVAL_MINUTES)
            .contains(&settings.check_interval_minutes)
        {
            return Err(WatchError::ConfigInvalid {
                message: format!(
                    "check interval must be between {MIN_CHECK_INTERVAL_MINUTES} and \
                     {MAX_CHECK_INTERVAL_MINUTES} minutes, got {}",
                    settings.check_interval_minutes
                ),
            });
        }
        Ok(())
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}

/// Watch state persistence: `~/.sharewatch/state.json`
pub struct StateManager {
    state_path: PathBuf,
}

impl StateManager {
    pub fn new() -> Result<Self> {
        let state_path = paths::get_state_path()?;
        Ok(Self { state_path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { state_path: path }
    }

    pub fn load_or_default(&self) -> WatchState {
        if !self.state_path.exists() {
            return WatchState::default();
        }
        match fs::read_to_string(&self.state_path)
            .map_err(WatchError::from)
            .and_then(|contents| Ok(serde_json::from_str(&contents)?))
        {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load watch state, starting fresh: {}", e);
                WatchState::default()
            }
        }
    }

    pub fn save(&self, state: &WatchState) -> Result<()> {
        write_json(&self.state_path, state)?;
        debug!("Watch state saved to {:?}", self.state_path);
        Ok(())
    }

    /// Install a new target (or none). The baseline is cleared in the
    /// same write: a count carried over from another folder must never
    /// be compared against the new one.
    pub fn replace_target(&self, target: Option<WatchTarget>) -> Result<()> {
        self.save(&WatchState {
            target,
            previous_file_count: None,
        })
    }

    /// Record the baseline, keeping the current target.
    pub fn set_baseline(&self, count: Option<u64>) -> Result<()> {
        let mut state = self.load_or_default();
        state.previous_file_count = count;
        self.save(&state)
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let af = AtomicFile::new(path, AllowOverwrite);
    af.write(|f| f.write_all(json.as_bytes()))
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::FolderHandle;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn settings_round_trip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.json"));

        let settings = Settings {
            server_address: "smb://files.example.net".to_string(),
            username: "alice".to_string(),
            check_interval_minutes: 10,
        };
        manager.save(&settings).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn interval_out_of_range_is_rejected_on_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let manager = ConfigManager::with_path(path.clone());

        for bad in [0, 61, 1000] {
            let settings = Settings {
                check_interval_minutes: bad,
                ..Default::default()
            };
            assert!(manager.save(&settings).is_err(), "saved interval {bad}");
        }

        // A file edited by hand is validated on load too
        std::fs::write(&path, r#"{"check_interval_minutes": 0}"#).unwrap();
        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default(), Settings::default());
    }

    #[test]
    fn missing_config_loads_as_not_found() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.json"));
        assert!(matches!(
            manager.load(),
            Err(WatchError::ConfigNotFound { .. })
        ));
        assert_eq!(manager.load_or_default(), Settings::default());
    }

    #[test]
    fn replacing_the_target_clears_the_baseline() {
        let temp = TempDir::new().unwrap();
        let manager = StateManager::with_path(temp.path().join("state.json"));

        let folder = temp.path().join("watched");
        std::fs::create_dir(&folder).unwrap();
        let handle = FolderHandle::capture(&folder).unwrap();
        let target = WatchTarget::new(handle, folder.clone());

        manager.replace_target(Some(target.clone())).unwrap();
        manager.set_baseline(Some(42)).unwrap();
        assert_eq!(manager.load_or_default().previous_file_count, Some(42));

        let other = temp.path().join("other");
        std::fs::create_dir(&other).unwrap();
        let new_target = WatchTarget::new(FolderHandle::capture(&other).unwrap(), other);
        manager.replace_target(Some(new_target.clone())).unwrap();

        let state = manager.load_or_default();
        assert_eq!(state.target, Some(new_target));
        assert_eq!(state.previous_file_count, None);
    }

    #[test]
    fn corrupt_state_starts_fresh() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let manager = StateManager::with_path(path);
        assert_eq!(manager.load_or_default(), WatchState::default());
    }
}
