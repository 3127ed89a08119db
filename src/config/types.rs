use crate::handle::FolderHandle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const MIN_CHECK_INTERVAL_MINUTES: u64 = 1;
pub const MAX_CHECK_INTERVAL_MINUTES: u64 = 60;

/// Persisted server settings. The password is never part of this
/// struct: it lives in the secret store and is fetched per mount
/// attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server_address: String,

    #[serde(default)]
    pub username: String,

    #[serde(default = "default_check_interval")]
    pub check_interval_minutes: u64,
}

fn default_check_interval() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_address: String::new(),
            username: String::new(),
            check_interval_minutes: default_check_interval(),
        }
    }
}

impl Settings {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_minutes * 60)
    }

    /// Address and username are present; says nothing about the password
    pub fn has_server_identity(&self) -> bool {
        !self.server_address.is_empty() && !self.username.is_empty()
    }
}

/// The monitored folder: durable handle plus the path shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTarget {
    pub handle: FolderHandle,

    /// Human-readable path; may go stale if the folder moves
    pub display_path: PathBuf,
}

impl WatchTarget {
    pub fn new(handle: FolderHandle, display_path: PathBuf) -> Self {
        Self {
            handle,
            display_path,
        }
    }
}

/// Target and baseline persist together so replacing the target clears
/// the baseline in the same atomic write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WatchTarget>,

    /// Last successfully observed file count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_file_count: Option<u64>,
}
