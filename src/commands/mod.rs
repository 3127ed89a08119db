pub mod check;
pub mod config;
pub mod credentials;
pub mod status;
pub mod target;
pub mod watch;

use crate::config::{ConfigManager, StateManager};
use crate::handle::DirectAccessBroker;
use crate::mount::{MountController, OsShareMounter};
use crate::notify::DesktopNotifier;
use crate::platform::detect_platform;
use crate::poller::SharePoller;
use crate::secrets::KeyringStore;
use anyhow::Result;
use std::sync::Arc;

/// Wire the real services into a poller. Built once per command; tests
/// substitute mocks through `SharePoller::new` directly.
pub(crate) fn build_poller() -> Result<SharePoller> {
    let platform_info = detect_platform()?;
    let controller = MountController::new(
        Arc::new(OsShareMounter::new()?),
        Arc::new(KeyringStore::new()),
        platform_info.mounts_root,
    );
    Ok(SharePoller::new(
        controller,
        Arc::new(DirectAccessBroker),
        Arc::new(DesktopNotifier),
        ConfigManager::new()?,
        StateManager::new()?,
    ))
}
