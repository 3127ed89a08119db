pub mod config;
pub mod error;
pub mod handle;
pub mod mount;
pub mod notify;
pub mod platform;
pub mod poller;
pub mod secrets;
pub mod utils;

pub use config::{ConfigManager, Settings, StateManager, WatchState, WatchTarget};
pub use error::{MountError, Result, WatchError};
pub use handle::{AccessBroker, DirectAccessBroker, FolderHandle, ScopedAccess};
#[cfg(test)]
pub use mount::MockShareMounter;
pub use mount::{MountController, OsShareMounter, ShareMounter, volume_root};
pub use notify::{DesktopNotifier, Notifier};
pub use platform::{Platform, PlatformInfo, detect_platform};
pub use poller::{CheckResult, FailureKind, SharePoller, count_files};
pub use secrets::{KeyringStore, SecretStore};
