use crate::error::{Result, WatchError};
use std::path::Path;

/// Scoped access to a resolved folder.
///
/// The guard is the access: dropping it is the release, so every exit
/// path of a check cycle releases exactly once — success, enumeration
/// error, or early return.
pub struct ScopedAccess {
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl ScopedAccess {
    pub fn new(on_release: Option<Box<dyn FnOnce() + Send>>) -> Self {
        Self { on_release }
    }
}

impl Drop for ScopedAccess {
    fn drop(&mut self) {
        if let Some(release) = self.on_release.take() {
            release();
        }
    }
}

/// Gate between a resolved path and the filesystem operations on it
pub trait AccessBroker: Send + Sync {
    /// Acquire access to `path` for the lifetime of the returned guard.
    fn acquire(&self, path: &Path) -> Result<ScopedAccess>;
}

/// Broker for hosts without a sandbox: acquisition is a readability probe
pub struct DirectAccessBroker;

impl AccessBroker for DirectAccessBroker {
    fn acquire(&self, path: &Path) -> Result<ScopedAccess> {
        std::fs::read_dir(path).map_err(|e| WatchError::AccessDenied {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(ScopedAccess::new(None))
    }
}

/// Broker that counts acquisitions and releases, for balance assertions
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingAccessBroker {
    acquired: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    released: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    deny: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(test)]
impl RecordingAccessBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_deny(&self, deny: bool) {
        self.deny.store(deny, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn is_balanced(&self) -> bool {
        self.acquired() == self.released()
    }
}

#[cfg(test)]
impl AccessBroker for RecordingAccessBroker {
    fn acquire(&self, path: &Path) -> Result<ScopedAccess> {
        use std::sync::atomic::Ordering;

        if self.deny.load(Ordering::SeqCst) {
            return Err(WatchError::AccessDenied {
                path: path.to_path_buf(),
                reason: "denied by test broker".to_string(),
            });
        }

        self.acquired.fetch_add(1, Ordering::SeqCst);
        let released = std::sync::Arc::clone(&self.released);
        Ok(ScopedAccess::new(Some(Box::new(move || {
            released.fetch_add(1, Ordering::SeqCst);
        }))))
    }
}
