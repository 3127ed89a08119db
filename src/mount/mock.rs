use super::opener::{MountAttempt, ShareMounter};
use super::uri::ConnectionUri;
use crate::error::MountError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock share mounter for tests.
///
/// Records every invocation (redacted URI) and can simulate a
/// successful mount by creating a directory, the way a real mount makes
/// the volume root appear.
#[derive(Clone, Default)]
pub struct MockShareMounter {
    invocations: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
    creates_on_mount: Arc<Mutex<Option<PathBuf>>>,
}

impl MockShareMounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    /// On a successful mount, create this directory
    pub fn set_creates_on_mount(&self, path: Option<PathBuf>) {
        *self.creates_on_mount.lock().unwrap() = path;
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareMounter for MockShareMounter {
    async fn mount(&self, uri: &ConnectionUri) -> Result<MountAttempt, MountError> {
        self.invocations
            .lock()
            .unwrap()
            .push(uri.redacted().to_string());

        if *self.should_fail.lock().unwrap() {
            return Ok(MountAttempt {
                success: false,
                output: format!("mock mount failed for {}", uri.expose()),
                duration: Duration::ZERO,
            });
        }

        if let Some(path) = self.creates_on_mount.lock().unwrap().clone() {
            std::fs::create_dir_all(path).map_err(MountError::from)?;
        }

        Ok(MountAttempt {
            success: true,
            output: String::new(),
            duration: Duration::ZERO,
        })
    }
}
