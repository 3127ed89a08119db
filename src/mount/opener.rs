use super::uri::ConnectionUri;
use crate::error::MountError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one invocation of the OS share opener
#[derive(Debug)]
pub struct MountAttempt {
    pub success: bool,

    /// Combined stdout and stderr, verbatim. Callers must redact before
    /// surfacing it anywhere.
    pub output: String,

    pub duration: Duration,
}

/// Hand-off to the OS facility that mounts a share from a connection URI
#[async_trait]
pub trait ShareMounter: Send + Sync {
    async fn mount(&self, uri: &ConnectionUri) -> Result<MountAttempt, MountError>;
}

/// Subprocess-backed mounter using the platform's URI handler:
/// `open <uri>` on macOS, `gio mount <uri>` on Linux.
pub struct OsShareMounter {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl OsShareMounter {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    pub fn new() -> Result<Self, MountError> {
        #[cfg(target_os = "macos")]
        let (opener, leading_args) = (crate::platform::macos::OPENER_CMD, Vec::new());

        #[cfg(target_os = "linux")]
        let (opener, leading_args) = (
            crate::platform::linux::OPENER_CMD,
            vec![crate::platform::linux::OPENER_MOUNT_ARG.to_string()],
        );

        let program = which::which(opener).map_err(|_| MountError::OpenerNotFound {
            tool: opener.to_string(),
        })?;
        Ok(Self {
            program,
            leading_args,
        })
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    pub fn new() -> Result<Self, MountError> {
        Err(MountError::OpenerNotFound {
            tool: "share opener".to_string(),
        })
    }
}

#[async_trait]
impl ShareMounter for OsShareMounter {
    async fn mount(&self, uri: &ConnectionUri) -> Result<MountAttempt, MountError> {
        debug!(
            "Mount command: {} {} {}",
            self.program.display(),
            self.leading_args.join(" "),
            uri.redacted()
        );

        let start = Instant::now();
        // output() waits for exit and reaps the child on every path
        let output = tokio::process::Command::new(&self.program)
            .args(&self.leading_args)
            .arg(uri.expose())
            .output()
            .await?;
        let duration = start.elapsed();

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(MountAttempt {
            success: output.status.success(),
            output: combined.trim().to_string(),
            duration,
        })
    }
}
