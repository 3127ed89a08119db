/// Platform-specific constants for share mounting

#[cfg(target_os = "macos")]
pub mod macos {
    /// Root under which the OS exposes mounted network volumes
    pub const MOUNTS_ROOT: &str = "/Volumes";

    /// Command that hands a connection URI to the native share handler
    pub const OPENER_CMD: &str = "open";
}

#[cfg(target_os = "linux")]
pub mod linux {
    /// gvfs exposes mounted shares under <runtime dir>/gvfs
    pub const GVFS_DIR: &str = "gvfs";

    /// Fallback mounts root when no runtime directory is available
    pub const FALLBACK_MOUNTS_ROOT: &str = "/media";

    /// Command that hands a connection URI to the gio mount handler
    pub const OPENER_CMD: &str = "gio";

    /// Leading argument for the opener command
    pub const OPENER_MOUNT_ARG: &str = "mount";
}

/// Common constants across platforms
pub mod common {
    use std::time::Duration;

    /// URI scheme used when the configured address carries none
    pub const SHARE_SCHEME: &str = "smb";

    /// How long to wait for an asynchronous mount to settle
    pub const MOUNT_SETTLE_TIMEOUT: Duration = Duration::from_secs(3);

    /// Poll interval while waiting for the settle check
    pub const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
}
