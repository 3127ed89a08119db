use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Platform {
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    MacOS,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    Linux(LinuxInfo),
    #[allow(dead_code)] // Needed for exhaustive matching but only constructed on other OSes
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinuxInfo {
    pub has_gio: bool,
}

#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub platform: Platform,

    /// Prefix under which the OS surfaces mounted network volumes
    pub mounts_root: PathBuf,
}

impl Platform {
    pub fn can_mount(&self) -> bool {
        match self {
            Platform::MacOS => true,
            Platform::Linux(info) => info.has_gio,
            Platform::Unsupported(_) => false,
        }
    }

    pub fn mount_tool_name(&self) -> Option<&'static str> {
        match self {
            Platform::MacOS => Some("open"),
            Platform::Linux(_) => Some("gio"),
            Platform::Unsupported(_) => None,
        }
    }
}

pub fn detect_platform() -> Result<PlatformInfo> {
    debug!("Starting platform detection");

    #[cfg(target_os = "macos")]
    {
        detect_macos()
    }

    #[cfg(target_os = "linux")]
    {
        detect_linux()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let os = std::env::consts::OS;
        Ok(PlatformInfo {
            platform: Platform::Unsupported(os.to_string()),
            mounts_root: std::env::temp_dir(),
        })
    }
}

#[cfg(target_os = "macos")]
fn detect_macos() -> Result<PlatformInfo> {
    use super::constants::macos::MOUNTS_ROOT;

    Ok(PlatformInfo {
        platform: Platform::MacOS,
        mounts_root: PathBuf::from(MOUNTS_ROOT),
    })
}

#[cfg(target_os = "linux")]
fn detect_linux() -> Result<PlatformInfo> {
    use super::constants::linux::{FALLBACK_MOUNTS_ROOT, GVFS_DIR, OPENER_CMD};

    let has_gio = which::which(OPENER_CMD).is_ok();
    if !has_gio {
        debug!("gio not found; remounting will not be possible");
    }

    // Per-user gvfs directory, e.g. /run/user/1000/gvfs
    let mounts_root = dirs::runtime_dir()
        .map(|dir| dir.join(GVFS_DIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_MOUNTS_ROOT));

    Ok(PlatformInfo {
        platform: Platform::Linux(LinuxInfo { has_gio }),
        mounts_root,
    })
}
