use crate::error::{Result, WatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable reference to a watched directory.
///
/// Survives serialization to the state file and back, and stays
/// resolvable when the directory is renamed within its parent: the
/// device and inode captured at creation identify it independent of
/// its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderHandle {
    path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity: Option<FileIdentity>,
}

/// Filesystem identity of a directory, stable across renames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIdentity {
    pub device: u64,
    pub inode: u64,
}

/// Outcome of resolving a handle to a currently-valid path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFolder {
    pub path: PathBuf,

    /// The stored path no longer matched and the folder was re-located,
    /// or could not be confirmed at all. A warning, not a failure.
    pub stale: bool,
}

impl FolderHandle {
    /// Capture a handle for an existing directory.
    pub fn capture(path: &Path) -> Result<Self> {
        let canonical = path.canonicalize().map_err(|_| WatchError::TargetNotFound {
            path: path.to_path_buf(),
        })?;
        if !canonical.is_dir() {
            return Err(WatchError::TargetNotFound { path: canonical });
        }
        let identity = current_identity(&canonical);
        Ok(Self {
            path: canonical,
            identity,
        })
    }

    pub fn stored_path(&self) -> &Path {
        &self.path
    }

    /// Resolve to a currently-valid path.
    ///
    /// Never fails outright: when the directory cannot be confirmed the
    /// stored path is returned with the stale flag set, and the caller
    /// proceeds best-effort. The handle itself stays valid either way.
    pub fn resolve(&self) -> ResolvedFolder {
        if self.path.is_dir() {
            match (self.identity, current_identity(&self.path)) {
                // A different directory now lives at the stored path;
                // fall through and look for the original by identity.
                (Some(expected), Some(current)) if expected != current => {}
                _ => {
                    return ResolvedFolder {
                        path: self.path.clone(),
                        stale: false,
                    };
                }
            }
        }

        if let Some(expected) = self.identity
            && let Some(found) = relocate(&self.path, expected)
        {
            debug!(
                "Re-located {} at {}",
                self.path.display(),
                found.display()
            );
            return ResolvedFolder {
                path: found,
                stale: true,
            };
        }

        ResolvedFolder {
            path: self.path.clone(),
            stale: true,
        }
    }
}

/// Search the parent directory for an entry with the expected identity
fn relocate(original: &Path, expected: FileIdentity) -> Option<PathBuf> {
    let parent = original.parent()?;
    let entries = std::fs::read_dir(parent).ok()?;
    for entry in entries.flatten() {
        let candidate = entry.path();
        if candidate.is_dir() && current_identity(&candidate) == Some(expected) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn current_identity(path: &Path) -> Option<FileIdentity> {
    use std::os::unix::fs::MetadataExt;
    let meta = std::fs::metadata(path).ok()?;
    Some(FileIdentity {
        device: meta.dev(),
        inode: meta.ino(),
    })
}

// Without inode identities the handle degrades to existence checking.
#[cfg(not(unix))]
fn current_identity(_path: &Path) -> Option<FileIdentity> {
    None
}
