mod access;
mod folder;

pub use access::{AccessBroker, DirectAccessBroker, ScopedAccess};
pub use folder::{FileIdentity, FolderHandle, ResolvedFolder};

#[cfg(test)]
pub use access::RecordingAccessBroker;
