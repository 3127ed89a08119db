mod controller;
mod opener;
mod uri;

#[cfg(test)]
mod mock;

pub use controller::{MountController, volume_root};
pub use opener::{MountAttempt, OsShareMounter, ShareMounter};
pub use uri::{ConnectionUri, REDACTED};

#[cfg(test)]
pub use mock::MockShareMounter;
