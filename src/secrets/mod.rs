mod keyring_store;

#[cfg(test)]
mod mock;

pub use keyring_store::KeyringStore;

#[cfg(test)]
pub use mock::MockSecretStore;

use crate::error::Result;
use secrecy::SecretString;

/// Password storage keyed by server identity.
///
/// Saving overwrites any existing entry for the same identity; deleting
/// a missing entry is not an error.
pub trait SecretStore: Send + Sync {
    fn save(&self, identity: &str, secret: SecretString) -> Result<()>;

    fn retrieve(&self, identity: &str) -> Result<Option<SecretString>>;

    fn delete(&self, identity: &str) -> Result<()>;
}
