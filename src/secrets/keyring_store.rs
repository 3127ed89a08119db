use super::SecretStore;
use crate::error::{Result, WatchError};
use secrecy::{ExposeSecret, SecretString};

/// System-keychain storage. One keyring service namespaces all entries;
/// the account field carries the server identity.
#[derive(Clone)]
pub struct KeyringStore {
    service: String,
}

const SERVICE: &str = "sharewatch";

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, identity: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, identity).map_err(|e| WatchError::SecretStore {
            message: e.to_string(),
        })
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for KeyringStore {
    fn save(&self, identity: &str, secret: SecretString) -> Result<()> {
        // set_password replaces an existing credential for the entry
        self.entry(identity)?
            .set_password(secret.expose_secret())
            .map_err(|e| WatchError::SecretStore {
                message: e.to_string(),
            })
    }

    fn retrieve(&self, identity: &str) -> Result<Option<SecretString>> {
        match self.entry(identity)?.get_password() {
            Ok(password) => Ok(Some(SecretString::from(password))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(WatchError::SecretStore {
                message: e.to_string(),
            }),
        }
    }

    fn delete(&self, identity: &str) -> Result<()> {
        match self.entry(identity)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(WatchError::SecretStore {
                message: e.to_string(),
            }),
        }
    }
}
