use super::SecretStore;
use crate::error::{Result, WatchError};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory secret store for tests
#[derive(Clone, Default)]
pub struct MockSecretStore {
    secrets: Arc<Mutex<HashMap<String, String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(identity: &str, secret: &str) -> Self {
        let store = Self::new();
        store
            .secrets
            .lock()
            .unwrap()
            .insert(identity.to_string(), secret.to_string());
        store
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    fn check_failure(&self) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(WatchError::SecretStore {
                message: "mock secret store failed".to_string(),
            });
        }
        Ok(())
    }
}

impl SecretStore for MockSecretStore {
    fn save(&self, identity: &str, secret: SecretString) -> Result<()> {
        self.check_failure()?;
        self.secrets
            .lock()
            .unwrap()
            .insert(identity.to_string(), secret.expose_secret().to_string());
        Ok(())
    }

    fn retrieve(&self, identity: &str) -> Result<Option<SecretString>> {
        self.check_failure()?;
        Ok(self
            .secrets
            .lock()
            .unwrap()
            .get(identity)
            .map(|s| SecretString::from(s.clone())))
    }

    fn delete(&self, identity: &str) -> Result<()> {
        self.check_failure()?;
        self.secrets.lock().unwrap().remove(identity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_and_delete_tolerates_absence() {
        let store = MockSecretStore::new();
        store
            .save("server", SecretString::from("one".to_string()))
            .unwrap();
        store
            .save("server", SecretString::from("two".to_string()))
            .unwrap();
        assert_eq!(
            store.retrieve("server").unwrap().unwrap().expose_secret(),
            "two"
        );

        store.delete("server").unwrap();
        assert!(store.retrieve("server").unwrap().is_none());
        store.delete("server").unwrap();
    }
}
