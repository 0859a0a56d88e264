// OS secret store (macOS Keychain, Windows Credential Manager, Secret Service)
use crate::domain::error::StoreError;
use crate::domain::traits::CredentialStore;
use keyring::Entry;

pub const KEYRING_SERVICE: &str = "polyglot";

pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, provider: &str) -> Result<Entry, StoreError> {
        Entry::new(&self.service, provider).map_err(|e| backend_error("open", provider, e))
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

// keyring errors describe the platform failure, never the password
fn backend_error(action: &str, provider: &str, err: keyring::Error) -> StoreError {
    StoreError::Backend(format!("failed to {} entry for {}: {}", action, provider, err))
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, provider: &str) -> Result<Option<String>, StoreError> {
        match self.entry(provider)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(backend_error("read", provider, e)),
        }
    }

    fn save(&self, provider: &str, secret: &str) -> Result<(), StoreError> {
        // set_password replaces an existing item in place
        self.entry(provider)?
            .set_password(secret)
            .map_err(|e| backend_error("write", provider, e))?;
        tracing::info!(provider, "credential saved");
        Ok(())
    }

    fn delete(&self, provider: &str) -> Result<(), StoreError> {
        match self.entry(provider)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(backend_error("delete", provider, e)),
        }
    }
}
