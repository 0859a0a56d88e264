// In-memory credential store using DashMap
use crate::domain::error::StoreError;
use crate::domain::traits::CredentialStore;
use dashmap::DashMap;

/// Thread-safe in-memory credential store, for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryCredentialStore {
    map: DashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from `(provider, secret)` pairs.
    pub fn with_secrets<'a>(secrets: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (provider, secret) in secrets {
            store.map.insert(provider.to_string(), secret.to_string());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, provider: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(provider).map(|entry| entry.value().clone()))
    }

    fn save(&self, provider: &str, secret: &str) -> Result<(), StoreError> {
        self.map.insert(provider.to_string(), secret.to_string());
        Ok(())
    }

    fn delete(&self, provider: &str) -> Result<(), StoreError> {
        self.map.remove(provider);
        Ok(())
    }
}
