use crate::domain::error::StoreError;
use crate::domain::traits::CredentialStore;
use std::sync::Arc;

/// Reads `POLYGLOT_<PROVIDER>_API_KEY` before falling back to the wrapped
/// store. Writes always go to the wrapped store.
pub struct EnvCredentialStore {
    inner: Arc<dyn CredentialStore>,
    prefix: String,
}

impl EnvCredentialStore {
    pub fn new(inner: Arc<dyn CredentialStore>) -> Self {
        Self::with_prefix(inner, "POLYGLOT")
    }

    pub fn with_prefix(inner: Arc<dyn CredentialStore>, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn variable_name(&self, provider: &str) -> String {
        format!("{}_{}_API_KEY", self.prefix, provider.to_uppercase())
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self, provider: &str) -> Result<Option<String>, StoreError> {
        match std::env::var(self.variable_name(provider)) {
            Ok(secret) if !secret.trim().is_empty() => Ok(Some(secret)),
            _ => self.inner.get(provider),
        }
    }

    fn save(&self, provider: &str, secret: &str) -> Result<(), StoreError> {
        self.inner.save(provider, secret)
    }

    fn delete(&self, provider: &str) -> Result<(), StoreError> {
        self.inner.delete(provider)
    }
}
