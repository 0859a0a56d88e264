use crate::domain::error::AppError;
use crate::domain::model::ProviderKind;
use crate::domain::traits::{CredentialStore, HttpTransport, Translator};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{create_client, ReqwestTransport};
use crate::infrastructure::providers::build_translator;
use crate::infrastructure::storage::{EnvCredentialStore, KeyringCredentialStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transport: Arc<dyn HttpTransport>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    /// Production wiring: reqwest transport, OS keyring behind env overrides.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = create_client(config.http_proxy.as_deref())?;
        let keyring: Arc<dyn CredentialStore> = Arc::new(KeyringCredentialStore::new());

        Ok(Self::with_parts(
            config,
            Arc::new(ReqwestTransport::new(client)),
            Arc::new(EnvCredentialStore::new(keyring)),
        ))
    }

    pub fn with_parts(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            credentials,
        }
    }

    /// Adapters for one round. An explicit selection wins over the enabled
    /// flags in the config; duplicates are dropped so every name is unique.
    pub fn translators(&self, only: &[ProviderKind]) -> Vec<Arc<dyn Translator>> {
        let kinds = if only.is_empty() {
            self.config.providers.enabled()
        } else {
            let mut kinds: Vec<ProviderKind> = Vec::with_capacity(only.len());
            for kind in only {
                if !kinds.contains(kind) {
                    kinds.push(*kind);
                }
            }
            kinds
        };

        kinds
            .into_iter()
            .map(|kind| {
                build_translator(
                    kind,
                    Arc::clone(&self.transport),
                    Arc::clone(&self.credentials),
                    self.config.providers.get(kind).clone(),
                )
            })
            .collect()
    }
}
