use crate::domain::error::{StoreError, TranslateError};
use crate::domain::model::{ProviderKind, TranslationRequest};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

const REDACTED: &str = "<redacted>";

/// Trait for translation services
///
/// One implementation per provider. Adapters hold no per-call state, so a
/// single instance can serve concurrent rounds.
#[async_trait]
pub trait Translator: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Name shown next to the result; unique within the active set.
    fn name(&self) -> &str {
        self.kind().display_name()
    }

    /// Translate a request, returning the trimmed translated text
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

/// Outbound JSON POST, built by an adapter and executed by a transport.
#[derive(Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: serde_json::Value,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>, body: serde_json::Value, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body,
            timeout,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

// Header and query values carry API keys, so only their names are printed
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<_> = self.headers.iter().map(|(name, _)| (name, REDACTED)).collect();
        let query: Vec<_> = self.query.iter().map(|(name, _)| (name, REDACTED)).collect();
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("query", &query)
            .field("body", &self.body)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP layer
///
/// Implementations classify their own failures: malformed URLs or requests
/// become `InvalidRequest`, everything else on the wire becomes `Network`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TranslateError>;
}

/// Trait for secret storage
///
/// Keyed by provider credential key. `Ok(None)` means "not configured".
pub trait CredentialStore: Send + Sync {
    fn get(&self, provider: &str) -> Result<Option<String>, StoreError>;

    /// Persist a secret, replacing any previous value
    fn save(&self, provider: &str, secret: &str) -> Result<(), StoreError>;

    /// Remove a secret. Removing an absent entry is not an error.
    fn delete(&self, provider: &str) -> Result<(), StoreError>;
}
