// Provider adapters
//
// All four follow the same shape: fetch the credential, map languages,
// POST one JSON body, then classify the response.
pub mod chat;
pub mod deepl;
pub mod google;
pub mod openai;
pub mod qwen;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;
pub use openai::OpenAiTranslator;
pub use qwen::QwenTranslator;

use crate::domain::error::TranslateError;
use crate::domain::model::ProviderKind;
use crate::domain::traits::{CredentialStore, HttpTransport, Translator};
use crate::infrastructure::config::ProviderConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Look up the provider's secret. Absent, empty or unreadable all mean the
/// provider is not usable.
pub(crate) fn require_credential(
    store: &dyn CredentialStore,
    kind: ProviderKind,
) -> Result<String, TranslateError> {
    match store.get(kind.credential_key()) {
        Ok(Some(secret)) if !secret.trim().is_empty() => Ok(secret.trim().to_string()),
        Ok(_) => Err(TranslateError::Configuration(format!(
            "{} API key not configured",
            kind
        ))),
        Err(e) => Err(TranslateError::Configuration(format!(
            "{} API key unavailable: {}",
            kind, e
        ))),
    }
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> Result<Value, TranslateError> {
    serde_json::to_value(payload).map_err(|e| TranslateError::InvalidRequest(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, TranslateError> {
    serde_json::from_slice(body).map_err(|e| TranslateError::Unknown(e.to_string()))
}

/// Walk an error body along `path` and return the string found there.
/// Envelope shapes vary between status codes, so this stays untyped.
pub(crate) fn envelope_message(body: &[u8], path: &[&str]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let found = path.iter().try_fold(&value, |v, key| v.get(*key))?;
    found
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Trim the translated text; an empty result counts as no result.
pub(crate) fn finish(text: Option<String>) -> Result<String, TranslateError> {
    text.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(TranslateError::NoResult)
}

/// Build one adapter of the given kind.
pub fn build_translator(
    kind: ProviderKind,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    settings: ProviderConfig,
) -> Arc<dyn Translator> {
    match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiTranslator::new(transport, credentials, settings)),
        ProviderKind::Qwen => Arc::new(QwenTranslator::new(transport, credentials, settings)),
        ProviderKind::DeepL => Arc::new(DeepLTranslator::new(transport, credentials, settings)),
        ProviderKind::Google => Arc::new(GoogleTranslator::new(transport, credentials, settings)),
    }
}
