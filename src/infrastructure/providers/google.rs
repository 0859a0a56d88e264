use super::{decode, envelope_message, finish, require_credential, to_body};
use crate::domain::error::TranslateError;
use crate::domain::language::google_code;
use crate::domain::model::{ProviderKind, TranslationRequest};
use crate::domain::traits::{CredentialStore, HttpRequest, HttpTransport, Translator};
use crate::infrastructure::config::ProviderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// Google Translate v2 request/response structures
#[derive(Serialize, Debug)]
struct GoogleRequest<'a> {
    q: &'a str,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    format: &'static str,
}

#[derive(Deserialize, Debug)]
struct GoogleResponse {
    data: Option<GoogleData>,
}

#[derive(Deserialize, Debug)]
struct GoogleData {
    #[serde(default)]
    translations: Vec<GoogleTranslation>,
}

#[derive(Deserialize, Debug)]
struct GoogleTranslation {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Google Cloud Translation (v2, API key auth)
pub struct GoogleTranslator {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    settings: ProviderConfig,
}

impl GoogleTranslator {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
        settings: ProviderConfig,
    ) -> Self {
        Self {
            transport,
            credentials,
            settings,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let api_key = require_credential(self.credentials.as_ref(), self.kind())?;

        let payload = GoogleRequest {
            q: request.text(),
            target: google_code(request.target_language()),
            source: (!request.is_auto_source()).then(|| google_code(request.source_language())),
            format: "text",
        };

        let http_request = HttpRequest::post(
            self.settings.endpoint_or(DEFAULT_ENDPOINT),
            to_body(&payload)?,
            self.settings.timeout_or(DEFAULT_TIMEOUT),
        )
        .query("key", api_key);

        let response = self.transport.post_json(http_request).await?;
        if !response.is_success() {
            return Err(match envelope_message(&response.body, &["error", "message"]) {
                Some(message) => TranslateError::Api(format!("Google: {}", message)),
                None => TranslateError::Http(response.status),
            });
        }

        let parsed: GoogleResponse = decode(&response.body)?;
        let text = parsed
            .data
            .and_then(|d| d.translations.into_iter().next())
            .and_then(|t| t.translated_text);
        finish(text)
    }
}
