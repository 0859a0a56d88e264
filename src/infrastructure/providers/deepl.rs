use super::{decode, envelope_message, finish, require_credential, to_body};
use crate::domain::error::TranslateError;
use crate::domain::language::{deepl_code, deepl_source_code};
use crate::domain::model::{ProviderKind, TranslationRequest};
use crate::domain::traits::{CredentialStore, HttpRequest, HttpTransport, Translator};
use crate::infrastructure::config::ProviderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const PRO_ENDPOINT: &str = "https://api.deepl.com/v2/translate";
pub const FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// DeepL API request/response structures
#[derive(Serialize, Debug)]
struct DeepLRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

#[derive(Deserialize, Debug)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize, Debug)]
struct DeepLTranslation {
    text: Option<String>,
}

pub struct DeepLTranslator {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    settings: ProviderConfig,
}

impl DeepLTranslator {
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

/// Free-plan keys end in ":fx" and only work against the free host.
fn default_endpoint(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        FREE_ENDPOINT
    } else {
        PRO_ENDPOINT
    }
}

fn status_error(status: u16, body: &[u8]) -> TranslateError {
    let message = match status {
        401 | 403 => "Invalid DeepL API key (check api key)",
        429 => "Too many requests, rate limited by DeepL",
        456 => "Quota exceeded for this billing period",
        _ => {
            return match envelope_message(body, &["message"]) {
                Some(message) => TranslateError::Api(format!("DeepL: {}", message)),
                None => TranslateError::Http(status),
            }
        }
    };
    TranslateError::Api(format!("DeepL {}: {}", status, message))
}

#[async_trait]
impl Translator for DeepLTranslator {
    fn kind(&self) -> ProviderKind {
        ProviderKind::DeepL
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let api_key = require_credential(self.credentials.as_ref(), self.kind())?;

        let payload = DeepLRequest {
            text: [request.text()],
            target_lang: deepl_code(request.target_language()),
            source_lang: (!request.is_auto_source())
                .then(|| deepl_source_code(request.source_language())),
        };

        let endpoint = self.settings.endpoint_or(default_endpoint(&api_key));
        let http_request = HttpRequest::post(
            endpoint,
            to_body(&payload)?,
            self.settings.timeout_or(DEFAULT_TIMEOUT),
        )
        .header("Authorization", format!("DeepL-Auth-Key {}", api_key));

        let response = self.transport.post_json(http_request).await?;
        if !response.is_success() {
            return Err(status_error(response.status, &response.body));
        }

        let parsed: DeepLResponse = decode(&response.body)?;
        finish(parsed.translations.into_iter().next().and_then(|t| t.text))
    }
}
