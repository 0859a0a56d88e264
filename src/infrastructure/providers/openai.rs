use super::chat::{complete, translation_prompt, ChatMessage, ChatRequest};
use super::require_credential;
use crate::domain::error::TranslateError;
use crate::domain::model::{ProviderKind, TranslationRequest};
use crate::domain::traits::{CredentialStore, HttpTransport, Translator};
use crate::infrastructure::config::ProviderConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI chat-completion translator
pub struct OpenAiTranslator {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    settings: ProviderConfig,
}

impl OpenAiTranslator {
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
impl Translator for OpenAiTranslator {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let api_key = require_credential(self.credentials.as_ref(), self.kind())?;

        let payload = ChatRequest {
            model: self.settings.model_or(DEFAULT_MODEL),
            messages: vec![ChatMessage::user(translation_prompt(request))],
            temperature: 0.3,
        };

        complete(
            self.transport.as_ref(),
            self.name(),
            self.settings.endpoint_or(DEFAULT_ENDPOINT),
            &api_key,
            &payload,
            self.settings.timeout_or(DEFAULT_TIMEOUT),
        )
        .await
    }
}
