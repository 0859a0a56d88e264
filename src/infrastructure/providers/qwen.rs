//! Qwen (Tongyi Qianwen) through DashScope's OpenAI-compatible endpoint.
use super::chat::{complete, translation_prompt, ChatMessage, ChatRequest};
use super::require_credential;
use crate::domain::error::TranslateError;
use crate::domain::model::{ProviderKind, TranslationRequest};
use crate::domain::traits::{CredentialStore, HttpTransport, Translator};
use crate::infrastructure::config::ProviderConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "qwen-turbo";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You are a professional translator. Translate accurately and \
naturally, keep the original formatting, and output only the translated text.";

pub struct QwenTranslator {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    settings: ProviderConfig,
}

impl QwenTranslator {
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
impl Translator for QwenTranslator {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Qwen
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let api_key = require_credential(self.credentials.as_ref(), self.kind())?;

        let payload = ChatRequest {
            model: self.settings.model_or(DEFAULT_MODEL),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(translation_prompt(request)),
            ],
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
