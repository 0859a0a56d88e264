//! OpenAI-compatible chat-completion schema, shared by the OpenAI and
//! DashScope (Qwen) adapters.

use super::{decode, envelope_message, finish, to_body};
use crate::domain::error::TranslateError;
use crate::domain::language::prompt_name;
use crate::domain::model::TranslationRequest;
use crate::domain::traits::{HttpRequest, HttpTransport};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Debug)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

/// The single user message asking for a translation.
pub(crate) fn translation_prompt(request: &TranslationRequest) -> String {
    let target = prompt_name(request.target_language());
    if request.is_auto_source() {
        format!(
            "Translate the following text into {}. Reply with the translation only.\n\n{}",
            target,
            request.text()
        )
    } else {
        format!(
            "Translate the following text from {} into {}. Reply with the translation only.\n\n{}",
            prompt_name(request.source_language()),
            target,
            request.text()
        )
    }
}

/// POST a chat completion and pull out the first choice's content.
pub(crate) async fn complete(
    transport: &dyn HttpTransport,
    provider: &str,
    endpoint: &str,
    api_key: &str,
    payload: &ChatRequest<'_>,
    timeout: Duration,
) -> Result<String, TranslateError> {
    let request = HttpRequest::post(endpoint, to_body(payload)?, timeout)
        .header("Authorization", format!("Bearer {}", api_key));

    let response = transport.post_json(request).await?;

    if !response.is_success() {
        return Err(match envelope_message(&response.body, &["error", "message"]) {
            Some(message) => TranslateError::Api(format!("{}: {}", provider, message)),
            None => TranslateError::Http(response.status),
        });
    }

    let parsed: ChatResponse = decode(&response.body)?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content);
    finish(content)
}
