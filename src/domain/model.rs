use crate::domain::error::{ErrorKind, TranslateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source language value meaning "let the provider detect it".
pub const AUTO_LANGUAGE: &str = "auto";

// 支持的翻译服务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    OpenAi,
    Qwen,
    DeepL,
    Google,
}

impl ProviderKind {
    /// Declaration order, also the default order of the active adapter list.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Qwen,
        ProviderKind::DeepL,
        ProviderKind::Google,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Qwen => "Qwen",
            ProviderKind::DeepL => "DeepL",
            ProviderKind::Google => "Google",
        }
    }

    /// Key under which the provider's secret is stored.
    pub fn credential_key(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Qwen => "qwen",
            ProviderKind::DeepL => "deepl",
            ProviderKind::Google => "google",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderKind {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ProviderKind::ALL
            .into_iter()
            .find(|p| p.credential_key() == wanted || p.display_name().to_lowercase() == wanted)
            .or(match wanted.as_str() {
                "dashscope" | "tongyi" => Some(ProviderKind::Qwen),
                "chatgpt" | "gpt" => Some(ProviderKind::OpenAi),
                _ => None,
            })
            .ok_or_else(|| TranslateError::InvalidRequest(format!("Unknown provider: {}", s)))
    }
}

/// One text to translate, built per round and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    text: String,
    source_language: String,
    target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TranslateError::InvalidRequest(
                "Text to translate is empty".to_string(),
            ));
        }

        let source_language = source_language.into().trim().to_string();
        let source_language = if source_language.is_empty() {
            AUTO_LANGUAGE.to_string()
        } else {
            source_language
        };

        let target_language = target_language.into().trim().to_string();
        if target_language.is_empty() {
            return Err(TranslateError::InvalidRequest(
                "Target language is empty".to_string(),
            ));
        }

        Ok(Self {
            text,
            source_language,
            target_language,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn is_auto_source(&self) -> bool {
        self.source_language.eq_ignore_ascii_case(AUTO_LANGUAGE)
    }
}

// 单个服务的翻译结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub provider: String,
    /// Translated text, or the error message when `is_error` is set.
    pub text: String,
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl TranslationOutcome {
    pub fn success(provider: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            text: text.into(),
            is_error: false,
            error_kind: None,
        }
    }

    pub fn failure(provider: impl Into<String>, error: &TranslateError) -> Self {
        Self {
            provider: provider.into(),
            text: error.to_string(),
            is_error: true,
            error_kind: Some(error.kind()),
        }
    }

    pub fn from_result(provider: impl Into<String>, result: Result<String, TranslateError>) -> Self {
        match result {
            Ok(text) => Self::success(provider, text),
            Err(e) => Self::failure(provider, &e),
        }
    }
}

/// Successes first, failures last. The sort is stable, so each group keeps
/// the order in which the adapters were declared.
pub fn sort_outcomes(outcomes: &mut [TranslationOutcome]) {
    outcomes.sort_by_key(|o| o.is_error);
}
