#![allow(dead_code)]

use async_trait::async_trait;
use polyglot::domain::error::TranslateError;
use polyglot::domain::model::ProviderKind;
use polyglot::domain::traits::{CredentialStore, HttpRequest, HttpResponse, HttpTransport, Translator};
use polyglot::infrastructure::config::ProviderConfig;
use polyglot::infrastructure::providers::build_translator;
use polyglot::infrastructure::storage::MemoryCredentialStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned reply for requests whose URL contains a given fragment.
#[derive(Clone)]
pub enum Reply {
    Status(u16, String),
    /// Never answers; the request's own timeout fires.
    Hang,
}

pub fn ok_json(body: &str) -> Reply {
    Reply::Status(200, body.to_string())
}

#[derive(Default)]
pub struct FakeTransport {
    routes: Vec<(String, Reply)>,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url_fragment: &str, reply: Reply) -> Self {
        self.routes.push((url_fragment.to_string(), reply));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Reply::Status(404, String::new()));

        match reply {
            Reply::Status(status, body) => Ok(HttpResponse {
                status,
                body: body.into_bytes(),
            }),
            Reply::Hang => {
                let _ = tokio::time::timeout(request.timeout, std::future::pending::<()>()).await;
                Err(TranslateError::Network("Request timed out".to_string()))
            }
        }
    }
}

pub fn all_keys() -> Arc<MemoryCredentialStore> {
    Arc::new(MemoryCredentialStore::with_secrets([
        ("openai", "sk-openai-test"),
        ("qwen", "sk-qwen-test"),
        ("deepl", "deepl-test-key"),
        ("google", "google-test-key"),
    ]))
}

pub fn translator(
    kind: ProviderKind,
    transport: &Arc<FakeTransport>,
    store: &Arc<MemoryCredentialStore>,
) -> Arc<dyn Translator> {
    let transport: Arc<dyn HttpTransport> = transport.clone();
    let store: Arc<dyn CredentialStore> = store.clone();
    build_translator(kind, transport, store, ProviderConfig::default())
}

pub const OPENAI_OK: &str =
    r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":" 早上好 \n"}}]}"#;
pub const QWEN_OK: &str =
    r#"{"choices":[{"message":{"role":"assistant","content":"早上好"}}],"model":"qwen-turbo"}"#;
pub const DEEPL_OK: &str =
    r#"{"translations":[{"detected_source_language":"EN","text":"早上好"}]}"#;
pub const GOOGLE_OK: &str = r#"{"data":{"translations":[{"translatedText":"你好"}]}}"#;
