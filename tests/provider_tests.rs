//! Provider adapter tests against a scripted transport

mod common;

use common::*;
use polyglot::domain::error::{ErrorKind, TranslateError};
use polyglot::domain::model::{ProviderKind, TranslationRequest};
use polyglot::domain::traits::{CredentialStore, HttpTransport};
use polyglot::infrastructure::config::ProviderConfig;
use polyglot::infrastructure::network::{create_client, ReqwestTransport};
use polyglot::infrastructure::providers::{build_translator, deepl};
use polyglot::infrastructure::storage::MemoryCredentialStore;
use polyglot::translate_all;
use polyglot::TranslationOutcome;
use std::sync::Arc;
use std::time::Duration;

fn request() -> TranslationRequest {
    TranslationRequest::new("good morning", "english", "chinese").unwrap()
}

#[tokio::test]
async fn missing_credential_fails_without_http_call() {
    let transport = Arc::new(FakeTransport::new().route("", ok_json(GOOGLE_OK)));
    let store = Arc::new(MemoryCredentialStore::new());

    for kind in ProviderKind::ALL {
        let err = translator(kind, &transport, &store)
            .translate(&request())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration, "{}", kind);
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn blank_credential_counts_as_missing() {
    let transport = Arc::new(FakeTransport::new().route("deepl", ok_json(DEEPL_OK)));
    let store = Arc::new(MemoryCredentialStore::with_secrets([("deepl", "   ")]));

    let err = translator(ProviderKind::DeepL, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn google_round_trip() {
    let transport = Arc::new(FakeTransport::new().route("googleapis", ok_json(GOOGLE_OK)));
    let store = all_keys();
    let google = translator(ProviderKind::Google, &transport, &store);

    let outcomes = translate_all(&request(), &[google]).await;
    assert_eq!(outcomes, vec![TranslationOutcome::success("Google", "你好")]);
}

#[tokio::test]
async fn google_request_shape() {
    let transport = Arc::new(FakeTransport::new().route("googleapis", ok_json(GOOGLE_OK)));
    let store = all_keys();

    translator(ProviderKind::Google, &transport, &store)
        .translate(&request())
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.query, vec![("key".to_string(), "google-test-key".to_string())]);
    assert!(sent.headers.is_empty());
    assert_eq!(sent.body["q"], "good morning");
    assert_eq!(sent.body["target"], "zh-CN");
    assert_eq!(sent.body["source"], "en");
    assert_eq!(sent.body["format"], "text");
    assert_eq!(sent.timeout, Duration::from_secs(15));
}

#[tokio::test]
async fn google_auto_source_is_omitted() {
    let transport = Arc::new(FakeTransport::new().route("googleapis", ok_json(GOOGLE_OK)));
    let store = all_keys();
    let req = TranslationRequest::new("bonjour", "auto", "Klingon").unwrap();

    translator(ProviderKind::Google, &transport, &store)
        .translate(&req)
        .await
        .unwrap();

    let sent = transport.last_request();
    assert!(sent.body.get("source").is_none());
    assert_eq!(sent.body["target"], "klingon");
}

#[tokio::test]
async fn google_error_envelope_is_api_error() {
    let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
    let transport = Arc::new(
        FakeTransport::new().route("googleapis", Reply::Status(400, body.to_string())),
    );
    let store = all_keys();

    let err = translator(ProviderKind::Google, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TranslateError::Api("Google: API key not valid. Please pass a valid API key.".to_string())
    );
}

#[tokio::test]
async fn google_missing_translations_is_no_result() {
    let transport = Arc::new(
        FakeTransport::new().route("googleapis", ok_json(r#"{"data":{"translations":[]}}"#)),
    );
    let store = all_keys();

    let err = translator(ProviderKind::Google, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::NoResult);
}

#[tokio::test]
async fn deepl_status_codes_map_to_api_messages() {
    let store = all_keys();
    let cases = [
        (401, "invalid deepl api key"),
        (429, "rate limited"),
        (456, "quota exceeded"),
    ];

    for (status, expected) in cases {
        let transport =
            Arc::new(FakeTransport::new().route("deepl", Reply::Status(status, String::new())));
        let err = translator(ProviderKind::DeepL, &transport, &store)
            .translate(&request())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api, "status {}", status);
        assert!(
            err.to_string().to_lowercase().contains(expected),
            "status {} gave {}",
            status,
            err
        );
    }
}

#[tokio::test]
async fn deepl_other_status_without_body_is_http() {
    let transport =
        Arc::new(FakeTransport::new().route("deepl", Reply::Status(503, "<html></html>".into())));
    let store = all_keys();

    let err = translator(ProviderKind::DeepL, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::Http(503));
}

#[tokio::test]
async fn deepl_request_shape() {
    let transport = Arc::new(FakeTransport::new().route("deepl", ok_json(DEEPL_OK)));
    let store = all_keys();

    let text = translator(ProviderKind::DeepL, &transport, &store)
        .translate(&request())
        .await
        .unwrap();
    assert_eq!(text, "早上好");

    let sent = transport.last_request();
    assert_eq!(sent.url, deepl::PRO_ENDPOINT);
    assert_eq!(sent.body["text"], serde_json::json!(["good morning"]));
    assert_eq!(sent.body["target_lang"], "ZH");
    assert_eq!(sent.body["source_lang"], "EN");
    assert!(sent
        .headers
        .contains(&("Authorization".to_string(), "DeepL-Auth-Key deepl-test-key".to_string())));
}

#[tokio::test]
async fn deepl_free_key_uses_free_endpoint() {
    let transport = Arc::new(FakeTransport::new().route("deepl", ok_json(DEEPL_OK)));
    let store = Arc::new(MemoryCredentialStore::with_secrets([("deepl", "abc-123:fx")]));

    translator(ProviderKind::DeepL, &transport, &store)
        .translate(&request())
        .await
        .unwrap();
    assert_eq!(transport.last_request().url, deepl::FREE_ENDPOINT);
}

#[tokio::test]
async fn deepl_source_uses_base_language() {
    let transport = Arc::new(FakeTransport::new().route("deepl", ok_json(DEEPL_OK)));
    let store = all_keys();
    let deepl = translator(ProviderKind::DeepL, &transport, &store);

    let from_traditional =
        TranslationRequest::new("早安", "traditional chinese", "english").unwrap();
    deepl.translate(&from_traditional).await.unwrap();
    let sent = transport.last_request();
    assert_eq!(sent.body["source_lang"], "ZH");
    assert_eq!(sent.body["target_lang"], "EN");

    let from_portuguese = TranslationRequest::new("bom dia", "portuguese", "traditional chinese").unwrap();
    deepl.translate(&from_portuguese).await.unwrap();
    let sent = transport.last_request();
    assert_eq!(sent.body["source_lang"], "PT");
    assert_eq!(sent.body["target_lang"], "ZH-HANT");
}

#[tokio::test]
async fn debug_output_hides_api_keys() {
    let transport = Arc::new(
        FakeTransport::new()
            .route("googleapis", ok_json(GOOGLE_OK))
            .route("deepl", ok_json(DEEPL_OK))
            .route("openai.com", ok_json(OPENAI_OK)),
    );
    let store = all_keys();

    for kind in [ProviderKind::Google, ProviderKind::DeepL, ProviderKind::OpenAi] {
        translator(kind, &transport, &store)
            .translate(&request())
            .await
            .unwrap();
    }

    assert_eq!(transport.call_count(), 3);
    for sent in transport.requests() {
        let printed = format!("{:?}", sent);
        for secret in ["google-test-key", "deepl-test-key", "sk-openai-test"] {
            assert!(!printed.contains(secret), "{} leaked in {}", secret, printed);
        }
    }
}

#[tokio::test]
async fn openai_extracts_first_choice() {
    let transport = Arc::new(FakeTransport::new().route("openai.com", ok_json(OPENAI_OK)));
    let store = all_keys();

    let text = translator(ProviderKind::OpenAi, &transport, &store)
        .translate(&request())
        .await
        .unwrap();
    assert_eq!(text, "早上好");

    let sent = transport.last_request();
    let messages = sent.body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    assert!(messages[0]["content"]
        .as_str()
        .unwrap()
        .contains("into Simplified Chinese"));
    assert_eq!(sent.body["model"], "gpt-4o-mini");
    assert!(sent
        .headers
        .contains(&("Authorization".to_string(), "Bearer sk-openai-test".to_string())));
    assert_eq!(sent.timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn openai_error_envelope_and_bare_status() {
    let store = all_keys();

    let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
    let transport =
        Arc::new(FakeTransport::new().route("openai.com", Reply::Status(401, body.into())));
    let err = translator(ProviderKind::OpenAi, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TranslateError::Api("OpenAI: Incorrect API key provided".to_string())
    );

    let transport =
        Arc::new(FakeTransport::new().route("openai.com", Reply::Status(500, String::new())));
    let err = translator(ProviderKind::OpenAi, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::Http(500));
}

#[tokio::test]
async fn openai_empty_choices_is_no_result() {
    let transport =
        Arc::new(FakeTransport::new().route("openai.com", ok_json(r#"{"choices":[]}"#)));
    let store = all_keys();

    let err = translator(ProviderKind::OpenAi, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::NoResult);
}

#[tokio::test]
async fn undecodable_success_body_is_unknown() {
    let transport = Arc::new(FakeTransport::new().route("openai.com", ok_json("not json")));
    let store = all_keys();

    let err = translator(ProviderKind::OpenAi, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn qwen_sends_translator_persona() {
    let transport = Arc::new(FakeTransport::new().route("dashscope", ok_json(QWEN_OK)));
    let store = all_keys();

    let text = translator(ProviderKind::Qwen, &transport, &store)
        .translate(&request())
        .await
        .unwrap();
    assert_eq!(text, "早上好");

    let sent = transport.last_request();
    let messages = sent.body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert!(messages[0]["content"]
        .as_str()
        .unwrap()
        .contains("professional translator"));
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(sent.body["model"], "qwen-turbo");
}

#[tokio::test]
async fn settings_override_endpoint_model_and_timeout() {
    let transport = Arc::new(FakeTransport::new().route("localhost", ok_json(QWEN_OK)));
    let store = all_keys();
    let settings = ProviderConfig {
        endpoint: Some("http://localhost:8080/v1/chat/completions".to_string()),
        model: Some("qwen-max".to_string()),
        timeout_secs: Some(5),
        ..ProviderConfig::default()
    };

    let dyn_transport: Arc<dyn HttpTransport> = transport.clone();
    let dyn_store: Arc<dyn CredentialStore> = store.clone();
    build_translator(ProviderKind::Qwen, dyn_transport, dyn_store, settings)
        .translate(&request())
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.url, "http://localhost:8080/v1/chat/completions");
    assert_eq!(sent.body["model"], "qwen-max");
    assert_eq!(sent.timeout, Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn hung_request_is_network_error() {
    let transport = Arc::new(FakeTransport::new().route("deepl", Reply::Hang));
    let store = all_keys();

    let err = translator(ProviderKind::DeepL, &transport, &store)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn malformed_endpoint_is_invalid_request() {
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(create_client(None).unwrap()));
    let store: Arc<dyn CredentialStore> = all_keys();
    let settings = ProviderConfig {
        endpoint: Some("not a url".to_string()),
        ..ProviderConfig::default()
    };

    let err = build_translator(ProviderKind::Google, transport, store, settings)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(!err.to_string().contains("google-test-key"));
}

#[tokio::test]
async fn malformed_endpoint_error_omits_url() {
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(create_client(None).unwrap()));
    let store: Arc<dyn CredentialStore> = all_keys();
    let settings = ProviderConfig {
        endpoint: Some("http://user:secret-in-url@[::1/translate".to_string()),
        ..ProviderConfig::default()
    };

    let err = build_translator(ProviderKind::DeepL, transport, store, settings)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(!err.to_string().contains("secret-in-url"), "{}", err);
}

#[tokio::test]
async fn silent_server_times_out_as_network_error() {
    // Connections complete in the backlog but never get an answer
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::new(create_client(None).unwrap()));
    let store: Arc<dyn CredentialStore> = all_keys();
    let settings = ProviderConfig {
        endpoint: Some(format!("http://127.0.0.1:{}/language/translate/v2", port)),
        timeout_secs: Some(1),
        ..ProviderConfig::default()
    };

    let started = std::time::Instant::now();
    let err = build_translator(ProviderKind::Google, transport, store, settings)
        .translate(&request())
        .await
        .unwrap_err();
    assert_eq!(err, TranslateError::Network("Request timed out".to_string()));
    assert!(started.elapsed() < Duration::from_secs(10));
    drop(listener);
}
