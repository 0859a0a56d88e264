// HTTP transport backed by reqwest
use crate::domain::error::{AppError, TranslateError};
use crate::domain::traits::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::{Client, Proxy, Url};
use std::time::{Duration, Instant};

/// Create the shared HTTP client
pub fn create_client(http_proxy: Option<&str>) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(concat!("polyglot/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = http_proxy.filter(|p| !p.trim().is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn classify(err: reqwest::Error) -> TranslateError {
    if err.is_builder() {
        TranslateError::InvalidRequest(err.without_url().to_string())
    } else if err.is_timeout() {
        TranslateError::Network("Request timed out".to_string())
    } else {
        // without_url: the Google key travels in the query string
        TranslateError::Network(err.without_url().to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TranslateError> {
        // The endpoint may carry credentials, so only the parse error is reported
        let mut url = Url::parse(&request.url)
            .map_err(|e| TranslateError::InvalidRequest(format!("Bad endpoint URL: {}", e)))?;
        let target = format!("{}{}", url.host_str().unwrap_or_default(), url.path());
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        let mut builder = self
            .client
            .post(url)
            .timeout(request.timeout)
            .json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?;

        tracing::debug!(
            url = %target,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "POST finished"
        );

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
