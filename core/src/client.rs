//! `JsonHttpClient`: the `JsonService` implementation.
//!
//! # Design
//! The client holds only its base URL. Every call opens its own transport
//! session (a fresh `ureq::Agent` for blocking calls, a fresh
//! `reqwest::Client` for async ones) and drops it before returning, so
//! concurrent calls share nothing and need no locking.
//!
//! Status handling lives in `send`/`send_async`, which return a `Reply`.
//! The `JsonService` methods are thin wrappers that collapse non-success
//! replies into the default value.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, JsonRequest};
use crate::reply::Reply;
use crate::service::JsonService;

/// JSON client for a web service rooted at `url_service`.
#[derive(Debug, Clone, Default)]
pub struct JsonHttpClient {
    url_service: String,
}

impl JsonHttpClient {
    pub fn new(url_service: impl Into<String>) -> Self {
        Self {
            url_service: url_service.into(),
        }
    }

    /// `url_service` followed by `path`, verbatim. No separator is inserted
    /// and nothing is validated.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url_service)
    }

    /// Execute `request` on the calling thread.
    pub fn send<T: DeserializeOwned>(&self, request: JsonRequest) -> Result<Reply<T>> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let mut response = match (request.method, &request.body) {
            (HttpMethod::Get, _) => with_headers(agent.get(&request.url), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(&request.url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(agent.post(&request.url), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(agent.put(&request.url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(agent.put(&request.url), &request.headers).send_empty()
            }
        }?;

        let status = response.status();
        debug!(method = %request.method, url = %request.url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Ok(non_success(status.as_u16()));
        }

        // Same as the async transport: no cap on the body size.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        decode(&bytes).map(Reply::Success)
    }

    /// Execute `request`, suspending while waiting for the response head and
    /// again while reading the body.
    pub async fn send_async<T: DeserializeOwned>(&self, request: JsonRequest) -> Result<Reply<T>> {
        let client = reqwest::Client::builder().build()?;

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };
        let mut builder = client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body.into_string());
        }

        let response = builder.send().await?;

        let status = response.status();
        debug!(method = %request.method, url = %request.url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Ok(non_success(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        decode(&bytes).map(Reply::Success)
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn non_success<T>(status: u16) -> Reply<T> {
    debug!(status, "non-success status, body not read");
    Reply::NonSuccess { status }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::Deserialization(e.to_string()))
}

#[async_trait]
impl JsonService for JsonHttpClient {
    fn url_service(&self) -> &str {
        &self.url_service
    }

    fn set_url_service(&mut self, url: impl Into<String>) {
        self.url_service = url.into();
    }

    fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.send(JsonRequest::get(url))
            .map(Reply::into_value_or_default)
    }

    fn post<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send(JsonRequest::post(url, body)?)
            .map(Reply::into_value_or_default)
    }

    fn put<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send(JsonRequest::put(url, body)?)
            .map(Reply::into_value_or_default)
    }

    async fn get_async<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        self.send_async(JsonRequest::get(url))
            .await
            .map(Reply::into_value_or_default)
    }

    async fn post_async<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + Sync + ?Sized,
    {
        let request = JsonRequest::post(url, body)?;
        self.send_async(request)
            .await
            .map(Reply::into_value_or_default)
    }

    async fn put_async<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
        B: Serialize + Sync + ?Sized,
    {
        let request = JsonRequest::put(url, body)?;
        self.send_async(request)
            .await
            .map(Reply::into_value_or_default)
    }
}
