//! Low-level HTTP client — `PhloxHttp`.
//!
//! One method per API endpoint. Returns the decoded JSON body untouched;
//! conversion to domain types happens in `Delphinium`.

use crate::domain::info::wire::{RandomRequest, SearchRequest};
use crate::error::HttpError;
use crate::network::{HITOMI_PREFIX, USER_AGENT};

use reqwest::{header, Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Low-level HTTP client for the Phlox REST API.
///
/// Owns one `reqwest::Client`. Clones share its connection pool, and the
/// pool is released when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct PhloxHttp {
    base_url: String,
    client: Client,
    user_agent: String,
}

impl PhloxHttp {
    /// Build a transport with its own connection pool.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Build a transport on top of an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            user_agent: USER_AGENT.clone(),
        }
    }

    pub(crate) fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Release this handle only. Clones, and any caller holding the
    /// `reqwest::Client` passed to `with_client`, keep the shared pool
    /// open until they are dropped too.
    pub fn close(self) {
        tracing::debug!(base_url = %self.base_url, "Closing Phlox HTTP session");
    }

    // ── Hitomi ───────────────────────────────────────────────────────────

    pub async fn get_galleryinfo(&self, index: u64) -> Result<Value, HttpError> {
        self.get(&format!("{}/galleryinfo/{}", HITOMI_PREFIX, index))
            .await
    }

    pub async fn get_image(&self, index: u64) -> Result<Value, HttpError> {
        self.get(&format!("{}/image/{}", HITOMI_PREFIX, index)).await
    }

    pub async fn get_info(&self, index: u64) -> Result<Value, HttpError> {
        self.get(&format!("{}/info/{}", HITOMI_PREFIX, index)).await
    }

    pub async fn get_list(&self, index: u64) -> Result<Value, HttpError> {
        self.get(&format!("{}/list/{}", HITOMI_PREFIX, index)).await
    }

    pub async fn get_random(&self, query: &[String]) -> Result<Value, HttpError> {
        let body = RandomRequest { query };
        self.post(&format!("{}/random", HITOMI_PREFIX), &body)
            .await
    }

    pub async fn post_search(&self, query: &[String], offset: u64) -> Result<Value, HttpError> {
        let body = SearchRequest { query, offset };
        self.post(&format!("{}/search", HITOMI_PREFIX), &body)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get(&self, path: &str) -> Result<Value, HttpError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, HttpError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Issue one request and decode the JSON body.
    ///
    /// The body is decoded whatever the status. Any status other than 200
    /// becomes `HttpError::Rejected` carrying the body's `message`.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Phlox request");

        let mut req = self
            .client
            .request(method, &url)
            .header(header::USER_AGENT, self.user_agent.as_str());

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let decoded: Value = resp.json().await?;

        if status != StatusCode::OK {
            let message = rejection_message(&decoded);
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                "Phlox rejected request: {}",
                message
            );
            return Err(HttpError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(status = status.as_u16(), url = %url, "Phlox response");
        Ok(decoded)
    }
}

/// The `message` field of an error body. Bodies without one are kept whole
/// so the status is never lost behind a decode failure.
fn rejection_message(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}
