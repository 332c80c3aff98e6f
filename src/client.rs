//! High-level client — `Delphinium`.
//!
//! Wraps `PhloxHttp` and decodes every response into the typed records in
//! `domain`. Each method is one request and one decode, with no state kept
//! between calls.

use crate::domain::galleryinfo::Galleryinfo;
use crate::domain::image::FilesResponse;
use crate::domain::info::wire::{ListResponse, SearchResponse};
use crate::domain::info::{Info, ListResult, SearchResult};
use crate::error::{DecodeError, SdkError};
use crate::http::PhloxHttp;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Offset of the first page of search results.
pub const DEFAULT_SEARCH_OFFSET: u64 = 1;

/// The primary entry point for the Phlox API.
#[derive(Debug, Clone)]
pub struct Delphinium {
    pub(crate) http: PhloxHttp,
}

impl Delphinium {
    pub fn builder() -> DelphiniumBuilder {
        DelphiniumBuilder::default()
    }

    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).build()
    }

    /// Wrap an existing transport.
    pub fn from_http(http: PhloxHttp) -> Self {
        Self { http }
    }

    /// The underlying transport, for raw JSON access.
    pub fn http(&self) -> &PhloxHttp {
        &self.http
    }

    /// Release this handle. Clones keep the shared session open.
    pub fn close(self) {
        self.http.close();
    }

    // ── Hitomi ───────────────────────────────────────────────────────────

    /// Full detail record for gallery `index`.
    pub async fn galleryinfo(&self, index: u64) -> Result<Galleryinfo, SdkError> {
        let raw = self.http.get_galleryinfo(index).await?;
        Ok(decode("galleryinfo", raw)?)
    }

    /// File identifiers for the pages of gallery `index`, in page order.
    pub async fn image(&self, index: u64) -> Result<Vec<String>, SdkError> {
        let raw = self.http.get_image(index).await?;
        let resp: FilesResponse = decode("image", raw)?;
        Ok(resp.into())
    }

    /// Search with `query` terms (e.g. `female:sole_female`), starting at
    /// `offset`.
    pub async fn search(&self, query: &[String], offset: u64) -> Result<SearchResult, SdkError> {
        let raw = self.http.post_search(query, offset).await?;
        let resp: SearchResponse = decode("search", raw)?;
        Ok(resp.into())
    }

    /// First page of search results.
    pub async fn search_first(&self, query: &[String]) -> Result<SearchResult, SdkError> {
        self.search(query, DEFAULT_SEARCH_OFFSET).await
    }

    /// One random gallery matching `query`.
    pub async fn random(&self, query: &[String]) -> Result<Info, SdkError> {
        let raw = self.http.get_random(query).await?;
        Ok(decode("random", raw)?)
    }

    /// Summary record for gallery `index`.
    pub async fn info(&self, index: u64) -> Result<Info, SdkError> {
        let raw = self.http.get_info(index).await?;
        Ok(decode("info", raw)?)
    }

    /// Page `index` of the gallery listing.
    pub async fn list(&self, index: u64) -> Result<ListResult, SdkError> {
        let raw = self.http.get_list(index).await?;
        let resp: ListResponse = decode("list", raw)?;
        Ok(resp.into())
    }
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, raw: Value) -> Result<T, DecodeError> {
    serde_json::from_value(raw).map_err(|e| {
        tracing::debug!(endpoint, error = %e, "Phlox response did not match schema");
        DecodeError::new(endpoint, e)
    })
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DelphiniumBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl Default for DelphiniumBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: None,
            client: None,
        }
    }
}

impl DelphiniumBuilder {
    /// Builder whose base URL comes from `PHLOX_BASE_URL`, falling back to
    /// `DEFAULT_API_URL`.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(crate::network::BASE_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Whole-request timeout. Unset means reqwest's default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the default user agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Reuse an existing `reqwest::Client` instead of building one.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Delphinium, SdkError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| SdkError::Config(format!("invalid base url {:?}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SdkError::Config(format!(
                "unsupported scheme {:?} in base url",
                url.scheme()
            )));
        }

        let client = match (self.client, self.timeout) {
            (Some(_), Some(_)) => {
                return Err(SdkError::Config(
                    "timeout cannot be applied to a caller-supplied client".to_string(),
                ))
            }
            (Some(client), None) => client,
            (None, timeout) => {
                let mut builder = reqwest::Client::builder();
                if let Some(t) = timeout {
                    builder = builder.timeout(t);
                }
                builder.build().map_err(crate::error::HttpError::from)?
            }
        };

        let mut http = PhloxHttp::with_client(&self.base_url, client);
        if let Some(ua) = self.user_agent {
            http.set_user_agent(ua);
        }
        Ok(Delphinium { http })
    }
}
