//! # Delphinium
//!
//! An async Rust SDK for the Phlox (Heliotrope) gallery-metadata API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Typed records decoded from Phlox responses
//! 2. **HTTP API** — `PhloxHttp`, one method per endpoint, raw JSON out
//! 3. **High-Level Client** — `Delphinium`, typed records out
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use delphinium::prelude::*;
//!
//! let client = Delphinium::builder()
//!     .base_url("https://heliotrope.saebasol.org")
//!     .build()?;
//!
//! let info = client.info(1_234_567).await?;
//! let page = client.list(1).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared serde and date helpers.
pub mod shared;

/// Domain records: galleryinfo, info, tags, image lists.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `Delphinium` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::domain::galleryinfo::{
        Artist, Character, File, Galleryinfo, Group, Language, Parody,
    };
    pub use crate::domain::info::{Info, ListResult, SearchResult};
    pub use crate::domain::tag::{Tag, TagKind};
    pub use crate::domain::Entity;

    // Errors
    pub use crate::error::{DecodeError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::client::{Delphinium, DelphiniumBuilder, DEFAULT_SEARCH_OFFSET};
    #[cfg(feature = "http")]
    pub use crate::http::PhloxHttp;
}
