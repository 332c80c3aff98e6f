//! HTTP transport layer — `PhloxHttp`.

pub mod client;

pub use client::PhloxHttp;
pub use reqwest::Method;
