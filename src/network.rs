//! Network constants for the Phlox API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://heliotrope.saebasol.org";

/// Environment variable read by `DelphiniumBuilder::from_env`.
pub const BASE_URL_ENV: &str = "PHLOX_BASE_URL";

/// Path prefix shared by every Hitomi endpoint.
pub const HITOMI_PREFIX: &str = "/api/hitomi";

/// Version of the HTTP client library stamped into the user agent.
///
/// Must match the `reqwest` requirement in Cargo.toml; a unit test checks it.
pub const REQWEST_VERSION: &str = "0.12";

lazy_static::lazy_static! {
    /// Fixed user agent sent with every request.
    pub static ref USER_AGENT: String = format!(
        "Delphinium (https://github.com/Saebasol/Delphinium {}) Rust/{} reqwest/{}",
        env!("CARGO_PKG_VERSION"),
        env!("DELPHINIUM_RUSTC_VERSION"),
        REQWEST_VERSION,
    );
}
