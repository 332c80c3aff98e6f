//! Shared helpers used across all domain modules.

pub mod serde_util;

use chrono::{DateTime, FixedOffset};

/// Hitomi's timestamp formats, tried in order after RFC 3339.
const HITOMI_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// Parses a gallery `date` string.
///
/// Accepts RFC 3339 (`2021-06-14T03:32:00+09:00`) and Hitomi's native
/// `2021-06-14 03:32:00-05`. Returns `None` for anything else.
pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    HITOMI_DATE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
}
