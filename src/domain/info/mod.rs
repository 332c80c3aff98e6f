//! Info domain — gallery summaries returned by info, list, random and search.

mod convert;
pub mod wire;

use crate::domain::tag::Tag;
use crate::domain::Entity;
use crate::shared::serde_util::{null_as_default, string_or_int};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Summary record describing one gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(with = "string_or_int")]
    pub id: u64,
    pub title: String,
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub artist: Vec<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub group: Vec<String>,
    /// Gallery type (`manga`, `doujinshi`, `artistcg`, ...). `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub series: Vec<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub character: Vec<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub tags: Vec<Tag>,
    pub date: String,
}

impl Info {
    /// `date` parsed as a timestamp, if it is in a known format.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        crate::shared::parse_date(&self.date)
    }
}

impl Entity for Info {}

/// One page of the gallery listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    pub items: Vec<Info>,
    /// Total number of galleries known to the server.
    pub total: u64,
}

impl ListResult {
    pub fn into_parts(self) -> (Vec<Info>, u64) {
        (self.items, self.total)
    }
}

/// One page of search hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<Info>,
    /// Total number of galleries matching the query.
    pub count: u64,
}

impl SearchResult {
    pub fn into_parts(self) -> (Vec<Info>, u64) {
        (self.items, self.count)
    }
}
