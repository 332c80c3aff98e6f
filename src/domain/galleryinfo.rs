//! Galleryinfo domain — the full detail record of one gallery.

use crate::domain::tag::Tag;
use crate::domain::Entity;
use crate::shared::serde_util::{lenient_bool, null_as_default, string_or_int};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ─── Nested records ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    pub artist: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    pub character: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub group: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parody {
    pub parody: String,
    pub url: String,
}

/// Another language edition of the same gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    #[serde(with = "string_or_int")]
    pub galleryid: u64,
    pub language_localname: String,
    pub name: String,
    pub url: String,
}

/// One page image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub hash: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, with = "lenient_bool")]
    pub hasavif: bool,
    #[serde(default, with = "lenient_bool")]
    pub haswebp: bool,
}

impl Entity for Artist {}
impl Entity for Character {}
impl Entity for Group {}
impl Entity for Parody {}
impl Entity for Language {}
impl Entity for File {}

// ─── Galleryinfo ─────────────────────────────────────────────────────────────

/// Full detail record for one gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Galleryinfo {
    pub date: String,
    pub galleryurl: String,
    #[serde(with = "string_or_int")]
    pub id: u64,
    pub japanese_title: Option<String>,
    pub language: Option<String>,
    pub language_localname: Option<String>,
    pub language_url: Option<String>,
    pub title: String,
    /// Gallery type (`manga`, `doujinshi`, ...). `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub video: Option<String>,
    pub videofilename: Option<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub artists: Vec<Artist>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub characters: Vec<Character>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub files: Vec<File>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub groups: Vec<Group>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub parodys: Vec<Parody>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub related: Vec<u64>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub scene_indexes: Vec<u64>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub tags: Vec<Tag>,
}

impl Galleryinfo {
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        crate::shared::parse_date(&self.date)
    }

    pub fn image_count(&self) -> usize {
        self.files.len()
    }
}

impl Entity for Galleryinfo {}
