//! Tags attached to galleries.

use crate::domain::Entity;
use crate::shared::serde_util::lenient_bool;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled category applied to a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    pub url: String,
    #[serde(default, with = "lenient_bool")]
    pub female: bool,
    #[serde(default, with = "lenient_bool")]
    pub male: bool,
}

/// Namespace of a tag in Hitomi search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Female,
    Male,
    Plain,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Female => "female",
            TagKind::Male => "male",
            TagKind::Plain => "tag",
        }
    }
}

impl Tag {
    pub fn new(tag: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            url: url.into(),
            female: false,
            male: false,
        }
    }

    /// `female` wins if a malformed record sets both flags.
    pub fn kind(&self) -> TagKind {
        if self.female {
            TagKind::Female
        } else if self.male {
            TagKind::Male
        } else {
            TagKind::Plain
        }
    }

    /// The term to pass in a search query, e.g. `female:big_breasts`.
    pub fn query_term(&self) -> String {
        format!("{}:{}", self.kind().as_str(), self.tag.replace(' ', "_"))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_term())
    }
}

impl Entity for Tag {}
