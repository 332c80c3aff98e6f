//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains the typed records for one endpoint family:
//! - `mod.rs` — Records decoded from Phlox responses
//! - `wire.rs` — Response envelopes and request bodies
//! - `convert.rs` — `From` conversions from envelopes to result types

pub mod galleryinfo;
pub mod image;
pub mod info;
pub mod tag;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Common behaviour of every Phlox record.
///
/// A record is a plain value: equality is field equality and the only way to
/// build one from the network is from its JSON mapping.
pub trait Entity: Serialize + DeserializeOwned {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
