//! Wire types for info, list, random and search (REST).

use crate::domain::info::Info;
use serde::{Deserialize, Serialize};

/// REST response for `GET /api/hitomi/list/{index}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResponse {
    pub list: Vec<Info>,
    pub total: u64,
}

/// REST response for `POST /api/hitomi/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub result: Vec<Info>,
    pub count: u64,
}

/// Request body for `POST /api/hitomi/search`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRequest<'a> {
    pub query: &'a [String],
    pub offset: u64,
}

/// Request body for `POST /api/hitomi/random`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RandomRequest<'a> {
    pub query: &'a [String],
}
