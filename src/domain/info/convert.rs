//! Conversions from wire envelopes to result types.

use super::wire::{ListResponse, SearchResponse};
use super::{ListResult, SearchResult};

impl From<ListResponse> for ListResult {
    fn from(r: ListResponse) -> Self {
        Self {
            items: r.list,
            total: r.total,
        }
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(r: SearchResponse) -> Self {
        Self {
            items: r.result,
            count: r.count,
        }
    }
}
