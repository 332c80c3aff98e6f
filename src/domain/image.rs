//! Image domain — the file list behind a gallery's pages.

use serde::{Deserialize, Serialize};

/// REST response for `GET /api/hitomi/image/{index}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilesResponse {
    pub files: Vec<String>,
}

impl From<FilesResponse> for Vec<String> {
    fn from(r: FilesResponse) -> Self {
        r.files
    }
}
