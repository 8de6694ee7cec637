//! JSON bodies exchanged by the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_FOUND: &str = "Not found";
pub const FILE_NOT_FOUND: &str = "File not found";
pub const INVALID_JSON: &str = "Invalid JSON";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// One row of `GET /files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// RFC 3339; `null` when the platform does not report it
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub accessed_at: Option<DateTime<Utc>>,
    pub is_regular_file: bool,
    pub extension: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileList {
    pub files: Vec<FileEntry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
    pub filename: String,
}

/// Body of `POST /file`.
#[derive(Debug, Deserialize)]
pub struct CreateFileRequest {
    pub filename: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
