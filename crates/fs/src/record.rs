use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Metadata snapshot of one entry in the base directory.
///
/// Built on demand from a stat call and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name, relative to the base directory
    pub name: String,
    /// Absolute path the name resolved to
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Birth time. Not every platform or filesystem reports one.
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    /// May be stale on `noatime`/`relatime` mounts
    pub accessed_at: Option<DateTime<Utc>>,
    pub is_regular_file: bool,
    /// Text after the last `.` in `name`, or empty
    pub extension: String,
}

/// Suffix after the last `.` of a file name, or `""` when there is none.
///
/// Unlike `Path::extension`, a leading dot counts: `.bashrc` yields `bashrc`.
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
