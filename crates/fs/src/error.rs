use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File '{name}' not found")]
    NotFound { name: String },

    #[error("File '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Any other filesystem failure; the OS message is kept as-is.
    #[error("{source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl StoreError {
    /// Classify an I/O error raised while operating on `name`.
    pub(crate) fn from_io(err: io::Error, name: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                name: name.to_owned(),
            },
            io::ErrorKind::AlreadyExists => StoreError::AlreadyExists {
                name: name.to_owned(),
            },
            _ => StoreError::Io { source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
