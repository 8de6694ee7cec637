use std::sync::Arc;

use filemgr_fs::{FileStore, StoreError};
use tokio::task::{self, JoinError};

#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<FileStore>,
}

impl AppState {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// Run a blocking store call on tokio's blocking pool.
    ///
    /// The outer error is only set when `f` panicked.
    pub async fn with_store<T, F>(&self, f: F) -> Result<Result<T, StoreError>, JoinError>
    where
        F: FnOnce(&FileStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || f(&store)).await
    }
}
