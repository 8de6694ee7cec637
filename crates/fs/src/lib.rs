mod error;
mod record;
mod store;

pub use error::StoreError;
pub use record::{FileRecord, extension_of};
pub use store::FileStore;
