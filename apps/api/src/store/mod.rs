mod collections;
mod file_store;
mod seed;

pub use collections::ContentStore;
pub use file_store::{ensure_id, FileStore, HasId, StoreError};
