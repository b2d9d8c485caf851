//! Local directory of text files backing the file server.

mod error;
mod store;
mod types;

pub use error::StorageError;
pub use store::{
    CONTENT_TITLE, FileStore, TEXT_SUFFIX, render_rows, resolve_file_name, timestamp,
};
pub use types::{CreateFileParams, CreateFileResponse, FileEntry, Row, Status, StoredFile};
