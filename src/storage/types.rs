//! Data types shared by the file server and its HTTP client.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One record of a saved file: column name to value, in insertion order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// A text file written by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub name: String,
    pub path: PathBuf,
}

impl StoredFile {
    /// Wire representation used by the list endpoint.
    pub fn to_entry(&self) -> FileEntry {
        FileEntry {
            name: self.name.clone(),
            id: self.path.display().to_string(),
        }
    }
}

/// Entry returned by `GET /tools/list_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    /// Path of the file on the server, as a string.
    pub id: String,
}

/// Outcome tag of a create-file call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body returned by `POST /tools/create_file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFileResponse {
    pub status: Status,
    pub message: String,
    pub file_id: String,
    pub file_name: String,
}

impl CreateFileResponse {
    pub const fn is_success(&self) -> bool {
        matches!(self.status, Status::Success)
    }
}

/// Query parameters of `POST /tools/create_file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileParams {
    pub file_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_stored_file_to_entry() {
        let file = StoredFile {
            name: "a.txt".to_string(),
            path: PathBuf::from("files/a.txt"),
        };
        assert_eq!(
            file.to_entry(),
            FileEntry {
                name: "a.txt".to_string(),
                id: "files/a.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_row_keeps_insertion_order() {
        let row: Row = serde_json::from_str(r#"{"zeta":"1","alpha":"2"}"#).unwrap();
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }
}
