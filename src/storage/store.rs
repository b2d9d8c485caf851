use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::error::StorageError;
use super::types::{CreateFileResponse, Row, Status, StoredFile};
use crate::fs::atomic_write;

/// Suffix of the files the store reads and writes.
pub const TEXT_SUFFIX: &str = ".txt";

/// First line of every saved file.
pub const CONTENT_TITLE: &str = "Translation Data:";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current local time formatted for use in file names.
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Appends `_{timestamp}.txt` to names that do not already end in `.txt`.
pub fn resolve_file_name(file_name: &str, timestamp: &str) -> String {
    if file_name.ends_with(TEXT_SUFFIX) {
        file_name.to_string()
    } else {
        format!("{file_name}_{timestamp}{TEXT_SUFFIX}")
    }
}

/// Formats rows as the saved file body.
///
/// The header is the key set of the first row; later rows are projected onto
/// it, with missing keys rendered empty. Lines are joined without a trailing
/// newline.
pub fn render_rows(rows: &[Row]) -> Result<String, StorageError> {
    let Some(first) = rows.first().filter(|row| !row.is_empty()) else {
        return Err(StorageError::InvalidFormat);
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(CONTENT_TITLE.to_string());
    lines.push(headers.join(","));
    for row in rows {
        let values: Vec<String> = headers
            .iter()
            .map(|key| row.get(*key).map(render_value).unwrap_or_default())
            .collect();
        lines.push(values.join(","));
    }

    Ok(lines.join("\n"))
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn validate_name(name: &str) -> Result<(), StorageError> {
    let has_separator = name.contains('/') || name.contains('\\');
    if has_separator || name == TEXT_SUFFIX || name == ".." {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Flat directory of text files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the directory if needed and returns a store over it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self::new(dir);
        fs::create_dir_all(&store.dir)?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists the `.txt` files in the store, sorted by name.
    pub fn list_files(&self) -> Result<Vec<StoredFile>, StorageError> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }

            files.push(StoredFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        info!(count = files.len(), "Listed text files");
        Ok(files)
    }

    /// Writes `rows` to a new text file and returns where it went.
    pub fn create_file(&self, file_name: &str, rows: &[Row]) -> Result<StoredFile, StorageError> {
        self.write_resolved(resolve_file_name(file_name, &timestamp()), rows)
    }

    fn write_resolved(&self, name: String, rows: &[Row]) -> Result<StoredFile, StorageError> {
        let content = render_rows(rows)?;
        validate_name(&name)?;

        let path = self.dir.join(&name);
        atomic_write(&path, &content)?;

        info!(file = %name, path = %path.display(), "Created text file");
        Ok(StoredFile { name, path })
    }

    /// Creates a file and reports the outcome in the create endpoint's wire format.
    pub fn create_response(&self, file_name: &str, rows: &[Row]) -> CreateFileResponse {
        let name = resolve_file_name(file_name, &timestamp());

        match self.write_resolved(name.clone(), rows) {
            Ok(file) => CreateFileResponse {
                status: Status::Success,
                message: format!(
                    "Created text file '{}' at {}",
                    file.name,
                    file.path.display()
                ),
                file_id: file.path.display().to_string(),
                file_name: file.name,
            },
            Err(e @ StorageError::InvalidFormat) => {
                error!(file = %name, "{e}");
                CreateFileResponse {
                    status: Status::Error,
                    message: e.to_string(),
                    file_id: String::new(),
                    file_name: name,
                }
            }
            Err(e) => {
                error!(file = %name, error = %e, "Error creating text file");
                CreateFileResponse {
                    status: Status::Error,
                    message: format!("Failed to create text file: {e}"),
                    file_id: String::new(),
                    file_name: name,
                }
            }
        }
    }
}
