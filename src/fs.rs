//! File system utilities.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes content to a file atomically using a temp file and rename.
///
/// Every call gets its own temp file next to the target, so concurrent writes
/// to the same path never share one and the rename stays on one filesystem.
/// Readers listing the directory never see a half-written file, and the temp
/// name does not carry the target's extension.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");

        atomic_write(&file_path, "Translation Data:\ntranslation\nHello").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Translation Data:\ntranslation\nHello");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");

        fs::write(&file_path, "Original content").unwrap();
        atomic_write(&file_path, "New content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "New content");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");

        atomic_write(&file_path, "content").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["notes.txt"]);
    }

    #[test]
    fn test_atomic_write_concurrent_same_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let file_path = &file_path;
                    scope.spawn(move || atomic_write(file_path, &format!("writer {i}")))
                })
                .collect();
            for handle in handles {
                handle.join().unwrap().unwrap();
            }
        });

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(content.starts_with("writer "));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("notes.txt");

        assert!(atomic_write(&file_path, "content").is_err());
        assert!(!file_path.exists());
    }
}
