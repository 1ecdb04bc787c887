use super::backend::StorageBackend;
use crate::error::{DiaristError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-per-key storage: the value for `key` lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DiaristError::Io)?;
        }
        Ok(())
    }
}

/// Keys become file names, so they are limited to ASCII letters, digits, `-` and `_`.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(DiaristError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(DiaristError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let target = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(DiaristError::Io)?;
        fs::rename(&tmp_path, target).map_err(DiaristError::Io)?;

        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert_eq!(backend.get("diaryEntries").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_writes_one_file_per_key() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(root.clone());

        backend.set("darkMode", "true").unwrap();

        assert_eq!(
            fs::read_to_string(root.join("darkMode.json")).unwrap(),
            "true"
        );
        assert_eq!(backend.get("darkMode").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn set_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        backend.set("diaryEntries", "[]").unwrap();
        backend.set("diaryEntries", "[1]").unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
        assert_eq!(backend.get("diaryEntries").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn rejects_keys_that_would_escape_the_root() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert!(matches!(
            backend.set("../outside", "x"),
            Err(DiaristError::Store(_))
        ));
        assert!(backend.get("").is_err());
    }
}
