use super::backend::StorageBackend;
use crate::error::{Result, WordbookError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each blob as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WordbookError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WordbookError::Io(e)),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, blob).map_err(WordbookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.blob_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WordbookError::Io(e));
        }

        Ok(())
    }

    fn location(&self, key: &str) -> String {
        self.blob_path(key).display().to_string()
    }
}
