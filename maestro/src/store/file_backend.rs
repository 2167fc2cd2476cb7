//! File-backed storage: one file per key under a directory.
//!
//! Keeps session buckets across process restarts, e.g. for the CLI's `walk` command.
//! Keys are percent-encoded into file names.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::StorageError;
use crate::store::StorageBackend;

/// Stores each key as `<dir>/<encoded-key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name = utf8_percent_encode(key, NON_ALPHANUMERIC).to_string();
        self.dir.join(format!("{}.json", name))
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
