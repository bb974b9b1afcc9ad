//! Storage slots
//!
//! A store holds a single blob. Writes replace it wholesale; the last write wins.

use super::StorageError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A single-slot blob store
pub trait StateStore {
    /// Read the blob, `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the medium cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the blob
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the medium cannot be written.
    fn save(&mut self, blob: &str) -> Result<(), StorageError>;
}

/// Slot backed by a JSON file
///
/// Saves go through a sibling temp file and a rename, so a crash mid-write leaves the
/// previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Slot held in memory; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `blob`
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            writes: 0,
        }
    }

    #[must_use]
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of saves since creation
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), StorageError> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}
