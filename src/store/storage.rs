//! Blob storage for persisting tracker state to disk.

use std::fs;
use std::io;
use std::path::PathBuf;

/// The three persisted blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    DailyRecords,
    WeightHistory,
    Theme,
}

impl StoreKey {
    /// Returns the filename for this blob.
    pub fn filename(&self) -> &'static str {
        match self {
            StoreKey::DailyRecords => "daily-records.json",
            StoreKey::WeightHistory => "weight-history.json",
            StoreKey::Theme => "theme.json",
        }
    }
}

/// Storage for the serialized tracker blobs.
///
/// Handles loading and saving the three JSON blobs on the filesystem.
#[derive(Clone)]
pub struct BlobStorage {
    data_dir: PathBuf,
}

impl BlobStorage {
    /// Creates a new storage instance with a custom data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the full path for a blob.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    /// Checks if a blob exists on disk.
    pub fn exists(&self, key: StoreKey) -> bool {
        self.path(key).exists()
    }

    /// Loads a blob from disk.
    ///
    /// Returns `Ok(None)` if the file doesn't exist (first run).
    /// Returns `Err` for other I/O errors.
    pub fn load(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(path, e)),
        }
    }

    /// Saves a blob to disk.
    ///
    /// Creates the data directory if it doesn't exist.
    pub fn save(&self, key: StoreKey, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::IoError(self.data_dir.clone(), e))?;

        let path = self.path(key);
        fs::write(&path, contents).map_err(|e| StorageError::IoError(path, e))?;

        Ok(())
    }
}

/// Errors that can occur during blob storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (BlobStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = BlobStorage::new(temp_dir.path().to_path_buf());
        (storage, temp_dir)
    }

    #[test]
    fn test_store_key_filename() {
        assert_eq!(StoreKey::DailyRecords.filename(), "daily-records.json");
        assert_eq!(StoreKey::WeightHistory.filename(), "weight-history.json");
        assert_eq!(StoreKey::Theme.filename(), "theme.json");
    }

    #[test]
    fn test_storage_path() {
        let (storage, _temp) = test_storage();
        let path = storage.path(StoreKey::DailyRecords);
        assert!(path.ends_with("daily-records.json"));
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let (storage, _temp) = test_storage();
        let result = storage.load(StoreKey::DailyRecords).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_exists_false_initially() {
        let (storage, _temp) = test_storage();
        assert!(!storage.exists(StoreKey::DailyRecords));
        assert!(!storage.exists(StoreKey::WeightHistory));
        assert!(!storage.exists(StoreKey::Theme));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (storage, _temp) = test_storage();
        storage.save(StoreKey::Theme, "true").unwrap();

        let loaded = storage.load(StoreKey::Theme).unwrap();
        assert_eq!(loaded.as_deref(), Some("true"));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested_dir = temp_dir.path().join("nested").join("data");
        let storage = BlobStorage::new(nested_dir.clone());

        storage.save(StoreKey::WeightHistory, "{}").unwrap();

        assert!(nested_dir.exists());
        assert!(storage.exists(StoreKey::WeightHistory));
    }
}
