use crate::{LoadResult, SessionStorage, StorageError, StorageResult, UserSession};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session record kept as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
    key: String,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Backs up a corrupted session file for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.json.corrupted.{timestamp}", self.key));

        fs::rename(&path, &backup_path).map_err(|e| StorageError::backup_failed(e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl SessionStorage for FileSessionStorage {
    /// Returns:
    /// - `LoadResult { session: Some(...), .. }` - loaded successfully
    /// - `LoadResult { session: None, corruption_error: None }` - no file yet
    /// - `LoadResult { session: None, corruption_error: Some(...) }` - file exists but corrupted
    fn load(&self) -> StorageResult<LoadResult> {
        let path = self.path();

        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(LoadResult::missing());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StorageError::file_read(path.clone(), e))?;

        match serde_json::from_str::<UserSession>(&contents) {
            Ok(session) => {
                debug!("Loaded session from {path:?}");
                Ok(LoadResult::found(session))
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                Ok(LoadResult::corrupted(e.to_string()))
            }
        }
    }

    /// Saves the record using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, session: &UserSession) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{}.json.tmp.{}", self.key, std::process::id()));

        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved session to {final_path:?}");
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    /// Keeps the unreadable file as `<key>.json.corrupted.{timestamp}`.
    fn discard_corrupted(&self) -> StorageResult<()> {
        self.backup_corrupted().map(|_| ())
    }
}
