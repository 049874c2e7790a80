use gobi_game::{GameStorage, SaveSnapshot, SnapshotError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "gobi_escape_save.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not delete {}: {source}", .path.display())]
    Delete { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        source: SnapshotError,
    },
}

/// Single save slot stored as pretty-printed JSON, overwritten whole.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStorage for JsonFileStorage {
    type Error = StorageError;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn has_save(&self) -> bool {
        self.path.is_file()
    }

    fn save_snapshot(&self, snapshot: &SaveSnapshot) -> Result<(), Self::Error> {
        let json = snapshot.to_json().map_err(|source| StorageError::Snapshot {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("saved game to {}", self.path.display());
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<SaveSnapshot>, Self::Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let snapshot = SaveSnapshot::from_json(&text).map_err(|source| StorageError::Snapshot {
            path: self.path.clone(),
            source,
        })?;
        log::info!("loaded game from {}", self.path.display());
        Ok(Some(snapshot))
    }

    fn delete_save(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Delete {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobi_game::{Difficulty, GameState};

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gobi-storage-{label}-{}-{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let storage = JsonFileStorage::new(temp_path("missing"));
        assert!(!storage.has_save());
        assert!(storage.load_snapshot().unwrap().is_none());
        storage.delete_save().unwrap();
    }

    #[test]
    fn save_overwrites_and_loads_back() {
        let storage = JsonFileStorage::new(temp_path("roundtrip"));
        let mut state = GameState::new(Difficulty::Easy);
        state.player.distance = 64;
        storage.save_snapshot(&SaveSnapshot::capture(&state)).unwrap();
        state.player.distance = 71;
        storage.save_snapshot(&SaveSnapshot::capture(&state)).unwrap();

        let loaded = storage.load_snapshot().unwrap().expect("saved");
        assert_eq!(loaded.restore(), state);

        storage.delete_save().unwrap();
        assert!(!storage.has_save());
    }

    #[test]
    fn corrupt_file_reports_snapshot_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ this is not json").unwrap();
        let storage = JsonFileStorage::new(&path);
        let err = storage.load_snapshot().unwrap_err();
        assert!(matches!(err, StorageError::Snapshot { .. }));
        assert!(err.to_string().contains("corrupt"));
        storage.delete_save().unwrap();
    }

    #[test]
    fn unwritable_path_reports_write_error() {
        let dir = temp_path("dir");
        fs::create_dir_all(&dir).unwrap();
        let storage = JsonFileStorage::new(&dir);
        let err = storage
            .save_snapshot(&SaveSnapshot::default())
            .unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        fs::remove_dir_all(&dir).unwrap();
    }
}
