//! Filesystem snapshot persistence.
//!
//! The snapshot lives in a single file inside a directory opened through
//! `cap-std`, so the adapter can only ever touch that directory. Writes go to
//! a sibling temporary file that is then renamed over the snapshot, leaving
//! either the old or the new blob on disk.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::board::{
    config::BoardConfig,
    domain::Board,
    ports::{BoardPersistence, BoardPersistenceError, BoardPersistenceResult},
    snapshot::{decode_snapshot, encode_snapshot},
};

/// Stores the board collection as a JSON file.
#[derive(Debug, Clone)]
pub struct FsBoardPersistence {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
}

impl FsBoardPersistence {
    /// Opens (creating if needed) `storage_dir` and stores snapshots in
    /// `file_name` inside it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(
        storage_dir: impl AsRef<Utf8Path>,
        file_name: impl Into<Utf8PathBuf>,
    ) -> BoardPersistenceResult<Self> {
        let path = storage_dir.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(BoardPersistenceError::io)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(BoardPersistenceError::io)?;
        tracing::debug!(storage_dir = %path, "opened board snapshot directory");
        Ok(Self::from_dir(dir, file_name))
    }

    /// Opens the storage location described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Io`] when the directory cannot be
    /// created or opened.
    pub fn from_config(config: &BoardConfig) -> BoardPersistenceResult<Self> {
        Self::open(&config.storage_dir, config.snapshot_file.clone())
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    /// Returns the snapshot file name relative to the storage directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    fn temp_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.tmp", self.file_name))
    }
}

/// Runs blocking filesystem work off the async executor.
async fn run_blocking<F, T>(f: F) -> BoardPersistenceResult<T>
where
    F: FnOnce() -> BoardPersistenceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(BoardPersistenceError::io)?
}

#[async_trait]
impl BoardPersistence for FsBoardPersistence {
    async fn load(&self) -> BoardPersistenceResult<Option<Vec<Board>>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let blob = run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BoardPersistenceError::io(err)),
        })
        .await?;

        let Some(contents) = blob else {
            tracing::debug!(file = %self.file_name, "no board snapshot stored yet");
            return Ok(None);
        };
        tracing::debug!(file = %self.file_name, bytes = contents.len(), "loaded board snapshot");
        Ok(Some(decode_snapshot(&contents)?))
    }

    async fn save(&self, boards: &[Board]) -> BoardPersistenceResult<()> {
        let encoded = encode_snapshot(boards)?;
        let bytes = encoded.len();
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_name();
        run_blocking(move || {
            dir.write(&temp_name, encoded.as_bytes())
                .map_err(BoardPersistenceError::io)?;
            dir.rename(&temp_name, &dir, &file_name)
                .map_err(BoardPersistenceError::io)
        })
        .await?;
        tracing::debug!(file = %self.file_name, bytes, "saved board snapshot");
        Ok(())
    }
}
