use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::fs;

use crate::models::StoredFileInfo;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {filename}: {source}")]
    Write {
        filename: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read namespace {namespace}: {source}")]
    List {
        namespace: String,
        #[source]
        source: io::Error,
    },
}

/// Persistence seam for uploaded files. Every operation is scoped to one
/// caller namespace; nothing here can read across namespaces.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Writes one file under the caller's namespace, creating the namespace
    /// if missing, and returns its locator. A same-name write overwrites
    /// silently.
    async fn save(
        &self,
        namespace: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, StorageError>;

    /// Enumerates the namespace with metadata read at lookup time. A
    /// namespace that was never written to is an empty listing, not an
    /// error. Ordering is whatever the directory yields.
    async fn list(&self, namespace: &str) -> Result<Vec<StoredFileInfo>, StorageError>;
}

/// Directory-per-namespace storage under a single root.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn save(
        &self,
        namespace: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, StorageError> {
        let dir = self.root.join(namespace);
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::Write {
                filename: filename.to_string(),
                source,
            })?;

        let path = dir.join(filename);
        fs::write(&path, data)
            .await
            .map_err(|source| StorageError::Write {
                filename: filename.to_string(),
                source,
            })?;

        Ok(path.to_string_lossy().into_owned())
    }

    async fn list(&self, namespace: &str) -> Result<Vec<StoredFileInfo>, StorageError> {
        let dir = self.root.join(namespace);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::List {
                    namespace: namespace.to_string(),
                    source,
                });
            }
        };

        let mut files = Vec::new();
        while let Some(entry) =
            entries
                .next_entry()
                .await
                .map_err(|source| StorageError::List {
                    namespace: namespace.to_string(),
                    source,
                })?
        {
            let metadata = entry
                .metadata()
                .await
                .map_err(|source| StorageError::List {
                    namespace: namespace.to_string(),
                    source,
                })?;

            if !metadata.is_file() {
                continue;
            }

            // Creation time is not available on every filesystem; fall back
            // to the modification time.
            let created_at: DateTime<Utc> = metadata
                .created()
                .or_else(|_| metadata.modified())
                .map(DateTime::from)
                .unwrap_or_else(|_| Utc::now());

            files.push(StoredFileInfo {
                path: entry.path().to_string_lossy().into_owned(),
                size: metadata.len(),
                created_at,
            });
        }

        Ok(files)
    }
}
