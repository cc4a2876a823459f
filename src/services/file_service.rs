use std::sync::Arc;

use crate::models::FileListing;
use crate::services::storage::{Storage, StorageError};

/// Enumerates a caller's stored files and paginates the result.
pub struct FileService {
    storage: Arc<dyn Storage>,
}

impl FileService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns the requested slice of the caller's files together with the
    /// untruncated total. A page past the end is an empty slice, not an
    /// error. `page` is 1-indexed and validated positive at the edge.
    pub async fn list_files(
        &self,
        namespace: &str,
        page: usize,
        page_size: usize,
    ) -> Result<FileListing, StorageError> {
        let all = self.storage.list(namespace).await?;
        let total = all.len();

        let start = (page - 1).saturating_mul(page_size);
        let files = all.into_iter().skip(start).take(page_size).collect();

        Ok(FileListing {
            files,
            total,
            page,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::LocalStorage;

    async fn seeded_service(tmp: &std::path::Path, count: usize) -> FileService {
        let storage = Arc::new(LocalStorage::new(tmp));
        for i in 0..count {
            storage
                .save("u1", &format!("f{i}.txt"), b"data")
                .await
                .unwrap();
        }
        FileService::new(storage)
    }

    #[tokio::test]
    async fn empty_namespace_yields_empty_page() {
        let tmp = tempfile::tempdir().unwrap();
        let service = seeded_service(tmp.path(), 0).await;

        let listing = service.list_files("u1", 1, 10).await.unwrap();
        assert!(listing.files.is_empty());
        assert_eq!(listing.total, 0);
        assert_eq!(listing.page, 1);
        assert_eq!(listing.page_size, 10);
    }

    #[tokio::test]
    async fn pagination_slices_and_keeps_total() {
        let tmp = tempfile::tempdir().unwrap();
        let service = seeded_service(tmp.path(), 3).await;

        let first = service.list_files("u1", 1, 2).await.unwrap();
        assert_eq!(first.files.len(), 2);
        assert_eq!(first.total, 3);

        let second = service.list_files("u1", 2, 2).await.unwrap();
        assert_eq!(second.files.len(), 1);
        assert_eq!(second.total, 3);
    }

    #[tokio::test]
    async fn page_past_end_is_empty_with_total() {
        let tmp = tempfile::tempdir().unwrap();
        let service = seeded_service(tmp.path(), 3).await;

        let listing = service.list_files("u1", 9, 10).await.unwrap();
        assert!(listing.files.is_empty());
        assert_eq!(listing.total, 3);
    }

    #[tokio::test]
    async fn namespaces_are_isolated() {
        let tmp = tempfile::tempdir().unwrap();
        let service = seeded_service(tmp.path(), 2).await;

        let listing = service.list_files("u2", 1, 10).await.unwrap();
        assert_eq!(listing.total, 0);
    }
}
