use std::sync::Arc;

use async_stream::stream;
use bytes::Bytes;
use futures::Stream;

use crate::models::{BatchStatus, FileStatus, ProcessedFile, ProgressEvent};
use crate::services::storage::Storage;
use crate::utils::validation::{self, ValidationError};

/// One file of an upload batch, fully buffered for the lifetime of the
/// request.
pub struct UploadEntry {
    pub filename: String,
    pub data: Bytes,
}

/// Drives the storage writer over an upload batch and produces the ordered
/// progress stream.
pub struct IngestService {
    storage: Arc<dyn Storage>,
    max_file_size: usize,
}

impl IngestService {
    pub fn new(storage: Arc<dyn Storage>, max_file_size: usize) -> Self {
        Self {
            storage,
            max_file_size,
        }
    }

    /// Rejects the whole batch before any write occurs if a file exceeds
    /// the size ceiling.
    pub fn check_batch(&self, batch: &[UploadEntry]) -> Result<(), ValidationError> {
        for entry in batch {
            validation::validate_file_size(&entry.filename, entry.data.len(), self.max_file_size)?;
        }
        Ok(())
    }

    /// Processes the batch strictly in submission order, yielding one
    /// `progress` event per file once its outcome is known and a single
    /// terminal `complete` event. A failed write is recorded inline and
    /// never aborts the batch. Dropping the returned stream (e.g. the
    /// client disconnected) stops further writes.
    pub fn process_batch(
        &self,
        batch: Vec<UploadEntry>,
        namespace: String,
    ) -> impl Stream<Item = ProgressEvent> + Send + 'static {
        let storage = Arc::clone(&self.storage);

        stream! {
            let total_files = batch.len();
            let mut processed: Vec<ProcessedFile> = Vec::with_capacity(total_files);

            for entry in batch {
                match storage.save(&namespace, &entry.filename, &entry.data).await {
                    Ok(locator) => {
                        tracing::debug!(file = %locator, "stored upload");
                        processed.push(ProcessedFile {
                            filename: entry.filename.clone(),
                            status: FileStatus::Completed,
                            message: "File processed successfully".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::error!("Error processing {}: {}", entry.filename, e);
                        processed.push(ProcessedFile {
                            filename: entry.filename.clone(),
                            status: FileStatus::Failed,
                            message: e.to_string(),
                        });
                    }
                }

                yield ProgressEvent::Progress {
                    current_file: entry.filename,
                    total_files,
                    processed_files: processed.clone(),
                };
            }

            yield ProgressEvent::Complete {
                status: BatchStatus::Success,
                files: processed,
            };
        }
    }
}
