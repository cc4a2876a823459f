use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use procurement_backend::catalog::SampleCatalog;
use procurement_backend::config::UploadConfig;
use procurement_backend::models::StoredFileInfo;
use procurement_backend::services::file_service::FileService;
use procurement_backend::services::identity::HeaderIdentity;
use procurement_backend::services::ingest::IngestService;
use procurement_backend::services::storage::{LocalStorage, Storage, StorageError};
use procurement_backend::{AppState, create_app};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "---------------------------123456789012345678901234567";

fn test_state(storage: Arc<dyn Storage>, upload_dir: &std::path::Path) -> AppState {
    let config = UploadConfig {
        upload_dir: upload_dir.to_path_buf(),
        ..UploadConfig::default()
    };

    AppState {
        identity: Arc::new(HeaderIdentity),
        ingest: Arc::new(IngestService::new(
            Arc::clone(&storage),
            config.max_file_size,
        )),
        files: Arc::new(FileService::new(storage)),
        catalog: Arc::new(SampleCatalog::seed()),
        config,
    }
}

fn local_app(upload_dir: &std::path::Path) -> axum::Router {
    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(upload_dir));
    create_app(test_state(storage, upload_dir))
}

fn multipart_body(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, content) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(user: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/upload/")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(user) = user {
        builder = builder.header("user-id", user);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn response_lines(response: axum::response::Response) -> Vec<Value> {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_upload_streams_progress_then_complete() {
    let tmp = tempfile::tempdir().unwrap();
    let app = local_app(tmp.path());

    let body = multipart_body(&[
        ("invoice.pdf", b"pdf bytes".as_slice()),
        ("site.png", b"png bytes".as_slice()),
        ("notes.txt", b"some notes".as_slice()),
    ]);
    let response = app
        .oneshot(upload_request(Some("alice"), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/event-stream"
    );

    let events = response_lines(response).await;
    assert_eq!(events.len(), 4);

    for (i, event) in events[..3].iter().enumerate() {
        assert_eq!(event["type"], "progress");
        assert_eq!(event["total_files"], 3);
        assert_eq!(event["processed_files"].as_array().unwrap().len(), i + 1);
    }
    assert_eq!(events[0]["current_file"], "invoice.pdf");

    let complete = &events[3];
    assert_eq!(complete["type"], "complete");
    assert_eq!(complete["status"], "success");
    let files = complete["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f["status"] == "completed"));
    assert!(
        files
            .iter()
            .all(|f| f["message"] == "File processed successfully")
    );

    // The files landed in the caller's namespace.
    assert!(tmp.path().join("alice/invoice.pdf").is_file());
    assert!(tmp.path().join("alice/notes.txt").is_file());
}

#[tokio::test]
async fn test_oversized_file_rejects_whole_batch() {
    let tmp = tempfile::tempdir().unwrap();
    let app = local_app(tmp.path());

    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let body = multipart_body(&[
        ("small.txt", b"tiny".as_slice()),
        ("big.bin", oversized.as_slice()),
    ]);
    let response = app
        .clone()
        .oneshot(upload_request(Some("alice"), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["detail"], "File big.bin exceeds maximum size of 5MB");

    // No partial writes: the small file must not have been stored either.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/files/")
                .header("user-id", "alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_missing_user_id_header_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = local_app(tmp.path());

    let body = multipart_body(&[("a.txt", b"data".as_slice())]);
    let response = app.oneshot(upload_request(None, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["detail"], "Missing user-id header");

    // Nothing may have been written.
    assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_empty_batch_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = local_app(tmp.path());

    let response = app
        .oneshot(upload_request(Some("alice"), multipart_body(&[])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_path_components_are_stripped_from_filenames() {
    let tmp = tempfile::tempdir().unwrap();
    let app = local_app(tmp.path());

    let body = multipart_body(&[("../escape.txt", b"data".as_slice())]);
    let response = app
        .oneshot(upload_request(Some("alice"), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(tmp.path().join("alice/escape.txt").is_file());
    assert!(!tmp.path().join("escape.txt").exists());
}

/// Storage that fails on one particular filename, standing in for a
/// mid-batch I/O fault.
struct FlakyStorage {
    inner: LocalStorage,
    fail_on: &'static str,
}

#[async_trait]
impl Storage for FlakyStorage {
    async fn save(
        &self,
        namespace: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, StorageError> {
        if filename == self.fail_on {
            return Err(StorageError::Write {
                filename: filename.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        self.inner.save(namespace, filename, data).await
    }

    async fn list(&self, namespace: &str) -> Result<Vec<StoredFileInfo>, StorageError> {
        self.inner.list(namespace).await
    }
}

#[tokio::test]
async fn test_failed_write_is_recorded_and_batch_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let storage: Arc<dyn Storage> = Arc::new(FlakyStorage {
        inner: LocalStorage::new(tmp.path()),
        fail_on: "bad.bin",
    });
    let app = create_app(test_state(storage, tmp.path()));

    let body = multipart_body(&[
        ("first.txt", b"ok".as_slice()),
        ("bad.bin", b"doomed".as_slice()),
        ("last.txt", b"also ok".as_slice()),
    ]);
    let response = app
        .oneshot(upload_request(Some("alice"), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let events = response_lines(response).await;
    assert_eq!(events.len(), 4);

    let complete = &events[3];
    assert_eq!(complete["type"], "complete");
    let files = complete["files"].as_array().unwrap();
    assert_eq!(files[0]["status"], "completed");
    assert_eq!(files[1]["status"], "failed");
    assert_eq!(files[1]["filename"], "bad.bin");
    assert_eq!(files[2]["status"], "completed");

    // The files around the failure were still written.
    assert!(tmp.path().join("alice/first.txt").is_file());
    assert!(!tmp.path().join("alice/bad.bin").exists());
    assert!(tmp.path().join("alice/last.txt").is_file());
}
