use std::env;
use std::path::PathBuf;

/// Configuration for the file-ingestion subsystem.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Root directory holding one namespace directory per caller.
    pub upload_dir: PathBuf,

    /// Maximum size of a single uploaded file in bytes (default: 5 MB)
    pub max_file_size: usize,

    /// Ceiling on the whole multipart request body, sized well above the
    /// per-file limit so oversized files reach the validator and get the
    /// documented 400 instead of a transport-level rejection.
    pub max_request_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            max_file_size: 5 * 1024 * 1024, // 5 MB
            max_request_size: 128 * 1024 * 1024,
        }
    }
}

impl UploadConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            max_request_size: env::var("MAX_REQUEST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_request_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_file_size, 5 * 1024 * 1024);
        assert!(config.max_request_size > config.max_file_size);
    }
}
