use std::path::Path;

use thiserror::Error;

/// Maximum file size: 5 MB
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("File {filename} exceeds maximum size of {limit_mb}MB")]
    FileTooLarge { filename: String, limit_mb: usize },

    #[error("File name {filename:?} is not allowed")]
    InvalidFilename { filename: String },

    #[error("Invalid user-id header")]
    InvalidNamespace,
}

/// Validates one file's size against the configured ceiling.
pub fn validate_file_size(
    filename: &str,
    size: usize,
    max_size: usize,
) -> Result<(), ValidationError> {
    if size > max_size {
        return Err(ValidationError::FileTooLarge {
            filename: filename.to_string(),
            limit_mb: max_size / 1024 / 1024,
        });
    }
    Ok(())
}

/// Reduces a caller-supplied name to its final path component so an upload
/// can never escape its namespace directory. Names that reduce to nothing
/// are rejected.
pub fn sanitize_filename(filename: &str) -> Result<String, ValidationError> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() || name == "." || name == ".." {
        return Err(ValidationError::InvalidFilename {
            filename: filename.to_string(),
        });
    }

    Ok(name.to_string())
}

/// The identity token doubles as a directory name, so it must be a single
/// path component.
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    if namespace.is_empty()
        || namespace == "."
        || namespace == ".."
        || namespace.contains('/')
        || namespace.contains('\\')
        || namespace.chars().any(|c| c.is_control())
    {
        return Err(ValidationError::InvalidNamespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size("a.txt", 1024, MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size("a.txt", MAX_FILE_SIZE, MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size("a.txt", MAX_FILE_SIZE + 1, MAX_FILE_SIZE).is_err());
    }

    #[test]
    fn test_size_error_message() {
        let err = validate_file_size("big.bin", MAX_FILE_SIZE + 1, MAX_FILE_SIZE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File big.bin exceeds maximum size of 5MB"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("invoice.pdf").unwrap(), "invoice.pdf");
        assert_eq!(sanitize_filename("site plan.png").unwrap(), "site plan.png");
        assert_eq!(sanitize_filename("测试.txt").unwrap(), "测试.txt");

        // Path components are stripped down to the basename
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_filename("a/b/c.txt").unwrap(), "c.txt");

        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("dir/..").is_err());
    }

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("user123").is_ok());
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("..").is_err());
        assert!(validate_namespace("a/b").is_err());
        assert!(validate_namespace("a\\b").is_err());
    }
}
