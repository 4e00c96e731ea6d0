//! Error types for object-storage operations.

use thiserror::Error;

/// Errors that can occur during object-storage operations.
///
/// Nothing is retried or handled locally; every failure is surfaced to the
/// caller as one of these variants so callers can branch on kind instead of
/// catching a hierarchy of SDK exception types.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Region name is not a known region code. Raised before any network
    /// activity; the caller must fix the configuration and reconstruct.
    #[error("Invalid region: {region}")]
    InvalidRegion { region: String },

    /// The named bucket does not exist.
    #[error("Bucket not found: {bucket}")]
    BucketNotFound { bucket: String },

    /// The named key does not exist in the bucket.
    #[error("Key not found: s3://{bucket}/{key}")]
    KeyNotFound { bucket: String, key: String },

    /// The remote store rejected or failed the request (throttling, access
    /// denied, internal error).
    #[error("Service error: {message}")]
    Service { message: String },

    /// The request never got a service response (construction, dispatch,
    /// connect or timeout failure on our side of the wire).
    #[error("Client error: {message}")]
    Client { message: String },

    /// Local filesystem error on a source or destination path.
    #[error("I/O error for {path}: {message}")]
    Io { path: String, message: String },
}

impl StoreError {
    /// Create an `Io` error from a `std::io::Error` and the path involved.
    pub fn from_io(path: impl Into<String>, err: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Per-key outcome of a batched delete.
///
/// A batched delete can partially fail server-side; collapsing that into one
/// boolean loses the per-key detail, so each key reports its own outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The key this outcome refers to.
    pub key: String,
    /// Error code from the store, if the delete failed (e.g. "NoSuchKey",
    /// "AccessDenied"). `None` means the key was deleted.
    pub code: Option<String>,
    /// Human-readable error message, if the delete failed.
    pub message: Option<String>,
}

impl DeleteOutcome {
    /// Outcome for a successfully deleted key.
    pub fn deleted(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: None,
            message: None,
        }
    }

    /// Outcome for a key that failed to delete.
    pub fn failed(
        key: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Whether the key was deleted.
    pub fn is_deleted(&self) -> bool {
        self.code.is_none()
    }
}
