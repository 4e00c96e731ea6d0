//! SDK error mapping for the AWS backend.
//!
//! Maps `SdkError` values onto the explicit [`StoreError`] kinds: failures
//! that never reached the service (construction, dispatch, timeout) become
//! `Client`, service responses become `BucketNotFound` / `KeyNotFound` /
//! `Service` based on the error code in the response.

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use phoenix_storage::StoreError;

/// Map a service-level error using its error code.
///
/// `key` is the object key the request addressed, when the operation has
/// one; it lets "NoSuchKey" carry the full object reference.
pub(crate) fn map_service_error<E>(err: &E, bucket: &str, key: Option<&str>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match (err.code(), key) {
        (Some("NoSuchBucket"), _) => StoreError::BucketNotFound {
            bucket: bucket.to_string(),
        },
        (Some("NoSuchKey"), Some(key)) => StoreError::KeyNotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        _ => StoreError::Service {
            message: err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
        },
    }
}

/// Map a service-level error from a server-side copy.
///
/// A copy request addresses the destination bucket, so "NoSuchBucket" is
/// reported against it; "NoSuchKey" can only refer to the copy source.
pub(crate) fn map_copy_service_error<E>(
    err: &E,
    src_bucket: &str,
    src_key: &str,
    dst_bucket: &str,
) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.code() {
        Some("NoSuchBucket") => StoreError::BucketNotFound {
            bucket: dst_bucket.to_string(),
        },
        Some("NoSuchKey") => StoreError::KeyNotFound {
            bucket: src_bucket.to_string(),
            key: src_key.to_string(),
        },
        _ => StoreError::Service {
            message: err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
        },
    }
}

/// Map a full `SdkError`, splitting client-side failures from service
/// responses.
pub(crate) fn map_sdk_error<E, R>(err: SdkError<E, R>, bucket: &str, key: Option<&str>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err {
        SdkError::ServiceError(ctx) => map_service_error(ctx.err(), bucket, key),
        other => StoreError::Client {
            message: other.to_string(),
        },
    }
}

/// Map a full `SdkError` from a server-side copy.
pub(crate) fn map_copy_error<E, R>(
    err: SdkError<E, R>,
    src_bucket: &str,
    src_key: &str,
    dst_bucket: &str,
) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err {
        SdkError::ServiceError(ctx) => {
            map_copy_service_error(ctx.err(), src_bucket, src_key, dst_bucket)
        }
        other => StoreError::Client {
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;

    /// Minimal service error carrying only metadata.
    #[derive(Debug)]
    struct StubError(ErrorMetadata);

    impl StubError {
        fn with_code(code: &str) -> Self {
            Self(ErrorMetadata::builder().code(code).message("stub").build())
        }

        fn without_code() -> Self {
            Self(ErrorMetadata::builder().message("stub").build())
        }
    }

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0.message().unwrap_or("stub error"))
        }
    }

    impl std::error::Error for StubError {}

    impl ProvideErrorMetadata for StubError {
        fn meta(&self) -> &ErrorMetadata {
            &self.0
        }
    }

    #[test]
    fn test_not_found_codes_map_to_kinds() {
        let err = StubError::with_code("NoSuchBucket");
        match map_service_error(&err, "b", Some("k")) {
            StoreError::BucketNotFound { bucket } => assert_eq!(bucket, "b"),
            other => panic!("expected BucketNotFound, got {other:?}"),
        }

        let err = StubError::with_code("NoSuchKey");
        match map_service_error(&err, "b", Some("k")) {
            StoreError::KeyNotFound { bucket, key } => {
                assert_eq!(bucket, "b");
                assert_eq!(key, "k");
            }
            other => panic!("expected KeyNotFound, got {other:?}"),
        }

        let err = StubError::without_code();
        assert!(matches!(
            map_service_error(&err, "b", Some("k")),
            StoreError::Service { .. }
        ));
    }

    #[test]
    fn test_copy_no_such_bucket_names_destination() {
        // A missing target bucket must not be reported under the source
        // bucket's name.
        let err = StubError::with_code("NoSuchBucket");
        match map_copy_service_error(&err, "src-bucket", "a.txt", "dst-bucket") {
            StoreError::BucketNotFound { bucket } => assert_eq!(bucket, "dst-bucket"),
            other => panic!("expected BucketNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_copy_no_such_key_names_source() {
        let err = StubError::with_code("NoSuchKey");
        match map_copy_service_error(&err, "src-bucket", "a.txt", "dst-bucket") {
            StoreError::KeyNotFound { bucket, key } => {
                assert_eq!(bucket, "src-bucket");
                assert_eq!(key, "a.txt");
            }
            other => panic!("expected KeyNotFound, got {other:?}"),
        }
    }
}
