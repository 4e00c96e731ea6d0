//! AWS SDK S3 client implementation.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart, Delete, ObjectIdentifier};
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use phoenix_storage::{
    validate_region, ClientSettings, CompletedPartInfo, DeleteOutcome, ListPage, ObjectInfo,
    ObjectStoreClient, StoreError,
};

use crate::error::{map_copy_error, map_sdk_error};

/// `ObjectStoreClient` implementation using the AWS SDK for Rust.
///
/// The value is the connection handle: bound to one region and one
/// credential source at construction and owned by the caller. Construction
/// is always fresh; nothing is cached process-wide. The client is cheap to
/// clone and `Send + Sync`, so callers that want reuse share it themselves.
#[derive(Debug, Clone)]
pub struct AwsStoreClient {
    s3_client: S3Client,
}

impl AwsStoreClient {
    /// Create a new client for the given region and credential settings.
    ///
    /// The region is validated against the known region codes before any
    /// SDK configuration is loaded; an unknown region fails with
    /// [`StoreError::InvalidRegion`] without any network activity. A
    /// non-empty `credentials_profile` binds the named profile, otherwise
    /// the default credential chain applies.
    pub async fn new(settings: ClientSettings) -> Result<Self, StoreError> {
        validate_region(&settings.region)?;

        let mut config_loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(settings.region.clone()));

        if let Some(profile) = settings.profile() {
            config_loader = config_loader.profile_name(profile);
        }

        let sdk_config = config_loader.load().await;
        Ok(Self {
            s3_client: S3Client::new(&sdk_config),
        })
    }

    /// Create a client from an existing S3 client (for testing).
    pub fn from_client(s3_client: S3Client) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl ObjectStoreClient for AwsStoreClient {
    async fn head_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Option<ObjectInfo>, StoreError> {
        let request = self.s3_client.head_object().bucket(bucket).key(key);

        match request.send().await {
            Ok(output) => Ok(Some(ObjectInfo {
                size: output.content_length().map(|l| l as u64).unwrap_or(0),
                etag: output.e_tag().map(|s| s.to_string()),
            })),
            Err(SdkError::ServiceError(ctx)) if ctx.err().is_not_found() => Ok(None),
            Err(err) => Err(map_sdk_error(err, bucket, Some(key))),
        }
    }

    async fn get_object_to_file(
        &self,
        bucket: &str,
        key: &str,
        dest: &Path,
    ) -> Result<(), StoreError> {
        let response = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        // Create parent directories if needed
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::from_io(parent.display().to_string(), e))?;
        }

        let mut file = File::create(dest)
            .await
            .map_err(|e| StoreError::from_io(dest.display().to_string(), e))?;

        let mut body = response.body;
        while let Some(chunk) = body.try_next().await.map_err(|e| StoreError::Client {
            message: e.to_string(),
        })? {
            file.write_all(&chunk)
                .await
                .map_err(|e| StoreError::from_io(dest.display().to_string(), e))?;
        }

        file.flush()
            .await
            .map_err(|e| StoreError::from_io(dest.display().to_string(), e))?;

        Ok(())
    }

    async fn put_object_from_file(
        &self,
        bucket: &str,
        key: &str,
        src: &Path,
    ) -> Result<(), StoreError> {
        let body = ByteStream::from_path(src)
            .await
            .map_err(|e| StoreError::from_io(src.display().to_string(), e.into()))?;

        self.s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        Ok(())
    }

    async fn create_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<String, StoreError> {
        let output = self
            .s3_client
            .create_multipart_upload()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        let upload_id = output.upload_id().ok_or_else(|| StoreError::Client {
            message: "create_multipart_upload returned no upload id".to_string(),
        })?;
        tracing::debug!(bucket, key, upload_id, "multipart upload created");
        Ok(upload_id.to_string())
    }

    async fn upload_part(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: i32,
        body: Bytes,
    ) -> Result<String, StoreError> {
        let output = self
            .s3_client
            .upload_part()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .part_number(part_number)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        output
            .e_tag()
            .map(|s| s.to_string())
            .ok_or_else(|| StoreError::Client {
                message: format!("upload_part returned no etag for part {part_number}"),
            })
    }

    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        parts: &[CompletedPartInfo],
    ) -> Result<(), StoreError> {
        let completed: Vec<CompletedPart> = parts
            .iter()
            .map(|p| {
                CompletedPart::builder()
                    .part_number(p.part_number)
                    .e_tag(&p.etag)
                    .build()
            })
            .collect();

        let multipart_upload = CompletedMultipartUpload::builder()
            .set_parts(Some(completed))
            .build();

        self.s3_client
            .complete_multipart_upload()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .multipart_upload(multipart_upload)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        Ok(())
    }

    async fn abort_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
    ) -> Result<(), StoreError> {
        self.s3_client
            .abort_multipart_upload()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        tracing::debug!(bucket, key, upload_id, "multipart upload aborted");
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        self.s3_client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, Some(key)))?;

        Ok(())
    }

    async fn delete_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<DeleteOutcome>, StoreError> {
        let identifiers: Result<Vec<ObjectIdentifier>, _> = keys
            .iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect();
        let identifiers = identifiers.map_err(|e| StoreError::Client {
            message: e.to_string(),
        })?;

        let delete = Delete::builder()
            .set_objects(Some(identifiers))
            .build()
            .map_err(|e| StoreError::Client {
                message: e.to_string(),
            })?;

        let output = self
            .s3_client
            .delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, None))?;

        // One outcome per requested key: anything in the response's error
        // list failed, everything else was deleted.
        let mut failures: std::collections::HashMap<&str, (Option<&str>, Option<&str>)> =
            std::collections::HashMap::new();
        for err in output.errors() {
            if let Some(key) = err.key() {
                failures.insert(key, (err.code(), err.message()));
            }
        }

        let outcomes = keys
            .iter()
            .map(|key| match failures.get(key.as_str()) {
                Some((code, message)) => DeleteOutcome::failed(
                    key,
                    code.unwrap_or("Error"),
                    message.unwrap_or_default(),
                ),
                None => DeleteOutcome::deleted(key),
            })
            .collect();

        Ok(outcomes)
    }

    async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<(), StoreError> {
        // The copy source header must be URL-encoded for non-ASCII keys.
        let copy_source = format!("{}/{}", src_bucket, urlencoding::encode(src_key));
        tracing::debug!(copy_source, dst_bucket, dst_key, "server-side copy");

        self.s3_client
            .copy_object()
            .copy_source(copy_source)
            .bucket(dst_bucket)
            .key(dst_key)
            .send()
            .await
            .map_err(|err| map_copy_error(err, src_bucket, src_key, dst_bucket))?;

        Ok(())
    }

    async fn list_objects_page(
        &self,
        bucket: &str,
        continuation_token: Option<&str>,
        page_size: i32,
    ) -> Result<ListPage, StoreError> {
        let mut request = self
            .s3_client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(page_size);

        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| map_sdk_error(err, bucket, None))?;

        let keys: Vec<String> = response
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(|k| k.to_string()))
            .collect();

        let next_token = if response.is_truncated() == Some(true) {
            response.next_continuation_token().map(|t| t.to_string())
        } else {
            None
        };

        Ok(ListPage { keys, next_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implements_object_store_client() {
        fn assert_store_client<T: ObjectStoreClient>() {}
        assert_store_client::<AwsStoreClient>();
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_region_without_network() {
        let err = AwsStoreClient::new(ClientSettings::new("mars-west-7"))
            .await
            .unwrap_err();
        match err {
            StoreError::InvalidRegion { region } => assert_eq!(region, "mars-west-7"),
            other => panic!("expected InvalidRegion, got {other:?}"),
        }
    }
}
