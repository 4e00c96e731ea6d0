//! Client trait for object-storage backends.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{DeleteOutcome, StoreError};
use crate::types::{CompletedPartInfo, ListPage, ObjectInfo};

/// Low-level object-storage operations, implemented by each backend.
///
/// A value implementing this trait is the connection handle: bound to one
/// region and one credential source at construction, owned by the caller,
/// and passed into [`ObjectOperations`](crate::ObjectOperations) explicitly.
/// There is no process-wide cached instance.
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Check if an object exists and return its size and ETag.
    /// Returns `None` if the object doesn't exist.
    async fn head_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Option<ObjectInfo>, StoreError>;

    /// Download an object, streaming its bytes to `dest` (overwriting).
    async fn get_object_to_file(
        &self,
        bucket: &str,
        key: &str,
        dest: &Path,
    ) -> Result<(), StoreError>;

    /// Upload a whole local file as a single object.
    async fn put_object_from_file(
        &self,
        bucket: &str,
        key: &str,
        src: &Path,
    ) -> Result<(), StoreError>;

    /// Begin a multipart upload, returning the upload id.
    async fn create_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<String, StoreError>;

    /// Upload one part body, returning the ETag the store assigned to it.
    async fn upload_part(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: i32,
        body: Bytes,
    ) -> Result<String, StoreError>;

    /// Complete a multipart upload from its parts, in ascending part order.
    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        parts: &[CompletedPartInfo],
    ) -> Result<(), StoreError>;

    /// Abort a multipart upload, discarding any parts already stored.
    async fn abort_multipart_upload(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
    ) -> Result<(), StoreError>;

    /// Delete one object.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StoreError>;

    /// Delete many objects in one batched request, reporting a per-key
    /// outcome for each.
    async fn delete_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<DeleteOutcome>, StoreError>;

    /// Server-side copy of one object.
    async fn copy_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<(), StoreError>;

    /// Fetch one page of a bucket listing.
    async fn list_objects_page(
        &self,
        bucket: &str,
        continuation_token: Option<&str>,
        page_size: i32,
    ) -> Result<ListPage, StoreError>;
}
