//! High-level object operations over any [`ObjectStoreClient`].
//!
//! This module provides the operations facade: fetch, store, delete,
//! batched delete, copy, move and list, built on the low-level client
//! trait. It owns the upload size policy (single-part vs multipart) and
//! the pagination loop for listings; everything else is delegation.
//!
//! Failure semantics: no retries, no backoff, no local deadline. Every
//! error propagates to the caller as a [`StoreError`].

use std::io::SeekFrom;
use std::path::Path;

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::error::{DeleteOutcome, StoreError};
use crate::multipart::{needs_multipart, plan_parts, PartSpec};
use crate::traits::ObjectStoreClient;
use crate::types::{CompletedPartInfo, ObjectInfo, TransferOptions, LIST_PAGE_SIZE};

/// Object operations facade.
///
/// Holds a caller-owned client; construct one client per region/credential
/// pair and inject it here. The facade itself is stateless between calls.
pub struct ObjectOperations<C: ObjectStoreClient> {
    client: C,
    options: TransferOptions,
}

impl<C: ObjectStoreClient> ObjectOperations<C> {
    /// Create a facade over `client` with default transfer options.
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: TransferOptions::default(),
        }
    }

    /// Create a facade with explicit transfer options.
    pub fn with_options(client: C, options: TransferOptions) -> Self {
        Self { client, options }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Check if an object exists, returning its size and ETag.
    pub async fn head(&self, bucket: &str, key: &str) -> Result<Option<ObjectInfo>, StoreError> {
        self.client.head_object(bucket, key).await
    }

    /// Download an object to `dest`, overwriting any existing file.
    ///
    /// The destination is written directly, with no temp-file staging; a
    /// failed download can leave a partially written file behind.
    pub async fn fetch(
        &self,
        bucket: &str,
        key: &str,
        dest: impl AsRef<Path>,
    ) -> Result<(), StoreError> {
        let dest = dest.as_ref();
        tracing::debug!(bucket, key, dest = %dest.display(), "fetch");
        self.client.get_object_to_file(bucket, key, dest).await
    }

    /// Upload a local file to `bucket`/`key`.
    ///
    /// Files strictly larger than the multipart threshold are sliced into
    /// sequential byte-range parts and uploaded via a multipart session;
    /// everything else goes up in one request.
    pub async fn store(
        &self,
        bucket: &str,
        key: &str,
        src: impl AsRef<Path>,
    ) -> Result<(), StoreError> {
        let src = src.as_ref();
        let size = tokio::fs::metadata(src)
            .await
            .map_err(|e| StoreError::from_io(src.display().to_string(), e))?
            .len();

        if needs_multipart(size, self.options.multipart_threshold) {
            self.store_multipart(bucket, key, src, size).await
        } else {
            tracing::debug!(bucket, key, size, "store single-part");
            self.client.put_object_from_file(bucket, key, src).await
        }
    }

    /// Delete one object.
    pub async fn delete(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        self.client.delete_object(bucket, key).await
    }

    /// Delete many objects in one batched request.
    ///
    /// Returns a per-key outcome for every requested key, so a partial
    /// server-side failure is visible per key instead of collapsing into
    /// one aggregate result. An empty key list is a no-op.
    pub async fn delete_many(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<DeleteOutcome>, StoreError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        self.client.delete_objects(bucket, keys).await
    }

    /// Server-side copy of one object.
    pub async fn copy(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<(), StoreError> {
        self.client
            .copy_object(src_bucket, src_key, dst_bucket, dst_key)
            .await
    }

    /// Move an object: copy, then delete the source.
    ///
    /// The source is deleted only after the copy succeeds; a failed copy
    /// returns the copy error with the source untouched.
    pub async fn move_object(
        &self,
        src_bucket: &str,
        src_key: &str,
        dst_bucket: &str,
        dst_key: &str,
    ) -> Result<(), StoreError> {
        tracing::debug!(src_bucket, src_key, dst_bucket, dst_key, "move: copy");
        self.client
            .copy_object(src_bucket, src_key, dst_bucket, dst_key)
            .await?;

        tracing::debug!(src_bucket, src_key, "move: delete source");
        self.client.delete_object(src_bucket, src_key).await
    }

    /// List every key in a bucket.
    ///
    /// Pages through the listing (page size 1000) and flattens all pages
    /// into one sequence of keys in the order the store returns them.
    pub async fn list(&self, bucket: &str) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_objects_page(bucket, token.as_deref(), LIST_PAGE_SIZE)
                .await?;
            keys.extend(page.keys);

            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        Ok(keys)
    }

    async fn store_multipart(
        &self,
        bucket: &str,
        key: &str,
        src: &Path,
        size: u64,
    ) -> Result<(), StoreError> {
        let parts = plan_parts(size, self.options.part_size);
        tracing::debug!(bucket, key, size, parts = parts.len(), "store multipart");

        let upload_id = self.client.create_multipart_upload(bucket, key).await?;

        // Any failure past this point, part upload or completion, must
        // abort the session so the store doesn't keep orphaned parts.
        let result = async {
            let completed = self
                .upload_parts(bucket, key, &upload_id, src, &parts)
                .await?;
            self.client
                .complete_multipart_upload(bucket, key, &upload_id, &completed)
                .await
        }
        .await;

        match result {
            Ok(()) => {
                tracing::debug!(bucket, key, upload_id, "multipart complete");
                Ok(())
            }
            Err(err) => {
                if let Err(abort_err) = self
                    .client
                    .abort_multipart_upload(bucket, key, &upload_id)
                    .await
                {
                    tracing::warn!(
                        bucket,
                        key,
                        upload_id,
                        error = %abort_err,
                        "failed to abort multipart upload"
                    );
                }
                Err(err)
            }
        }
    }

    async fn upload_parts(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        src: &Path,
        parts: &[PartSpec],
    ) -> Result<Vec<CompletedPartInfo>, StoreError> {
        let mut file = File::open(src)
            .await
            .map_err(|e| StoreError::from_io(src.display().to_string(), e))?;

        let mut completed = Vec::with_capacity(parts.len());

        for part in parts {
            let body = read_range(&mut file, src, part.offset, part.length).await?;

            tracing::debug!(
                bucket,
                key,
                part_number = part.part_number,
                length = part.length,
                "upload part"
            );
            let etag = self
                .client
                .upload_part(bucket, key, upload_id, part.part_number, body)
                .await?;

            completed.push(CompletedPartInfo {
                part_number: part.part_number,
                etag,
            });
        }

        Ok(completed)
    }
}

/// Read one byte range of the source file into memory.
async fn read_range(
    file: &mut File,
    path: &Path,
    offset: u64,
    length: u64,
) -> Result<Bytes, StoreError> {
    file.seek(SeekFrom::Start(offset))
        .await
        .map_err(|e| StoreError::from_io(path.display().to_string(), e))?;

    let mut buffer = vec![0u8; length as usize];
    file.read_exact(&mut buffer)
        .await
        .map_err(|e| StoreError::from_io(path.display().to_string(), e))?;

    Ok(Bytes::from(buffer))
}
