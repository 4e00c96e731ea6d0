//! Shared data structures for object-storage operations.

use serde::{Deserialize, Serialize};

/// Default threshold above which uploads switch to the multipart path (100 MiB).
pub const MULTIPART_THRESHOLD: u64 = 100 * 1024 * 1024;

/// Default multipart part size (16 MiB).
pub const DEFAULT_PART_SIZE: u64 = 16 * 1024 * 1024;

/// Smallest part size the store accepts for any part but the last (5 MiB).
pub const MIN_PART_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum number of parts in one multipart upload.
pub const MAX_PART_COUNT: u64 = 10_000;

/// Page size used when listing bucket contents.
pub const LIST_PAGE_SIZE: i32 = 1000;

/// Settings for constructing a store client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Region code (e.g. "us-west-2"). Validated before construction.
    pub region: String,
    /// Named credential profile. `None` or empty uses the default chain.
    pub credentials_profile: Option<String>,
}

impl ClientSettings {
    /// Settings for `region` with the default credential chain.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            credentials_profile: None,
        }
    }

    /// Bind a named credential profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.credentials_profile = Some(profile.into());
        self
    }

    /// The profile to use, treating an empty name as "use default chain".
    pub fn profile(&self) -> Option<&str> {
        self.credentials_profile.as_deref().filter(|p| !p.is_empty())
    }
}

/// Options controlling the upload size policy.
#[derive(Debug, Clone)]
pub struct TransferOptions {
    /// Files strictly larger than this take the multipart path.
    pub multipart_threshold: u64,
    /// Target size of each multipart part (final part may be shorter).
    pub part_size: u64,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            multipart_threshold: MULTIPART_THRESHOLD,
            part_size: DEFAULT_PART_SIZE,
        }
    }
}

impl TransferOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multipart threshold in bytes.
    pub fn with_multipart_threshold(mut self, threshold: u64) -> Self {
        self.multipart_threshold = threshold;
        self
    }

    /// Set the part size in bytes.
    pub fn with_part_size(mut self, part_size: u64) -> Self {
        self.part_size = part_size;
        self
    }
}

/// A completed multipart part: its number and the entity tag the store
/// returned for it. Submitted in ascending part order at completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPartInfo {
    /// 1-based part number.
    pub part_number: i32,
    /// Entity tag returned by the store for this part.
    pub etag: String,
}

/// Information about a stored object from head/list operations.
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    /// Object size in bytes.
    pub size: u64,
    /// ETag, if the store reported one.
    pub etag: Option<String>,
}

/// One page of a bucket listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Keys on this page, in store order.
    pub keys: Vec<String>,
    /// Continuation token for the next page, if the listing was truncated.
    pub next_token: Option<String>,
}
