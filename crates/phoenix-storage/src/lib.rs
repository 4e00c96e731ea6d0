//! Thin object-storage client: operations facade and backend trait.
//!
//! This crate holds the portable half of the client:
//!
//! - **Errors** - explicit error kinds (invalid region, bucket/key not
//!   found, service vs client failure) instead of an exception hierarchy
//! - **Region validation** - configuration errors are rejected before any
//!   network activity
//! - **Multipart planning** - pure byte-range slicing with a final
//!   remainder part, bounded by the provider's part limits
//! - **`ObjectStoreClient`** - the async trait a backend implements; the
//!   value is the connection handle, owned by the caller
//! - **`ObjectOperations`** - get/put/delete/delete-many/copy/move/list
//!   over any client
//!
//! The AWS SDK backend lives in the companion `phoenix-storage-aws` crate.

mod error;
mod multipart;
mod ops;
mod region;
mod traits;
mod types;

pub use error::{DeleteOutcome, StoreError};
pub use multipart::{effective_part_size, needs_multipart, plan_parts, PartSpec};
pub use ops::ObjectOperations;
pub use region::{is_known_region, validate_region};
pub use traits::ObjectStoreClient;
pub use types::{
    ClientSettings, CompletedPartInfo, ListPage, ObjectInfo, TransferOptions, DEFAULT_PART_SIZE,
    LIST_PAGE_SIZE, MAX_PART_COUNT, MIN_PART_SIZE, MULTIPART_THRESHOLD,
};
