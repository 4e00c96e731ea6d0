//! Region-code validation.
//!
//! An unknown region is a configuration error, not a transient failure, so
//! it is rejected here before any client is built or any network activity
//! happens.

use crate::error::StoreError;

/// Region codes across the aws, aws-cn and aws-us-gov partitions.
const KNOWN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// Check whether `region` is a known region code.
pub fn is_known_region(region: &str) -> bool {
    KNOWN_REGIONS.contains(&region)
}

/// Validate a region code, returning `InvalidRegion` with the offending
/// value if it is not in the known set.
pub fn validate_region(region: &str) -> Result<(), StoreError> {
    if is_known_region(region) {
        Ok(())
    } else {
        Err(StoreError::InvalidRegion {
            region: region.to_string(),
        })
    }
}
