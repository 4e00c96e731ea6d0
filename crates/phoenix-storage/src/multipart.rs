//! Multipart part planning.
//!
//! Pure logic for deciding when an upload takes the multipart path and how
//! the source file is sliced into parts. No I/O here, just decision making.

use crate::types::{MAX_PART_COUNT, MIN_PART_SIZE};

/// A planned byte range within the source file for one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpec {
    /// 1-based part number.
    pub part_number: i32,
    /// Byte offset within the file.
    pub offset: u64,
    /// Length of this part in bytes.
    pub length: u64,
}

/// Determine if an upload should take the multipart path.
///
/// Files strictly larger than `threshold` are uploaded in parts.
pub fn needs_multipart(size: u64, threshold: u64) -> bool {
    size > threshold
}

/// Pick the effective part size for a file.
///
/// Starts from the requested part size, raised to the 5 MiB floor, then
/// raised further if needed so the part count stays within the store's
/// 10 000-part limit.
pub fn effective_part_size(size: u64, requested: u64) -> u64 {
    let mut part_size = requested.max(MIN_PART_SIZE);
    let min_for_count = size.div_ceil(MAX_PART_COUNT);
    if min_for_count > part_size {
        part_size = min_for_count;
    }
    part_size
}

/// Plan the parts for a multipart upload.
///
/// Slices `size` bytes into sequential, non-overlapping ranges of the
/// effective part size; the final part carries the remainder and may be
/// shorter. Part numbers start at 1 and ascend in offset order.
pub fn plan_parts(size: u64, requested_part_size: u64) -> Vec<PartSpec> {
    let part_size = effective_part_size(size, requested_part_size);

    let mut parts = Vec::new();
    let mut offset = 0u64;
    let mut part_number = 1i32;

    while offset < size {
        let length = std::cmp::min(part_size, size - offset);
        parts.push(PartSpec {
            part_number,
            offset,
            length,
        });
        offset += length;
        part_number += 1;
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_PART_SIZE, MULTIPART_THRESHOLD};

    #[test]
    fn test_needs_multipart_boundary() {
        // Exactly at the threshold stays single-part.
        assert!(!needs_multipart(MULTIPART_THRESHOLD, MULTIPART_THRESHOLD));

        // One byte above crosses over.
        assert!(needs_multipart(MULTIPART_THRESHOLD + 1, MULTIPART_THRESHOLD));

        assert!(!needs_multipart(0, MULTIPART_THRESHOLD));
        assert!(!needs_multipart(1024, MULTIPART_THRESHOLD));
    }

    #[test]
    fn test_plan_parts_exact_multiple() {
        let parts = plan_parts(DEFAULT_PART_SIZE * 3, DEFAULT_PART_SIZE);
        assert_eq!(parts.len(), 3);

        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.part_number, i as i32 + 1);
            assert_eq!(part.offset, i as u64 * DEFAULT_PART_SIZE);
            assert_eq!(part.length, DEFAULT_PART_SIZE);
        }
    }

    #[test]
    fn test_plan_parts_with_remainder() {
        let size = DEFAULT_PART_SIZE * 2 + 1234;
        let parts = plan_parts(size, DEFAULT_PART_SIZE);
        assert_eq!(parts.len(), 3);

        assert_eq!(parts[2].part_number, 3);
        assert_eq!(parts[2].offset, DEFAULT_PART_SIZE * 2);
        assert_eq!(parts[2].length, 1234);
    }

    #[test]
    fn test_plan_parts_covers_file_exactly() {
        let size = 500 * 1024 * 1024 + 7;
        let parts = plan_parts(size, DEFAULT_PART_SIZE);

        let mut expected_offset = 0u64;
        for part in &parts {
            assert_eq!(part.offset, expected_offset);
            expected_offset += part.length;
        }
        assert_eq!(expected_offset, size);
    }

    #[test]
    fn test_part_size_floor() {
        // Requests below the provider minimum are raised to it.
        assert_eq!(effective_part_size(100 * 1024 * 1024, 1024), MIN_PART_SIZE);
    }

    #[test]
    fn test_part_count_clamp() {
        // A file that would need more than 10 000 parts at the requested
        // size gets a larger part size instead.
        let size = MIN_PART_SIZE * MAX_PART_COUNT + 1;
        let parts = plan_parts(size, MIN_PART_SIZE);
        assert!(parts.len() as u64 <= MAX_PART_COUNT);

        let total: u64 = parts.iter().map(|p| p.length).sum();
        assert_eq!(total, size);
    }
}
