//! # Partition
//!
//! Splits an index range into contiguous, non-overlapping chunks, one per worker.
//! The split depends only on the range, the worker's logical index and the worker
//! count, so any physical thread can execute any logical index and the work done
//! for a given index stays the same.
//!
//! ```rust
//! use knapga::partition::partition;
//!
//! assert_eq!(partition(0, 10, 0, 3), 0..3);
//! assert_eq!(partition(0, 10, 1, 3), 3..6);
//! assert_eq!(partition(0, 10, 2, 3), 6..10);
//! ```

use std::ops::Range;

/// Returns the sub-range of `[range_start, range_end)` owned by `worker` out of `workers`.
///
/// With `size = range_end - range_start`, the worker owns
/// `[range_start + worker * size / workers, range_start + (worker + 1) * size / workers)`
/// clamped to `range_end`. Chunks of consecutive workers touch without overlap and
/// together cover the whole range; when there are more workers than indices some
/// chunks are empty.
pub fn partition(
    range_start: usize,
    range_end: usize,
    worker: usize,
    workers: usize,
) -> Range<usize> {
    debug_assert!(workers > 0, "at least one worker is required");
    debug_assert!(worker < workers, "worker {} out of {}", worker, workers);
    debug_assert!(range_start <= range_end);

    let size = range_end - range_start;
    let start = range_start + worker * size / workers;
    let end = (range_start + (worker + 1) * size / workers).min(range_end);

    start..end
}
