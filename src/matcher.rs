//! Exhaustive motif matching, serial and parallel
//!
//! Both variants report every start offset where the pattern occurs verbatim,
//! overlapping occurrences included, in ascending order. The parallel variant
//! partitions the valid start offsets into contiguous chunks and scans each on
//! its own scoped worker thread:
//!
//! ```text
//! sequence:  A G C T A G C T A G C T A G
//! offsets:   [0 ......... S-1]            S = |sequence| - |pattern| + 1
//! chunks:    [0..c) [c..2c) ... [(k-1)c..S)   last chunk absorbs the remainder
//! ```
//!
//! A worker tests only its own start offsets, reading past the chunk end as
//! needed, so a match straddling a chunk boundary is found exactly once. The
//! merged result is identical to the serial scan for every input.

use crate::error::{GroverError, Result};
use std::ops::Range;
use std::time::Instant;

/// Default worker count for [`find_pattern_matches_parallel`]
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Ascending, duplicate-free list of match start offsets
pub type MatchSet = Vec<usize>;

/// Find all start offsets where `pattern` occurs in `sequence`
///
/// Empty patterns, empty sequences and patterns longer than the sequence
/// yield an empty set.
///
/// # Example
/// ```
/// use motif_grover::matcher::find_pattern_matches;
///
/// assert_eq!(find_pattern_matches(b"AAAA", b"AA"), vec![0, 1, 2]);
/// assert!(find_pattern_matches(b"ACGT", b"").is_empty());
/// ```
pub fn find_pattern_matches(sequence: &[u8], pattern: &[u8]) -> MatchSet {
    match search_len(sequence, pattern) {
        Some(len) => scan_range(sequence, pattern, 0..len),
        None => Vec::new(),
    }
}

/// Parallel variant of [`find_pattern_matches`] with the same output
///
/// `num_threads` below 1 is treated as 1, and the worker count never exceeds
/// the number of start offsets. Degenerate inputs return before any thread is
/// spawned. All workers are joined before this returns.
///
/// # Errors
/// [`GroverError::WorkerSpawn`] if the OS refuses a thread, and
/// [`GroverError::WorkerPanicked`] if a worker dies. Neither is retried.
pub fn find_pattern_matches_parallel(
    sequence: &[u8],
    pattern: &[u8],
    num_threads: usize,
) -> Result<MatchSet> {
    let Some(len) = search_len(sequence, pattern) else {
        return Ok(Vec::new());
    };

    let chunks = partition_offsets(len, num_threads);
    tracing::debug!(
        sequence_len = sequence.len(),
        pattern_len = pattern.len(),
        offsets = len,
        workers = chunks.len(),
        "starting parallel motif scan"
    );
    let start = Instant::now();

    let partials = crossbeam::thread::scope(|scope| -> Result<Vec<MatchSet>> {
        let mut handles = Vec::with_capacity(chunks.len());
        for (worker, range) in chunks.into_iter().enumerate() {
            let handle = scope
                .builder()
                .name(format!("motif-matcher-{}", worker))
                .spawn(move |_| scan_range(sequence, pattern, range))
                .map_err(GroverError::WorkerSpawn)?;
            handles.push(handle);
        }

        handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_| GroverError::WorkerPanicked(format!("motif-matcher-{}", worker)))
            })
            .collect()
    })
    .map_err(|_| GroverError::WorkerPanicked("unjoined motif-matcher".to_string()))??;

    let mut matches: MatchSet = partials.into_iter().flatten().collect();
    matches.sort_unstable();

    tracing::debug!(
        matches = matches.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "parallel motif scan complete"
    );
    Ok(matches)
}

/// Split `0..search_len` into contiguous, non-empty chunks, one per worker
///
/// The worker count is clamped to `1..=search_len`; the last chunk absorbs
/// the remainder of the integer division.
pub fn partition_offsets(search_len: usize, num_threads: usize) -> Vec<Range<usize>> {
    if search_len == 0 {
        return Vec::new();
    }
    let workers = num_threads.clamp(1, search_len);
    let chunk_size = search_len / workers;

    (0..workers)
        .map(|t| {
            let start = t * chunk_size;
            let end = if t == workers - 1 {
                search_len
            } else {
                start + chunk_size
            };
            start..end
        })
        .collect()
}

/// Number of valid start offsets, or `None` for degenerate inputs
fn search_len(sequence: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || sequence.is_empty() || pattern.len() > sequence.len() {
        return None;
    }
    Some(sequence.len() - pattern.len() + 1)
}

/// Naive sliding-window comparison over the given start offsets
fn scan_range(sequence: &[u8], pattern: &[u8], offsets: Range<usize>) -> MatchSet {
    let mut matches = Vec::new();
    for start in offsets {
        if &sequence[start..start + pattern.len()] == pattern {
            matches.push(start);
        }
    }
    matches
}
