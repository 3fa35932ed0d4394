//! Most-repeated-value search over an event list.
//!
//! Port of `find_max`. The Python loop scans candidate values in
//! `[0, max(data))` and list indices in `[0, len-1)`, both exclusive,
//! so the largest value and the last element never enter the count.
//! The bounds are kept exactly as inherited; [`peak_occurrences`]
//! makes them explicit so callers (and tests) can see them.

use std::ops::Range;

use radon_types::error::{MonitorError, MonitorResult};

/// Number of elements of `data[indices]` equal to `value`.
pub fn occurrences(data: &[usize], value: usize, indices: Range<usize>) -> usize {
    data[indices].iter().filter(|&&v| v == value).count()
}

/// Highest occurrence count of any candidate in `values`, scanning
/// only `data[indices]`. Errors if the candidate range is empty.
pub fn peak_occurrences(
    data: &[usize],
    values: Range<usize>,
    indices: Range<usize>,
) -> MonitorResult<usize> {
    values
        .map(|v| occurrences(data, v, indices.clone()))
        .max()
        .ok_or(MonitorError::EmptyScanRange)
}

/// Highest repetition count in a non-empty event list.
///
/// Scans values `[0, max(data))` and indices `[0, len-1)`, as the
/// inherited analysis does. Errors on an empty list, and on an
/// all-zero list (the value scan range collapses).
pub fn find_max(data: &[usize]) -> MonitorResult<usize> {
    let top = data.iter().copied().max().ok_or(MonitorError::EmptySeries)?;
    peak_occurrences(data, 0..top, 0..data.len() - 1)
}
