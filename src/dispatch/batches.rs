use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits `0..total` into consecutive ranges of `batch_size`; the last one
/// holds the remainder.
pub fn batch_ranges(total: usize, batch_size: NonZeroUsize) -> impl Iterator<Item = Range<usize>> {
    let size = batch_size.get();
    (0..total)
        .step_by(size)
        .map(move |start| start..start.saturating_add(size).min(total))
}
