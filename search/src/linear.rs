use crate::observer::{ProbeEvent, SearchObserver};

/// Returns the first index in the whole `slice` where it holds `needle`. Needs no ordering.
pub fn linear_search<T: PartialEq>(slice: &[T], needle: &T) -> Option<usize> {
    for (i, it) in slice.iter().enumerate() {
        if it == needle {
            return Some(i);
        }
    }

    None
}

/// Returns the first index in `[start, end)` where `slice` holds `needle`.
///
/// `start >= end` is an empty range and `end` is clamped to `slice.len()`, so this
/// never panics on bad bounds.
pub fn linear_search_range<T: PartialEq>(
    slice: &[T],
    needle: &T,
    start: usize,
    end: usize,
) -> Option<usize> {
    linear_search_range_observed(slice, needle, start, end, &mut ())
}

pub fn linear_search_range_observed<T, O>(
    slice: &[T],
    needle: &T,
    start: usize,
    end: usize,
    observer: &mut O,
) -> Option<usize>
where
    T: PartialEq,
    O: SearchObserver + ?Sized,
{
    let end = end.min(slice.len());
    observer.on_probe(ProbeEvent::LinearScan { start, end });
    if start >= end {
        return None;
    }

    linear_search(&slice[start..end], needle).map(|i| i + start)
}
