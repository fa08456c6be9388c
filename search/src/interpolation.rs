use core::cmp::Ordering;

use crate::observer::{ProbeEvent, SearchObserver};

/// Values that can be placed on the real line to estimate where a needle lies.
///
/// All interpolation arithmetic is done in `f64`. Integers wider than 53 bits are
/// rounded, and a window whose ends round to the same `f64` makes the search give up.
pub trait Interpolable: Ord {
    fn to_f64(&self) -> f64;
}

macro_rules! impl_interpolable {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Interpolable for $t {
                #[inline]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )+
    };
}

impl_interpolable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Interpolable + ?Sized> Interpolable for &T {
    #[inline]
    fn to_f64(&self) -> f64 {
        (**self).to_f64()
    }
}

/// Outcome of estimating the next probe in the window `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// Compare the item at this index. It may lie outside of the window.
    At(Option<usize>),
    /// Window is flat so the answer is known without probing further.
    Resolved(Option<usize>),
}

fn interpolate<T, O>(slice: &[T], low: usize, high: usize, needle: &T, observer: &mut O) -> Probe
where
    T: Interpolable,
    O: SearchObserver + ?Sized,
{
    if low == high {
        return Probe::At(Some(low));
    }

    let first = &slice[low];
    let last = &slice[high - 1];
    if first == last {
        observer.on_probe(ProbeEvent::FlatWindow { low, high });
        return Probe::Resolved((needle == first).then_some(low));
    }

    let ratio = (needle.to_f64() - first.to_f64()) / (last.to_f64() - first.to_f64());
    // `f64::round` rounds half away from zero
    let offset = ((high - 1 - low) as f64 * ratio).round();
    let cut = if offset.is_finite() && offset >= 0.0 && offset < (high - low) as f64 {
        Some(low + offset as usize)
    } else {
        None
    };

    observer.on_probe(ProbeEvent::Interpolate { low, high, cut });
    Probe::At(cut)
}

/// Interpolation search over an ascending slice.
///
/// Instead of halving the window like [`binary_search`](crate::binary_search) it probes
/// where `needle` would be if the values were spread uniformly, giving `O(log log n)`
/// expected probes on uniform data.
///
/// The search gives up as soon as an estimate falls outside of the current window. For
/// ascending data that means the needle is absent, unless the ends of the window are
/// equal after conversion to `f64` (see [`Interpolable`]), in which case a present
/// needle can be missed.
pub fn interpolation_search<T: Interpolable>(slice: &[T], needle: &T) -> Option<usize> {
    interpolation_search_observed(slice, needle, &mut ())
}

pub fn interpolation_search_observed<T, O>(
    slice: &[T],
    needle: &T,
    observer: &mut O,
) -> Option<usize>
where
    T: Interpolable,
    O: SearchObserver + ?Sized,
{
    let mut low = 0;
    let mut high = slice.len();

    loop {
        let cut = match interpolate(slice, low, high, needle, observer) {
            Probe::Resolved(found) => return found,
            Probe::At(cut) => cut,
        };

        // Out of window estimate ends the search. Clamping it back would lose the
        // `O(log log n)` behavior on uniform data.
        let cut = match cut {
            Some(cut) if high - low > 1 && low <= cut && cut < high => cut,
            _ => return None,
        };

        match slice[cut].cmp(needle) {
            Ordering::Equal => return Some(cut),
            Ordering::Less => low = cut + 1,
            Ordering::Greater => high = cut,
        }
    }
}
