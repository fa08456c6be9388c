use core::cmp::Ordering;
use core::num::NonZeroUsize;

use crate::error::{Result, SearchError};
use crate::linear::linear_search_range_observed;
use crate::observer::{ProbeEvent, SearchObserver};

/// Strictly positive jump size for [`jump_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(SearchError::InvalidArgument { block_size: 0 })
    }

    /// `floor(sqrt(len))` but at least 1.
    pub fn sqrt_of(len: usize) -> Self {
        let size = f64::sqrt(len as f64) as usize;
        Self(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for BlockSize {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(SearchError::InvalidArgument { block_size: value })
    }
}

impl TryFrom<isize> for BlockSize {
    type Error = SearchError;

    fn try_from(value: isize) -> Result<Self> {
        Self::try_from(value as i64)
    }
}

impl From<BlockSize> for usize {
    fn from(value: BlockSize) -> Self {
        value.get()
    }
}

/// Block size that minimizes the worst case number of comparisons for a slice of `len` items.
pub fn default_block_size(len: usize) -> usize {
    BlockSize::sqrt_of(len).get()
}

/// Jump search over an ascending slice.
///
/// Compares the last item of every `block_size` sized block until it finds a block whose
/// last item is larger than `needle` and then scans that block linearly.
///
/// Time complexity is `O(len / block_size + block_size)`, best when `block_size` is about
/// `sqrt(len)`. See [`jump_search_sqrt`].
///
/// # Errors
///
/// * [`SearchError::InvalidArgument`] if `block_size == 0`
pub fn jump_search<T: Ord>(slice: &[T], needle: &T, block_size: usize) -> Result<Option<usize>> {
    jump_search_observed(slice, needle, block_size, &mut ())
}

/// Jump search with block size of `sqrt(slice.len())`.
pub fn jump_search_sqrt<T: Ord>(slice: &[T], needle: &T) -> Option<usize> {
    jump_blocks(slice, needle, BlockSize::sqrt_of(slice.len()), &mut ())
}

pub fn jump_search_observed<T, O>(
    slice: &[T],
    needle: &T,
    block_size: usize,
    observer: &mut O,
) -> Result<Option<usize>>
where
    T: Ord,
    O: SearchObserver + ?Sized,
{
    let block_size = BlockSize::new(block_size)?;
    Ok(jump_blocks(slice, needle, block_size, observer))
}

pub(crate) fn jump_blocks<T, O>(
    slice: &[T],
    needle: &T,
    block_size: BlockSize,
    observer: &mut O,
) -> Option<usize>
where
    T: Ord,
    O: SearchObserver + ?Sized,
{
    let last = slice.len().checked_sub(1)?;
    let block_size = block_size.get();

    let mut block = 1_usize;
    loop {
        let end_of_block = block_size.saturating_mul(block).saturating_sub(1).min(last);
        observer.on_probe(ProbeEvent::BlockEnd {
            block,
            index: end_of_block,
        });

        match slice[end_of_block].cmp(needle) {
            Ordering::Equal => return Some(end_of_block),
            Ordering::Less => {}
            Ordering::Greater => {
                // `slice[end_of_block] != needle`, so leave it out of the scan
                let start = block_size * (block - 1);
                return linear_search_range_observed(slice, needle, start, end_of_block, observer);
            }
        }

        if end_of_block == last {
            return None;
        }
        block += 1;
    }
}
