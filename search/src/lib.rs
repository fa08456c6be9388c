//! Searches over sorted slices.
//!
//! Every search here expects `slice` to be sorted in ascending order. That's not checked;
//! unsorted input gives a meaningless answer but never panics. A needle that isn't found
//! is `None`, never an error.
//!
//! ```
//! let odds = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];
//!
//! assert_eq!(search::binary_search(&odds, &25), Some(12));
//! assert_eq!(search::interpolation_search(&odds, &13), Some(6));
//! assert_eq!(search::jump_search(&odds, &13, 4), Ok(Some(6)));
//! assert_eq!(search::search(&odds, &26), None);
//! ```
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod binary;
pub mod error;
pub mod interpolation;
pub mod jump;
pub mod linear;
pub mod observer;
pub mod strategy;

pub use binary::{binary_search, binary_search_observed};
pub use error::{Result, SearchError};
pub use interpolation::{interpolation_search, interpolation_search_observed, Interpolable};
pub use jump::{default_block_size, jump_search, jump_search_observed, jump_search_sqrt, BlockSize};
pub use linear::{linear_search, linear_search_range, linear_search_range_observed};
pub use observer::{ProbeCounter, ProbeEvent, SearchObserver, TracingObserver};
pub use strategy::Strategy;

/// Searches with the default strategy, which is [`binary_search`].
pub fn search<T: Ord>(slice: &[T], needle: &T) -> Option<usize> {
    binary_search(slice, needle)
}
