use core::cmp::Ordering;

use crate::observer::{ProbeEvent, SearchObserver};

/// Classic halving search over an ascending slice.
///
/// Under duplicates any matching index may be returned.
pub fn binary_search<T: Ord>(slice: &[T], needle: &T) -> Option<usize> {
    binary_search_observed(slice, needle, &mut ())
}

pub fn binary_search_observed<T, O>(slice: &[T], needle: &T, observer: &mut O) -> Option<usize>
where
    T: Ord,
    O: SearchObserver + ?Sized,
{
    let mut l = 0;
    let mut r = slice.len();

    // INVARIANT: if `needle` is in `slice`, it's in `slice[l..r]`
    while l < r {
        let mid = l + (r - l) / 2;
        observer.on_probe(ProbeEvent::Bisect {
            low: l,
            high: r,
            cut: mid,
        });

        match slice[mid].cmp(needle) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => l = mid + 1,
            Ordering::Greater => r = mid,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ODDS: [i32; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

    #[test]
    fn it_works() {
        assert_eq!(binary_search(&ODDS, &25), Some(12));
        assert_eq!(binary_search(&ODDS, &1), Some(0));
        assert_eq!(binary_search(&ODDS, &13), Some(6));
        assert_eq!(binary_search(&ODDS, &26), None);
        assert_eq!(binary_search(&ODDS, &0), None);
        assert_eq!(binary_search(&ODDS, &14), None);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(binary_search::<i32>(&[], &1), None);
        assert_eq!(binary_search(&[7], &7), Some(0));
        assert_eq!(binary_search(&[7], &8), None);
    }

    #[test]
    fn test_probes_first_cut_in_middle() {
        let mut events: Vec<ProbeEvent> = Vec::new();
        binary_search_observed(&ODDS, &25, &mut events);
        assert_eq!(
            events[0],
            ProbeEvent::Bisect {
                low: 0,
                high: 13,
                cut: 6
            }
        );
        assert!(events.len() <= 4);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        #[cfg(not(miri))]
        const VEC_SIZE: usize = 1000;
        #[cfg(miri)]
        const VEC_SIZE: usize = 50;

        #[cfg(not(miri))]
        const PROPTEST_CASES: u32 = 1000;
        #[cfg(miri)]
        const PROPTEST_CASES: u32 = 10;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

            #[test]
            #[cfg_attr(miri, ignore = "no unsafe code, nothing for miri to check")]
            fn test_finds_every_item(
                mut vec in proptest::collection::vec(0..10000i32, 1..VEC_SIZE),
                pick in any::<proptest::sample::Index>(),
            ) {
                vec.sort();
                let needle = vec[pick.index(vec.len())];
                let found = binary_search(&vec, &needle);
                prop_assert!(found.is_some());
                prop_assert_eq!(vec[found.unwrap()], needle);
            }

            #[test]
            #[cfg_attr(miri, ignore = "no unsafe code, nothing for miri to check")]
            fn test_agrees_with_std(
                mut vec in proptest::collection::vec(0..10000i32, 0..VEC_SIZE),
                needle in 0..10000i32,
            ) {
                vec.sort();
                prop_assert_eq!(binary_search(&vec, &needle).is_some(), vec.binary_search(&needle).is_ok());
            }
        );
    }
}
