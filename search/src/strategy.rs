use core::fmt;
use core::str::FromStr;

use crate::error::{Result, SearchError};
use crate::interpolation::{interpolation_search_observed, Interpolable};
use crate::jump::{jump_blocks, BlockSize};
use crate::observer::SearchObserver;
use crate::{binary_search_observed, linear_search_range_observed};

/// Search algorithm together with its parameters.
///
/// Parses from and displays as `linear`, `binary`, `interpolation`, `jump` or `jump:<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    Linear,
    /// `None` uses `sqrt(len)`.
    Jump {
        block_size: Option<BlockSize>,
    },
    #[default]
    Binary,
    Interpolation,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::Jump { block_size: None },
        Strategy::Binary,
        Strategy::Interpolation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::Jump { .. } => "jump",
            Strategy::Binary => "binary",
            Strategy::Interpolation => "interpolation",
        }
    }

    pub fn search<T: Interpolable>(&self, slice: &[T], needle: &T) -> Option<usize> {
        self.search_observed(slice, needle, &mut ())
    }

    pub fn search_observed<T, O>(&self, slice: &[T], needle: &T, observer: &mut O) -> Option<usize>
    where
        T: Interpolable,
        O: SearchObserver + ?Sized,
    {
        match *self {
            Strategy::Linear => linear_search_range_observed(slice, needle, 0, slice.len(), observer),
            Strategy::Jump { block_size } => {
                let block_size = block_size.unwrap_or_else(|| BlockSize::sqrt_of(slice.len()));
                jump_blocks(slice, needle, block_size, observer)
            }
            Strategy::Binary => binary_search_observed(slice, needle, observer),
            Strategy::Interpolation => interpolation_search_observed(slice, needle, observer),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Jump {
                block_size: Some(size),
            } => write!(f, "jump:{}", size.get()),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("linear", None) => Ok(Strategy::Linear),
            ("binary", None) => Ok(Strategy::Binary),
            ("interpolation", None) => Ok(Strategy::Interpolation),
            ("jump", None) => Ok(Strategy::Jump { block_size: None }),
            ("jump", Some(arg)) => {
                let size: i64 = arg
                    .trim()
                    .parse()
                    .map_err(|_| SearchError::UnknownStrategy(s.to_string()))?;
                Ok(Strategy::Jump {
                    block_size: Some(BlockSize::try_from(size)?),
                })
            }
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::ProbeCounter;

    const ODDS: [i32; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

    #[test]
    fn test_parse() {
        assert_eq!("linear".parse::<Strategy>(), Ok(Strategy::Linear));
        assert_eq!(" Binary ".parse::<Strategy>(), Ok(Strategy::Binary));
        assert_eq!("interpolation".parse::<Strategy>(), Ok(Strategy::Interpolation));
        assert_eq!("jump".parse::<Strategy>(), Ok(Strategy::Jump { block_size: None }));
        assert_eq!(
            "jump:4".parse::<Strategy>(),
            Ok(Strategy::Jump {
                block_size: Some(BlockSize::new(4).unwrap())
            })
        );
        assert_eq!(
            "jump:-1".parse::<Strategy>(),
            Err(SearchError::InvalidArgument { block_size: -1 })
        );
        assert_eq!(
            "jump:0".parse::<Strategy>(),
            Err(SearchError::InvalidArgument { block_size: 0 })
        );
        assert_eq!(
            "jump:four".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy("jump:four".to_string()))
        );
        assert_eq!(
            "ternary".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy("ternary".to_string()))
        );
        assert_eq!(
            "binary:2".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy("binary:2".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        let strategies = Strategy::ALL.into_iter().chain([Strategy::Jump {
            block_size: Some(BlockSize::new(7).unwrap()),
        }]);
        for strategy in strategies {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_every_strategy_finds_every_item() {
        for strategy in Strategy::ALL {
            for (i, it) in ODDS.iter().enumerate() {
                assert_eq!(strategy.search(&ODDS, it), Some(i), "{strategy}");
            }
            for absent in [0, 2, 14, 26] {
                assert_eq!(strategy.search(&ODDS, &absent), None, "{strategy}");
            }
        }
    }

    #[test]
    fn test_probe_counts() {
        let mut counter = ProbeCounter::new();
        Strategy::Linear.search_observed(&ODDS, &13, &mut counter);
        assert_eq!(counter.linear_scans, 1);

        let mut counter = ProbeCounter::new();
        let jump = Strategy::Jump {
            block_size: Some(BlockSize::new(4).unwrap()),
        };
        assert_eq!(jump.search_observed(&ODDS, &13, &mut counter), Some(6));
        assert_eq!(counter.block_ends, 2);
        assert_eq!(counter.linear_scans, 1);

        let mut counter = ProbeCounter::new();
        Strategy::Interpolation.search_observed(&ODDS, &13, &mut counter);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn test_default_is_binary() {
        assert_eq!(Strategy::default(), Strategy::Binary);
    }
}
