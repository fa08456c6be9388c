use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("block size must be strictly positive, got {block_size}")]
    InvalidArgument { block_size: i64 },

    #[error("unknown search strategy: {0:?}")]
    UnknownStrategy(String),
}

pub type Result<T> = core::result::Result<T, SearchError>;
