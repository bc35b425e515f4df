use thiserror::Error;

use crate::SortAlgorithm;

pub type Result<T> = core::result::Result<T, SortError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("negative key {value} at index {index}: radix sorts require non-negative keys")]
    NegativeKey { index: usize, value: i64 },
    #[error("count table of {range} slots cannot be allocated")]
    RangeTooLarge { range: u128 },
    #[error("{algorithm} does not preserve the order of equal keys")]
    NotStable { algorithm: SortAlgorithm },
}
