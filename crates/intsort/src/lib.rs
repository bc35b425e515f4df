pub mod algorithms;
pub mod config;
mod error;
pub mod harness;

use std::fmt;

pub use error::{Result, SortError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    CountingSort,
    CountingSortStable,
    RadixSortLsd,
    BucketSort,
    RadixSortMsd,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::CountingSort,
    SortAlgorithm::CountingSortStable,
    SortAlgorithm::RadixSortLsd,
    SortAlgorithm::BucketSort,
    SortAlgorithm::RadixSortMsd,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::CountingSortStable => "counting_sort_stable",
        SortAlgorithm::RadixSortLsd => "radix_sort_lsd",
        SortAlgorithm::BucketSort => "bucket_sort",
        SortAlgorithm::RadixSortMsd => "radix_sort_msd",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

/// Whether equal keys come out in their input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::CountingSortStable
            | SortAlgorithm::RadixSortLsd
            | SortAlgorithm::RadixSortMsd
    )
}

/// Radix sorts extract decimal digits and reject negative keys.
pub fn supports_negative(algo: SortAlgorithm) -> bool {
    !matches!(algo, SortAlgorithm::RadixSortLsd | SortAlgorithm::RadixSortMsd)
}

/// Sorts `data` ascending in place. On error `data` is left as it was.
pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) -> Result<()> {
    match algo {
        SortAlgorithm::CountingSort => algorithms::counting_sort::sort(data),
        SortAlgorithm::CountingSortStable => algorithms::counting_sort_stable::sort(data),
        SortAlgorithm::RadixSortLsd => algorithms::radix_sort_lsd::sort(data),
        SortAlgorithm::BucketSort => {
            algorithms::bucket_sort::sort(data);
            Ok(())
        }
        SortAlgorithm::RadixSortMsd => algorithms::radix_sort_msd::sort(data),
    }
}

/// Stable sort of arbitrary records by an integer key. Only algorithms for
/// which [`is_stable`] holds are accepted.
pub fn sort_stable_by_key<T, F>(algo: SortAlgorithm, data: &mut [T], key: F) -> Result<()>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    match algo {
        SortAlgorithm::CountingSortStable => {
            algorithms::counting_sort_stable::sort_by_key(data, key)
        }
        SortAlgorithm::RadixSortLsd => algorithms::radix_sort_lsd::sort_by_key(data, key),
        SortAlgorithm::RadixSortMsd => algorithms::radix_sort_msd::sort_by_key(data, key),
        SortAlgorithm::CountingSort | SortAlgorithm::BucketSort => {
            Err(SortError::NotStable { algorithm: algo })
        }
    }
}
