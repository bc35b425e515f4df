use crate::{Result, SortError};

pub const DIGIT_BASE: u64 = 10;
pub const DIGIT_BUCKETS: usize = DIGIT_BASE as usize;

const INSERTION_THRESHOLD: usize = 24;

#[inline]
pub fn min_max(data: &[i64]) -> Option<(i64, i64)> {
    min_max_by_key(data, |&x| x)
}

#[inline]
pub fn min_max_by_key<T, F: Fn(&T) -> i64>(data: &[T], key: F) -> Option<(i64, i64)> {
    let (first, rest) = data.split_first()?;
    let mut min = key(first);
    let mut max = min;
    for x in rest {
        let k = key(x);
        if k < min {
            min = k;
        }
        if k > max {
            max = k;
        }
    }
    Some((min, max))
}

/// Number of distinct keys in `[min, max]`. Never overflows for `i64` input.
#[inline]
pub fn key_range(min: i64, max: i64) -> u128 {
    debug_assert!(min <= max);
    (max as i128 - min as i128 + 1) as u128
}

/// Offset of `value` from `min`, as a count table index.
#[inline]
pub fn shifted(value: i64, min: i64) -> usize {
    (value as i128 - min as i128) as usize
}

/// Allocates a zeroed count table with one slot per key in the range.
pub fn count_table(range: u128) -> Result<Vec<usize>> {
    let len = usize::try_from(range).map_err(|_| SortError::RangeTooLarge { range })?;
    let mut counts = Vec::new();
    counts
        .try_reserve_exact(len)
        .map_err(|_| SortError::RangeTooLarge { range })?;
    counts.resize(len, 0);
    Ok(counts)
}

/// Turns per-key counts into inclusive prefix sums: `counts[k]` becomes the
/// number of elements whose key is `<= k`.
#[inline]
pub fn cumulate(counts: &mut [usize]) {
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
}

/// Fails with the first negative key, leaving `data` untouched.
pub fn ensure_non_negative<T, F: Fn(&T) -> i64>(data: &[T], key: F) -> Result<()> {
    match data.iter().map(key).enumerate().find(|&(_, v)| v < 0) {
        Some((index, value)) => Err(SortError::NegativeKey { index, value }),
        None => Ok(()),
    }
}

#[inline]
pub fn pow10(position: u32) -> Option<u64> {
    DIGIT_BASE.checked_pow(position)
}

/// `(value / 10^position) mod 10`; positions past the width of `u64` read as
/// leading zeros.
#[inline]
pub fn digit_at(value: u64, position: u32) -> usize {
    match pow10(position) {
        Some(exp) => ((value / exp) % DIGIT_BASE) as usize,
        None => 0,
    }
}

/// Decimal digits of `max`; zero has none.
#[inline]
pub fn digit_count(mut max: u64) -> u32 {
    let mut digits = 0;
    while max > 0 {
        digits += 1;
        max /= DIGIT_BASE;
    }
    digits
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Comparison sort for small runs such as a single bucket.
#[inline]
pub fn sort_small(data: &mut [i64]) {
    if data.len() <= INSERTION_THRESHOLD {
        insertion_sort(data);
    } else {
        data.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_cases() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3]), Some((3, 3)));
        assert_eq!(min_max(&[3, -7, 12, 0]), Some((-7, 12)));
        assert_eq!(min_max(&[i64::MAX, i64::MIN]), Some((i64::MIN, i64::MAX)));
    }

    #[test]
    fn key_range_spans_full_domain() {
        assert_eq!(key_range(5, 5), 1);
        assert_eq!(key_range(-3, 3), 7);
        assert_eq!(key_range(i64::MIN, i64::MAX), 1_u128 << 64);
        assert_eq!(shifted(i64::MAX, i64::MIN), usize::MAX);
    }

    #[test]
    fn count_table_rejects_unrepresentable_range() {
        assert_eq!(count_table(4).unwrap(), vec![0; 4]);
        assert_eq!(
            count_table(1_u128 << 64),
            Err(SortError::RangeTooLarge { range: 1 << 64 })
        );
    }

    #[test]
    fn cumulate_is_inclusive() {
        let mut counts = [2, 0, 3, 1];
        cumulate(&mut counts);
        assert_eq!(counts, [2, 2, 5, 6]);
    }

    #[test]
    fn digits() {
        assert_eq!(digit_at(4589, 0), 9);
        assert_eq!(digit_at(4589, 1), 8);
        assert_eq!(digit_at(4589, 3), 4);
        assert_eq!(digit_at(4589, 4), 0);
        assert_eq!(digit_at(u64::MAX, 19), 1);
        assert_eq!(digit_at(u64::MAX, 25), 0);

        assert_eq!(digit_count(0), 0);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(i64::MAX as u64), 19);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn ensure_non_negative_reports_first_offender() {
        assert_eq!(ensure_non_negative(&[0_i64, 1, 2], |&x| x), Ok(()));
        assert_eq!(
            ensure_non_negative(&[4_i64, -1, -9], |&x| x),
            Err(SortError::NegativeKey {
                index: 1,
                value: -1
            })
        );
    }

    #[test]
    fn sort_small_sorts() {
        let mut short = vec![5, -1, 3, 3, 0];
        sort_small(&mut short);
        assert_eq!(short, [-1, 0, 3, 3, 5]);

        let mut long = (0..100).rev().collect::<Vec<i64>>();
        sort_small(&mut long);
        assert!(is_sorted_non_decreasing(&long));
    }
}
