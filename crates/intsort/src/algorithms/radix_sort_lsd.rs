use crate::Result;

use super::common::{self, DIGIT_BASE};
use super::radix_digit_pass;

pub fn sort(data: &mut [i64]) -> Result<()> {
    sort_by_key(data, |&x| x)
}

/// LSD radix sort in base 10: one stable digit pass per decimal digit of the
/// largest key, least significant first. Keys must be non-negative.
pub fn sort_by_key<T: Clone, F: Fn(&T) -> i64>(data: &mut [T], key: F) -> Result<()> {
    common::ensure_non_negative(data, &key)?;
    let Some((_, max)) = common::min_max_by_key(data, &key) else {
        return Ok(());
    };

    let max = max as u64;
    let mut scratch = data.to_vec();
    let mut exp = 1_u64;
    while max / exp > 0 {
        radix_digit_pass::digit_pass_by_key(data, &mut scratch, exp, |x| key(x) as u64);
        match exp.checked_mul(DIGIT_BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(())
}
