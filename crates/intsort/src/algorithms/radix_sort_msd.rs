use crate::Result;

use super::common::{self, DIGIT_BUCKETS};

pub fn sort(data: &mut [i64]) -> Result<()> {
    sort_by_key(data, |&x| x)
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    start: usize,
    end: usize,
    digit: u32,
}

/// MSD radix sort in base 10. Keys must be non-negative.
///
/// Each segment is distributed into ten buckets by its current digit and
/// written back in digit order; buckets holding two or more elements are
/// queued for the next lower digit. Segments live on an explicit worklist
/// rather than the call stack. Shorter keys read as having leading zeros.
pub fn sort_by_key<T: Clone, F: Fn(&T) -> i64>(data: &mut [T], key: F) -> Result<()> {
    common::ensure_non_negative(data, &key)?;
    let Some((_, max)) = common::min_max_by_key(data, &key) else {
        return Ok(());
    };
    let max_digits = common::digit_count(max as u64);
    if data.len() < 2 || max_digits == 0 {
        return Ok(());
    }

    let mut scratch = data.to_vec();
    let mut pending = vec![Segment {
        start: 0,
        end: data.len(),
        digit: max_digits - 1,
    }];

    while let Some(Segment { start, end, digit }) = pending.pop() {
        let bounds = distribute(
            &mut data[start..end],
            &mut scratch[start..end],
            digit,
            &key,
        );
        if digit == 0 {
            continue;
        }
        for bucket in bounds.windows(2) {
            if bucket[1] - bucket[0] > 1 {
                pending.push(Segment {
                    start: start + bucket[0],
                    end: start + bucket[1],
                    digit: digit - 1,
                });
            }
        }
    }
    Ok(())
}

/// Stably groups `data` by the digit at `position` and returns the bucket
/// boundaries: bucket `d` occupies `bounds[d]..bounds[d + 1]`.
fn distribute<T: Clone, F: Fn(&T) -> i64>(
    data: &mut [T],
    scratch: &mut [T],
    position: u32,
    key: &F,
) -> [usize; DIGIT_BUCKETS + 1] {
    let digit = |x: &T| common::digit_at(key(x) as u64, position);

    let mut bounds = [0usize; DIGIT_BUCKETS + 1];
    for x in data.iter() {
        bounds[digit(x) + 1] += 1;
    }
    common::cumulate(&mut bounds);

    let mut next = bounds;
    for x in data.iter() {
        let slot = &mut next[digit(x)];
        scratch[*slot] = x.clone();
        *slot += 1;
    }

    data.clone_from_slice(scratch);
    bounds
}
