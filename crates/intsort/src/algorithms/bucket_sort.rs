use super::common;

pub fn sort(data: &mut [i64]) {
    let len = data.len();
    let Some((min, max)) = common::min_max(data) else {
        return;
    };
    if min == max {
        return;
    }

    let bucket_count = bucket_count(len);
    let range = common::key_range(min, max);

    let mut buckets = vec![Vec::new(); bucket_count];
    for &x in data.iter() {
        buckets[bucket_index(x, min, range, bucket_count)].push(x);
    }

    let mut out = 0usize;
    for bucket in &mut buckets {
        common::sort_small(bucket);
        data[out..(out + bucket.len())].copy_from_slice(bucket);
        out += bucket.len();
    }
}

/// `floor(sqrt(len))`, at least one.
#[inline]
fn bucket_count(len: usize) -> usize {
    len.isqrt().max(1)
}

#[inline]
fn bucket_index(value: i64, min: i64, range: u128, bucket_count: usize) -> usize {
    let offset = (value as i128 - min as i128) as u128;
    let idx = (offset * bucket_count as u128 / range) as usize;
    idx.min(bucket_count - 1)
}
