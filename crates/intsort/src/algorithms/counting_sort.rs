use crate::Result;

use super::common;

/// Counting sort that rebuilds the sequence straight from the tally, so
/// equal keys carry no identity across the sort.
pub fn sort(data: &mut [i64]) -> Result<()> {
    let Some((min, max)) = common::min_max(data) else {
        return Ok(());
    };
    if min == max {
        return Ok(());
    }

    let mut counts = common::count_table(common::key_range(min, max))?;
    for &x in data.iter() {
        counts[common::shifted(x, min)] += 1;
    }

    let mut out = 0usize;
    for (offset, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = (min as i128 + offset as i128) as i64;
        data[out..(out + count)].fill(value);
        out += count;
    }
    Ok(())
}
