use crate::Result;

use super::common;

pub fn sort(data: &mut [i64]) -> Result<()> {
    sort_by_key(data, |&x| x)
}

/// Stable counting sort over an arbitrary integer key.
///
/// The count table is turned into inclusive prefix sums and the input is
/// walked right to left, so each element lands at the last free slot of its
/// key and earlier duplicates end up in front of later ones.
pub fn sort_by_key<T: Clone, F: Fn(&T) -> i64>(data: &mut [T], key: F) -> Result<()> {
    let Some((min, max)) = common::min_max_by_key(data, &key) else {
        return Ok(());
    };
    if min == max {
        return Ok(());
    }

    let mut counts = common::count_table(common::key_range(min, max))?;
    for x in data.iter() {
        counts[common::shifted(key(x), min)] += 1;
    }
    common::cumulate(&mut counts);

    let mut output = data.to_vec();
    for x in data.iter().rev() {
        let slot = &mut counts[common::shifted(key(x), min)];
        *slot -= 1;
        output[*slot] = x.clone();
    }

    data.clone_from_slice(&output);
    Ok(())
}
