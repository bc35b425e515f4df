use super::common::{self, DIGIT_BASE, DIGIT_BUCKETS};

/// One stable counting pass over the decimal digit selected by `exp`
/// (1, 10, 100, ...). `scratch` must be as long as `data`.
pub fn digit_pass_by_key<T: Clone, F: Fn(&T) -> u64>(
    data: &mut [T],
    scratch: &mut [T],
    exp: u64,
    key: F,
) {
    debug_assert_eq!(data.len(), scratch.len());
    let digit = |x: &T| ((key(x) / exp) % DIGIT_BASE) as usize;

    let mut counts = [0usize; DIGIT_BUCKETS];
    for x in data.iter() {
        counts[digit(x)] += 1;
    }
    common::cumulate(&mut counts);

    for x in data.iter().rev() {
        let slot = &mut counts[digit(x)];
        *slot -= 1;
        scratch[*slot] = x.clone();
    }

    data.clone_from_slice(scratch);
}

pub fn digit_pass(data: &mut [u64], exp: u64) {
    let mut scratch = vec![0; data.len()];
    digit_pass_by_key(data, &mut scratch, exp, |&x| x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_selected_digit_only() {
        let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
        digit_pass(&mut data, 1);
        assert_eq!(data, [170, 90, 802, 2, 24, 45, 75, 66]);
        digit_pass(&mut data, 10);
        assert_eq!(data, [802, 2, 24, 45, 66, 170, 75, 90]);
        digit_pass(&mut data, 100);
        assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn pass_is_stable() {
        let mut data = vec![(21_u64, 0), (11, 1), (31, 2), (12, 3)];
        let mut scratch = data.clone();
        digit_pass_by_key(&mut data, &mut scratch, 1, |&(k, _)| k);
        assert_eq!(data, [(21, 0), (11, 1), (31, 2), (12, 3)]);
        digit_pass_by_key(&mut data, &mut scratch, 10, |&(k, _)| k);
        assert_eq!(data, [(11, 1), (12, 3), (21, 0), (31, 2)]);
    }
}
