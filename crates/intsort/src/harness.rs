//! Input generators, timing and reporting for comparing the sorts.

use std::fmt::Write;
use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

use crate::{Result, SortAlgorithm, algorithm_name, sort_i64};

/// `len` values drawn uniformly from `[0, max_val]`.
pub fn random_array<R: Rng + ?Sized>(len: usize, max_val: i64, rng: &mut R) -> Vec<i64> {
    debug!("generating {len} random keys in [0, {max_val}]");
    (0..len).map(|_| rng.random_range(0..=max_val)).collect()
}

pub fn sorted_array(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

pub fn reverse_sorted_array(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}

pub fn is_sorted(data: &[i64]) -> bool {
    crate::algorithms::common::is_sorted_non_decreasing(data)
}

#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    pub algorithm: SortAlgorithm,
    pub len: usize,
    pub elapsed: Duration,
    pub sorted: bool,
}

impl Measurement {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Sorts a private copy of `data` and records the wall-clock time taken.
pub fn measure(algo: SortAlgorithm, data: &[i64]) -> Result<Measurement> {
    let mut copy = data.to_vec();
    let start = Instant::now();
    sort_i64(algo, &mut copy)?;
    let elapsed = start.elapsed();

    let measurement = Measurement {
        algorithm: algo,
        len: data.len(),
        elapsed,
        sorted: is_sorted(&copy),
    };
    debug!(
        "{} on {} keys: {:.3} ms",
        algorithm_name(algo),
        measurement.len,
        measurement.millis()
    );
    Ok(measurement)
}

/// Renders at most `limit` elements as `[a, b, c]`, with ` ...` before the
/// closing bracket when elements were left out.
pub fn format_preview(data: &[i64], limit: usize) -> String {
    let mut out = String::from("[");
    for (i, x) in data.iter().take(limit).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{x}");
    }
    if data.len() > limit {
        out.push_str(" ...");
    }
    out.push(']');
    out
}
