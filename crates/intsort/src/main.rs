//! Demonstrates the non-comparison sorts on a small fixed array, then times
//! each of them on generated inputs of several sizes.

use std::process::ExitCode;

use intsort::config::{RunConfig, USAGE};
use intsort::harness::{self, Measurement};
use intsort::{SortAlgorithm, all_algorithms, sort_i64};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SHOWCASE: [i64; 10] = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    println!("Non-Comparison Sorting Algorithms\n");
    if !showcase(&config) {
        return ExitCode::FAILURE;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("benchmark seed: {seed:#x}");
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Performance Benchmarks\n");
    for &size in &config.sizes {
        let inputs = [
            ("random", harness::random_array(size, config.max_value(size), &mut rng)),
            ("sorted", harness::sorted_array(size)),
            ("reverse sorted", harness::reverse_sorted_array(size)),
        ];
        for (label, data) in &inputs {
            println!("Array Size: {size} ({label})");
            for &algo in all_algorithms() {
                match harness::measure(algo, data) {
                    Ok(m) => report(&m),
                    Err(e) => warn!("{algo} skipped: {e}"),
                }
            }
            println!();
        }
    }
    ExitCode::SUCCESS
}

fn showcase(config: &RunConfig) -> bool {
    println!("Test 1: Small Random Array");
    println!(
        "Original: {}",
        harness::format_preview(&SHOWCASE, config.preview_len)
    );

    let mut all_sorted = true;
    for &algo in all_algorithms() {
        let mut data = SHOWCASE.to_vec();
        if let Err(e) = sort_i64(algo, &mut data) {
            error!("{algo} failed: {e}");
            all_sorted = false;
            continue;
        }
        let sorted = harness::is_sorted(&data);
        all_sorted &= sorted;
        println!(
            "{}: {}",
            display_name(algo),
            harness::format_preview(&data, config.preview_len)
        );
        println!("Sorted: {}\n", if sorted { "YES" } else { "NO" });
    }
    all_sorted
}

fn report(m: &Measurement) {
    let name = format!("{}:", display_name(m.algorithm));
    if m.sorted {
        println!("{name:<28}{:.2} ms", m.millis());
    } else {
        println!("{name:<28}{:.2} ms (NOT SORTED)", m.millis());
    }
}

fn display_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::CountingSort => "Counting Sort (Non-Stable)",
        SortAlgorithm::CountingSortStable => "Counting Sort (Stable)",
        SortAlgorithm::RadixSortLsd => "LSD Radix Sort",
        SortAlgorithm::BucketSort => "Bucket Sort",
        SortAlgorithm::RadixSortMsd => "MSD Radix Sort",
    }
}
