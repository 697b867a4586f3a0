use serde::Serialize;
use std::collections::HashMap;

/// Descriptive statistics of one bucket of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
}

/// Compute mean, median and mode of a non-empty bucket.
///
/// Mean and median are rounded to 3 decimals for every attribute, direct or
/// derived. The mode is every value tied for the highest frequency, sorted
/// ascending; consumers that want a single mode read element 0 (the
/// smallest). When all values are distinct, every value is tied at frequency
/// one and the mode is the full sorted value set.
pub fn aggregate(values: &[f64]) -> Aggregate {
    // Grouping never emits an empty bucket.
    assert!(!values.is_empty(), "aggregate requires a non-empty bucket");

    Aggregate {
        mean: compute_mean(values),
        median: compute_median(values),
        mode: compute_mode(values),
    }
}

/// Round to the fixed 3-decimal precision used throughout.
pub fn round3(val: f64) -> f64 {
    (val * 1000.0).round() / 1000.0
}

fn compute_mean(values: &[f64]) -> f64 {
    round3(values.iter().sum::<f64>() / values.len() as f64)
}

fn compute_median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    round3(median)
}

fn compute_mode(values: &[f64]) -> Vec<f64> {
    // Frequencies are keyed by the exact bit pattern, not the rounded
    // display form.
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &val in values {
        *counts.entry(val.to_bits()).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    let mut mode: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    mode.sort_by(f64::total_cmp);

    mode
}
