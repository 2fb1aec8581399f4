//! Shared distribution generators for integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` participants holding `value` each.
pub fn equal(n: usize, value: f64) -> Vec<f64> {
    vec![value; n]
}

/// One participant holds `amount`, the other `n - 1` hold nothing.
///
/// The holder is placed in the middle so callers exercise the sort.
pub fn single_holder(n: usize, amount: f64) -> Vec<f64> {
    let mut values = vec![0.0; n];
    values[n / 2] = amount;
    values
}

/// `1, 2, ..., n`.
pub fn linear(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Deterministic heavy-tailed sample seeded by `seed`.
pub fn heavy_tailed(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen_range(0.001..1.0);
            (1.0 / u).floor()
        })
        .collect()
}

/// Render values as a reputation file body with the given line terminator.
pub fn file_body(values: &[f64], terminator: &str) -> String {
    values
        .iter()
        .map(|v| format!("{v}{terminator}"))
        .collect()
}

/// Move `amount` from participant `from` to the current largest holder.
pub fn concentrate(values: &[f64], from: usize, amount: f64) -> Vec<f64> {
    let mut out = values.to_vec();
    let top = out
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    if top != from {
        let moved = amount.min(out[from]);
        out[from] -= moved;
        out[top] += moved;
    }
    out
}
