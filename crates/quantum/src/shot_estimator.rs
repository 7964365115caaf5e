use crate::measurement::{measure, Basis};
use linalg::Mat2;
use rng::ShotRng;

/// Outcome counts `[n0, n1]` over `shots` independent samples.
pub fn estimate_counts(rho: &Mat2, basis: Basis, rng: &mut ShotRng, shots: usize) -> [usize; 2] {
    let mut counts = [0usize; 2];
    for _ in 0..shots {
        counts[measure(rho, basis, rng) as usize] += 1;
    }
    counts
}

/// Empirical `(p+, p−)` in `basis`. Zero shots gives `(0.0, 0.0)`.
pub fn estimate_probs(rho: &Mat2, basis: Basis, rng: &mut ShotRng, shots: usize) -> (f64, f64) {
    if shots == 0 {
        return (0.0, 0.0);
    }

    let [n0, n1] = estimate_counts(rho, basis, rng, shots);
    (n0 as f64 / shots as f64, n1 as f64 / shots as f64)
}
