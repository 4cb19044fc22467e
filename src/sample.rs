//! Uniform random subsampling of the sparse point set.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::points::WeightedPoint;

/// Number of entries to draw: `floor(total * fraction)`, clamped to `total`.
///
/// A non-finite or non-positive fraction yields zero rather than panicking.
pub fn sample_count(total: usize, fraction: f64) -> usize {
    if total == 0 || !(fraction > 0.0) {
        return 0;
    }
    let k = (total as f64 * fraction).floor();
    (k as usize).min(total)
}

/// RNG for the sampler: reproducible when a seed is given.
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draws `floor(len * fraction)` points uniformly at random without
/// replacement. Selection probability ignores the weights; the weight only
/// shades the bins downstream.
///
/// The result preserves extraction order, so it is a true subsequence of the
/// input. An empty input (or a fraction too small to keep anything) yields an
/// empty sample.
pub fn sample_points<R: Rng>(
    points: &[WeightedPoint],
    fraction: f64,
    rng: &mut R,
) -> Vec<WeightedPoint> {
    let k = sample_count(points.len(), fraction);
    if k == 0 {
        return Vec::new();
    }
    let mut picked = index::sample(rng, points.len(), k).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| points[i]).collect()
}
