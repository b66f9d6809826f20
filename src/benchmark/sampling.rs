//! Random sampling over record batches.

use rand::Rng;

/// Sample up to `count` items without replacement, preserving population
/// order.
///
/// Selection sampling: walk the population once and include each item with
/// probability `needed / remaining`. Exactly one uniform draw is consumed
/// per item visited until the sample fills, so a seeded rng advances the
/// same way on every run over the same population length.
pub fn sample_without_replacement<'a, T, R>(items: &'a [T], count: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let mut needed = count.min(items.len());
    let mut remaining = items.len();
    let mut sample = Vec::with_capacity(needed);

    for item in items {
        if needed == 0 {
            break;
        }
        if rng.random_range(0..remaining) < needed {
            sample.push(item);
            needed -= 1;
        }
        remaining -= 1;
    }

    sample
}
