//! Randomization primitives shared by the generators.
//!
//! Everything takes the RNG explicitly so tests can seed `StdRng` while the
//! server uses `thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform integer in `[ceil(min), floor(max)]`.
/// An empty rounded range collapses to `ceil(min)`.
pub fn random_int_inclusive<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
  let lo = min.ceil() as i64;
  let hi = max.floor() as i64;
  if lo >= hi {
    return lo;
  }
  rng.gen_range(lo..=hi)
}

/// Uniform pick; `None` on an empty slice.
pub fn pick_random<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
  items.choose(rng)
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
  for i in (1..items.len()).rev() {
    let j = rng.gen_range(0..=i);
    items.swap(i, j);
  }
}

/// Functional variant of [`shuffle`].
pub fn shuffled<T, R: Rng + ?Sized>(rng: &mut R, mut items: Vec<T>) -> Vec<T> {
  shuffle(rng, &mut items);
  items
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashMap;

  #[test]
  fn int_range_is_inclusive_and_rounded_inwards() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_lo = false;
    let mut seen_hi = false;
    for _ in 0..2000 {
      let n = random_int_inclusive(&mut rng, 1.2, 4.8);
      assert!((2..=4).contains(&n), "out of range: {n}");
      seen_lo |= n == 2;
      seen_hi |= n == 4;
    }
    assert!(seen_lo && seen_hi);
  }

  #[test]
  fn collapsed_range_returns_ceil_min() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(random_int_inclusive(&mut rng, 5.0, 5.0), 5);
    assert_eq!(random_int_inclusive(&mut rng, 2.5, 2.7), 3);
  }

  #[test]
  fn pick_random_handles_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty: [u8; 0] = [];
    assert!(pick_random(&mut rng, &empty).is_none());
    assert_eq!(pick_random(&mut rng, &[9]), Some(&9));
  }

  #[test]
  fn shuffle_keeps_elements() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut v: Vec<u32> = (0..20).collect();
    shuffle(&mut rng, &mut v);
    let mut sorted = v.clone();
    sorted.sort();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());
  }

  #[test]
  fn shuffle_is_fair_over_permutations() {
    // Chi-square over the 24 permutations of 4 items.
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 48_000;
    let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();
    for _ in 0..trials {
      let v = shuffled(&mut rng, vec![1u8, 2, 3, 4]);
      *counts.entry(v).or_default() += 1;
    }
    assert_eq!(counts.len(), 24, "every permutation should appear");

    let expected = trials as f64 / 24.0;
    let chi2: f64 = counts
      .values()
      .map(|&c| {
        let d = c as f64 - expected;
        d * d / expected
      })
      .sum();
    // 23 degrees of freedom; p = 0.001 critical value is ~49.7.
    assert!(chi2 < 49.7, "chi-square too large: {chi2:.2}");
  }
}
