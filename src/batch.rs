//! Unique-batch generation over a pool of question factories.

use std::collections::HashSet;

use rand::RngCore;
use tracing::debug;

use crate::domain::Question;
use crate::random::pick_random;
use crate::template::QuestionFactory;

/// Factory invocations allowed per requested question.
pub const RETRY_MULTIPLIER: usize = 20;

/// Draw up to `count` questions with pairwise distinct text from `pool`.
///
/// Each attempt picks a random factory. Failed builds and repeated texts just
/// consume an attempt; after `count * RETRY_MULTIPLIER` attempts whatever has
/// been collected is returned, so the result may be shorter than `count`.
pub fn generate_batch<F: QuestionFactory>(rng: &mut dyn RngCore, pool: &[F], count: usize) -> Vec<Question> {
  let mut batch = Vec::new();
  if pool.is_empty() || count == 0 {
    return batch;
  }

  let budget = count.saturating_mul(RETRY_MULTIPLIER);
  let mut seen: HashSet<String> = HashSet::new();
  let mut attempts = 0;

  while batch.len() < count && attempts < budget {
    attempts += 1;
    let Some(factory) = pick_random(rng, pool) else { break };
    match factory.build(rng) {
      Ok(q) => {
        if seen.insert(q.text.clone()) {
          batch.push(q);
        }
      }
      Err(e) => {
        debug!(target: "questions", error = %e, attempt = attempts, "Factory attempt discarded");
      }
    }
  }

  if batch.len() < count {
    debug!(target: "questions", requested = count, produced = batch.len(), attempts, "Batch budget exhausted");
  }
  batch
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Answer;
  use crate::template::GenerationError;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};
  use std::cell::Cell;

  /// Produces `"q{n}"` for n in `0..distinct`, counting every call.
  struct Counting<'a> {
    calls: &'a Cell<usize>,
    distinct: u32,
  }

  impl QuestionFactory for Counting<'_> {
    fn build(&self, rng: &mut dyn RngCore) -> Result<Question, GenerationError> {
      self.calls.set(self.calls.get() + 1);
      let n = rng.gen_range(0..self.distinct);
      Ok(Question::new(format!("q{n}"), Answer::from(n as i64)))
    }
  }

  struct Failing<'a>(&'a Cell<usize>);

  impl QuestionFactory for Failing<'_> {
    fn build(&self, _rng: &mut dyn RngCore) -> Result<Question, GenerationError> {
      self.0.set(self.0.get() + 1);
      Err(GenerationError::InvalidAnswer { template: "failing" })
    }
  }

  #[test]
  fn batch_texts_are_unique() {
    let calls = Cell::new(0);
    let pool = [Counting { calls: &calls, distinct: 50 }, Counting { calls: &calls, distinct: 50 }];
    let mut rng = StdRng::seed_from_u64(3);
    let batch = generate_batch(&mut rng, &pool, 10);
    assert_eq!(batch.len(), 10);
    let texts: HashSet<_> = batch.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts.len(), batch.len());
  }

  #[test]
  fn attempts_never_exceed_budget() {
    for n in [1usize, 3, 7, 12] {
      let calls = Cell::new(0);
      let pool = [Counting { calls: &calls, distinct: 2 }];
      let mut rng = StdRng::seed_from_u64(n as u64);
      let batch = generate_batch(&mut rng, &pool, n);
      assert!(calls.get() <= n * RETRY_MULTIPLIER, "n={n}: {} calls", calls.get());
      assert!(batch.len() <= 2);
    }
  }

  #[test]
  fn tiny_pool_degrades_to_short_batch() {
    let calls = Cell::new(0);
    let pool = [Counting { calls: &calls, distinct: 3 }];
    let mut rng = StdRng::seed_from_u64(11);
    let batch = generate_batch(&mut rng, &pool, 10);
    assert_eq!(batch.len(), 3);
    assert_eq!(calls.get(), 10 * RETRY_MULTIPLIER);
  }

  #[test]
  fn failing_factories_are_swallowed() {
    let calls = Cell::new(0);
    let pool = [Failing(&calls)];
    let mut rng = StdRng::seed_from_u64(5);
    assert!(generate_batch(&mut rng, &pool, 4).is_empty());
    assert_eq!(calls.get(), 4 * RETRY_MULTIPLIER);
  }

  #[test]
  fn large_count_keeps_a_finite_budget() {
    let calls = Cell::new(0);
    let pool = [Counting { calls: &calls, distinct: 4 }];
    let mut rng = StdRng::seed_from_u64(8);
    let batch = generate_batch(&mut rng, &pool, 500);
    assert_eq!(batch.len(), 4);
    assert_eq!(calls.get(), 500 * RETRY_MULTIPLIER);
  }

  #[test]
  fn empty_pool_or_zero_count_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty: [Failing; 0] = [];
    assert!(generate_batch(&mut rng, &empty, 5).is_empty());
    let calls = Cell::new(0);
    assert!(generate_batch(&mut rng, &[Failing(&calls)], 0).is_empty());
    assert_eq!(calls.get(), 0);
  }
}
