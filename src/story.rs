//! Story (word problem) generation path.
//!
//! The orchestrator only sees the `StoryGenerator` capability; whether one is
//! installed at all is decided when the service is built.

use rand::RngCore;
use tracing::{debug, instrument};

use crate::batch::generate_batch;
use crate::domain::{Grade, Mode, Question};
use crate::pools::select_pool;
use crate::template::GenerationError;

pub trait StoryGenerator {
  /// Up to `count` narrative questions for `(mode, sub_mode, grade)`.
  fn generate(
    &self,
    rng: &mut dyn RngCore,
    mode: Mode,
    sub_mode: &str,
    grade: Grade,
    count: usize,
  ) -> Result<Vec<Question>, GenerationError>;
}

/// Story generator backed by the built-in story tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateStories;

impl StoryGenerator for TemplateStories {
  #[instrument(level = "debug", skip(self, rng), fields(%mode, %grade))]
  fn generate(
    &self,
    rng: &mut dyn RngCore,
    mode: Mode,
    sub_mode: &str,
    grade: Grade,
    count: usize,
  ) -> Result<Vec<Question>, GenerationError> {
    let pool = select_pool(mode, sub_mode, grade);
    if pool.is_empty() {
      return Err(GenerationError::NoTemplates { mode, sub_mode: sub_mode.to_string(), grade });
    }
    let batch = generate_batch(rng, pool, count);
    debug!(target: "questions", %mode, sub_mode, %grade, requested = count, produced = batch.len(), "Story batch");
    Ok(batch)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn stories_come_from_the_grade_table() {
    let mut rng = StdRng::seed_from_u64(8);
    let grade = Grade::new(1).unwrap();
    let qs = TemplateStories.generate(&mut rng, Mode::Operator, "Tambah", grade, 5).expect("stories");
    assert_eq!(qs.len(), 5);
    assert!(qs.iter().all(|q| q.answer.is_valid()));
  }

  #[test]
  fn missing_story_table_is_an_error() {
    let mut rng = StdRng::seed_from_u64(8);
    let grade = Grade::new(5).unwrap();
    let err = TemplateStories.generate(&mut rng, Mode::Aljabar, "Pola Bilangan", grade, 3).unwrap_err();
    assert!(matches!(err, GenerationError::NoTemplates { mode: Mode::Aljabar, .. }));
  }
}
