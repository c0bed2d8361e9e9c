//! Question service: the story → standard → default-question fallback chain,
//! exam draws from the stored bank, and answer options.
//!
//! Selection policy per request:
//!   1. story tables, when the mode tells stories, story mode is on, a sub-mode
//!      was given and a story generator is installed, and it returns enough;
//!   2. standard tables for the mode (and sub-mode, if known);
//!   3. one plain addition question, so non-exam modes never come back empty.
//! Exam mode skips all of that and shuffles the stored questions instead.

use rand::RngCore;
use tracing::{info, instrument, warn};

use crate::batch::generate_batch;
use crate::config::{load_config_from_env, GeneratorConfig};
use crate::distractor::{self, AnswerOptions};
use crate::domain::{Difficulty, Mode, Origin, Question};
use crate::exam::{ExamBank, ExamKind, ExamSource};
use crate::grade::pick_grade;
use crate::pools::{standard_pool, sub_modes};
use crate::random::shuffled;
use crate::seeds::hard_fallback_question;
use crate::story::{StoryGenerator, TemplateStories};

/// Upper bound on questions served per request.
pub const MAX_QUESTIONS: usize = 100;

pub type SharedStory = Box<dyn StoryGenerator + Send + Sync>;
pub type SharedExam = Box<dyn ExamSource + Send + Sync>;

pub struct QuestionService {
  pub difficulty: Difficulty,
  pub story_mode: bool,
  story: Option<SharedStory>,
  exam: SharedExam,
}

impl QuestionService {
  /// Build from GAME_CONFIG_PATH and env overrides, with the built-in stories.
  #[instrument(level = "info", skip_all)]
  pub fn from_env() -> Self {
    Self::from_config(&load_config_from_env())
  }

  pub fn from_config(cfg: &GeneratorConfig) -> Self {
    let svc = Self::with_parts(
      cfg.difficulty,
      cfg.story_mode,
      Some(Box::new(TemplateStories)),
      Box::new(ExamBank::from_config(&cfg.exam)),
    );
    info!(target: "balloon_pop", difficulty = %svc.difficulty, story_mode = svc.story_mode, "Question service ready");
    svc
  }

  pub fn with_parts(difficulty: Difficulty, story_mode: bool, story: Option<SharedStory>, exam: SharedExam) -> Self {
    Self { difficulty, story_mode, story, exam }
  }

  /// Up to `count` questions for `mode`, and where they came from.
  /// `options[0]` selects the sub-mode (or the exam kind). `count` is capped
  /// at [`MAX_QUESTIONS`].
  #[instrument(level = "info", skip(self, rng, options), fields(%mode, sub_mode = options.first().map(String::as_str).unwrap_or("")))]
  pub fn generate(
    &self,
    rng: &mut dyn RngCore,
    mode: &str,
    options: &[String],
    count: usize,
    difficulty: Option<Difficulty>,
  ) -> (Vec<Question>, Origin) {
    let sub_mode = options.first().map(|s| s.trim()).filter(|s| !s.is_empty());
    if count > MAX_QUESTIONS {
      warn!(target: "questions", requested = count, cap = MAX_QUESTIONS, "Question count capped");
    }
    let count = count.min(MAX_QUESTIONS);

    let Some(mode) = Mode::parse(mode) else {
      warn!(target: "questions", %mode, "Unknown mode; serving default question");
      return (vec![hard_fallback_question(rng)], Origin::HardFallback);
    };

    if mode == Mode::Exam {
      return (self.exam_questions(rng, sub_mode, count), Origin::Exam);
    }

    let count = count.max(1);
    let difficulty = difficulty.unwrap_or(self.difficulty);

    // 1) Story tables.
    match (sub_mode, &self.story) {
      (Some(sub), Some(story)) if self.story_mode && mode.is_story_capable() => {
        let grade = pick_grade(rng, difficulty);
        match story.generate(rng, mode, sub, grade, count) {
          Ok(mut qs) if qs.len() >= count => {
            qs.truncate(count);
            info!(target: "questions", %mode, sub_mode = sub, %grade, produced = qs.len(), origin = "story", "Serving story questions");
            return (qs, Origin::Story);
          }
          Ok(qs) => {
            info!(target: "questions", %mode, sub_mode = sub, %grade, requested = count, produced = qs.len(), "Story output insufficient; using standard questions");
          }
          Err(e) => {
            warn!(target: "questions", %mode, sub_mode = sub, %grade, error = %e, "Story generation failed; using standard questions");
          }
        }
      }
      _ => {
        info!(
          target: "questions",
          %mode,
          story_mode = self.story_mode,
          has_sub_mode = sub_mode.is_some(),
          has_story_generator = self.story.is_some(),
          "Story path unavailable; using standard questions"
        );
      }
    }

    // 2) Standard tables.
    let pool = standard_pool(mode, sub_mode, difficulty);
    let batch = generate_batch(rng, &pool, count);
    if !batch.is_empty() {
      info!(target: "questions", %mode, %difficulty, requested = count, produced = batch.len(), origin = "standard", "Serving standard questions");
      return (batch, Origin::Standard);
    }

    // 3) Absolute last resort.
    warn!(target: "questions", %mode, %difficulty, pool = pool.len(), "No standard questions; serving default question");
    (vec![hard_fallback_question(rng)], Origin::HardFallback)
  }

  /// Batch entry point without the origin.
  pub fn return_question_array(&self, rng: &mut dyn RngCore, mode: &str, options: &[String], count: usize) -> Vec<Question> {
    self.generate(rng, mode, options, count, None).0
  }

  fn exam_questions(&self, rng: &mut dyn RngCore, kind: Option<&str>, count: usize) -> Vec<Question> {
    let Some(kind) = kind.and_then(ExamKind::parse) else {
      warn!(target: "questions", kind = kind.unwrap_or(""), "Unknown exam kind; nothing to serve");
      return Vec::new();
    };
    let stored = self.exam.questions_for(kind);
    if stored.is_empty() {
      info!(target: "questions", kind = kind.label(), "No stored exam questions");
      return Vec::new();
    }
    let mut qs = shuffled(rng, stored);
    qs.truncate(count);
    info!(target: "questions", kind = kind.label(), produced = qs.len(), origin = "exam", "Serving exam questions");
    qs
  }

  /// Shuffled options for one question. Unknown modes get the numeric treatment.
  #[instrument(level = "debug", skip(self, rng, question), fields(%mode))]
  pub fn answer_array(&self, rng: &mut dyn RngCore, mode: &str, question: &Question) -> AnswerOptions {
    let mode = Mode::parse(mode).unwrap_or(Mode::Operator);
    distractor::answer_array(rng, mode, question)
  }
}

/// Sub-mode (or exam kind) labels a mode accepts in `options[0]`.
pub fn sub_mode_keys(mode: Mode) -> Vec<&'static str> {
  match mode {
    Mode::Exam => [ExamKind::Essay, ExamKind::Pilgan, ExamKind::Visual].iter().map(|k| k.label()).collect(),
    _ => sub_modes(mode).iter().map(|s| s.key).collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{ExamConfig, StoredQuestion};
  use crate::domain::{Answer, Grade};
  use crate::template::GenerationError;
  use crate::util::unresolved_slot;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  struct Broken(Arc<AtomicUsize>);

  impl StoryGenerator for Broken {
    fn generate(&self, _: &mut dyn RngCore, _: Mode, _: &str, _: Grade, _: usize) -> Result<Vec<Question>, GenerationError> {
      self.0.fetch_add(1, Ordering::SeqCst);
      Err(GenerationError::Unavailable("story engine offline".into()))
    }
  }

  /// Returns a single question whatever was asked for.
  struct Sparse(Arc<AtomicUsize>);

  impl StoryGenerator for Sparse {
    fn generate(&self, _: &mut dyn RngCore, _: Mode, _: &str, _: Grade, _: usize) -> Result<Vec<Question>, GenerationError> {
      self.0.fetch_add(1, Ordering::SeqCst);
      Ok(vec![Question::new("Ani punya 2 apel dan 3 jeruk. Berapa buahnya?", 5.0)])
    }
  }

  fn opts(s: &str) -> Vec<String> {
    vec![s.to_string()]
  }

  fn service(story: Option<SharedStory>, exam: ExamConfig) -> QuestionService {
    QuestionService::with_parts(Difficulty::Medium, true, story, Box::new(ExamBank::from_config(&exam)))
  }

  fn assert_valid(qs: &[Question]) {
    let texts: HashSet<&str> = qs.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts.len(), qs.len(), "texts must be unique");
    for q in qs {
      assert!(!q.text.is_empty());
      assert!(unresolved_slot(&q.text).is_none(), "{}", q.text);
      assert!(q.answer.is_valid(), "{q:?}");
    }
  }

  #[test]
  fn failing_story_falls_back_to_standard() {
    let calls = Arc::new(AtomicUsize::new(0));
    let svc = service(Some(Box::new(Broken(calls.clone()))), ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(17);
    let (qs, origin) = svc.generate(&mut rng, "aljabar", &opts("Isi Kotak Kosong"), 5, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(origin, Origin::Standard);
    assert_eq!(qs.len(), 5);
    assert_valid(&qs);
  }

  #[test]
  fn short_story_batch_falls_back_to_standard() {
    let calls = Arc::new(AtomicUsize::new(0));
    let svc = service(Some(Box::new(Sparse(calls.clone()))), ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(15);
    let (qs, origin) = svc.generate(&mut rng, "operator", &opts("Tambah"), 5, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(origin, Origin::Standard);
    assert_eq!(qs.len(), 5);
    assert_valid(&qs);
  }

  #[test]
  fn huge_counts_are_capped() {
    let svc = service(None, ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(16);
    let (qs, origin) = svc.generate(&mut rng, "operator", &opts("Tambah"), 1usize << 60, None);
    assert_eq!(origin, Origin::Standard);
    assert!(!qs.is_empty() && qs.len() <= MAX_QUESTIONS);
    assert_valid(&qs);

    let (qs, _) = svc.generate(&mut rng, "operator", &opts("Kali"), usize::MAX, None);
    assert!(qs.len() <= MAX_QUESTIONS);
  }

  #[test]
  fn story_questions_are_served_when_enough() {
    let svc = service(Some(Box::new(TemplateStories)), ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(2);
    let (qs, origin) = svc.generate(&mut rng, "operator", &opts("Tambah"), 5, Some(Difficulty::Easy));
    assert_eq!(origin, Origin::Story);
    assert_eq!(qs.len(), 5);
    assert_valid(&qs);
  }

  #[test]
  fn story_disabled_or_missing_uses_standard() {
    let mut svc = service(Some(Box::new(TemplateStories)), ExamConfig::default());
    svc.story_mode = false;
    let mut rng = StdRng::seed_from_u64(3);
    let (_, origin) = svc.generate(&mut rng, "heavy", &opts("Konversi Berat"), 3, None);
    assert_eq!(origin, Origin::Standard);

    let svc = service(None, ExamConfig::default());
    let (qs, origin) = svc.generate(&mut rng, "volume", &opts("Operasi Volume"), 3, None);
    assert_eq!(origin, Origin::Standard);
    assert_valid(&qs);
  }

  #[test]
  fn modes_without_story_tables_use_standard() {
    let svc = service(Some(Box::new(TemplateStories)), ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(4);
    let (qs, origin) = svc.generate(&mut rng, "aljabar", &opts("Pola Bilangan"), 4, None);
    assert_eq!(origin, Origin::Standard);
    assert_eq!(qs.len(), 4);
    let (_, origin) = svc.generate(&mut rng, "up", &opts("Luas Permukaan"), 2, Some(Difficulty::Easy));
    assert_eq!(origin, Origin::Standard);
  }

  #[test]
  fn missing_sub_mode_draws_from_every_standard_table() {
    let svc = service(Some(Box::new(TemplateStories)), ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    let (qs, origin) = svc.generate(&mut rng, "time", &[], 6, None);
    assert_eq!(origin, Origin::Standard);
    assert_eq!(qs.len(), 6);
  }

  #[test]
  fn unknown_mode_gets_one_default_question() {
    let svc = service(None, ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(6);
    let (qs, origin) = svc.generate(&mut rng, "catur", &opts("Tambah"), 10, None);
    assert_eq!(origin, Origin::HardFallback);
    assert_eq!(qs.len(), 1);
    assert_valid(&qs);
  }

  #[test]
  fn zero_count_still_returns_a_question() {
    let svc = service(None, ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(svc.return_question_array(&mut rng, "operator", &opts("Kali"), 0).len(), 1);
  }

  #[test]
  fn empty_exam_bank_returns_nothing() {
    let svc = service(None, ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(8);
    assert!(svc.return_question_array(&mut rng, "exam", &opts("Essay"), 10).is_empty());
    assert!(svc.return_question_array(&mut rng, "exam", &opts("Lisan"), 10).is_empty());
  }

  #[test]
  fn exam_questions_are_shuffled_and_sliced() {
    let essay = (1..=8)
      .map(|i| StoredQuestion {
        id: None,
        question: format!("Soal nomor {i}"),
        answer: Answer::Number(i as f64),
        choices: None,
        image_data: None,
      })
      .collect();
    let svc = service(None, ExamConfig { essay, ..Default::default() });
    let mut rng = StdRng::seed_from_u64(9);
    let (qs, origin) = svc.generate(&mut rng, "exam", &opts("essay"), 5, None);
    assert_eq!(origin, Origin::Exam);
    assert_eq!(qs.len(), 5);
    assert_valid(&qs);

    let all = svc.return_question_array(&mut rng, "exam", &opts("Essay"), 50);
    assert_eq!(all.len(), 8);
    assert!(svc.return_question_array(&mut rng, "exam", &opts("Essay"), 0).is_empty());
  }

  #[test]
  fn answer_options_for_generated_questions() {
    let svc = service(None, ExamConfig::default());
    let mut rng = StdRng::seed_from_u64(10);
    let q = Question::new("6 x 7 = ?", 42.0);
    let a = svc.answer_array(&mut rng, "operator", &q);
    assert!(a.options.contains(&"42".to_string()));
    assert_eq!(a.correct, "42");
  }

  #[test]
  fn sub_mode_catalogue() {
    assert_eq!(sub_mode_keys(Mode::Exam), vec!["Essay", "Pilihan Ganda", "Visual"]);
    assert!(sub_mode_keys(Mode::Aljabar).contains(&"Pola Bilangan"));
    for mode in Mode::ALL {
      assert!(!sub_mode_keys(mode).is_empty(), "{mode}");
    }
  }
}
