//! Exam mode: questions prepared ahead of time and kept in a store, as opposed
//! to generated arithmetic.

use tracing::{error, info};
use uuid::Uuid;

use crate::config::{ExamConfig, StoredQuestion};
use crate::domain::{Answer, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamKind {
  Essay,
  Pilgan,
  Visual,
}

impl ExamKind {
  pub fn parse(raw: &str) -> Option<ExamKind> {
    match raw.trim().to_lowercase().as_str() {
      "essay" => Some(ExamKind::Essay),
      "pilihan ganda" | "pilgan" => Some(ExamKind::Pilgan),
      "visual" => Some(ExamKind::Visual),
      _ => None,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      ExamKind::Essay => "Essay",
      ExamKind::Pilgan => "Pilihan Ganda",
      ExamKind::Visual => "Visual",
    }
  }

  fn needs_choices(self) -> bool {
    !matches!(self, ExamKind::Essay)
  }
}

/// Durable store of exam questions.
pub trait ExamSource {
  fn essay_questions(&self) -> Vec<Question>;
  fn pilgan_questions(&self) -> Vec<Question>;
  fn visual_questions(&self) -> Vec<Question>;

  fn questions_for(&self, kind: ExamKind) -> Vec<Question> {
    match kind {
      ExamKind::Essay => self.essay_questions(),
      ExamKind::Pilgan => self.pilgan_questions(),
      ExamKind::Visual => self.visual_questions(),
    }
  }
}

#[derive(Clone, Debug)]
pub struct ExamEntry {
  pub id: String,
  pub question: Question,
}

/// In-memory exam store built from the `[exam]` config section.
#[derive(Clone, Debug, Default)]
pub struct ExamBank {
  essay: Vec<ExamEntry>,
  pilgan: Vec<ExamEntry>,
  visual: Vec<ExamEntry>,
}

impl ExamBank {
  pub fn from_config(cfg: &ExamConfig) -> Self {
    let bank = Self {
      essay: load_entries(ExamKind::Essay, &cfg.essay),
      pilgan: load_entries(ExamKind::Pilgan, &cfg.pilgan),
      visual: load_entries(ExamKind::Visual, &cfg.visual),
    };
    info!(
      target: "balloon_pop",
      essay = bank.essay.len(),
      pilgan = bank.pilgan.len(),
      visual = bank.visual.len(),
      "Exam bank loaded"
    );
    bank
  }

  pub fn entries(&self, kind: ExamKind) -> &[ExamEntry] {
    match kind {
      ExamKind::Essay => &self.essay,
      ExamKind::Pilgan => &self.pilgan,
      ExamKind::Visual => &self.visual,
    }
  }

  fn questions(&self, kind: ExamKind) -> Vec<Question> {
    self.entries(kind).iter().map(|e| e.question.clone()).collect()
  }
}

impl ExamSource for ExamBank {
  fn essay_questions(&self) -> Vec<Question> {
    self.questions(ExamKind::Essay)
  }

  fn pilgan_questions(&self) -> Vec<Question> {
    self.questions(ExamKind::Pilgan)
  }

  fn visual_questions(&self) -> Vec<Question> {
    self.questions(ExamKind::Visual)
  }
}

fn load_entries(kind: ExamKind, stored: &[StoredQuestion]) -> Vec<ExamEntry> {
  stored.iter().filter_map(|sq| to_entry(kind, sq)).collect()
}

fn to_entry(kind: ExamKind, sq: &StoredQuestion) -> Option<ExamEntry> {
  let id = sq.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
  let kind_label = kind.label();

  let text = sq.question.trim();
  let answer = match &sq.answer {
    Answer::Text(t) => Answer::from_stored(t),
    n => n.clone(),
  };
  if text.is_empty() || !answer.is_valid() {
    error!(target: "balloon_pop", %id, kind = kind_label, "Skipping exam item: missing question or answer.");
    return None;
  }

  // Essay entries carry no choices.
  let choices: Option<Vec<String>> = sq.choices.as_ref().filter(|_| kind.needs_choices()).map(|cs| {
    cs.iter().map(|c| c.trim().to_string()).filter(|c| !c.is_empty()).collect()
  });
  if kind.needs_choices() {
    let Some(cs) = choices.as_ref().filter(|cs| cs.len() >= 2) else {
      error!(target: "balloon_pop", %id, kind = kind_label, "Skipping exam item: needs at least two choices.");
      return None;
    };
    if !cs.iter().any(|c| choice_matches(c, &answer)) {
      error!(target: "balloon_pop", %id, kind = kind_label, answer = %answer, "Skipping exam item: answer is not one of its choices.");
      return None;
    }
  }

  let question = Question {
    text: text.to_string(),
    answer,
    choices: choices.filter(|cs| !cs.is_empty()),
    image_data: sq.image_data.clone().filter(|s| !s.trim().is_empty()),
  };
  Some(ExamEntry { id, question })
}

/// A choice names the answer when the text matches, or when both read as the
/// same number ("2,5" and 2.5).
pub fn choice_matches(choice: &str, answer: &Answer) -> bool {
  let choice = choice.trim();
  if choice.eq_ignore_ascii_case(answer.to_string().trim()) {
    return true;
  }
  match (Answer::Text(choice.to_string()).as_number(), answer.as_number()) {
    (Some(a), Some(b)) => a == b,
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;

  fn stored(question: &str, answer: Answer, choices: Option<&[&str]>) -> StoredQuestion {
    StoredQuestion {
      id: None,
      question: question.to_string(),
      answer,
      choices: choices.map(|cs| cs.iter().map(|c| c.to_string()).collect()),
      image_data: None,
    }
  }

  #[test]
  fn parses_exam_kinds() {
    assert_eq!(ExamKind::parse("Essay"), Some(ExamKind::Essay));
    assert_eq!(ExamKind::parse("pilihan ganda"), Some(ExamKind::Pilgan));
    assert_eq!(ExamKind::parse("PILGAN"), Some(ExamKind::Pilgan));
    assert_eq!(ExamKind::parse(" Visual "), Some(ExamKind::Visual));
    assert_eq!(ExamKind::parse("Lisan"), None);
  }

  #[test]
  fn invalid_entries_are_skipped() {
    let cfg = ExamConfig {
      essay: vec![
        stored("Ibu kota Indonesia?", Answer::Text("Jakarta".into()), None),
        stored("   ", Answer::Text("x".into()), None),
        stored("Kosong?", Answer::Text("  ".into()), None),
      ],
      pilgan: vec![
        stored("5 x 6 = ...", Answer::Text("30".into()), Some(&["11", "30", "25", "35"])),
        stored("Satu pilihan", Answer::Text("1".into()), Some(&["1"])),
        stored("Tidak ada jawaban", Answer::Text("9".into()), Some(&["1", "2"])),
      ],
      visual: vec![stored("Gambar apa?", Answer::Text("Segitiga".into()), None)],
    };
    let bank = ExamBank::from_config(&cfg);
    assert_eq!(bank.essay_questions().len(), 1);
    assert_eq!(bank.pilgan_questions().len(), 1);
    assert!(bank.visual_questions().is_empty());
    assert_eq!(bank.pilgan_questions()[0].answer, Answer::Number(30.0));
  }

  #[test]
  fn missing_ids_are_assigned() {
    let mut with_id = stored("2 + 2 = ...", Answer::Number(4.0), None);
    with_id.id = Some("e-1".into());
    let cfg = ExamConfig { essay: vec![with_id, stored("3 + 3 = ...", Answer::Number(6.0), None)], ..Default::default() };
    let bank = ExamBank::from_config(&cfg);
    let entries = bank.entries(ExamKind::Essay);
    assert_eq!(entries[0].id, "e-1");
    assert!(Uuid::parse_str(&entries[1].id).is_ok());
  }

  #[test]
  fn essay_entries_drop_choices() {
    let cfg = ExamConfig {
      essay: vec![stored("3 x 4 = ...", Answer::Number(12.0), Some(&["12", "7"]))],
      ..Default::default()
    };
    let bank = ExamBank::from_config(&cfg);
    let q = &bank.essay_questions()[0];
    assert_eq!(q.choices, None);

    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let opts = crate::distractor::answer_array(&mut rng, crate::domain::Mode::Exam, q);
    assert!(opts.choice_map.is_empty());
    assert_eq!(opts.correct, "12");
  }

  #[test]
  fn choices_match_numbers_and_text() {
    assert!(choice_matches("2,5", &Answer::Number(2.5)));
    assert!(choice_matches(" jakarta ", &Answer::Text("Jakarta".into())));
    assert!(!choice_matches("3", &Answer::Number(2.5)));
  }

  #[test]
  fn questions_for_dispatches_by_kind() {
    let cfg = ExamConfig {
      visual: vec![stored("Bangun apa ini?", Answer::Text("Persegi".into()), Some(&["Persegi", "Lingkaran"]))],
      ..Default::default()
    };
    let bank = ExamBank::from_config(&cfg);
    assert_eq!(bank.questions_for(ExamKind::Visual).len(), 1);
    assert!(bank.questions_for(ExamKind::Essay).is_empty());
  }
}
