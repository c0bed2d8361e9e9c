//! Domain models: questions and answers, game modes, difficulty and grades.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::plain_number;

/// Expected answer of a question. Generated arithmetic is numeric; stored exam
/// questions may carry free text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
  Number(f64),
  Text(String),
}

impl Answer {
  /// `0` is a perfectly good answer; only non-finite numbers and blank text are not.
  pub fn is_valid(&self) -> bool {
    match self {
      Answer::Number(n) => n.is_finite(),
      Answer::Text(t) => !t.trim().is_empty(),
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Answer::Number(n) => Some(*n),
      Answer::Text(t) => t.trim().replace(',', ".").parse::<f64>().ok(),
    }
  }

  /// Stored answers that read as numbers become numeric.
  pub fn from_stored(raw: &str) -> Self {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
      Ok(n) if n.is_finite() => Answer::Number(n),
      _ => Answer::Text(trimmed.to_string()),
    }
  }
}

impl From<f64> for Answer {
  fn from(n: f64) -> Self { Answer::Number(n) }
}

impl From<i64> for Answer {
  fn from(n: i64) -> Self { Answer::Number(n as f64) }
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Answer::Number(n) => f.write_str(&plain_number(*n)),
      Answer::Text(t) => f.write_str(t),
    }
  }
}

/// One generated or stored question. Within a batch, questions are unique by `text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
  pub text: String,
  pub answer: Answer,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub choices: Option<Vec<String>>,
  #[serde(default, rename = "imageData", skip_serializing_if = "Option::is_none")]
  pub image_data: Option<String>,
}

impl Question {
  pub fn new(text: impl Into<String>, answer: impl Into<Answer>) -> Self {
    Self { text: text.into(), answer: answer.into(), choices: None, image_data: None }
  }
}

/// Top-level question category as named by the game UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Aljabar,
  Time,
  Heavy,
  Volume,
  Up,
  Operator,
  Exam,
}

impl Mode {
  pub const ALL: [Mode; 7] = [
    Mode::Operator,
    Mode::Aljabar,
    Mode::Time,
    Mode::Heavy,
    Mode::Volume,
    Mode::Up,
    Mode::Exam,
  ];

  pub fn parse(raw: &str) -> Option<Mode> {
    match raw.trim().to_lowercase().as_str() {
      "aljabar" => Some(Mode::Aljabar),
      "time" => Some(Mode::Time),
      "heavy" => Some(Mode::Heavy),
      "volume" => Some(Mode::Volume),
      "up" => Some(Mode::Up),
      "operator" => Some(Mode::Operator),
      "exam" => Some(Mode::Exam),
      _ => None,
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      Mode::Aljabar => "aljabar",
      Mode::Time => "time",
      Mode::Heavy => "heavy",
      Mode::Volume => "volume",
      Mode::Up => "up",
      Mode::Operator => "operator",
      Mode::Exam => "exam",
    }
  }

  /// Modes that have narrative word-problem tables.
  pub fn is_story_capable(self) -> bool {
    !matches!(self, Mode::Exam)
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

/// Coarse difficulty picked in the game settings.
/// Unknown labels fall back to `Medium`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl Difficulty {
  pub fn parse(raw: &str) -> Difficulty {
    match raw.trim().to_lowercase().as_str() {
      "easy" => Difficulty::Easy,
      "hard" => Difficulty::Hard,
      _ => Difficulty::Medium,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }

  /// Index into per-band tables (easy, medium, hard).
  pub fn band(self) -> usize {
    match self {
      Difficulty::Easy => 0,
      Difficulty::Medium => 1,
      Difficulty::Hard => 2,
    }
  }
}

impl From<String> for Difficulty {
  fn from(s: String) -> Self { Difficulty::parse(&s) }
}

impl From<Difficulty> for String {
  fn from(d: Difficulty) -> Self { d.label().to_string() }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// School grade 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Grade(u8);

impl Grade {
  pub fn new(n: u8) -> Option<Grade> {
    (1..=6).contains(&n).then_some(Grade(n))
  }

  pub fn get(self) -> u8 { self.0 }

  /// Grades sharing one story table: 1-3, 4-5 and 6.
  pub fn band(self) -> usize {
    match self.0 {
      1..=3 => 0,
      4 | 5 => 1,
      _ => 2,
    }
  }
}

/// First grade of the medium band.
impl Default for Grade {
  fn default() -> Self { Grade(4) }
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Which tier produced a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
  Story,
  Standard,
  Exam,
  HardFallback,
}

impl Origin {
  pub fn label(self) -> &'static str {
    match self {
      Origin::Story => "story",
      Origin::Standard => "standard",
      Origin::Exam => "exam",
      Origin::HardFallback => "hard_fallback",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_is_a_valid_answer() {
    assert!(Answer::from(0.0).is_valid());
    assert!(!Answer::Number(f64::NAN).is_valid());
    assert!(!Answer::Text("  ".into()).is_valid());
  }

  #[test]
  fn stored_answers_become_numbers_when_they_parse() {
    assert_eq!(Answer::from_stored(" 42 "), Answer::Number(42.0));
    assert_eq!(Answer::from_stored("Jakarta"), Answer::Text("Jakarta".into()));
    assert_eq!(Answer::Text("2,5".into()).as_number(), Some(2.5));
  }

  #[test]
  fn answers_display_plainly() {
    assert_eq!(Answer::from(1500.0).to_string(), "1500");
    assert_eq!(Answer::from(2.5).to_string(), "2.5");
  }

  #[test]
  fn question_serializes_without_empty_extras() {
    let json = serde_json::to_value(Question::new("3 + 4 = ?", 7.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "3 + 4 = ?", "answer": 7.0 }));
  }

  #[test]
  fn unknown_difficulty_is_medium() {
    assert_eq!(Difficulty::parse("EASY"), Difficulty::Easy);
    assert_eq!(Difficulty::parse("legendary"), Difficulty::Medium);
    let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(d, Difficulty::Hard);
  }

  #[test]
  fn modes_parse_case_insensitively() {
    assert_eq!(Mode::parse("Aljabar"), Some(Mode::Aljabar));
    assert_eq!(Mode::parse("up"), Some(Mode::Up));
    assert_eq!(Mode::parse("chess"), None);
    assert!(!Mode::Exam.is_story_capable());
  }

  #[test]
  fn grades_are_banded() {
    assert_eq!(Grade::new(0), None);
    assert_eq!(Grade::new(3).map(Grade::band), Some(0));
    assert_eq!(Grade::new(5).map(Grade::band), Some(1));
    assert_eq!(Grade::new(6).map(Grade::band), Some(2));
  }
}
