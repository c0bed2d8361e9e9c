//! Multiple-choice options: numeric distractors around the correct answer,
//! placeholders for free-text answers, and lettered choices for exam questions.

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::domain::{Answer, Mode, Question};
use crate::exam::choice_matches;
use crate::random::{random_int_inclusive, shuffle, shuffled};
use crate::util::plain_number;

pub const DEFAULT_DISTRACTORS: usize = 5;
const JITTER_ATTEMPTS: usize = 50;

/// Shown next to a free-text answer; no wrong answer can be computed for those.
pub const TEXT_PLACEHOLDERS: [&str; 4] = [
  "Bukan salah satu",
  "Tidak ada jawaban",
  "Semua benar",
  "Tidak dapat ditentukan",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LetterChoice {
  pub letter: String,
  pub text: String,
}

/// Options for one question. For lettered exam choices, `choice_map` says
/// which text each letter stands for and `correct` is a letter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerOptions {
  pub options: Vec<String>,
  pub correct: String,
  #[serde(rename = "choiceMap", skip_serializing_if = "Vec::is_empty")]
  pub choice_map: Vec<LetterChoice>,
}

fn offsets(magnitude: f64) -> Vec<f64> {
  if magnitude <= 10.0 {
    vec![1.0, 2.0, 3.0]
  } else if magnitude <= 100.0 {
    vec![1.0, 2.0, 5.0, 10.0]
  } else if magnitude <= 1000.0 {
    vec![1.0, 5.0, 10.0, 50.0, 100.0]
  } else {
    let step = 10f64.powi(magnitude.log10().floor() as i32 - 1);
    vec![step, 2.0 * step, 5.0 * step]
  }
}

/// Up to `count` wrong answers near `correct`: non-negative, distinct and
/// different from `correct`. Non-numeric answers count as 0. Tiny answer
/// spaces may yield fewer than `count`.
pub fn make_distractors<R: Rng + ?Sized>(rng: &mut R, correct: &Answer, count: usize) -> Vec<f64> {
  let correct = correct.as_number().filter(|n| n.is_finite()).unwrap_or(0.0);
  let magnitude = correct.abs().max(1.0);
  let mut out: Vec<f64> = Vec::with_capacity(count);

  let accept = |out: &mut Vec<f64>, candidate: f64| {
    if candidate >= 0.0 && candidate != correct && !out.contains(&candidate) {
      out.push(candidate);
    }
  };

  'scan: for o in offsets(magnitude) {
    for candidate in [correct + o, correct - o] {
      if out.len() >= count {
        break 'scan;
      }
      accept(&mut out, candidate);
    }
  }

  let variance = (magnitude * 0.3).floor().max(5.0);
  let mut tries = 0;
  while out.len() < count && tries < JITTER_ATTEMPTS {
    tries += 1;
    let jitter = random_int_inclusive(rng, -variance, variance) as f64;
    accept(&mut out, correct + jitter);
  }

  shuffle(rng, &mut out);
  out
}

/// Shuffled option set for `question`.
pub fn answer_array(rng: &mut dyn RngCore, mode: Mode, question: &Question) -> AnswerOptions {
  if mode == Mode::Exam {
    if let Some(choices) = question.choices.as_ref().filter(|cs| !cs.is_empty()) {
      return lettered(rng, question, choices);
    }
  }

  match question.answer.as_number() {
    Some(n) if n.is_finite() => {
      let mut options: Vec<String> = make_distractors(rng, &question.answer, DEFAULT_DISTRACTORS)
        .into_iter()
        .map(plain_number)
        .collect();
      let correct = plain_number(n);
      options.push(correct.clone());
      AnswerOptions { options: shuffled(rng, options), correct, choice_map: Vec::new() }
    }
    _ => {
      let correct = question.answer.to_string();
      let mut options: Vec<String> = TEXT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect();
      options.push(correct.clone());
      AnswerOptions { options: shuffled(rng, options), correct, choice_map: Vec::new() }
    }
  }
}

fn lettered(rng: &mut dyn RngCore, question: &Question, choices: &[String]) -> AnswerOptions {
  let texts = shuffled(rng, choices.iter().take(26).cloned().collect::<Vec<_>>());
  let choice_map: Vec<LetterChoice> = texts
    .into_iter()
    .enumerate()
    .map(|(i, text)| LetterChoice { letter: char::from(b'A' + i as u8).to_string(), text })
    .collect();

  let correct = choice_map
    .iter()
    .find(|c| choice_matches(&c.text, &question.answer))
    .map(|c| c.letter.clone())
    .unwrap_or_else(|| question.answer.to_string());

  let letters: Vec<String> = choice_map.iter().map(|c| c.letter.clone()).collect();
  AnswerOptions { options: shuffled(rng, letters), correct, choice_map }
}
