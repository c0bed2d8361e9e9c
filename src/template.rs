//! Question templates as data.
//!
//! A template is a record `{ id, text, params, solve }`:
//! - `params` are integer ranges sampled fresh on every build,
//! - `solve` may derive extra values (written back into `Vars`) and returns
//!   the answer, or `None` when the sampled values do not make a valid question,
//! - `text` is filled from the numbers (Indonesian grouping) and from the
//!   word slots listed in `seeds::WORD_SLOTS`.
//!
//! The tables themselves live in `crate::pools`.

use rand::RngCore;
use thiserror::Error;

use crate::domain::{Answer, Grade, Mode, Question};
use crate::random::{pick_random, random_int_inclusive};
use crate::seeds::WORD_SLOTS;
use crate::util::{fill_template, format_number, unresolved_slot};

/// Failure of one generation attempt or of a whole generation path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
  #[error("template {template} produced no valid answer")]
  InvalidAnswer { template: &'static str },
  #[error("template {template} left slot {{{slot}}} unresolved")]
  Unresolved { template: &'static str, slot: String },
  #[error("no templates for {mode}/{sub_mode} at grade {grade}")]
  NoTemplates { mode: Mode, sub_mode: String, grade: Grade },
  #[error("story generator unavailable: {0}")]
  Unavailable(String),
}

/// Anything that can produce one question per call, sampling its own parameters.
pub trait QuestionFactory {
  fn build(&self, rng: &mut dyn RngCore) -> Result<Question, GenerationError>;
}

impl<T: QuestionFactory + ?Sized> QuestionFactory for &T {
  fn build(&self, rng: &mut dyn RngCore) -> Result<Question, GenerationError> {
    (**self).build(rng)
  }
}

#[derive(Clone, Copy, Debug)]
pub struct Param {
  pub name: &'static str,
  pub min: i64,
  pub max: i64,
}

#[derive(Clone, Copy)]
pub struct Template {
  pub id: &'static str,
  pub text: &'static str,
  pub params: &'static [Param],
  pub solve: fn(&mut Vars) -> Option<Answer>,
}

impl std::fmt::Debug for Template {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Template").field("id", &self.id).finish_non_exhaustive()
  }
}

/// Named numeric values of one template build.
#[derive(Debug, Default)]
pub struct Vars {
  values: Vec<(&'static str, f64)>,
}

impl Vars {
  /// Value of `name`; NaN when missing so the answer check rejects the build.
  pub fn get(&self, name: &str) -> f64 {
    self
      .values
      .iter()
      .find(|(k, _)| *k == name)
      .map(|(_, v)| *v)
      .unwrap_or(f64::NAN)
  }

  pub fn set(&mut self, name: &'static str, value: f64) {
    match self.values.iter_mut().find(|(k, _)| *k == name) {
      Some(slot) => slot.1 = value,
      None => self.values.push((name, value)),
    }
  }
}

impl Template {
  fn render(&self, rng: &mut dyn RngCore, vars: &Vars) -> String {
    let numbers: Vec<(&str, String)> = vars
      .values
      .iter()
      .map(|(k, v)| (*k, format_number(*v)))
      .collect();
    let mut text = fill_template(self.text, &numbers);

    let mut used: Vec<&str> = Vec::new();
    for (slot, words) in WORD_SLOTS {
      let needle = format!("{{{slot}}}");
      if !text.contains(&needle) {
        continue;
      }
      let fresh: Vec<&str> = words.iter().copied().filter(|w| !used.contains(w)).collect();
      let pool: &[&str] = if fresh.is_empty() { words } else { &fresh };
      if let Some(word) = pick_random(rng, pool).copied() {
        used.push(word);
        text = text.replace(&needle, word);
      }
    }
    text
  }
}

impl QuestionFactory for Template {
  fn build(&self, rng: &mut dyn RngCore) -> Result<Question, GenerationError> {
    let mut vars = Vars::default();
    for p in self.params {
      let n = random_int_inclusive(rng, p.min as f64, p.max as f64);
      vars.set(p.name, n as f64);
    }

    let answer = (self.solve)(&mut vars)
      .filter(Answer::is_valid)
      .ok_or(GenerationError::InvalidAnswer { template: self.id })?;

    let text = self.render(rng, &vars);
    if let Some(slot) = unresolved_slot(&text) {
      return Err(GenerationError::Unresolved { template: self.id, slot });
    }
    Ok(Question::new(text, answer))
  }
}

/// `tpl!(id, text, [a = 1, 9; b = 1, 9], |v| ...)`
macro_rules! tpl {
  ($id:expr, $text:expr, [$($name:ident = $min:expr, $max:expr);* $(;)?], $solve:expr) => {
    $crate::template::Template {
      id: $id,
      text: $text,
      params: &[$($crate::template::Param { name: stringify!($name), min: $min, max: $max }),*],
      solve: $solve,
    }
  };
}
pub(crate) use tpl;

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  const ADD: Template = tpl!("t_add", "{nama} punya {a} {benda} lalu dapat {b} dari {nama2}.", [a = 1, 9; b = 1, 9], |v| {
    Some((v.get("a") + v.get("b")).into())
  });

  const BROKEN: Template = tpl!("t_broken", "{a} + {c} = ?", [a = 1, 9], |v| Some(v.get("a").into()));

  const NAN: Template = tpl!("t_nan", "{a} = ?", [a = 1, 9], |v| Some(v.get("missing").into()));

  const DERIVED: Template = tpl!("t_div", "{a} : {b} = ?", [b = 2, 9; q = 0, 9], |v| {
    let a = v.get("b") * v.get("q");
    v.set("a", a);
    Some(v.get("q").into())
  });

  #[test]
  fn build_fills_numbers_and_words() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
      let q = ADD.build(&mut rng).expect("question");
      assert!(unresolved_slot(&q.text).is_none(), "{}", q.text);
      let name1 = q.text.split(' ').next().unwrap();
      let name2 = q.text.trim_end_matches('.').rsplit(' ').next().unwrap();
      assert_ne!(name1, name2, "nama2 must differ from nama: {}", q.text);
    }
  }

  #[test]
  fn unresolved_slots_are_errors() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = BROKEN.build(&mut rng).unwrap_err();
    assert_eq!(err, GenerationError::Unresolved { template: "t_broken", slot: "c".into() });
  }

  #[test]
  fn missing_values_are_invalid_answers() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(NAN.build(&mut rng).unwrap_err(), GenerationError::InvalidAnswer { template: "t_nan" });
  }

  #[test]
  fn derived_values_render_and_zero_is_kept() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut saw_zero = false;
    for _ in 0..200 {
      let q = DERIVED.build(&mut rng).expect("question");
      let (lhs, _) = q.text.split_once(" = ").unwrap();
      let (a, b) = lhs.split_once(" : ").unwrap();
      let (a, b): (f64, f64) = (a.parse().unwrap(), b.parse().unwrap());
      assert_eq!(q.answer.as_number(), Some(a / b));
      saw_zero |= q.answer.as_number() == Some(0.0);
    }
    assert!(saw_zero, "a zero answer must be accepted");
  }
}
