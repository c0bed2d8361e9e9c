//! Template tables per mode and sub-mode, and the lookups over them.
//!
//! Every sub-mode carries three story tables (grades 1-3, 4-5, 6) and three
//! standard tables (easy, medium, hard). An empty table means "nothing here";
//! callers treat that as a reason to fall back, never as an error.

use crate::domain::{Difficulty, Grade, Mode};
use crate::template::Template;

mod aljabar;
mod heavy;
mod operator;
mod time;
mod up;
mod volume;

pub struct SubMode {
  pub key: &'static str,
  /// Narrative word problems by grade band.
  pub story: [&'static [Template]; 3],
  /// Plain computational questions by difficulty.
  pub standard: [&'static [Template]; 3],
}

/// Sub-modes of a mode. Exam has none: its questions come from the exam store.
pub fn sub_modes(mode: Mode) -> &'static [SubMode] {
  match mode {
    Mode::Operator => operator::SUB_MODES,
    Mode::Aljabar => aljabar::SUB_MODES,
    Mode::Time => time::SUB_MODES,
    Mode::Heavy => heavy::SUB_MODES,
    Mode::Volume => volume::SUB_MODES,
    Mode::Up => up::SUB_MODES,
    Mode::Exam => &[],
  }
}

pub fn find_sub_mode(mode: Mode, key: &str) -> Option<&'static SubMode> {
  let key = key.trim();
  sub_modes(mode).iter().find(|s| s.key.eq_ignore_ascii_case(key))
}

/// Story pool for `(mode, sub_mode, grade)`; empty when none is defined.
pub fn select_pool(mode: Mode, sub_mode: &str, grade: Grade) -> &'static [Template] {
  find_sub_mode(mode, sub_mode)
    .map(|s| s.story[grade.band()])
    .unwrap_or(&[])
}

/// Standard pool for a mode. Without a known sub-mode, all of the mode's
/// standard tables at that difficulty are merged.
pub fn standard_pool(mode: Mode, sub_mode: Option<&str>, difficulty: Difficulty) -> Vec<&'static Template> {
  if let Some(sub) = sub_mode.and_then(|k| find_sub_mode(mode, k)) {
    return sub.standard[difficulty.band()].iter().collect();
  }
  sub_modes(mode)
    .iter()
    .flat_map(|s| s.standard[difficulty.band()].iter())
    .collect()
}
