//! Difficulty → grade mapping.

use rand::Rng;

use crate::domain::{Difficulty, Grade};
use crate::random::pick_random;

const EASY: &[u8] = &[1, 2, 3];
const MEDIUM: &[u8] = &[4, 5];
const HARD: &[u8] = &[6];

/// Candidate grades for a difficulty label. Unknown labels behave like "medium".
pub fn grades_for(difficulty: &str) -> &'static [u8] {
  grades_for_difficulty(Difficulty::parse(difficulty))
}

pub fn grades_for_difficulty(difficulty: Difficulty) -> &'static [u8] {
  match difficulty {
    Difficulty::Easy => EASY,
    Difficulty::Medium => MEDIUM,
    Difficulty::Hard => HARD,
  }
}

/// Uniformly sample one grade for the difficulty.
pub fn pick_grade<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Grade {
  pick_random(rng, grades_for_difficulty(difficulty))
    .and_then(|&g| Grade::new(g))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;

  #[test]
  fn mapping_matches_the_game_bands() {
    assert_eq!(grades_for("easy"), &[1, 2, 3]);
    assert_eq!(grades_for("medium"), &[4, 5]);
    assert_eq!(grades_for("hard"), &[6]);
  }

  #[test]
  fn unknown_difficulty_behaves_like_medium() {
    assert_eq!(grades_for("impossible"), grades_for("medium"));
    assert_eq!(grades_for(""), grades_for("medium"));
  }

  #[test]
  fn pick_grade_covers_the_band() {
    let mut rng = StdRng::seed_from_u64(11);
    let seen: HashSet<u8> = (0..300).map(|_| pick_grade(&mut rng, Difficulty::Easy).get()).collect();
    assert_eq!(seen, HashSet::from([1, 2, 3]));
    for _ in 0..50 {
      assert_eq!(pick_grade(&mut rng, Difficulty::Hard).get(), 6);
    }
  }
}
