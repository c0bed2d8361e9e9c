//! Seed data: word lists for the story slots and the last-resort question.

use rand::Rng;

use crate::domain::Question;
use crate::random::random_int_inclusive;

pub const NAMES: &[&str] = &[
  "Budi", "Siti", "Andi", "Rina", "Dewi", "Agus", "Putri", "Rizki",
  "Sari", "Bayu", "Intan", "Joko", "Lina", "Fajar", "Maya", "Dimas",
];

pub const OBJECTS: &[&str] = &[
  "pensil", "buku", "kelereng", "balon", "stiker", "penghapus", "kartu", "mainan",
];

pub const FRUITS: &[&str] = &["apel", "jeruk", "mangga", "pisang", "salak", "rambutan"];

pub const PLACES: &[&str] = &["sekolah", "pasar", "taman", "perpustakaan", "kebun", "toko"];

/// Word slots a template may use, with the list each one draws from.
/// `nama2` shares the name list and is kept distinct from `nama`.
pub const WORD_SLOTS: &[(&str, &[&str])] = &[
  ("nama", NAMES),
  ("nama2", NAMES),
  ("benda", OBJECTS),
  ("buah", FRUITS),
  ("tempat", PLACES),
];

/// Absolute last resort: a plain addition with small operands.
pub fn hard_fallback_question<R: Rng + ?Sized>(rng: &mut R) -> Question {
  let a = random_int_inclusive(rng, 1.0, 10.0);
  let b = random_int_inclusive(rng, 1.0, 10.0);
  Question::new(format!("{a} + {b} = ?"), (a + b) as f64)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn hard_fallback_is_consistent() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
      let q = hard_fallback_question(&mut rng);
      let (lhs, _) = q.text.split_once(" = ").expect("equation");
      let sum: f64 = lhs.split(" + ").map(|n| n.parse::<f64>().unwrap()).sum();
      assert_eq!(q.answer.as_number(), Some(sum));
    }
  }

  #[test]
  fn word_lists_have_room_for_two_names() {
    assert!(NAMES.len() >= 2);
    assert!(WORD_SLOTS.iter().all(|(_, words)| !words.is_empty()));
  }
}
