//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template<K: AsRef<str>, V: AsRef<str>>(tpl: &str, pairs: &[(K, V)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k.as_ref());
    out = out.replace(&needle, v.as_ref());
  }
  out
}

/// First `{slot}` left in a rendered text, if any.
pub fn unresolved_slot(text: &str) -> Option<String> {
  let start = text.find('{')?;
  let rest = &text[start + 1..];
  let end = rest.find('}').unwrap_or(rest.len());
  Some(rest[..end].to_string())
}

/// Indonesian number formatting: `.` groups thousands, `,` marks decimals.
/// At most three decimals are kept and trailing zeros are dropped.
///
///   1250000 -> "1.250.000"
///   2.5     -> "2,5"
pub fn format_number(value: f64) -> String {
  if !value.is_finite() {
    return value.to_string();
  }
  let fixed = format!("{:.3}", value.abs());
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, ch) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }

  let frac = frac_part.trim_end_matches('0');
  let mut out = String::new();
  if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
    out.push('-');
  }
  out.push_str(&grouped);
  if !frac.is_empty() {
    out.push(',');
    out.push_str(frac);
  }
  out
}

/// Plain machine-friendly rendering of a number: no grouping, `.` decimals,
/// integers without a fractional part.
pub fn plain_number(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
    return format!("{}", value as i64);
  }
  let s = format!("{:.3}", value);
  s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Log-safe truncation for large strings.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_every_occurrence() {
    let out = fill_template("{a} + {a} = {b}", &[("a", "2"), ("b", "4")]);
    assert_eq!(out, "2 + 2 = 4");
  }

  #[test]
  fn unresolved_slot_finds_leftovers() {
    assert_eq!(unresolved_slot("Berapa {benda} tersisa?").as_deref(), Some("benda"));
    assert_eq!(unresolved_slot("Tidak ada slot."), None);
  }

  #[test]
  fn format_number_groups_like_indonesian_text() {
    assert_eq!(format_number(7.0), "7");
    assert_eq!(format_number(1000.0), "1.000");
    assert_eq!(format_number(1_250_000.0), "1.250.000");
    assert_eq!(format_number(2.5), "2,5");
    assert_eq!(format_number(12345.75), "12.345,75");
    assert_eq!(format_number(-4200.0), "-4.200");
  }

  #[test]
  fn plain_number_drops_trailing_zeros() {
    assert_eq!(plain_number(63.0), "63");
    assert_eq!(plain_number(2.5), "2.5");
    assert_eq!(plain_number(0.125), "0.125");
  }

  #[test]
  fn trunc_for_log_respects_char_boundaries() {
    let s = "Berapa liter? ".repeat(20);
    let t = trunc_for_log(&s, 10);
    assert!(t.starts_with("Berapa lit"));
    assert!(t.contains("bytes total"));
    assert_eq!(trunc_for_log("pendek", 50), "pendek");
  }
}
