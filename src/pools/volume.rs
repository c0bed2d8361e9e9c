//! Volume mode: capacity conversion, arithmetic and flow rate (debit).

use super::SubMode;
use crate::template::{tpl, Template};
use crate::units::{convert, Volume};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Konversi Volume",
    story: [KONVERSI_STORY_LOWER, KONVERSI_STORY_MIDDLE, KONVERSI_STORY_UPPER],
    standard: [KONVERSI_EASY, KONVERSI_MEDIUM, KONVERSI_HARD],
  },
  SubMode {
    key: "Operasi Volume",
    story: [OPERASI_STORY_LOWER, OPERASI_STORY_MIDDLE, OPERASI_STORY_UPPER],
    standard: [OPERASI_EASY, OPERASI_MEDIUM, OPERASI_HARD],
  },
];

// ---- Konversi Volume ----

const KONVERSI_STORY_LOWER: &[Template] = &[
  tpl!("vol_konv_s1_botol", "{nama} membawa botol berisi {l} liter air ke {tempat}. Berapa mililiter air dalam botol itu?",
    [l = 1, 3], |v| Some(convert(v.get("l"), Volume::Liter, Volume::Mililiter).into())),
  tpl!("vol_konv_s1_jus", "Ibu membuat {l} liter jus {buah}. Berapa mililiter jus yang dibuat ibu?",
    [l = 1, 5], |v| Some(convert(v.get("l"), Volume::Liter, Volume::Mililiter).into())),
];

const KONVERSI_STORY_MIDDLE: &[Template] = &[
  tpl!("vol_konv_s2_susu", "{nama} minum susu sebanyak {ml} ml setiap hari. Berapa liter susu tersebut?",
    [k = 1, 12], |v| {
      let ml = v.get("k") * 250.0;
      v.set("ml", ml);
      Some(convert(ml, Volume::Mililiter, Volume::Liter).into())
    }),
  tpl!("vol_konv_s2_akuarium", "Akuarium di {tempat} berisi {d} dm³ air. Berapa liter air di akuarium itu?",
    [d = 10, 120], |v| Some(convert(v.get("d"), Volume::CubicDecimeter, Volume::Liter).into())),
];

const KONVERSI_STORY_UPPER: &[Template] = &[
  tpl!("vol_konv_s3_tandon", "Sebuah tandon air berisi {m} m³ air. Berapa liter air dalam tandon itu?",
    [m = 1, 9], |v| Some(convert(v.get("m"), Volume::CubicMeter, Volume::Liter).into())),
  tpl!("vol_konv_s3_obat", "Sebuah botol obat berisi {c} cm³ sirup. Berapa mililiter sirup di dalam botol itu?",
    [c = 50, 500], |v| Some(convert(v.get("c"), Volume::CubicCentimeter, Volume::Mililiter).into())),
  tpl!("vol_konv_s3_kolam", "Kolam renang di {tempat} berisi {k} kl air. Berapa liter air di kolam itu?",
    [k = 2, 90], |v| Some(convert(v.get("k"), Volume::Kiloliter, Volume::Liter).into())),
];

const KONVERSI_EASY: &[Template] = &[
  tpl!("vol_konv_e1", "{l} liter = ... ml", [l = 1, 10], |v| Some(convert(v.get("l"), Volume::Liter, Volume::Mililiter).into())),
  tpl!("vol_konv_e2", "{d} dm³ = ... liter", [d = 1, 50], |v| Some(convert(v.get("d"), Volume::CubicDecimeter, Volume::Liter).into())),
];

const KONVERSI_MEDIUM: &[Template] = &[
  tpl!("vol_konv_m1", "{ml} ml = ... liter", [k = 1, 20], |v| {
    let ml = v.get("k") * 500.0;
    v.set("ml", ml);
    Some(convert(ml, Volume::Mililiter, Volume::Liter).into())
  }),
  tpl!("vol_konv_m2", "{c} cm³ = ... ml", [c = 1, 999], |v| Some(convert(v.get("c"), Volume::CubicCentimeter, Volume::Mililiter).into())),
  tpl!("vol_konv_m3", "{l} liter = ... dl", [l = 1, 20], |v| Some(convert(v.get("l"), Volume::Liter, Volume::Desiliter).into())),
];

const KONVERSI_HARD: &[Template] = &[
  tpl!("vol_konv_h1", "{m} m³ = ... dm³", [m = 1, 20], |v| Some(convert(v.get("m"), Volume::CubicMeter, Volume::CubicDecimeter).into())),
  tpl!("vol_konv_h2", "{k} kl = ... liter", [k = 1, 30], |v| Some(convert(v.get("k"), Volume::Kiloliter, Volume::Liter).into())),
  tpl!("vol_konv_h3", "{m} m³ + {l} liter = ... liter", [m = 1, 9; l = 1, 999], |v| {
    Some((convert(v.get("m"), Volume::CubicMeter, Volume::Liter) + v.get("l")).into())
  }),
];

// ---- Operasi Volume ----

const OPERASI_STORY_LOWER: &[Template] = &[
  tpl!("vol_op_s1_ember", "Ember {nama} berisi {a} liter air. {nama2} menambahkan {b} liter air. Berapa liter air di ember sekarang?",
    [a = 1, 10; b = 1, 10], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("vol_op_s1_minyak", "Ibu punya {a} liter minyak goreng. Sebanyak {b} liter dipakai memasak. Berapa liter minyak yang tersisa?",
    [b = 1, 5; s = 0, 10], |v| {
      v.set("a", v.get("b") + v.get("s"));
      Some(v.get("s").into())
    }),
];

const OPERASI_STORY_MIDDLE: &[Template] = &[
  tpl!("vol_op_s2_teh", "{nama} membuat {l} liter teh lalu menuangkan {ml} ml ke dalam gelas. Berapa mililiter teh yang tersisa?",
    [l = 1, 5; g = 1, 4], |v| {
      let ml = v.get("g") * 200.0;
      v.set("ml", ml);
      Some((convert(v.get("l"), Volume::Liter, Volume::Mililiter) - ml).into())
    }),
  tpl!("vol_op_s2_galon", "Di {tempat} ada {n} galon air yang masing-masing berisi {l} liter. Berapa liter air seluruhnya?",
    [n = 2, 12; l = 5, 19], |v| Some((v.get("n") * v.get("l")).into())),
];

const OPERASI_STORY_UPPER: &[Template] = &[
  tpl!("vol_op_s3_keran", "Sebuah keran mengalirkan air dengan debit {d} liter per menit. Berapa liter air yang keluar dalam {m} menit?",
    [d = 2, 20; m = 5, 60], |v| Some((v.get("d") * v.get("m")).into())),
  tpl!("vol_op_s3_bak", "Bak mandi berisi {l} liter air diisi dengan debit {d} liter per menit. Berapa menit waktu yang diperlukan untuk mengisi bak itu?",
    [d = 2, 15; m = 3, 40], |v| {
      v.set("l", v.get("d") * v.get("m"));
      Some(v.get("m").into())
    }),
  tpl!("vol_op_s3_tangki", "Sebuah tangki berisi {a} liter bensin. Sebanyak {b} ml bensin terpakai. Berapa mililiter bensin yang tersisa?",
    [a = 2, 40; g = 1, 3], |v| {
      let b = v.get("g") * 500.0;
      v.set("b", b);
      Some((convert(v.get("a"), Volume::Liter, Volume::Mililiter) - b).into())
    }),
];

const OPERASI_EASY: &[Template] = &[
  tpl!("vol_op_e1", "{a} liter + {b} liter = ... liter", [a = 1, 50; b = 1, 50], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("vol_op_e2", "{a} ml + {b} ml = ... ml", [a = 10, 500; b = 10, 500], |v| Some((v.get("a") + v.get("b")).into())),
];

const OPERASI_MEDIUM: &[Template] = &[
  tpl!("vol_op_m1", "{l} liter + {ml} ml = ... ml", [l = 1, 9; ml = 1, 999], |v| {
    Some((convert(v.get("l"), Volume::Liter, Volume::Mililiter) + v.get("ml")).into())
  }),
  tpl!("vol_op_m2", "{l} liter - {ml} ml = ... ml", [l = 1, 9; ml = 1, 999], |v| {
    Some((convert(v.get("l"), Volume::Liter, Volume::Mililiter) - v.get("ml")).into())
  }),
];

const OPERASI_HARD: &[Template] = &[
  tpl!("vol_op_h1", "Debit {d} liter/menit selama {m} menit = ... liter", [d = 2, 30; m = 2, 60], |v| {
    Some((v.get("d") * v.get("m")).into())
  }),
  tpl!("vol_op_h2", "{l} liter dengan debit {d} liter/menit = ... menit", [d = 2, 25; m = 2, 60], |v| {
    v.set("l", v.get("d") * v.get("m"));
    Some(v.get("m").into())
  }),
  tpl!("vol_op_h3", "{k} kl - {l} liter = ... liter", [k = 1, 9; l = 1, 999], |v| {
    Some((convert(v.get("k"), Volume::Kiloliter, Volume::Liter) - v.get("l")).into())
  }),
];
