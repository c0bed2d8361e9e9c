//! Aljabar mode: missing-box equations, variable substitution, simple
//! linear equations and number patterns.
//!
//! Pola Bilangan has no narrative tables; requests for it always end up on the
//! standard tables.

use super::SubMode;
use crate::template::{tpl, Template};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Isi Kotak Kosong",
    story: [KOTAK_STORY_LOWER, KOTAK_STORY_MIDDLE, KOTAK_STORY_UPPER],
    standard: [KOTAK_EASY, KOTAK_MEDIUM, KOTAK_HARD],
  },
  SubMode {
    key: "Nilai Variabel",
    story: [VARIABEL_STORY_LOWER, VARIABEL_STORY_MIDDLE, VARIABEL_STORY_UPPER],
    standard: [VARIABEL_EASY, VARIABEL_MEDIUM, VARIABEL_HARD],
  },
  SubMode {
    key: "Persamaan Sederhana",
    story: [PERSAMAAN_STORY_LOWER, PERSAMAAN_STORY_MIDDLE, PERSAMAAN_STORY_UPPER],
    standard: [PERSAMAAN_EASY, PERSAMAAN_MEDIUM, PERSAMAAN_HARD],
  },
  SubMode {
    key: "Pola Bilangan",
    story: [&[], &[], &[]],
    standard: [POLA_EASY, POLA_MEDIUM, POLA_HARD],
  },
];

// ---- Isi Kotak Kosong ----

const KOTAK_STORY_LOWER: &[Template] = &[
  tpl!("alj_kotak_s1_diberi", "{nama} mempunyai beberapa {benda}. Setelah diberi {b} {benda} oleh {nama2}, {benda} {nama} menjadi {c}. Berapa {benda} {nama} mula-mula? (□ + {b} = {c})",
    [a = 1, 30; b = 1, 30], |v| {
      v.set("c", v.get("a") + v.get("b"));
      Some(v.get("a").into())
    }),
  tpl!("alj_kotak_s1_makan", "Di meja ada beberapa {buah}. {nama} memakan {b} {buah} sehingga tersisa {c} {buah}. Berapa {buah} di meja mula-mula? (□ - {b} = {c})",
    [b = 1, 15; c = 0, 20], |v| Some((v.get("b") + v.get("c")).into())),
];

const KOTAK_STORY_MIDDLE: &[Template] = &[
  tpl!("alj_kotak_s2_rak", "Sebuah rak berisi sejumlah buku. Setelah {b} buku dipinjam siswa, tersisa {c} buku. Berapa buku di rak mula-mula? (□ - {b} = {c})",
    [b = 50, 500; c = 100, 2000], |v| Some((v.get("b") + v.get("c")).into())),
  tpl!("alj_kotak_s2_kotak", "{nama} menyusun {benda} ke dalam {b} kotak sama banyak dan mendapat {c} {benda} seluruhnya. Berapa {benda} di setiap kotak? (□ × {b} = {c})",
    [a = 12, 60; b = 3, 15], |v| {
      v.set("c", v.get("a") * v.get("b"));
      Some(v.get("a").into())
    }),
];

const KOTAK_STORY_UPPER: &[Template] = &[
  tpl!("alj_kotak_s3_tabungan", "Tabungan {nama} ditambah Rp{b} menjadi Rp{c}. Berapa rupiah tabungan {nama} mula-mula? (□ + {b} = {c})",
    [x = 20, 900; y = 10, 500], |v| {
      let a = v.get("x") * 1_000.0;
      let b = v.get("y") * 1_000.0;
      v.set("b", b);
      v.set("c", a + b);
      Some(a.into())
    }),
  tpl!("alj_kotak_s3_pabrik", "Sebuah pabrik mengemas {c} {benda} ke dalam kardus. Setiap kardus berisi {b} {benda}. Berapa kardus yang diperlukan? ({c} : □ = {b})",
    [a = 100, 900; b = 12, 48], |v| {
      v.set("c", v.get("a") * v.get("b"));
      Some(v.get("a").into())
    }),
];

const KOTAK_EASY: &[Template] = &[
  tpl!("alj_kotak_e1", "□ + {b} = {c}. Berapakah □?", [a = 0, 20; b = 1, 20], |v| {
    v.set("c", v.get("a") + v.get("b"));
    Some(v.get("a").into())
  }),
  tpl!("alj_kotak_e2", "{b} + □ = {c}. Berapakah □?", [a = 1, 20; b = 0, 20], |v| {
    v.set("c", v.get("a") + v.get("b"));
    Some(v.get("a").into())
  }),
  tpl!("alj_kotak_e3", "□ - {b} = {c}. Berapakah □?", [b = 1, 15; c = 0, 15], |v| Some((v.get("b") + v.get("c")).into())),
];

const KOTAK_MEDIUM: &[Template] = &[
  tpl!("alj_kotak_m1", "□ × {b} = {c}. Berapakah □?", [a = 2, 20; b = 2, 12], |v| {
    v.set("c", v.get("a") * v.get("b"));
    Some(v.get("a").into())
  }),
  tpl!("alj_kotak_m2", "{c} : □ = {b}. Berapakah □?", [a = 2, 12; b = 2, 20], |v| {
    v.set("c", v.get("a") * v.get("b"));
    Some(v.get("a").into())
  }),
  tpl!("alj_kotak_m3", "□ + {b} = {c}. Berapakah □?", [a = 100, 999; b = 100, 999], |v| {
    v.set("c", v.get("a") + v.get("b"));
    Some(v.get("a").into())
  }),
];

const KOTAK_HARD: &[Template] = &[
  tpl!("alj_kotak_h1", "□ × {b} + {d} = {c}. Berapakah □?", [a = 10, 99; b = 3, 15; d = 1, 200], |v| {
    v.set("c", v.get("a") * v.get("b") + v.get("d"));
    Some(v.get("a").into())
  }),
  tpl!("alj_kotak_h2", "{c} - □ = {b}. Berapakah □?", [a = 1_000, 9_999; b = 1_000, 9_999], |v| {
    v.set("c", v.get("a") + v.get("b"));
    Some(v.get("a").into())
  }),
];

// ---- Nilai Variabel ----

const VARIABEL_STORY_LOWER: &[Template] = &[
  tpl!("alj_var_s1_kantong", "Setiap kantong berisi x {benda}. Jika x = {x}, berapa {benda} dalam {n} kantong?",
    [x = 2, 10; n = 2, 5], |v| Some((v.get("x") * v.get("n")).into())),
  tpl!("alj_var_s1_umur", "Umur {nama} adalah x tahun. Umur kakaknya x + {n} tahun. Jika x = {x}, berapa umur kakak {nama}?",
    [x = 5, 10; n = 1, 8], |v| Some((v.get("x") + v.get("n")).into())),
];

const VARIABEL_STORY_MIDDLE: &[Template] = &[
  tpl!("alj_var_s2_harga", "Harga satu {benda} adalah x rupiah. {nama} membeli {n} {benda} dan ongkos kirimnya Rp{k}. Jika x = {x}, berapa rupiah yang dibayar {nama}? ({n}x + {k})",
    [p = 2, 20; n = 2, 9; q = 1, 10], |v| {
      let x = v.get("p") * 500.0;
      let k = v.get("q") * 1_000.0;
      v.set("x", x);
      v.set("k", k);
      Some((v.get("n") * x + k).into())
    }),
  tpl!("alj_var_s2_kebun", "Panjang kebun {nama} adalah 2x meter dan lebarnya x meter. Jika x = {x}, berapa meter keliling kebun itu?",
    [x = 5, 60], |v| Some((2.0 * (2.0 * v.get("x") + v.get("x"))).into())),
];

const VARIABEL_STORY_UPPER: &[Template] = &[
  tpl!("alj_var_s3_sewa", "Biaya sewa sepeda adalah Rp{a} ditambah Rp{b} untuk setiap jam (x). Jika {nama} menyewa selama x = {x} jam, berapa rupiah biaya sewanya?",
    [p = 5, 20; q = 2, 10; x = 2, 12], |v| {
      let a = v.get("p") * 1_000.0;
      let b = v.get("q") * 1_000.0;
      v.set("a", a);
      v.set("b", b);
      Some((a + b * v.get("x")).into())
    }),
  tpl!("alj_var_s3_persegi", "Sisi sebuah taman persegi adalah (x + {n}) meter. Jika x = {x}, berapa meter persegi luas taman itu?",
    [x = 5, 40; n = 1, 10], |v| {
      let s = v.get("x") + v.get("n");
      Some((s * s).into())
    }),
];

const VARIABEL_EASY: &[Template] = &[
  tpl!("alj_var_e1", "Jika x = {x}, berapakah nilai x + {n}?", [x = 1, 20; n = 1, 20], |v| Some((v.get("x") + v.get("n")).into())),
  tpl!("alj_var_e2", "Jika a = {x}, berapakah nilai {m} × a?", [x = 1, 10; m = 2, 5], |v| Some((v.get("x") * v.get("m")).into())),
];

const VARIABEL_MEDIUM: &[Template] = &[
  tpl!("alj_var_m1", "Jika x = {x}, berapakah nilai {m}x + {n}?", [x = 2, 20; m = 2, 9; n = 1, 50], |v| {
    Some((v.get("m") * v.get("x") + v.get("n")).into())
  }),
  tpl!("alj_var_m2", "Jika x = {x}, berapakah nilai {m}x - {n}?", [x = 5, 20; m = 2, 9; r = 1, 50], |v| {
    let mx = v.get("m") * v.get("x");
    let n = v.get("r").min(mx);
    v.set("n", n);
    Some((mx - n).into())
  }),
];

const VARIABEL_HARD: &[Template] = &[
  tpl!("alj_var_h1", "Jika x = {x} dan y = {y}, berapakah nilai {m}x + {k}y?", [x = 2, 30; y = 2, 30; m = 2, 12; k = 2, 12], |v| {
    Some((v.get("m") * v.get("x") + v.get("k") * v.get("y")).into())
  }),
  tpl!("alj_var_h2", "Jika p = {x}, berapakah nilai p² + {n}?", [x = 2, 30; n = 1, 99], |v| {
    Some((v.get("x") * v.get("x") + v.get("n")).into())
  }),
];

// ---- Persamaan Sederhana ----

const PERSAMAAN_STORY_LOWER: &[Template] = &[
  tpl!("alj_pers_s1_umur", "Umur {nama} ditambah {b} tahun sama dengan {c} tahun. Berapa tahun umur {nama} sekarang?",
    [x = 5, 12; b = 1, 10], |v| {
      v.set("c", v.get("x") + v.get("b"));
      Some(v.get("x").into())
    }),
  tpl!("alj_pers_s1_kelereng", "{nama} memberi {nama2} {b} kelereng. Sekarang kelereng {nama} tinggal {c}. Berapa kelereng {nama} mula-mula?",
    [b = 1, 20; c = 1, 30], |v| Some((v.get("b") + v.get("c")).into())),
];

const PERSAMAAN_STORY_MIDDLE: &[Template] = &[
  tpl!("alj_pers_s2_kembalian", "{nama} membeli {m} {benda} dan membayar dengan uang Rp{u}. Ia mendapat kembalian Rp{k}. Berapa rupiah harga satu {benda}?",
    [p = 2, 20; m = 2, 6; q = 1, 10], |v| {
      let x = v.get("p") * 500.0;
      let k = v.get("q") * 500.0;
      v.set("k", k);
      v.set("u", v.get("m") * x + k);
      Some(x.into())
    }),
  tpl!("alj_pers_s2_kali", "Tiga kali umur {nama} dikurangi {b} sama dengan {c}. Berapa tahun umur {nama}?",
    [x = 6, 15; b = 1, 10], |v| {
      v.set("c", 3.0 * v.get("x") - v.get("b"));
      Some(v.get("x").into())
    }),
];

const PERSAMAAN_STORY_UPPER: &[Template] = &[
  tpl!("alj_pers_s3_tiket", "Harga {m} tiket dewasa dan {n} tiket anak adalah Rp{c}. Harga tiket anak Rp{b}. Berapa rupiah harga satu tiket dewasa?",
    [p = 10, 50; q = 5, 20; m = 2, 6; n = 1, 6], |v| {
      let x = v.get("p") * 1_000.0;
      let b = v.get("q") * 1_000.0;
      v.set("b", b);
      v.set("c", v.get("m") * x + v.get("n") * b);
      Some(x.into())
    }),
  tpl!("alj_pers_s3_keliling", "Keliling sebuah persegi panjang {c} cm. Panjangnya {p} cm lebih dari lebarnya. Berapa cm lebar persegi panjang itu?",
    [x = 5, 60; p = 2, 20], |v| {
      v.set("c", 2.0 * (2.0 * v.get("x") + v.get("p")));
      Some(v.get("x").into())
    }),
];

const PERSAMAAN_EASY: &[Template] = &[
  tpl!("alj_pers_e1", "x + {b} = {c}. Nilai x adalah ...", [x = 0, 20; b = 1, 20], |v| {
    v.set("c", v.get("x") + v.get("b"));
    Some(v.get("x").into())
  }),
  tpl!("alj_pers_e2", "x - {b} = {c}. Nilai x adalah ...", [b = 1, 15; c = 0, 15], |v| Some((v.get("b") + v.get("c")).into())),
];

const PERSAMAAN_MEDIUM: &[Template] = &[
  tpl!("alj_pers_m1", "{m}x + {b} = {c}. Nilai x adalah ...", [x = 1, 20; m = 2, 9; b = 1, 50], |v| {
    v.set("c", v.get("m") * v.get("x") + v.get("b"));
    Some(v.get("x").into())
  }),
  tpl!("alj_pers_m2", "{m}x = {c}. Nilai x adalah ...", [x = 2, 30; m = 2, 12], |v| {
    v.set("c", v.get("m") * v.get("x"));
    Some(v.get("x").into())
  }),
];

const PERSAMAAN_HARD: &[Template] = &[
  tpl!("alj_pers_h1", "{m}x - {b} = {c}. Nilai x adalah ...", [x = 10, 99; m = 2, 15; r = 1, 99], |v| {
    let mx = v.get("m") * v.get("x");
    let b = v.get("r").min(mx);
    v.set("b", b);
    v.set("c", mx - b);
    Some(v.get("x").into())
  }),
  tpl!("alj_pers_h2", "{m}x + {b} = {n}x + {c}. Nilai x adalah ...", [x = 1, 30; n = 2, 6; d = 1, 6; c = 1, 99], |v| {
    let m = v.get("n") + v.get("d");
    v.set("m", m);
    // m·x + b = n·x + c  ⇒  b = c - d·x; keep b ≥ 0 by raising c when needed.
    let dx = v.get("d") * v.get("x");
    let c = v.get("c").max(dx);
    v.set("c", c);
    v.set("b", c - dx);
    Some(v.get("x").into())
  }),
];

// ---- Pola Bilangan ----

const POLA_EASY: &[Template] = &[
  tpl!("alj_pola_e1", "{t1}, {t2}, {t3}, {t4}, ... Bilangan berikutnya adalah?", [s = 1, 20; d = 1, 5], |v| {
    let (s, d) = (v.get("s"), v.get("d"));
    v.set("t1", s);
    v.set("t2", s + d);
    v.set("t3", s + 2.0 * d);
    v.set("t4", s + 3.0 * d);
    Some((s + 4.0 * d).into())
  }),
  tpl!("alj_pola_e2", "{t1}, {t2}, {t3}, {t4}, ... Bilangan berikutnya adalah?", [e = 1, 5; d = 1, 3], |v| {
    // Descending pattern that stays non-negative.
    let d = v.get("d");
    let end = v.get("e");
    v.set("t1", end + 4.0 * d);
    v.set("t2", end + 3.0 * d);
    v.set("t3", end + 2.0 * d);
    v.set("t4", end + d);
    Some(end.into())
  }),
];

const POLA_MEDIUM: &[Template] = &[
  tpl!("alj_pola_m1", "{t1}, {t2}, {t3}, {t4}, ... Bilangan berikutnya adalah?", [s = 1, 5; r = 2, 3], |v| {
    let (s, r) = (v.get("s"), v.get("r"));
    v.set("t1", s);
    v.set("t2", s * r);
    v.set("t3", s * r * r);
    v.set("t4", s * r * r * r);
    Some((s * r * r * r * r).into())
  }),
  tpl!("alj_pola_m2", "{t1}, {t2}, {t3}, {t4}, ... Bilangan berikutnya adalah?", [s = 10, 200; d = 5, 25], |v| {
    let (s, d) = (v.get("s"), v.get("d"));
    v.set("t1", s);
    v.set("t2", s + d);
    v.set("t3", s + 2.0 * d);
    v.set("t4", s + 3.0 * d);
    Some((s + 4.0 * d).into())
  }),
];

const POLA_HARD: &[Template] = &[
  tpl!("alj_pola_h1", "Suku ke-{n} dari barisan {t1}, {t2}, {t3}, ... adalah?", [s = 1, 50; d = 2, 15; n = 10, 50], |v| {
    let (s, d) = (v.get("s"), v.get("d"));
    v.set("t1", s);
    v.set("t2", s + d);
    v.set("t3", s + 2.0 * d);
    Some((s + (v.get("n") - 1.0) * d).into())
  }),
  tpl!("alj_pola_h2", "{t1}, {t2}, {t3}, {t4}, ... Bilangan berikutnya adalah?", [k = 1, 10], |v| {
    // Square numbers starting from k².
    let k = v.get("k");
    v.set("t1", k * k);
    v.set("t2", (k + 1.0) * (k + 1.0));
    v.set("t3", (k + 2.0) * (k + 2.0));
    v.set("t4", (k + 3.0) * (k + 3.0));
    Some(((k + 4.0) * (k + 4.0)).into())
  }),
];
