//! Heavy mode: mass conversion and arithmetic on masses.

use super::SubMode;
use crate::template::{tpl, Template};
use crate::units::{convert, Mass};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Konversi Berat",
    story: [KONVERSI_STORY_LOWER, KONVERSI_STORY_MIDDLE, KONVERSI_STORY_UPPER],
    standard: [KONVERSI_EASY, KONVERSI_MEDIUM, KONVERSI_HARD],
  },
  SubMode {
    key: "Operasi Berat",
    story: [OPERASI_STORY_LOWER, OPERASI_STORY_MIDDLE, OPERASI_STORY_UPPER],
    standard: [OPERASI_EASY, OPERASI_MEDIUM, OPERASI_HARD],
  },
];

// ---- Konversi Berat ----

const KONVERSI_STORY_LOWER: &[Template] = &[
  tpl!("brt_konv_s1_beras", "Ibu membeli {k} kg beras di {tempat}. Berapa ons beras yang dibeli ibu?",
    [k = 1, 5], |v| Some(convert(v.get("k"), Mass::Kg, Mass::Ons).into())),
  tpl!("brt_konv_s1_buah", "{nama} memetik {k} kg {buah} di kebun. Berapa gram {buah} yang dipetik {nama}?",
    [k = 1, 5], |v| Some(convert(v.get("k"), Mass::Kg, Mass::Gram).into())),
];

const KONVERSI_STORY_MIDDLE: &[Template] = &[
  tpl!("brt_konv_s2_gula", "Seorang pedagang di {tempat} memiliki {o} ons gula. Berapa gram gula milik pedagang itu?",
    [o = 2, 30], |v| Some(convert(v.get("o"), Mass::Ons, Mass::Gram).into())),
  tpl!("brt_konv_s2_panen", "Pak tani memanen {q} kuintal padi. Berapa kilogram padi hasil panen pak tani?",
    [q = 1, 15], |v| Some(convert(v.get("q"), Mass::Kuintal, Mass::Kg).into())),
];

const KONVERSI_STORY_UPPER: &[Template] = &[
  tpl!("brt_konv_s3_truk", "Sebuah truk mengangkut {t} ton {q} kuintal pasir. Berapa kilogram pasir yang diangkut truk itu?",
    [t = 1, 9; q = 1, 9], |v| {
      let kg = convert(v.get("t"), Mass::Ton, Mass::Kg) + convert(v.get("q"), Mass::Kuintal, Mass::Kg);
      Some(kg.into())
    }),
  tpl!("brt_konv_s3_kue", "{nama} memakai {g} gram tepung untuk membuat kue. Berapa kilogram tepung yang dipakai {nama}?",
    [h = 1, 20], |v| {
      let g = v.get("h") * 250.0;
      v.set("g", g);
      Some(convert(g, Mass::Gram, Mass::Kg).into())
    }),
];

const KONVERSI_EASY: &[Template] = &[
  tpl!("brt_konv_e1", "{k} kg = ... ons", [k = 1, 10], |v| Some(convert(v.get("k"), Mass::Kg, Mass::Ons).into())),
  tpl!("brt_konv_e2", "{k} kg = ... gram", [k = 1, 10], |v| Some(convert(v.get("k"), Mass::Kg, Mass::Gram).into())),
];

const KONVERSI_MEDIUM: &[Template] = &[
  tpl!("brt_konv_m1", "{o} ons = ... gram", [o = 1, 50], |v| Some(convert(v.get("o"), Mass::Ons, Mass::Gram).into())),
  tpl!("brt_konv_m2", "{q} kuintal = ... kg", [q = 1, 30], |v| Some(convert(v.get("q"), Mass::Kuintal, Mass::Kg).into())),
  tpl!("brt_konv_m3", "{t} ton = ... kg", [t = 1, 20], |v| Some(convert(v.get("t"), Mass::Ton, Mass::Kg).into())),
];

const KONVERSI_HARD: &[Template] = &[
  tpl!("brt_konv_h1", "{t} ton = ... kuintal", [t = 1, 50], |v| Some(convert(v.get("t"), Mass::Ton, Mass::Kuintal).into())),
  tpl!("brt_konv_h2", "{g} gram = ... kg", [h = 1, 40], |v| {
    let g = v.get("h") * 500.0;
    v.set("g", g);
    Some(convert(g, Mass::Gram, Mass::Kg).into())
  }),
  tpl!("brt_konv_h3", "{t} ton {k} kg = ... kg", [t = 1, 9; k = 1, 999], |v| {
    Some((convert(v.get("t"), Mass::Ton, Mass::Kg) + v.get("k")).into())
  }),
];

// ---- Operasi Berat ----

const OPERASI_STORY_LOWER: &[Template] = &[
  tpl!("brt_op_s1_semangka", "{nama} membawa {a} kg {buah} dan {nama2} membawa {b} kg {buah}. Berapa kilogram {buah} yang mereka bawa?",
    [a = 1, 20; b = 1, 20], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("brt_op_s1_karung", "Sebuah karung berisi {a} kg beras. Ibu mengambil {b} kg. Berapa kilogram beras yang tersisa?",
    [b = 1, 20; s = 0, 30], |v| {
      v.set("a", v.get("b") + v.get("s"));
      Some(v.get("s").into())
    }),
];

const OPERASI_STORY_MIDDLE: &[Template] = &[
  tpl!("brt_op_s2_belanja", "Ibu membeli {k} kg daging dan {o} ons ikan di {tempat}. Berapa ons berat belanjaan ibu?",
    [k = 1, 5; o = 1, 9], |v| Some((convert(v.get("k"), Mass::Kg, Mass::Ons) + v.get("o")).into())),
  tpl!("brt_op_s2_kiriman", "{nama} mengirim {n} paket yang masing-masing beratnya {g} gram. Berapa gram berat seluruh paket?",
    [n = 2, 9; g = 100, 900], |v| Some((v.get("n") * v.get("g")).into())),
];

const OPERASI_STORY_UPPER: &[Template] = &[
  tpl!("brt_op_s3_gudang", "Gudang di {tempat} berisi {t} ton jagung. Sebanyak {q} kuintal jagung dijual. Berapa kilogram jagung yang tersisa?",
    [t = 1, 9; q = 1, 10], |v| {
      let stock = convert(v.get("t"), Mass::Ton, Mass::Kg);
      let sold = convert(v.get("q"), Mass::Kuintal, Mass::Kg);
      (sold <= stock).then(|| (stock - sold).into())
    }),
  tpl!("brt_op_s3_bagi", "Sebanyak {q} kuintal beras dibagikan sama rata kepada {n} keluarga. Berapa kilogram beras yang diterima setiap keluarga?",
    [n = 2, 5; m = 1, 5], |v| {
      let each = convert(v.get("m"), Mass::Kuintal, Mass::Kg);
      v.set("q", v.get("n") * v.get("m"));
      Some(each.into())
    }),
];

const OPERASI_EASY: &[Template] = &[
  tpl!("brt_op_e1", "{a} kg + {b} kg = ... kg", [a = 1, 50; b = 1, 50], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("brt_op_e2", "{a} kg - {b} kg = ... kg", [b = 1, 40; s = 0, 40], |v| {
    v.set("a", v.get("b") + v.get("s"));
    Some(v.get("s").into())
  }),
];

const OPERASI_MEDIUM: &[Template] = &[
  tpl!("brt_op_m1", "{k} kg + {o} ons = ... ons", [k = 1, 9; o = 1, 9], |v| {
    Some((convert(v.get("k"), Mass::Kg, Mass::Ons) + v.get("o")).into())
  }),
  tpl!("brt_op_m2", "{k} kg + {g} gram = ... gram", [k = 1, 9; g = 1, 999], |v| {
    Some((convert(v.get("k"), Mass::Kg, Mass::Gram) + v.get("g")).into())
  }),
];

const OPERASI_HARD: &[Template] = &[
  tpl!("brt_op_h1", "{t} ton - {q} kuintal = ... kg", [t = 1, 9; q = 1, 10], |v| {
    let a = convert(v.get("t"), Mass::Ton, Mass::Kg);
    let b = convert(v.get("q"), Mass::Kuintal, Mass::Kg);
    (b <= a).then(|| (a - b).into())
  }),
  tpl!("brt_op_h2", "{t} ton + {q} kuintal + {k} kg = ... kg", [t = 1, 5; q = 1, 9; k = 1, 99], |v| {
    let kg = convert(v.get("t"), Mass::Ton, Mass::Kg) + convert(v.get("q"), Mass::Kuintal, Mass::Kg) + v.get("k");
    Some(kg.into())
  }),
];
