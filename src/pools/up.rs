//! Up mode (ukuran dan bangun): perimeter, area, volume and surface area.
//! Lengths are whole centimetres; circle answers use π = 3,14 and are rounded.

use super::SubMode;
use crate::geometry::*;
use crate::template::{tpl, Template};
use crate::units::{convert, Volume};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Keliling",
    story: [KELILING_STORY_LOWER, KELILING_STORY_MIDDLE, KELILING_STORY_UPPER],
    standard: [KELILING_EASY, KELILING_MEDIUM, KELILING_HARD],
  },
  SubMode {
    key: "Luas",
    story: [LUAS_STORY_LOWER, LUAS_STORY_MIDDLE, LUAS_STORY_UPPER],
    standard: [LUAS_EASY, LUAS_MEDIUM, LUAS_HARD],
  },
  SubMode {
    key: "Volume Bangun Ruang",
    story: [RUANG_STORY_LOWER, RUANG_STORY_MIDDLE, RUANG_STORY_UPPER],
    standard: [RUANG_EASY, RUANG_MEDIUM, RUANG_HARD],
  },
  SubMode {
    key: "Luas Permukaan",
    story: [&[], PERMUKAAN_STORY_MIDDLE, PERMUKAAN_STORY_UPPER],
    standard: [PERMUKAAN_EASY, PERMUKAAN_MEDIUM, PERMUKAAN_HARD],
  },
];

// ---- Keliling ----

const KELILING_STORY_LOWER: &[Template] = &[
  tpl!("up_kel_s1_bingkai", "{nama} membuat bingkai foto berbentuk persegi dengan sisi {s} cm. Berapa cm keliling bingkai itu?",
    [s = 2, 20], |v| Some(square_perimeter(v.get("s")).into())),
  tpl!("up_kel_s1_meja", "Meja belajar {nama} berbentuk persegi panjang dengan panjang {p} cm dan lebar {l} cm. Berapa cm keliling meja itu?",
    [p = 10, 30; l = 5, 10], |v| Some(rectangle_perimeter(v.get("p"), v.get("l")).into())),
];

const KELILING_STORY_MIDDLE: &[Template] = &[
  tpl!("up_kel_s2_kebun", "Kebun di {tempat} berbentuk persegi panjang berukuran {p} m x {l} m. Pak tani memasang pagar di sekelilingnya. Berapa meter panjang pagar itu?",
    [p = 10, 60; l = 5, 40], |v| Some(rectangle_perimeter(v.get("p"), v.get("l")).into())),
  tpl!("up_kel_s2_segitiga", "{nama} menghias tepi kertas segitiga dengan pita. Sisi-sisinya {a} cm, {b} cm, dan {c} cm. Berapa cm pita yang diperlukan?",
    [a = 3, 20; b = 3, 20; k = 0, 40], |v| {
      let (a, b) = (v.get("a"), v.get("b"));
      // third side strictly between |a - b| and a + b
      let lo = (a - b).abs() + 1.0;
      let hi = a + b - 1.0;
      let c = lo + v.get("k") % (hi - lo + 1.0);
      v.set("c", c);
      Some(triangle_perimeter(a, b, c).into())
    }),
];

const KELILING_STORY_UPPER: &[Template] = &[
  tpl!("up_kel_s3_roda", "Roda sepeda {nama} berdiameter {d} cm. Berapa cm jarak yang ditempuh jika roda berputar {n} kali?",
    [d = 7, 70; n = 2, 20], |v| Some((v.get("n") * circle_circumference_diameter(v.get("d"))).into())),
  tpl!("up_kel_s3_taman", "Taman bundar di {tempat} memiliki jari-jari {r} m. Berapa meter keliling taman itu?",
    [r = 5, 50], |v| Some(circle_circumference_radius(v.get("r")).into())),
];

const KELILING_EASY: &[Template] = &[
  tpl!("up_kel_e1", "Keliling persegi dengan sisi {s} cm = ... cm", [s = 1, 25], |v| Some(square_perimeter(v.get("s")).into())),
  tpl!("up_kel_e2", "Keliling persegi panjang {p} cm x {l} cm = ... cm", [p = 2, 20; l = 1, 15], |v| {
    Some(rectangle_perimeter(v.get("p"), v.get("l")).into())
  }),
];

const KELILING_MEDIUM: &[Template] = &[
  tpl!("up_kel_m1", "Keliling segitiga sama sisi dengan sisi {s} cm = ... cm", [s = 2, 40], |v| {
    let s = v.get("s");
    Some(triangle_perimeter(s, s, s).into())
  }),
  tpl!("up_kel_m2", "Keliling lingkaran dengan diameter {d} cm (π = 3,14) = ... cm", [d = 2, 50], |v| {
    Some(circle_circumference_diameter(v.get("d")).into())
  }),
];

const KELILING_HARD: &[Template] = &[
  tpl!("up_kel_h1", "Keliling lingkaran dengan jari-jari {r} cm (π = 3,14) = ... cm", [r = 2, 60], |v| {
    Some(circle_circumference_radius(v.get("r")).into())
  }),
  tpl!("up_kel_h2", "Persegi panjang dengan keliling {k} cm dan panjang {p} cm memiliki lebar ... cm", [p = 5, 40; l = 1, 30], |v| {
    v.set("k", rectangle_perimeter(v.get("p"), v.get("l")));
    Some(v.get("l").into())
  }),
];

// ---- Luas ----

const LUAS_STORY_LOWER: &[Template] = &[
  tpl!("up_luas_s1_sapu", "{nama} mempunyai sapu tangan persegi dengan sisi {s} cm. Berapa cm² luas sapu tangan itu?",
    [s = 2, 15], |v| Some(square_area(v.get("s")).into())),
  tpl!("up_luas_s1_buku", "Sampul buku {nama} berukuran panjang {p} cm dan lebar {l} cm. Berapa cm² luas sampul buku itu?",
    [p = 10, 30; l = 5, 20], |v| Some(rectangle_area(v.get("p"), v.get("l")).into())),
];

const LUAS_STORY_MIDDLE: &[Template] = &[
  tpl!("up_luas_s2_layang", "Layang-layang {nama} berbentuk segitiga dengan alas {a} cm dan tinggi {t} cm. Berapa cm² luasnya?",
    [h = 5, 30; t = 5, 40], |v| {
      let a = v.get("h") * 2.0;
      v.set("a", a);
      Some(triangle_area(a, v.get("t")).into())
    }),
  tpl!("up_luas_s2_ubin", "Lantai kamar {nama} berukuran {p} cm x {l} cm akan dipasangi ubin persegi bersisi {s} cm. Berapa banyak ubin yang diperlukan?",
    [k = 0, 1; x = 4, 16; y = 4, 12], |v| {
      let s = if v.get("k") == 0.0 { 25.0 } else { 50.0 };
      let (p, l) = (v.get("x") * s, v.get("y") * s);
      v.set("s", s);
      v.set("p", p);
      v.set("l", l);
      Some((rectangle_area(p, l) / square_area(s)).into())
    }),
];

const LUAS_STORY_UPPER: &[Template] = &[
  tpl!("up_luas_s3_kolam", "Kolam ikan di {tempat} berbentuk lingkaran dengan jari-jari {r} m. Berapa m² luas kolam itu?",
    [r = 2, 30], |v| Some(circle_area(v.get("r")).into())),
  tpl!("up_luas_s3_sawah", "Sawah pak tani berbentuk trapesium dengan sisi sejajar {a} m dan {b} m serta tinggi {t} m. Berapa m² luas sawah itu?",
    [a = 10, 60; b = 10, 60; h = 5, 30], |v| {
      let t = v.get("h") * 2.0;
      v.set("t", t);
      Some(trapezoid_area(v.get("a"), v.get("b"), t).into())
    }),
];

const LUAS_EASY: &[Template] = &[
  tpl!("up_luas_e1", "Luas persegi dengan sisi {s} cm = ... cm²", [s = 1, 20], |v| Some(square_area(v.get("s")).into())),
  tpl!("up_luas_e2", "Luas persegi panjang {p} cm x {l} cm = ... cm²", [p = 2, 20; l = 1, 12], |v| {
    Some(rectangle_area(v.get("p"), v.get("l")).into())
  }),
];

const LUAS_MEDIUM: &[Template] = &[
  tpl!("up_luas_m1", "Luas segitiga dengan alas {a} cm dan tinggi {t} cm = ... cm²", [h = 1, 20; t = 2, 30], |v| {
    let a = v.get("h") * 2.0;
    v.set("a", a);
    Some(triangle_area(a, v.get("t")).into())
  }),
  tpl!("up_luas_m2", "Luas jajar genjang dengan alas {a} cm dan tinggi {t} cm = ... cm²", [a = 2, 30; t = 2, 20], |v| {
    Some(parallelogram_area(v.get("a"), v.get("t")).into())
  }),
];

const LUAS_HARD: &[Template] = &[
  tpl!("up_luas_h1", "Luas lingkaran dengan jari-jari {r} cm (π = 3,14) = ... cm²", [r = 2, 40], |v| Some(circle_area(v.get("r")).into())),
  tpl!("up_luas_h2", "Luas trapesium dengan sisi sejajar {a} cm dan {b} cm serta tinggi {t} cm = ... cm²", [a = 2, 40; b = 2, 40; h = 1, 15], |v| {
    let t = v.get("h") * 2.0;
    v.set("t", t);
    Some(trapezoid_area(v.get("a"), v.get("b"), t).into())
  }),
];

// ---- Volume Bangun Ruang ----

const RUANG_STORY_LOWER: &[Template] = &[
  tpl!("up_ruang_s1_kubus", "{nama} menyusun kubus-kubus kecil menjadi kubus besar dengan rusuk {s} kubus. Berapa banyak kubus kecil yang diperlukan?",
    [s = 2, 6], |v| Some(cube_volume(v.get("s")).into())),
];

const RUANG_STORY_MIDDLE: &[Template] = &[
  tpl!("up_ruang_s2_kardus", "Sebuah kardus berbentuk balok berukuran {p} cm x {l} cm x {t} cm. Berapa cm³ volume kardus itu?",
    [p = 10, 40; l = 5, 30; t = 5, 30], |v| Some(prism_volume(v.get("p"), v.get("l"), v.get("t")).into())),
  tpl!("up_ruang_s2_bak", "Bak mandi di rumah {nama} berukuran {p} dm x {l} dm x {t} dm. Berapa liter air yang dapat ditampung bak itu?",
    [p = 4, 12; l = 3, 8; t = 3, 8], |v| {
      let dm3 = prism_volume(v.get("p"), v.get("l"), v.get("t"));
      Some(convert(dm3, Volume::CubicDecimeter, Volume::Liter).into())
    }),
];

const RUANG_STORY_UPPER: &[Template] = &[
  tpl!("up_ruang_s3_tabung", "Sebuah kaleng {benda} berbentuk tabung dengan jari-jari {r} cm dan tinggi {t} cm. Berapa cm³ volume kaleng itu? (π = 3,14)",
    [r = 2, 14; t = 5, 30], |v| Some(cylinder_volume(v.get("r"), v.get("t")).into())),
  tpl!("up_ruang_s3_limas", "Atap menara di {tempat} berbentuk limas persegi dengan sisi alas {s} m dan tinggi {t} m. Berapa m³ volumenya?",
    [s = 3, 20; t = 3, 30], |v| Some(pyramid_volume(v.get("s"), v.get("t")).into())),
];

const RUANG_EASY: &[Template] = &[
  tpl!("up_ruang_e1", "Volume kubus dengan rusuk {s} cm = ... cm³", [s = 1, 12], |v| Some(cube_volume(v.get("s")).into())),
];

const RUANG_MEDIUM: &[Template] = &[
  tpl!("up_ruang_m1", "Volume balok {p} cm x {l} cm x {t} cm = ... cm³", [p = 2, 20; l = 2, 15; t = 2, 15], |v| {
    Some(prism_volume(v.get("p"), v.get("l"), v.get("t")).into())
  }),
  tpl!("up_ruang_m2", "Volume kubus dengan rusuk {s} cm = ... cm³", [s = 10, 30], |v| Some(cube_volume(v.get("s")).into())),
];

const RUANG_HARD: &[Template] = &[
  tpl!("up_ruang_h1", "Volume tabung dengan jari-jari {r} cm dan tinggi {t} cm (π = 3,14) = ... cm³", [r = 2, 20; t = 2, 30], |v| {
    Some(cylinder_volume(v.get("r"), v.get("t")).into())
  }),
  tpl!("up_ruang_h2", "Volume limas persegi dengan sisi alas {s} cm dan tinggi {t} cm = ... cm³", [s = 2, 20; t = 3, 30], |v| {
    Some(pyramid_volume(v.get("s"), v.get("t")).into())
  }),
];

// ---- Luas Permukaan ----

const PERMUKAAN_STORY_MIDDLE: &[Template] = &[
  tpl!("up_perm_s2_kado", "{nama} membungkus kado berbentuk kubus dengan rusuk {s} cm. Berapa cm² kertas kado minimal yang diperlukan?",
    [s = 5, 30], |v| Some(cube_surface(v.get("s")).into())),
  tpl!("up_perm_s2_kotak", "{nama} mengecat seluruh permukaan kotak {benda} berbentuk balok {p} cm x {l} cm x {t} cm. Berapa cm² luas yang dicat?",
    [p = 5, 30; l = 5, 20; t = 5, 20], |v| Some(prism_surface(v.get("p"), v.get("l"), v.get("t")).into())),
];

const PERMUKAAN_STORY_UPPER: &[Template] = &[
  tpl!("up_perm_s3_bola", "Sebuah bola di {tempat} memiliki jari-jari {r} cm. Berapa cm² luas permukaan bola itu? (π = 3,14)",
    [r = 3, 30], |v| Some(sphere_surface(v.get("r")).into())),
  tpl!("up_perm_s3_tangki", "Tangki air berbentuk tabung tertutup dengan jari-jari {r} dm dan tinggi {t} dm. Berapa dm² luas permukaan tangki itu? (π = 3,14)",
    [r = 2, 15; t = 5, 30], |v| Some(cylinder_surface(v.get("r"), v.get("t")).into())),
  tpl!("up_perm_s3_topi", "Topi ulang tahun {nama} berbentuk kerucut dengan jari-jari {r} cm dan garis pelukis {s} cm. Berapa cm² kertas untuk membuat selimut topi itu? (π = 3,14)",
    [r = 3, 10; s = 12, 30], |v| Some(cone_lateral(v.get("r"), v.get("s")).into())),
];

const PERMUKAAN_EASY: &[Template] = &[
  tpl!("up_perm_e1", "Luas permukaan kubus dengan rusuk {s} cm = ... cm²", [s = 1, 12], |v| Some(cube_surface(v.get("s")).into())),
];

const PERMUKAAN_MEDIUM: &[Template] = &[
  tpl!("up_perm_m1", "Luas permukaan balok {p} cm x {l} cm x {t} cm = ... cm²", [p = 2, 20; l = 2, 15; t = 2, 15], |v| {
    Some(prism_surface(v.get("p"), v.get("l"), v.get("t")).into())
  }),
  tpl!("up_perm_m2", "Luas permukaan kubus dengan rusuk {s} cm = ... cm²", [s = 10, 30], |v| Some(cube_surface(v.get("s")).into())),
];

const PERMUKAAN_HARD: &[Template] = &[
  tpl!("up_perm_h1", "Luas permukaan bola dengan jari-jari {r} cm (π = 3,14) = ... cm²", [r = 2, 30], |v| Some(sphere_surface(v.get("r")).into())),
  tpl!("up_perm_h2", "Luas permukaan tabung dengan jari-jari {r} cm dan tinggi {t} cm (π = 3,14) = ... cm²", [r = 2, 20; t = 2, 30], |v| {
    Some(cylinder_surface(v.get("r"), v.get("t")).into())
  }),
  tpl!("up_perm_h3", "Luas selimut kerucut dengan jari-jari {r} cm dan garis pelukis {s} cm (π = 3,14) = ... cm²", [r = 2, 15; s = 5, 30], |v| {
    Some(cone_lateral(v.get("r"), v.get("s")).into())
  }),
];
