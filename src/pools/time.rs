//! Time mode: unit conversion, elapsed time and arithmetic on durations.

use super::SubMode;
use crate::template::{tpl, Template};
use crate::units::{convert, convert_floor, Calendar, Clock};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Konversi Waktu",
    story: [KONVERSI_STORY_LOWER, KONVERSI_STORY_MIDDLE, KONVERSI_STORY_UPPER],
    standard: [KONVERSI_EASY, KONVERSI_MEDIUM, KONVERSI_HARD],
  },
  SubMode {
    key: "Lama Waktu",
    story: [LAMA_STORY_LOWER, LAMA_STORY_MIDDLE, LAMA_STORY_UPPER],
    standard: [LAMA_EASY, LAMA_MEDIUM, LAMA_HARD],
  },
  SubMode {
    key: "Operasi Waktu",
    story: [OPERASI_STORY_LOWER, OPERASI_STORY_MIDDLE, OPERASI_STORY_UPPER],
    standard: [OPERASI_EASY, OPERASI_MEDIUM, OPERASI_HARD],
  },
];

// ---- Konversi Waktu ----

const KONVERSI_STORY_LOWER: &[Template] = &[
  tpl!("wkt_konv_s1_belajar", "{nama} belajar selama {j} jam. Berapa menit {nama} belajar?",
    [j = 1, 5], |v| Some(convert(v.get("j"), Clock::Jam, Clock::Menit).into())),
  tpl!("wkt_konv_s1_libur", "{nama} berlibur di rumah nenek selama {m} minggu. Berapa hari {nama} berlibur?",
    [m = 1, 4], |v| Some(convert(v.get("m"), Clock::Minggu, Clock::Hari).into())),
  tpl!("wkt_konv_s1_kemah", "Kegiatan perkemahan di {tempat} berlangsung selama {h} hari. Berapa jam lamanya perkemahan itu?",
    [h = 1, 3], |v| Some(convert(v.get("h"), Clock::Hari, Clock::Jam).into())),
];

const KONVERSI_STORY_MIDDLE: &[Template] = &[
  tpl!("wkt_konv_s2_pohon", "Umur pohon mangga di {tempat} adalah {w} windu. Berapa tahun umur pohon itu?",
    [w = 1, 9], |v| Some(convert(v.get("w"), Calendar::Windu, Calendar::Tahun).into())),
  tpl!("wkt_konv_s2_gedung", "Gedung {tempat} sudah berdiri selama {d} dasawarsa. Berapa tahun gedung itu berdiri?",
    [d = 1, 9], |v| Some(convert(v.get("d"), Calendar::Dasawarsa, Calendar::Tahun).into())),
  tpl!("wkt_konv_s2_membaca", "{nama} membaca buku selama {m} menit. Berapa jam penuh yang sudah dilalui {nama}?",
    [m = 60, 400], |v| Some(convert_floor(v.get("m"), Clock::Menit, Clock::Jam).into())),
];

const KONVERSI_STORY_UPPER: &[Template] = &[
  tpl!("wkt_konv_s3_candi", "Sebuah candi berumur {a} abad {w} windu. Berapa tahun umur candi itu?",
    [a = 2, 12; w = 1, 9], |v| {
      let years = convert(v.get("a"), Calendar::Abad, Calendar::Tahun) + convert(v.get("w"), Calendar::Windu, Calendar::Tahun);
      Some(years.into())
    }),
  tpl!("wkt_konv_s3_kereta", "Perjalanan kereta ditempuh dalam {j} jam {m} menit {d} detik. Berapa detik lama perjalanan itu?",
    [j = 1, 9; m = 1, 59; d = 1, 59], |v| {
      let secs = convert(v.get("j"), Clock::Jam, Clock::Detik) + convert(v.get("m"), Clock::Menit, Clock::Detik) + v.get("d");
      Some(secs.into())
    }),
  tpl!("wkt_konv_s3_proyek", "Sebuah proyek jembatan dikerjakan selama {m} minggu {h} hari. Berapa jam lama pengerjaan proyek itu?",
    [m = 2, 20; h = 1, 6], |v| {
      let hours = convert(v.get("m"), Clock::Minggu, Clock::Jam) + convert(v.get("h"), Clock::Hari, Clock::Jam);
      Some(hours.into())
    }),
];

const KONVERSI_EASY: &[Template] = &[
  tpl!("wkt_konv_e1", "{j} jam = ... menit", [j = 1, 12], |v| Some(convert(v.get("j"), Clock::Jam, Clock::Menit).into())),
  tpl!("wkt_konv_e2", "{m} minggu = ... hari", [m = 1, 10], |v| Some(convert(v.get("m"), Clock::Minggu, Clock::Hari).into())),
  tpl!("wkt_konv_e3", "{h} hari = ... jam", [h = 1, 7], |v| Some(convert(v.get("h"), Clock::Hari, Clock::Jam).into())),
];

const KONVERSI_MEDIUM: &[Template] = &[
  tpl!("wkt_konv_m1", "{w} windu = ... tahun", [w = 1, 20], |v| Some(convert(v.get("w"), Calendar::Windu, Calendar::Tahun).into())),
  tpl!("wkt_konv_m2", "{d} dasawarsa = ... tahun", [d = 1, 20], |v| Some(convert(v.get("d"), Calendar::Dasawarsa, Calendar::Tahun).into())),
  tpl!("wkt_konv_m3", "{m} menit = ... jam (jam penuh)", [m = 60, 600], |v| Some(convert_floor(v.get("m"), Clock::Menit, Clock::Jam).into())),
  tpl!("wkt_konv_m4", "{j} jam = ... detik", [j = 1, 10], |v| Some(convert(v.get("j"), Clock::Jam, Clock::Detik).into())),
];

const KONVERSI_HARD: &[Template] = &[
  tpl!("wkt_konv_h1", "{a} abad = ... tahun", [a = 1, 30], |v| Some(convert(v.get("a"), Calendar::Abad, Calendar::Tahun).into())),
  tpl!("wkt_konv_h2", "{a} abad {w} windu = ... tahun", [a = 1, 20; w = 1, 12], |v| {
    Some((convert(v.get("a"), Calendar::Abad, Calendar::Tahun) + convert(v.get("w"), Calendar::Windu, Calendar::Tahun)).into())
  }),
  tpl!("wkt_konv_h3", "{t} tahun = ... windu", [w = 1, 30], |v| {
    v.set("t", convert(v.get("w"), Calendar::Windu, Calendar::Tahun));
    Some(v.get("w").into())
  }),
  tpl!("wkt_konv_h4", "{d} detik = ... menit (menit penuh)", [d = 60, 5_000], |v| Some(convert_floor(v.get("d"), Clock::Detik, Clock::Menit).into())),
];

// ---- Lama Waktu ----

const LAMA_STORY_LOWER: &[Template] = &[
  tpl!("wkt_lama_s1_pr", "{nama} mulai mengerjakan PR pukul {h1}.00 dan selesai pukul {h2}.00. Berapa jam {nama} mengerjakan PR?",
    [h1 = 13, 18; d = 1, 4], |v| {
      v.set("h2", v.get("h1") + v.get("d"));
      Some(v.get("d").into())
    }),
  tpl!("wkt_lama_s1_sekolah", "{nama} berangkat ke {tempat} pukul {h1}.00 dan pulang pukul {h2}.00. Berapa jam {nama} berada di luar rumah?",
    [h1 = 6, 9; d = 2, 6], |v| {
      v.set("h2", v.get("h1") + v.get("d"));
      Some(v.get("d").into())
    }),
];

const LAMA_STORY_MIDDLE: &[Template] = &[
  tpl!("wkt_lama_s2_film", "Film dimulai pukul {h1} lewat {m1} menit dan selesai pukul {h2} lewat {m2} menit. Berapa menit lama film itu?",
    [h1 = 13, 19; a = 0, 3; d = 60, 150], |v| {
      let m1 = v.get("a") * 15.0;
      let start = v.get("h1") * 60.0 + m1;
      let end = start + v.get("d");
      v.set("m1", m1);
      v.set("h2", (end / 60.0).floor());
      v.set("m2", end % 60.0);
      Some(v.get("d").into())
    }),
  tpl!("wkt_lama_s2_lari", "{nama} berlari dari pukul 06.00 sampai pukul 06.00 lewat {m} menit, lalu beristirahat {r} menit. Berapa menit seluruh kegiatan {nama}?",
    [m = 10, 55; r = 5, 30], |v| Some((v.get("m") + v.get("r")).into())),
];

const LAMA_STORY_UPPER: &[Template] = &[
  tpl!("wkt_lama_s3_pesawat", "Sebuah pesawat berangkat pukul {h1} lewat {m1} menit dan tiba pukul {h2} lewat {m2} menit pada hari yang sama. Berapa menit lama penerbangan itu?",
    [h1 = 5, 14; m1 = 0, 59; d = 45, 480], |v| {
      let start = v.get("h1") * 60.0 + v.get("m1");
      let end = start + v.get("d");
      v.set("h2", (end / 60.0).floor());
      v.set("m2", end % 60.0);
      Some(v.get("d").into())
    }),
  tpl!("wkt_lama_s3_lomba", "Pelari pertama mencapai garis finis dalam {a} detik, sedangkan pelari kedua {m} menit {s} detik. Berapa detik selisih waktu keduanya?",
    [m = 2, 5; s = 0, 59; g = 5, 100], |v| {
      let second = convert(v.get("m"), Clock::Menit, Clock::Detik) + v.get("s");
      let first = (second - v.get("g")).max(0.0);
      v.set("a", first);
      Some((second - first).into())
    }),
];

const LAMA_EASY: &[Template] = &[
  tpl!("wkt_lama_e1", "Dari pukul {h1}.00 sampai pukul {h2}.00 adalah ... jam", [h1 = 6, 15; d = 1, 8], |v| {
    v.set("h2", v.get("h1") + v.get("d"));
    Some(v.get("d").into())
  }),
];

const LAMA_MEDIUM: &[Template] = &[
  tpl!("wkt_lama_m1", "Dari pukul {h1}.00 sampai pukul {h2}.00 adalah ... menit", [h1 = 6, 15; d = 1, 8], |v| {
    v.set("h2", v.get("h1") + v.get("d"));
    Some(convert(v.get("d"), Clock::Jam, Clock::Menit).into())
  }),
  tpl!("wkt_lama_m2", "Dari pukul {h1} lewat {m1} menit sampai pukul {h2} lewat {m2} menit adalah ... menit", [h1 = 6, 15; m1 = 0, 59; d = 10, 180], |v| {
    let start = v.get("h1") * 60.0 + v.get("m1");
    let end = start + v.get("d");
    v.set("h2", (end / 60.0).floor());
    v.set("m2", end % 60.0);
    Some(v.get("d").into())
  }),
];

const LAMA_HARD: &[Template] = &[
  tpl!("wkt_lama_h1", "Dari hari ke-{a} sampai hari ke-{b} pukul yang sama adalah ... jam", [a = 1, 20; d = 1, 10], |v| {
    v.set("b", v.get("a") + v.get("d"));
    Some(convert(v.get("d"), Clock::Hari, Clock::Jam).into())
  }),
  tpl!("wkt_lama_h2", "Dari tahun ke-{a} sampai tahun ke-{b} adalah ... windu", [a = 1, 50; w = 1, 12], |v| {
    v.set("b", v.get("a") + convert(v.get("w"), Calendar::Windu, Calendar::Tahun));
    Some(v.get("w").into())
  }),
];

// ---- Operasi Waktu ----

const OPERASI_STORY_LOWER: &[Template] = &[
  tpl!("wkt_op_s1_main", "{nama} bermain selama {a} menit, lalu membaca buku selama {b} menit. Berapa menit seluruh kegiatan {nama}?",
    [a = 5, 40; b = 5, 40], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("wkt_op_s1_tidur", "Adik tidur siang selama {a} jam dan tidur malam selama {b} jam. Berapa jam adik tidur dalam sehari?",
    [a = 1, 3; b = 7, 10], |v| Some((v.get("a") + v.get("b")).into())),
];

const OPERASI_STORY_MIDDLE: &[Template] = &[
  tpl!("wkt_op_s2_musik", "{nama} berlatih musik {j} jam {m} menit setiap hari. Berapa menit {nama} berlatih dalam {h} hari?",
    [j = 1, 3; m = 5, 55; h = 2, 7], |v| {
      let daily = convert(v.get("j"), Clock::Jam, Clock::Menit) + v.get("m");
      Some((daily * v.get("h")).into())
    }),
  tpl!("wkt_op_s2_perjalanan", "Perjalanan dari rumah {nama} ke {tempat} memerlukan {a} jam {b} menit, pulangnya {c} jam {d} menit. Berapa menit perjalanan pergi dan pulang?",
    [a = 1, 4; b = 0, 59; c = 1, 4; d = 0, 59], |v| {
      let go = convert(v.get("a"), Clock::Jam, Clock::Menit) + v.get("b");
      let back = convert(v.get("c"), Clock::Jam, Clock::Menit) + v.get("d");
      Some((go + back).into())
    }),
];

const OPERASI_STORY_UPPER: &[Template] = &[
  tpl!("wkt_op_s3_umur", "Umur kakek {a} windu {b} tahun, sedangkan umur ayah {c} dasawarsa. Berapa tahun selisih umur kakek dan ayah?",
    [a = 7, 10; b = 1, 7; c = 3, 5], |v| {
      let kakek = convert(v.get("a"), Calendar::Windu, Calendar::Tahun) + v.get("b");
      let ayah = convert(v.get("c"), Calendar::Dasawarsa, Calendar::Tahun);
      Some((kakek - ayah).into())
    }),
  tpl!("wkt_op_s3_sungai", "Sebuah kapal berlayar {a} hari {b} jam, lalu singgah di pelabuhan {c} jam. Berapa jam seluruh perjalanan kapal itu?",
    [a = 1, 6; b = 1, 23; c = 2, 12], |v| {
      let total = convert(v.get("a"), Clock::Hari, Clock::Jam) + v.get("b") + v.get("c");
      Some(total.into())
    }),
];

const OPERASI_EASY: &[Template] = &[
  tpl!("wkt_op_e1", "{a} menit + {b} menit = ... menit", [a = 5, 50; b = 5, 50], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("wkt_op_e2", "{a} jam + {b} menit = ... menit", [a = 1, 3; b = 5, 55], |v| {
    Some((convert(v.get("a"), Clock::Jam, Clock::Menit) + v.get("b")).into())
  }),
];

const OPERASI_MEDIUM: &[Template] = &[
  tpl!("wkt_op_m1", "{a} jam {b} menit + {c} jam {d} menit = ... menit", [a = 1, 5; b = 0, 59; c = 1, 5; d = 0, 59], |v| {
    let first = convert(v.get("a"), Clock::Jam, Clock::Menit) + v.get("b");
    let second = convert(v.get("c"), Clock::Jam, Clock::Menit) + v.get("d");
    Some((first + second).into())
  }),
  tpl!("wkt_op_m2", "{a} minggu - {b} hari = ... hari", [a = 2, 8; b = 1, 13], |v| {
    Some((convert(v.get("a"), Clock::Minggu, Clock::Hari) - v.get("b")).into())
  }),
];

const OPERASI_HARD: &[Template] = &[
  tpl!("wkt_op_h1", "{a} abad - {b} windu = ... tahun", [a = 1, 5; b = 1, 12], |v| {
    Some((convert(v.get("a"), Calendar::Abad, Calendar::Tahun) - convert(v.get("b"), Calendar::Windu, Calendar::Tahun)).into())
  }),
  tpl!("wkt_op_h2", "{a} dasawarsa + {b} windu + {c} tahun = ... tahun", [a = 1, 9; b = 1, 9; c = 1, 9], |v| {
    let years = convert(v.get("a"), Calendar::Dasawarsa, Calendar::Tahun) + convert(v.get("b"), Calendar::Windu, Calendar::Tahun) + v.get("c");
    Some(years.into())
  }),
];
