//! Operator mode: tambah, kurang, kali, bagi, campuran.

use super::SubMode;
use crate::template::{tpl, Template};
use crate::units::{KODI, LUSIN};

pub const SUB_MODES: &[SubMode] = &[
  SubMode {
    key: "Tambah",
    story: [TAMBAH_STORY_LOWER, TAMBAH_STORY_MIDDLE, TAMBAH_STORY_UPPER],
    standard: [TAMBAH_EASY, TAMBAH_MEDIUM, TAMBAH_HARD],
  },
  SubMode {
    key: "Kurang",
    story: [KURANG_STORY_LOWER, KURANG_STORY_MIDDLE, KURANG_STORY_UPPER],
    standard: [KURANG_EASY, KURANG_MEDIUM, KURANG_HARD],
  },
  SubMode {
    key: "Kali",
    story: [KALI_STORY_LOWER, KALI_STORY_MIDDLE, KALI_STORY_UPPER],
    standard: [KALI_EASY, KALI_MEDIUM, KALI_HARD],
  },
  SubMode {
    key: "Bagi",
    story: [BAGI_STORY_LOWER, BAGI_STORY_MIDDLE, BAGI_STORY_UPPER],
    standard: [BAGI_EASY, BAGI_MEDIUM, BAGI_HARD],
  },
  SubMode {
    key: "Campuran",
    story: [CAMPURAN_STORY_LOWER, CAMPURAN_STORY_MIDDLE, CAMPURAN_STORY_UPPER],
    standard: [CAMPURAN_EASY, CAMPURAN_MEDIUM, CAMPURAN_HARD],
  },
];

// ---- Tambah ----

const TAMBAH_STORY_LOWER: &[Template] = &[
  tpl!("op_tambah_s1_kado", "{nama} mempunyai {a} {benda}. Kemudian {nama2} memberinya {b} {benda} lagi. Berapa jumlah {benda} {nama} sekarang?",
    [a = 1, 50; b = 1, 50], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_s1_anak", "Di {tempat} ada {a} anak laki-laki dan {b} anak perempuan. Berapa jumlah semua anak di {tempat}?",
    [a = 5, 40; b = 5, 40], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_s1_petik", "{nama} memetik {a} {buah} pada pagi hari dan {b} {buah} pada sore hari. Berapa {buah} yang dipetik {nama} hari itu?",
    [a = 2, 30; b = 2, 30], |v| Some((v.get("a") + v.get("b")).into())),
];

const TAMBAH_STORY_MIDDLE: &[Template] = &[
  tpl!("op_tambah_s2_toko", "Sebuah {tempat} menjual {a} {benda} pada hari Senin dan {b} {benda} pada hari Selasa. Berapa {benda} yang terjual selama dua hari itu?",
    [a = 100, 2500; b = 100, 2500], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_s2_tabung", "{nama} menabung Rp{a} pada bulan Januari, Rp{b} pada bulan Februari, dan Rp{c} pada bulan Maret. Berapa rupiah tabungan {nama} seluruhnya?",
    [x = 2, 40; y = 2, 40; z = 2, 40], |v| {
      let (a, b, c) = (v.get("x") * 500.0, v.get("y") * 500.0, v.get("z") * 500.0);
      v.set("a", a);
      v.set("b", b);
      v.set("c", c);
      Some((a + b + c).into())
    }),
  tpl!("op_tambah_s2_buku", "Perpustakaan sekolah memiliki {a} buku cerita dan {b} buku pelajaran. Berapa jumlah buku di perpustakaan itu?",
    [a = 250, 4000; b = 250, 4000], |v| Some((v.get("a") + v.get("b")).into())),
];

const TAMBAH_STORY_UPPER: &[Template] = &[
  tpl!("op_tambah_s3_desa", "Jumlah penduduk desa Sukamaju adalah {a} jiwa dan desa Sukamakmur {b} jiwa. Berapa jumlah penduduk kedua desa itu?",
    [a = 10_000, 99_999; b = 10_000, 99_999], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_s3_pabrik", "Sebuah pabrik memproduksi {a} {benda} pada bulan pertama. Pada bulan kedua produksinya naik {p}%. Berapa {benda} yang diproduksi selama dua bulan?",
    [k = 10, 500; s = 1, 10], |v| {
      let a = v.get("k") * 100.0;
      let p = v.get("s") * 5.0;
      v.set("a", a);
      v.set("p", p);
      Some((a + a + a * p / 100.0).into())
    }),
  tpl!("op_tambah_s3_stadion", "Pertandingan hari pertama ditonton {a} orang, hari kedua {b} orang, dan hari ketiga {c} orang. Berapa jumlah penonton selama tiga hari?",
    [a = 10_000, 60_000; b = 10_000, 60_000; c = 10_000, 60_000], |v| Some((v.get("a") + v.get("b") + v.get("c")).into())),
];

const TAMBAH_EASY: &[Template] = &[
  tpl!("op_tambah_e1", "{a} + {b} = ?", [a = 1, 20; b = 1, 20], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_e2", "{a} + {b} + {c} = ?", [a = 1, 10; b = 1, 10; c = 1, 10], |v| Some((v.get("a") + v.get("b") + v.get("c")).into())),
];

const TAMBAH_MEDIUM: &[Template] = &[
  tpl!("op_tambah_m1", "{a} + {b} = ?", [a = 100, 999; b = 100, 999], |v| Some((v.get("a") + v.get("b")).into())),
  tpl!("op_tambah_m2", "{a} + {b} + {c} = ?", [a = 50, 500; b = 50, 500; c = 50, 500], |v| Some((v.get("a") + v.get("b") + v.get("c")).into())),
];

const TAMBAH_HARD: &[Template] = &[
  tpl!("op_tambah_h1", "{a} + {b} = ?", [a = 1_000, 99_999; b = 1_000, 99_999], |v| Some((v.get("a") + v.get("b")).into())),
];

// ---- Kurang ----

const KURANG_STORY_LOWER: &[Template] = &[
  tpl!("op_kurang_s1_beri", "{nama} mempunyai {a} {benda}. Sebanyak {b} {benda} diberikan kepada {nama2}. Berapa sisa {benda} {nama}?",
    [b = 1, 30; d = 0, 30], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
  tpl!("op_kurang_s1_balon", "Ada {a} balon di {tempat}. Sebanyak {b} balon meletus. Berapa balon yang masih ada?",
    [b = 1, 20; d = 1, 40], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
  tpl!("op_kurang_s1_makan", "Ibu membeli {a} {buah}. {nama} dan adiknya memakan {b} {buah}. Berapa {buah} yang tersisa?",
    [b = 1, 15; d = 1, 30], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
];

const KURANG_STORY_MIDDLE: &[Template] = &[
  tpl!("op_kurang_s2_gudang", "Sebuah gudang menyimpan {a} karung beras. Sebanyak {b} karung dikirim ke {tempat}. Berapa karung beras yang masih ada di gudang?",
    [b = 100, 2000; d = 100, 3000], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
  tpl!("op_kurang_s2_uang", "{nama} mempunyai uang Rp{a}. Ia membeli {benda} seharga Rp{b}. Berapa sisa uang {nama}?",
    [x = 2, 30; y = 10, 80], |v| {
      let b = v.get("x") * 500.0;
      let a = b + v.get("y") * 500.0;
      v.set("a", a);
      v.set("b", b);
      Some((a - b).into())
    }),
  tpl!("op_kurang_s2_selisih", "Tinggi menara A adalah {a} cm dan tinggi menara B adalah {b} cm. Berapa cm selisih tinggi kedua menara?",
    [b = 500, 4000; d = 10, 900], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
];

const KURANG_STORY_UPPER: &[Template] = &[
  tpl!("op_kurang_s3_anggaran", "Anggaran kegiatan sekolah Rp{a}. Sebanyak Rp{b} sudah dipakai untuk membeli {benda}. Berapa sisa anggaran?",
    [x = 100, 900; y = 10, 500], |v| {
      let b = v.get("y") * 10_000.0;
      let a = b + v.get("x") * 10_000.0;
      v.set("a", a);
      v.set("b", b);
      Some((a - b).into())
    }),
  tpl!("op_kurang_s3_diskon", "Harga sebuah sepeda Rp{h}. Toko memberi potongan {p}%. Berapa rupiah potongan yang diterima pembeli?",
    [k = 50, 300; s = 1, 8], |v| {
      let h = v.get("k") * 10_000.0;
      let p = v.get("s") * 5.0;
      v.set("h", h);
      v.set("p", p);
      Some((h * p / 100.0).into())
    }),
  tpl!("op_kurang_s3_penonton", "Kapasitas stadion {a} kursi. Pada pertandingan final terisi {b} kursi. Berapa kursi yang kosong?",
    [b = 20_000, 70_000; d = 0, 15_000], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some(v.get("d").into())
    }),
];

const KURANG_EASY: &[Template] = &[
  tpl!("op_kurang_e1", "{a} - {b} = ?", [b = 1, 10; d = 0, 10], |v| {
    v.set("a", v.get("b") + v.get("d"));
    Some(v.get("d").into())
  }),
];

const KURANG_MEDIUM: &[Template] = &[
  tpl!("op_kurang_m1", "{a} - {b} = ?", [b = 100, 999; d = 0, 999], |v| {
    v.set("a", v.get("b") + v.get("d"));
    Some(v.get("d").into())
  }),
  tpl!("op_kurang_m2", "{a} - {b} - {c} = ?", [b = 10, 200; c = 10, 200; d = 0, 500], |v| {
    v.set("a", v.get("b") + v.get("c") + v.get("d"));
    Some(v.get("d").into())
  }),
];

const KURANG_HARD: &[Template] = &[
  tpl!("op_kurang_h1", "{a} - {b} = ?", [b = 1_000, 50_000; d = 0, 50_000], |v| {
    v.set("a", v.get("b") + v.get("d"));
    Some(v.get("d").into())
  }),
];

// ---- Kali ----

const KALI_STORY_LOWER: &[Template] = &[
  tpl!("op_kali_s1_kotak", "{nama} membeli {a} kotak {benda}. Setiap kotak berisi {b} {benda}. Berapa banyak {benda} seluruhnya?",
    [a = 2, 10; b = 2, 10], |v| Some((v.get("a") * v.get("b")).into())),
  tpl!("op_kali_s1_kaki", "Di {tempat} ada {a} ekor ayam. Setiap ayam berkaki 2. Berapa jumlah kaki semua ayam itu?",
    [a = 2, 25], |v| Some((v.get("a") * 2.0).into())),
  tpl!("op_kali_s1_piring", "Ada {a} piring. Di atas setiap piring ada {b} {buah}. Berapa {buah} seluruhnya?",
    [a = 2, 9; b = 2, 9], |v| Some((v.get("a") * v.get("b")).into())),
];

const KALI_STORY_MIDDLE: &[Template] = &[
  tpl!("op_kali_s2_kelas", "Sebuah sekolah memiliki {a} kelas. Setiap kelas berisi {b} siswa. Berapa jumlah siswa di sekolah itu?",
    [a = 12, 40; b = 20, 40], |v| Some((v.get("a") * v.get("b")).into())),
  tpl!("op_kali_s2_lusin", "{nama} membeli {a} lusin {benda}. Berapa buah {benda} yang dibeli {nama}?",
    [a = 2, 25], |v| Some((v.get("a") * LUSIN).into())),
  tpl!("op_kali_s2_harga", "Harga satu {benda} Rp{h}. {nama} membeli {a} {benda}. Berapa rupiah yang harus dibayar {nama}?",
    [k = 2, 20; a = 3, 15], |v| {
      let h = v.get("k") * 500.0;
      v.set("h", h);
      Some((h * v.get("a")).into())
    }),
];

const KALI_STORY_UPPER: &[Template] = &[
  tpl!("op_kali_s3_bus", "Sebuah bus dapat mengangkut {a} penumpang. Jika ada {b} bus yang penuh, berapa penumpang yang terangkut?",
    [a = 40, 60; b = 25, 150], |v| Some((v.get("a") * v.get("b")).into())),
  tpl!("op_kali_s3_kodi", "Sebuah toko membeli {a} kodi kain. Berapa lembar kain yang dibeli toko itu?",
    [a = 15, 250], |v| Some((v.get("a") * KODI).into())),
  tpl!("op_kali_s3_gaji", "Seorang pekerja mendapat upah Rp{h} per hari. Berapa upahnya setelah bekerja {a} hari?",
    [k = 50, 250; a = 20, 60], |v| {
      let h = v.get("k") * 1_000.0;
      v.set("h", h);
      Some((h * v.get("a")).into())
    }),
];

const KALI_EASY: &[Template] = &[
  tpl!("op_kali_e1", "{a} × {b} = ?", [a = 1, 10; b = 1, 10], |v| Some((v.get("a") * v.get("b")).into())),
];

const KALI_MEDIUM: &[Template] = &[
  tpl!("op_kali_m1", "{a} × {b} = ?", [a = 11, 99; b = 2, 20], |v| Some((v.get("a") * v.get("b")).into())),
];

const KALI_HARD: &[Template] = &[
  tpl!("op_kali_h1", "{a} × {b} = ?", [a = 100, 999; b = 10, 99], |v| Some((v.get("a") * v.get("b")).into())),
  tpl!("op_kali_h2", "{a} × {b} × {c} = ?", [a = 10, 50; b = 10, 50; c = 2, 9], |v| Some((v.get("a") * v.get("b") * v.get("c")).into())),
];

// ---- Bagi ----

const BAGI_STORY_LOWER: &[Template] = &[
  tpl!("op_bagi_s1_bagikan", "Ada {a} {buah} yang dibagikan sama banyak kepada {b} anak. Berapa {buah} yang diterima setiap anak?",
    [b = 2, 10; q = 1, 10], |v| {
      v.set("a", v.get("b") * v.get("q"));
      Some(v.get("q").into())
    }),
  tpl!("op_bagi_s1_kelompok", "Sebanyak {a} siswa di {tempat} dibagi menjadi {b} kelompok sama besar. Berapa siswa dalam setiap kelompok?",
    [b = 2, 6; q = 2, 8], |v| {
      v.set("a", v.get("b") * v.get("q"));
      Some(v.get("q").into())
    }),
];

const BAGI_STORY_MIDDLE: &[Template] = &[
  tpl!("op_bagi_s2_kotak", "Sebanyak {a} {benda} dikemas ke dalam kotak. Setiap kotak berisi {b} {benda}. Berapa kotak yang diperlukan?",
    [b = 6, 25; q = 10, 200], |v| {
      v.set("a", v.get("b") * v.get("q"));
      Some(v.get("q").into())
    }),
  tpl!("op_bagi_s2_uang", "Uang Rp{a} dibagikan sama rata kepada {b} anak. Berapa rupiah yang diterima setiap anak?",
    [b = 2, 12; k = 2, 60], |v| {
      let q = v.get("k") * 500.0;
      v.set("a", v.get("b") * q);
      Some(q.into())
    }),
];

const BAGI_STORY_UPPER: &[Template] = &[
  tpl!("op_bagi_s3_lusin", "Sebuah toko memiliki {a} {benda}. Semua {benda} dikemas per lusin. Berapa lusin {benda} yang didapat?",
    [q = 20, 400], |v| {
      v.set("a", v.get("q") * LUSIN);
      Some(v.get("q").into())
    }),
  tpl!("op_bagi_s3_truk", "Sebanyak {a} karung pupuk diangkut dengan {b} truk. Setiap truk membawa muatan yang sama. Berapa karung yang dibawa setiap truk?",
    [b = 12, 48; q = 50, 400], |v| {
      v.set("a", v.get("b") * v.get("q"));
      Some(v.get("q").into())
    }),
];

const BAGI_EASY: &[Template] = &[
  tpl!("op_bagi_e1", "{a} : {b} = ?", [b = 1, 10; q = 1, 10], |v| {
    v.set("a", v.get("b") * v.get("q"));
    Some(v.get("q").into())
  }),
];

const BAGI_MEDIUM: &[Template] = &[
  tpl!("op_bagi_m1", "{a} : {b} = ?", [b = 2, 25; q = 10, 200], |v| {
    v.set("a", v.get("b") * v.get("q"));
    Some(v.get("q").into())
  }),
];

const BAGI_HARD: &[Template] = &[
  tpl!("op_bagi_h1", "{a} : {b} = ?", [b = 11, 99; q = 100, 999], |v| {
    v.set("a", v.get("b") * v.get("q"));
    Some(v.get("q").into())
  }),
];

// ---- Campuran ----

const CAMPURAN_STORY_LOWER: &[Template] = &[
  tpl!("op_campur_s1_beli", "{nama} mempunyai {a} {benda}, lalu membeli {b} {benda} lagi. Kemudian {c} {benda} diberikan kepada {nama2}. Berapa {benda} {nama} sekarang?",
    [a = 5, 20; b = 1, 10; r = 1, 25], |v| {
      let total = v.get("a") + v.get("b");
      let c = v.get("r").min(total);
      v.set("c", c);
      Some((total - c).into())
    }),
  tpl!("op_campur_s1_bus", "Di dalam bus ada {a} penumpang. Di halte pertama {b} penumpang turun dan {c} penumpang naik. Berapa penumpang di dalam bus sekarang?",
    [b = 1, 10; d = 1, 20; c = 1, 10], |v| {
      v.set("a", v.get("b") + v.get("d"));
      Some((v.get("d") + v.get("c")).into())
    }),
];

const CAMPURAN_STORY_MIDDLE: &[Template] = &[
  tpl!("op_campur_s2_rusak", "{nama} membeli {a} kotak {benda}. Setiap kotak berisi {b} {benda}. Ternyata {c} {benda} rusak. Berapa {benda} yang masih bagus?",
    [a = 3, 9; b = 12, 24; c = 1, 30], |v| Some((v.get("a") * v.get("b") - v.get("c")).into())),
  tpl!("op_campur_s2_kembalian", "{nama} membeli {a} {benda} seharga Rp{h} per buah. Ia membayar dengan uang Rp{u}. Berapa uang kembalian yang diterima {nama}?",
    [a = 2, 6; k = 2, 10; s = 1, 20], |v| {
      let h = v.get("k") * 500.0;
      let total = v.get("a") * h;
      let u = total + v.get("s") * 1_000.0;
      v.set("h", h);
      v.set("u", u);
      Some((u - total).into())
    }),
];

const CAMPURAN_STORY_UPPER: &[Template] = &[
  tpl!("op_campur_s3_diskon", "Harga sebuah sepeda Rp{h}. Toko memberi diskon {p}%. Berapa harga yang harus dibayar?",
    [k = 50, 300; s = 1, 8], |v| {
      let h = v.get("k") * 10_000.0;
      let p = v.get("s") * 5.0;
      v.set("h", h);
      v.set("p", p);
      Some((h - h * p / 100.0).into())
    }),
  tpl!("op_campur_s3_panen", "Pak tani memanen {a} {buah} setiap hari selama {b} hari. Sebanyak {c} {buah} dijual ke {tempat}. Berapa {buah} yang tersisa?",
    [a = 100, 500; b = 5, 20; r = 100, 5_000], |v| {
      let total = v.get("a") * v.get("b");
      let c = v.get("r").min(total);
      v.set("c", c);
      Some((total - c).into())
    }),
];

const CAMPURAN_EASY: &[Template] = &[
  tpl!("op_campur_e1", "{a} + {b} - {c} = ?", [a = 1, 10; b = 1, 10; r = 1, 10], |v| {
    let total = v.get("a") + v.get("b");
    let c = v.get("r").min(total);
    v.set("c", c);
    Some((total - c).into())
  }),
];

const CAMPURAN_MEDIUM: &[Template] = &[
  tpl!("op_campur_m1", "{a} × {b} + {c} = ?", [a = 2, 12; b = 2, 12; c = 1, 100], |v| Some((v.get("a") * v.get("b") + v.get("c")).into())),
  tpl!("op_campur_m2", "{a} : {b} + {c} = ?", [b = 2, 10; q = 2, 20; c = 1, 100], |v| {
    v.set("a", v.get("b") * v.get("q"));
    Some((v.get("q") + v.get("c")).into())
  }),
];

const CAMPURAN_HARD: &[Template] = &[
  tpl!("op_campur_h1", "({a} + {b}) × {c} - {d} = ?", [a = 10, 99; b = 10, 99; c = 2, 9; d = 1, 40], |v| {
    Some(((v.get("a") + v.get("b")) * v.get("c") - v.get("d")).into())
  }),
  tpl!("op_campur_h2", "{a} × {b} - {c} : {e} = ?", [a = 10, 50; b = 10, 50; e = 2, 9; q = 1, 50], |v| {
    v.set("c", v.get("e") * v.get("q"));
    Some((v.get("a") * v.get("b") - v.get("q")).into())
  }),
];
