//! Measurement units used by the time, heavy and volume modes.
//!
//! Each unit knows its size in a base unit of its family (gram, millilitre,
//! second or month). Conversions are exact ratios of those sizes.
//!
//!   1 kg = 10 ons = 1000 g, 1 kuintal = 100 kg, 1 ton = 1000 kg
//!   1 liter = 1000 ml = 1 dm³
//!   1 hari = 24 jam, 1 minggu = 7 hari
//!   1 windu = 8 tahun, 1 dasawarsa = 10 tahun, 1 abad = 100 tahun

/// A unit within one conversion family.
pub trait Unit: Copy {
  /// Size of the unit expressed in the family's base unit.
  fn base(self) -> f64;
}

/// Convert `value` between two units of the same family.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
  value * from.base() / to.base()
}

/// Whole target units only, e.g. 90 menit -> 1 jam.
pub fn convert_floor<U: Unit>(value: f64, from: U, to: U) -> f64 {
  convert(value, from, to).floor()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mass {
  Ton,
  Kuintal,
  Kg,
  Ons,
  Gram,
}

impl Unit for Mass {
  fn base(self) -> f64 {
    match self {
      Mass::Ton => 1_000_000.0,
      Mass::Kuintal => 100_000.0,
      Mass::Kg => 1_000.0,
      Mass::Ons => 100.0,
      Mass::Gram => 1.0,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Volume {
  Kiloliter,
  Liter,
  Desiliter,
  Mililiter,
  CubicMeter,
  CubicDecimeter,
  CubicCentimeter,
}

impl Unit for Volume {
  fn base(self) -> f64 {
    match self {
      Volume::Kiloliter | Volume::CubicMeter => 1_000_000.0,
      Volume::Liter | Volume::CubicDecimeter => 1_000.0,
      Volume::Desiliter => 100.0,
      Volume::Mililiter | Volume::CubicCentimeter => 1.0,
    }
  }
}

/// Clock durations, based on seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
  Detik,
  Menit,
  Jam,
  Hari,
  Minggu,
}

impl Unit for Clock {
  fn base(self) -> f64 {
    match self {
      Clock::Detik => 1.0,
      Clock::Menit => 60.0,
      Clock::Jam => 3_600.0,
      Clock::Hari => 86_400.0,
      Clock::Minggu => 604_800.0,
    }
  }
}

/// Calendar spans, based on months. Kept apart from `Clock` since a month has
/// no fixed number of days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Calendar {
  Bulan,
  Tahun,
  Windu,
  Dasawarsa,
  Abad,
}

impl Unit for Calendar {
  fn base(self) -> f64 {
    match self {
      Calendar::Bulan => 1.0,
      Calendar::Tahun => 12.0,
      Calendar::Windu => 96.0,
      Calendar::Dasawarsa => 120.0,
      Calendar::Abad => 1_200.0,
    }
  }
}

/// 1 lusin = 12 buah, 1 kodi = 20 buah.
pub const LUSIN: f64 = 12.0;
pub const KODI: f64 = 20.0;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mass_conversions() {
    assert_eq!(convert(1.0, Mass::Kg, Mass::Ons), 10.0);
    assert_eq!(convert(1.0, Mass::Kg, Mass::Gram), 1000.0);
    assert_eq!(convert(1.0, Mass::Ton, Mass::Kg), 1000.0);
    assert_eq!(convert(1.0, Mass::Kuintal, Mass::Kg), 100.0);
    assert_eq!(convert(750.0, Mass::Gram, Mass::Kg), 0.75);
  }

  #[test]
  fn volume_conversions() {
    assert_eq!(convert(2500.0, Volume::Mililiter, Volume::Liter), 2.5);
    assert_eq!(convert(1.0, Volume::CubicDecimeter, Volume::Liter), 1.0);
    assert_eq!(convert(3.0, Volume::CubicMeter, Volume::Liter), 3000.0);
    assert_eq!(convert(40.0, Volume::CubicCentimeter, Volume::Mililiter), 40.0);
  }

  #[test]
  fn time_conversions() {
    assert_eq!(convert_floor(90.0, Clock::Menit, Clock::Jam), 1.0);
    assert_eq!(convert(1.0, Clock::Hari, Clock::Jam), 24.0);
    assert_eq!(convert(1.0, Clock::Minggu, Clock::Hari), 7.0);
    assert_eq!(convert(1.0, Calendar::Windu, Calendar::Tahun), 8.0);
    assert_eq!(convert(1.0, Calendar::Abad, Calendar::Tahun), 100.0);
    assert_eq!(convert(1.0, Calendar::Dasawarsa, Calendar::Tahun), 10.0);
  }
}
