//! Plane and solid geometry formulas for the `up` mode. π is taken as 3.14,
//! and results involving π (or a division by three) are rounded to the
//! nearest integer.

pub const PI: f64 = 3.14;

fn round(x: f64) -> f64 {
  x.round()
}

pub fn square_perimeter(side: f64) -> f64 {
  4.0 * side
}

pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
  2.0 * (length + width)
}

pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> f64 {
  a + b + c
}

pub fn circle_circumference_radius(r: f64) -> f64 {
  round(2.0 * PI * r)
}

pub fn circle_circumference_diameter(d: f64) -> f64 {
  round(PI * d)
}

pub fn square_area(side: f64) -> f64 {
  side * side
}

pub fn rectangle_area(length: f64, width: f64) -> f64 {
  length * width
}

pub fn triangle_area(base: f64, height: f64) -> f64 {
  base * height / 2.0
}

pub fn parallelogram_area(base: f64, height: f64) -> f64 {
  base * height
}

pub fn trapezoid_area(a: f64, b: f64, height: f64) -> f64 {
  (a + b) * height / 2.0
}

pub fn circle_area(r: f64) -> f64 {
  round(PI * r * r)
}

pub fn cube_volume(side: f64) -> f64 {
  side * side * side
}

pub fn prism_volume(length: f64, width: f64, height: f64) -> f64 {
  length * width * height
}

pub fn cylinder_volume(r: f64, h: f64) -> f64 {
  round(PI * r * r * h)
}

/// Square-based pyramid.
pub fn pyramid_volume(base_side: f64, h: f64) -> f64 {
  round(base_side * base_side * h / 3.0)
}

pub fn cube_surface(side: f64) -> f64 {
  6.0 * side * side
}

pub fn prism_surface(length: f64, width: f64, height: f64) -> f64 {
  2.0 * (length * width + length * height + width * height)
}

pub fn sphere_surface(r: f64) -> f64 {
  round(4.0 * PI * r * r)
}

pub fn cylinder_surface(r: f64, h: f64) -> f64 {
  round(2.0 * PI * r * (r + h))
}

/// Lateral area of a cone with slant height `s`.
pub fn cone_lateral(r: f64, s: f64) -> f64 {
  round(PI * r * s)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn perimeters() {
    assert_eq!(square_perimeter(5.0), 20.0);
    assert_eq!(rectangle_perimeter(6.0, 4.0), 20.0);
    assert_eq!(triangle_perimeter(3.0, 4.0, 5.0), 12.0);
    assert_eq!(circle_circumference_radius(7.0), 44.0);
    assert_eq!(circle_circumference_diameter(10.0), 31.0);
  }

  #[test]
  fn volumes() {
    assert_eq!(cube_volume(3.0), 27.0);
    assert_eq!(prism_volume(2.0, 3.0, 4.0), 24.0);
    assert_eq!(cylinder_volume(2.0, 5.0), 63.0);
    assert_eq!(pyramid_volume(6.0, 10.0), 120.0);
  }

  #[test]
  fn surfaces() {
    assert_eq!(cube_surface(2.0), 24.0);
    assert_eq!(prism_surface(2.0, 3.0, 4.0), 52.0);
    assert_eq!(sphere_surface(3.0), 113.0);
    assert_eq!(cylinder_surface(1.0, 1.0), 13.0);
    assert_eq!(cone_lateral(3.0, 5.0), 47.0);
  }

  #[test]
  fn areas() {
    assert_eq!(triangle_area(6.0, 4.0), 12.0);
    assert_eq!(trapezoid_area(4.0, 6.0, 2.0), 10.0);
    assert_eq!(circle_area(10.0), 314.0);
  }
}
