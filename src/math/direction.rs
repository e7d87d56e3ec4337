//! Direction vectors from horizontal sky coordinates.
//!
//! Vectors are `glam::DVec3` in a local east-north-up frame: `x` points
//! east, `y` north, `z` up. Subtraction, scaling, length, dot product and
//! normalization come straight from glam; normalizing a zero vector yields
//! non-finite components, so callers must only normalize non-zero input.

use crate::core::types::DVec3;

/// Unit vector pointing at a body with the given altitude and azimuth
/// (degrees). Azimuth 0 is +y (north), 90 is +x (east).
pub fn from_alt_azi(altitude: f64, azimuth: f64) -> DVec3 {
    let altitude = altitude.to_radians();
    let azimuth = azimuth.to_radians();
    let horizontal = altitude.cos();
    DVec3::new(
        horizontal * azimuth.sin(),
        horizontal * azimuth.cos(),
        altitude.sin(),
    )
}

/// Cosine of the angle between `a` and `b`.
pub fn cos_angle(a: DVec3, b: DVec3) -> f64 {
    a.dot(b) / (a.length() * b.length())
}
