//! Degree normalisation.

/// Wrap `deg` into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Wrap `deg` into `(-180, 180]`.
///
/// Used for signed heading differences: positive is clockwise (to the
/// right), negative is counter-clockwise.
#[inline]
pub fn normalize_signed_deg(deg: f64) -> f64 {
    let a = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if a <= -180.0 { a + 360.0 } else { a }
}
