//! Geographic coordinate type, canonical vertex keys, and great-circle
//! distance / bearing.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Vertex identity is exact
//! float equality on both components, so the full double precision of the
//! source geometry is kept; the canonical key is derived from the same bits.
//!
//! `distance_m` and `bearing_deg` share the spherical model (mean Earth
//! radius, great circle) so turn decisions and directional display agree.

use std::fmt;

use crate::{NavError, NavResult};

/// IUGG mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a GeoJSON-ordered `[lon, lat]` pair.
    #[inline]
    pub const fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self { lat: pair[1], lon: pair[0] }
    }

    /// Construct a coordinate, rejecting NaN / infinite components.
    pub fn try_new(lat: f64, lon: f64) -> NavResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(NavError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Canonical lookup key for this coordinate.
    ///
    /// Two coordinates produce the same key iff they compare equal with
    /// `==` (negative zero is folded into positive zero first).
    pub fn key(&self) -> CanonicalKey {
        CanonicalKey(format!("{},{}", self.lat + 0.0, self.lon + 0.0))
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Agrees with an ellipsoidal geodesic to within ~0.5 %, i.e. well under
    /// GPS noise for the sub-kilometre legs of a walking route.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing from `self` to `other`, degrees clockwise
    /// from true north in `[0, 360)`.
    ///
    /// Returns `0.0` for identical points.
    pub fn bearing_deg(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        crate::normalize_deg(y.atan2(x).to_degrees())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── CanonicalKey ──────────────────────────────────────────────────────────────

/// Deterministic string identity of a [`Coordinate`].
///
/// Uses Rust's shortest round-trip float formatting, so distinct `f64`
/// values never collide and the key doubles as a readable fallback label
/// for unnamed vertices.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Coordinate> for CanonicalKey {
    fn from(c: Coordinate) -> Self {
        c.key()
    }
}
