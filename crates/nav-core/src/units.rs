//! Display units for distances shown or spoken to the walker.

use std::fmt;

/// Feet per metre.
pub const FEET_PER_METER: f64 = 3.28084;

/// Unit used for segment lengths and "distance remaining" readouts.
///
/// Proximity thresholds are always compared in metres; only the value
/// handed to the UI is converted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceUnit {
    Meters,
    #[default]
    Feet,
}

impl DistanceUnit {
    #[inline]
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meters => meters,
            DistanceUnit::Feet => meters * FEET_PER_METER,
        }
    }

    #[inline]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Feet => value / FEET_PER_METER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
