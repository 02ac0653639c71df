//! Guidance tuning.

use std::time::Duration;

use nav_core::DistanceUnit;

/// Guidance configuration.
///
/// Typically loaded from a JSON file by the application and handed to
/// [`GuidanceStateMachine::new`](crate::GuidanceStateMachine::new).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuidanceConfig {
    /// A segment endpoint counts as reached once the walker is closer than
    /// this, in metres.  Default: 8.
    pub proximity_threshold_m: f64,

    /// Heading/bearing differences within ±this many degrees are "continue
    /// straight".  Default: 30.
    pub turn_deadband_deg: f64,

    /// A repeated instruction is suppressed until this long after it was
    /// last emitted.  Default: 8000 ms.
    pub cooldown_ms: u64,

    /// Unit for distance-remaining readouts and segment lengths.
    pub display_unit: DistanceUnit,
}

impl GuidanceConfig {
    #[inline]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_m: 8.0,
            turn_deadband_deg:     30.0,
            cooldown_ms:           8_000,
            display_unit:          DistanceUnit::Feet,
        }
    }
}
