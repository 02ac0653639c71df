//! Compass heading smoothing and target alignment.
//!
//! A displayed direction arrow is animated from its current angle to each
//! new target.  Interpolating naively from 359° to 1° would spin the arrow
//! the long way round; [`shortest_rotation`] instead returns an unwrapped
//! target (here 361°) so the animation always takes the short arc.

use nav_core::normalize_deg;

/// Unwrapped angle reached by rotating from `from` towards `to` the short
/// way.
///
/// The result differs from `from` by at most 180° and is congruent to `to`
/// modulo 360°.  `from` may be any accumulated (unnormalised) angle.
///
/// ```
/// use nav_sensors::shortest_rotation;
/// assert_eq!(shortest_rotation(350.0, 10.0), 370.0);
/// assert_eq!(shortest_rotation(10.0, 350.0), -10.0);
/// ```
#[inline]
pub fn shortest_rotation(from: f64, to: f64) -> f64 {
    let delta = (to - from + 540.0).rem_euclid(360.0) - 180.0;
    from + delta
}

/// Continuous display angle for a direction indicator.
#[derive(Clone, Debug, Default)]
pub struct HeadingSmoother {
    displayed: f64,
}

impl HeadingSmoother {
    pub fn new(initial_deg: f64) -> Self {
        Self { displayed: initial_deg }
    }

    /// Move towards `target_deg` and return the new unwrapped angle.
    pub fn update(&mut self, target_deg: f64) -> f64 {
        self.displayed = shortest_rotation(self.displayed, target_deg);
        self.displayed
    }

    /// Unwrapped angle, suitable for feeding an animation.
    #[inline]
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Displayed angle folded into `[0, 360)`.
    #[inline]
    pub fn displayed_normalized(&self) -> f64 {
        normalize_deg(self.displayed)
    }
}

/// Raw compass reading.  Platforms report a negative heading when that
/// reference is unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingReading {
    pub true_heading: f64,
    pub magnetic_heading: f64,
}

impl HeadingReading {
    /// True heading when valid, else magnetic, else `None`.
    pub fn best(&self) -> Option<f64> {
        if self.true_heading >= 0.0 {
            Some(self.true_heading)
        } else if self.magnetic_heading >= 0.0 {
            Some(self.magnetic_heading)
        } else {
            None
        }
    }
}

/// Result of one [`AlignmentDetector::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    /// Target bearing relative to the heading, `[0, 360)`, clockwise.
    pub relative_deg: f64,
    pub aligned: bool,
    /// `true` only on the update that entered the aligned band.
    pub cue: bool,
}

/// Detects when the walker faces a target bearing, for a one-shot haptic
/// cue.  Re-arms once the heading leaves the band.
#[derive(Clone, Debug)]
pub struct AlignmentDetector {
    tolerance_deg: f64,
    armed: bool,
}

impl AlignmentDetector {
    pub const DEFAULT_TOLERANCE_DEG: f64 = 2.0;

    pub fn new(tolerance_deg: f64) -> Self {
        Self { tolerance_deg, armed: true }
    }

    pub fn update(&mut self, heading_deg: f64, target_bearing_deg: f64) -> Alignment {
        let relative_deg = normalize_deg(target_bearing_deg - heading_deg);
        let aligned =
            relative_deg < self.tolerance_deg || (360.0 - relative_deg) < self.tolerance_deg;

        let cue = aligned && self.armed;
        self.armed = !aligned;

        Alignment { relative_deg, aligned, cue }
    }
}

impl Default for AlignmentDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE_DEG)
    }
}
