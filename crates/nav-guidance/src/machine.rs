//! Segment-tracking guidance state machine.

use nav_core::{Coordinate, DistanceUnit, Timestamp, normalize_deg};
use nav_spatial::OrientedSegment;
use tracing::{debug, info, warn};

use crate::{GuidanceConfig, GuidanceError, GuidanceResult, Instruction, classify_turn};

/// Where the walker is along the loaded route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuidanceState {
    /// No route loaded.
    Idle,
    /// Walking segment `segment` of the loaded route.
    Tracking { segment: usize },
    /// Terminal until the next `load_route`.
    Arrived,
}

/// Result of processing one position sample.
#[derive(Clone, Debug, PartialEq)]
pub struct GuidanceUpdate {
    /// Distance to the end of the segment being tracked when the sample
    /// arrived, in `unit`.
    pub distance_remaining: f64,
    pub unit: DistanceUnit,
    /// Instruction to announce, already de-duplicated.
    pub instruction: Option<Instruction>,
    /// The sample reached the current segment's end vertex.
    pub advanced: bool,
    /// A turn decision was due but no heading had been reported.
    pub heading_unavailable: bool,
    /// State after the sample was applied.
    pub state: GuidanceState,
}

impl GuidanceUpdate {
    pub fn arrived(&self) -> bool {
        self.state == GuidanceState::Arrived
    }
}

/// Tracks progress along a list of [`OrientedSegment`]s and decides turn
/// instructions at each intermediate vertex.
///
/// The segment index only moves forward.  Position samples older than the
/// last accepted one are dropped.
#[derive(Debug, Clone)]
pub struct GuidanceStateMachine {
    config: GuidanceConfig,
    segments: Vec<OrientedSegment>,
    state: GuidanceState,
    heading: Option<(f64, Timestamp)>,
    last_position_at: Option<Timestamp>,
    last_instruction: Option<(Instruction, Timestamp)>,
}

impl GuidanceStateMachine {
    pub fn new(config: GuidanceConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            state: GuidanceState::Idle,
            heading: None,
            last_position_at: None,
            last_instruction: None,
        }
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    pub fn state(&self) -> GuidanceState {
        self.state
    }

    pub fn segments(&self) -> &[OrientedSegment] {
        &self.segments
    }

    /// The segment currently being walked, if tracking.
    pub fn current_segment(&self) -> Option<&OrientedSegment> {
        match self.state {
            GuidanceState::Tracking { segment } => self.segments.get(segment),
            _ => None,
        }
    }

    /// Latest compass heading in `[0, 360)`.
    pub fn heading(&self) -> Option<f64> {
        self.heading.map(|(deg, _)| deg)
    }

    /// Most recently emitted instruction.
    pub fn last_instruction(&self) -> Option<Instruction> {
        self.last_instruction.map(|(instruction, _)| instruction)
    }

    /// Replace the active route and start tracking its first segment.
    ///
    /// An empty route is already complete.  Instruction history and the
    /// position clock are cleared; the last heading is kept since it is a
    /// property of the walker, not the route.
    pub fn load_route(&mut self, segments: Vec<OrientedSegment>) {
        self.state = if segments.is_empty() {
            GuidanceState::Arrived
        } else {
            GuidanceState::Tracking { segment: 0 }
        };
        debug!(segments = segments.len(), state = ?self.state, "route loaded");
        self.segments = segments;
        self.last_position_at = None;
        self.last_instruction = None;
    }

    /// Drop the route and return to `Idle`.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.state = GuidanceState::Idle;
        self.last_position_at = None;
        self.last_instruction = None;
    }

    /// Record the latest compass heading.  Stale readings are ignored.
    pub fn on_heading_update(&mut self, heading_deg: f64, at: Timestamp) {
        if !heading_deg.is_finite() {
            return;
        }
        if self.heading.is_some_and(|(_, last)| at < last) {
            return;
        }
        self.heading = Some((normalize_deg(heading_deg), at));
    }

    /// Process one position sample.
    ///
    /// Returns `None` when no route is being tracked or the sample is older
    /// than the last accepted position.
    pub fn on_position_update(&mut self, position: Coordinate, at: Timestamp) -> Option<GuidanceUpdate> {
        let GuidanceState::Tracking { segment } = self.state else {
            return None;
        };
        if self.last_position_at.is_some_and(|last| at < last) {
            debug!(%at, "dropping out-of-order position sample");
            return None;
        }
        self.last_position_at = Some(at);

        let target = self.segments[segment].end;
        let distance_m = position.distance_m(target);
        let unit = self.config.display_unit;

        let mut update = GuidanceUpdate {
            distance_remaining: unit.from_meters(distance_m),
            unit,
            instruction: None,
            advanced: false,
            heading_unavailable: false,
            state: self.state,
        };

        if distance_m < self.config.proximity_threshold_m {
            update.advanced = true;
            if segment + 1 < self.segments.len() {
                match self.on_arrival_at_vertex(self.heading(), at) {
                    Ok(instruction) => update.instruction = instruction,
                    Err(err) => {
                        warn!(%err, segment, "no turn decision at vertex");
                        update.heading_unavailable = true;
                    }
                }
                self.state = GuidanceState::Tracking { segment: segment + 1 };
            } else {
                info!(%at, "arrived at destination");
                self.state = GuidanceState::Arrived;
            }
        }

        update.state = self.state;
        Some(update)
    }

    /// Decide the instruction for leaving the current segment's end vertex
    /// onto the next segment.
    ///
    /// Returns `Ok(None)` when there is no next segment or when the decision
    /// repeats the last emitted instruction inside the cooldown window.
    /// Does not advance the segment index.
    pub fn on_arrival_at_vertex(
        &mut self,
        heading_deg: Option<f64>,
        at: Timestamp,
    ) -> GuidanceResult<Option<Instruction>> {
        let GuidanceState::Tracking { segment } = self.state else {
            return Ok(None);
        };
        let Some(bearing) = self.segments.get(segment + 1).map(|next| next.bearing_deg) else {
            return Ok(None);
        };
        let heading = heading_deg.ok_or(GuidanceError::SensorUnavailable("heading"))?;

        let instruction = classify_turn(bearing, heading, self.config.turn_deadband_deg);
        if !self.should_emit(instruction, at) {
            debug!(%instruction, %at, "suppressing repeated instruction");
            return Ok(None);
        }
        self.last_instruction = Some((instruction, at));
        info!(%instruction, segment = segment + 1, bearing, heading, "instruction");
        Ok(Some(instruction))
    }

    fn should_emit(&self, instruction: Instruction, at: Timestamp) -> bool {
        match self.last_instruction {
            None => true,
            Some((last, last_at)) => last != instruction || at.since(last_at) >= self.config.cooldown(),
        }
    }
}

impl Default for GuidanceStateMachine {
    fn default() -> Self {
        Self::new(GuidanceConfig::default())
    }
}
