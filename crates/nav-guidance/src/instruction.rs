//! Turn instructions and the outbound sink they are delivered to.

use std::fmt;

use nav_core::{DistanceUnit, normalize_signed_deg};

/// A spoken / displayed turn instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    TurnRight,
    TurnLeft,
    ContinueStraight,
}

impl Instruction {
    pub fn as_str(self) -> &'static str {
        match self {
            Instruction::TurnRight => "turn right",
            Instruction::TurnLeft => "turn left",
            Instruction::ContinueStraight => "continue straight",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choose the instruction for walking onto a leg with bearing
/// `next_bearing_deg` while facing `heading_deg`.
///
/// The signed difference is normalised to `(-180, 180]`; beyond
/// `+deadband_deg` is a right turn, below `-deadband_deg` a left turn, and
/// anything within the band (inclusive) is straight on.
pub fn classify_turn(next_bearing_deg: f64, heading_deg: f64, deadband_deg: f64) -> Instruction {
    let diff = normalize_signed_deg(next_bearing_deg - heading_deg);
    if diff > deadband_deg {
        Instruction::TurnRight
    } else if diff < -deadband_deg {
        Instruction::TurnLeft
    } else {
        Instruction::ContinueStraight
    }
}

/// Receives guidance output.  Speech, haptics and on-screen text live
/// behind this trait.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.
pub trait InstructionSink {
    /// A new (de-duplicated) instruction should be announced.
    fn on_instruction(&mut self, _instruction: Instruction) {}

    /// Distance to the next vertex, refreshed on every position sample.
    fn on_distance_remaining(&mut self, _distance: f64, _unit: DistanceUnit) {}

    /// The walker reached the end of the route.
    fn on_arrived(&mut self) {}
}

/// An [`InstructionSink`] that discards everything.
pub struct NoopSink;

impl InstructionSink for NoopSink {}
