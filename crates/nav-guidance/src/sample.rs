//! Inbound sensor stream.
//!
//! Location and compass providers deliver on their own schedules; callers
//! funnel both through [`GuidanceStateMachine::apply`] so the machine sees
//! one ordered sequence.

use nav_core::{Coordinate, Timestamp};

use crate::{GuidanceStateMachine, GuidanceUpdate, InstructionSink};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SensorSample {
    Position { coordinate: Coordinate, at: Timestamp },
    /// Compass heading in degrees clockwise from north.
    Heading { degrees: f64, at: Timestamp },
}

impl SensorSample {
    pub fn at(&self) -> Timestamp {
        match *self {
            SensorSample::Position { at, .. } | SensorSample::Heading { at, .. } => at,
        }
    }
}

impl GuidanceStateMachine {
    /// Feed one sample and forward any output to `sink`.
    ///
    /// Heading samples never produce output.  Position samples report the
    /// distance remaining, then any instruction, then arrival.
    pub fn apply<S: InstructionSink + ?Sized>(&mut self, sample: SensorSample, sink: &mut S) -> Option<GuidanceUpdate> {
        match sample {
            SensorSample::Heading { degrees, at } => {
                self.on_heading_update(degrees, at);
                None
            }
            SensorSample::Position { coordinate, at } => {
                let update = self.on_position_update(coordinate, at)?;
                sink.on_distance_remaining(update.distance_remaining, update.unit);
                if let Some(instruction) = update.instruction {
                    sink.on_instruction(instruction);
                }
                if update.arrived() {
                    sink.on_arrived();
                }
                Some(update)
            }
        }
    }
}
