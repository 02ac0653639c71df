//! `nav-guidance` — turn-by-turn guidance from live position and heading.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                         |
//! |-----------------|------------------------------------------------------------------|
//! | [`config`]      | `GuidanceConfig` — proximity threshold, deadband, cooldown, unit |
//! | [`instruction`] | `Instruction`, `classify_turn`, `InstructionSink`, `NoopSink`    |
//! | [`machine`]     | `GuidanceStateMachine`, `GuidanceState`, `GuidanceUpdate`        |
//! | [`sample`]      | `SensorSample` — inbound position / heading stream               |
//! | [`navigator`]   | `Navigator<R>` — route, analyze and load in one call             |
//! | [`error`]       | `GuidanceError`, `GuidanceResult<T>`                             |
//!
//! # Guidance model
//!
//! 1. A route is loaded as a sequence of
//!    [`OrientedSegment`](nav_spatial::OrientedSegment)s; the machine enters
//!    `Tracking(0)`.
//! 2. Every position sample reports the distance to the current segment's
//!    end.  Within the proximity threshold the walker has reached that
//!    vertex: the next segment's bearing is compared with the latest compass
//!    heading to choose *turn right*, *turn left* or *continue straight*,
//!    and tracking advances.
//! 3. Reaching the end of the last segment enters `Arrived`.
//!
//! The machine is driven through `&mut self`; callers serialize sensor
//! delivery onto one update path.

pub mod config;
pub mod error;
pub mod instruction;
pub mod machine;
pub mod navigator;
pub mod sample;

#[cfg(test)]
mod tests;

pub use config::GuidanceConfig;
pub use error::{GuidanceError, GuidanceResult};
pub use instruction::{Instruction, InstructionSink, NoopSink, classify_turn};
pub use machine::{GuidanceState, GuidanceStateMachine, GuidanceUpdate};
pub use navigator::{Navigator, PlannedRoute};
pub use sample::SensorSample;
