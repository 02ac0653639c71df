//! `nav-core` — foundational types for the wayfinding workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `Coordinate`, `CanonicalKey`, haversine distance, bearing |
//! | [`angle`]   | Degree normalisation helpers                              |
//! | [`units`]   | `DistanceUnit` (metres / feet)                            |
//! | [`ids`]     | `VertexId`                                                |
//! | [`time`]    | `Timestamp` (caller-supplied monotonic milliseconds)      |
//! | [`error`]   | `NavError`, `NavResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod angle;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{normalize_deg, normalize_signed_deg};
pub use error::{NavError, NavResult};
pub use geo::{CanonicalKey, Coordinate, EARTH_RADIUS_M};
pub use ids::VertexId;
pub use time::Timestamp;
pub use units::{DistanceUnit, FEET_PER_METER};
