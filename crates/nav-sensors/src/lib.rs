//! `nav-sensors` — walking-speed estimation and compass smoothing.
//!
//! Both streams are independent of routing: the UI layer consumes them
//! directly for the speed readout and the on-screen direction arrow.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                           |
//! |-------------|--------------------------------------------------------------------|
//! | [`kalman`]  | `KalmanFilter1D` — scalar predict/correct filter                   |
//! | [`speed`]   | `SpeedEstimator`, `SpeedConfig`, `SpeedSnapshot`                   |
//! | [`heading`] | `shortest_rotation`, `HeadingSmoother`, `HeadingReading`, `AlignmentDetector` |

pub mod heading;
pub mod kalman;
pub mod speed;


pub use heading::{Alignment, AlignmentDetector, HeadingReading, HeadingSmoother, shortest_rotation};
pub use kalman::KalmanFilter1D;
pub use speed::{SpeedConfig, SpeedEstimator, SpeedSnapshot};
