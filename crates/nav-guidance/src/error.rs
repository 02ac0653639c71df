use nav_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuidanceError {
    /// No fix yet from the named sensor ("location", "heading").
    #[error("{0} sensor has not reported yet")]
    SensorUnavailable(&'static str),

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type GuidanceResult<T> = Result<T, GuidanceError>;
