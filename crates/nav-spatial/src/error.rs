//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::{NavError, VertexId};

/// A feature record that could not be turned into graph geometry.
///
/// Recorded and skipped by [`GraphBuilder`](crate::GraphBuilder); never fatal
/// to a build.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("feature #{index}: {reason}")]
pub struct FeatureParseError {
    /// Position of the record in the input sequence.
    pub index: usize,
    pub reason: String,
}

impl FeatureParseError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self { index, reason: reason.into() }
    }
}

/// Errors produced by `nav-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("malformed feature: {0}")]
    FeatureParse(#[from] FeatureParseError),

    #[error("no point named {0:?} in the graph")]
    PointNotFound(String),

    #[error("graph has no vertices")]
    GraphEmpty,

    #[error("no route from {from} to {to}")]
    NoRouteFound { from: VertexId, to: VertexId },

    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("feature source parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] NavError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
