//! Turn a resolved path into oriented legs for guidance.

use nav_core::{Coordinate, DistanceUnit, VertexId};

use crate::{RouteGraph, SpatialError, SpatialResult};

/// One leg of a resolved route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedSegment {
    pub start: Coordinate,
    pub end: Coordinate,
    /// Length in `unit`.
    pub distance: f64,
    pub unit: DistanceUnit,
    /// Great-circle length in metres.
    pub length_m: f64,
    /// Initial bearing from `start` to `end`, degrees clockwise from north.
    pub bearing_deg: f64,
}

impl OrientedSegment {
    pub fn new(start: Coordinate, end: Coordinate, unit: DistanceUnit) -> Self {
        let length_m = start.distance_m(end);
        Self {
            start,
            end,
            distance: unit.from_meters(length_m),
            unit,
            length_m,
            bearing_deg: start.bearing_deg(end),
        }
    }
}

/// Stateless path → segment conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteAnalyzer {
    pub unit: DistanceUnit,
}

impl RouteAnalyzer {
    pub fn new(unit: DistanceUnit) -> Self {
        Self { unit }
    }

    /// One segment per consecutive vertex pair; empty for paths shorter than
    /// two vertices.
    pub fn analyze(&self, graph: &RouteGraph, path: &[VertexId]) -> SpatialResult<Vec<OrientedSegment>> {
        let coords = path
            .iter()
            .map(|&id| graph.coordinate(id).ok_or(SpatialError::VertexNotFound(id)))
            .collect::<SpatialResult<Vec<_>>>()?;
        Ok(self.analyze_coordinates(&coords))
    }

    pub fn analyze_coordinates(&self, coords: &[Coordinate]) -> Vec<OrientedSegment> {
        coords
            .windows(2)
            .map(|w| OrientedSegment::new(w[0], w[1], self.unit))
            .collect()
    }

    /// Summed length of `segments` in their display unit.
    pub fn total_distance(segments: &[OrientedSegment]) -> f64 {
        segments.iter().map(|s| s.distance).sum()
    }
}
