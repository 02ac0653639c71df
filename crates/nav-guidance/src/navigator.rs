//! Route planning facade: snap, route, analyze and load guidance.

use nav_core::Coordinate;
use nav_spatial::{OrientedSegment, Path, RouteAnalyzer, RouteGraph, Router};
use tracing::info;

use crate::{GuidanceConfig, GuidanceError, GuidanceResult, GuidanceStateMachine};

/// A route ready for guidance.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub path: Path,
    pub segments: Vec<OrientedSegment>,
    /// Vertex names (or canonical keys) joined by " → ".
    pub summary: String,
}

impl PlannedRoute {
    /// Route length in the segments' display unit.
    pub fn total_distance(&self) -> f64 {
        RouteAnalyzer::total_distance(&self.segments)
    }
}

/// Wraps a [`Router`] and a [`GuidanceStateMachine`].
///
/// # Type parameter
///
/// `R` must implement [`Router`] (e.g. [`nav_spatial::DijkstraRouter`]).
pub struct Navigator<R: Router> {
    pub router: R,
    pub guidance: GuidanceStateMachine,
    analyzer: RouteAnalyzer,
}

impl<R: Router> Navigator<R> {
    pub fn new(router: R, config: GuidanceConfig) -> Self {
        let analyzer = RouteAnalyzer::new(config.display_unit);
        Self {
            router,
            guidance: GuidanceStateMachine::new(config),
            analyzer,
        }
    }

    /// Plan from the walker's current fix to the point named `destination`
    /// and load the result into guidance.
    ///
    /// Fails with [`GuidanceError::SensorUnavailable`] when there is no fix
    /// yet.  On any error the previously loaded route is left untouched.
    pub fn plan_from_fix(
        &mut self,
        graph:       &RouteGraph,
        fix:         Option<Coordinate>,
        destination: &str,
    ) -> GuidanceResult<PlannedRoute> {
        let fix = fix.ok_or(GuidanceError::SensorUnavailable("location"))?;
        let path = self.router.route_from_fix(graph, fix, destination)?;
        self.load(graph, path)
    }

    /// Plan between two named points and load the result into guidance.
    pub fn plan_by_name(&mut self, graph: &RouteGraph, start: &str, end: &str) -> GuidanceResult<PlannedRoute> {
        let path = self.router.route_by_name(graph, start, end)?;
        self.load(graph, path)
    }

    fn load(&mut self, graph: &RouteGraph, path: Path) -> GuidanceResult<PlannedRoute> {
        let segments = self.analyzer.analyze(graph, &path.vertices)?;
        let summary = graph.describe_path(&path.vertices);
        info!(
            vertices = path.vertices.len(),
            distance_m = path.total_distance_m,
            route = %summary,
            "route planned"
        );
        self.guidance.load_route(segments.clone());
        Ok(PlannedRoute { path, segments, summary })
    }
}
