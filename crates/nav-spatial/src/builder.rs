//! Populate a [`RouteGraph`] from vector features.
//!
//! # Topology rules
//!
//! - **Polyline**: every position becomes a vertex (shared with any earlier
//!   feature at the exact same coordinate) and is connected to its
//!   predecessor only.  Non-adjacent positions of the same line are never
//!   joined.
//! - **Point**: creates or names a vertex; adds no edges.  A named point
//!   placed exactly on a polyline position is what makes that junction a
//!   routable destination.
//! - Malformed records are skipped and reported in [`BuildReport`].
//!
//! Feeding the same feature set into a fresh builder twice yields the same
//! graph; duplicate features within one pass are harmless because vertex
//! creation and `connect` are both idempotent.

use tracing::{info, warn};

use crate::feature::{Feature, FeatureRecord};
use crate::{FeatureParseError, RouteGraph};

/// Summary of one build pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub features_seen: usize,
    pub polylines: usize,
    pub points: usize,
    /// Records that were skipped, with the reason.
    pub skipped: Vec<FeatureParseError>,
}

impl BuildReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Incremental graph builder.
///
/// ```
/// use nav_core::Coordinate;
/// use nav_spatial::{FeatureRecord, GraphBuilder};
///
/// let features = vec![
///     FeatureRecord::polyline(&[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)]),
///     FeatureRecord::point(Coordinate::new(0.0, 0.0), Some("Gate")),
/// ];
/// let (graph, report) = GraphBuilder::new().build(&features);
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(report.skipped.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph:  RouteGraph,
    report: BuildReport,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of an existing graph.
    pub fn from_graph(graph: RouteGraph) -> Self {
        Self { graph, report: BuildReport::default() }
    }

    /// Validate and apply one record.  A malformed record is recorded in the
    /// report, logged, and returned as `Err`; the graph is left untouched.
    pub fn add_record(&mut self, record: &FeatureRecord) -> Result<(), FeatureParseError> {
        let index = self.report.features_seen;
        self.report.features_seen += 1;

        match Feature::from_record(index, record) {
            Ok(feature) => {
                self.add_feature(&feature);
                Ok(())
            }
            Err(e) => {
                warn!(index = e.index, reason = %e.reason, "skipping malformed feature");
                self.report.skipped.push(e.clone());
                Err(e)
            }
        }
    }

    /// Apply an already validated feature.
    pub fn add_feature(&mut self, feature: &Feature) {
        match feature {
            Feature::Polyline(coords) => {
                self.report.polylines += 1;
                let mut prev = None;
                for &c in coords {
                    let v = self.graph.get_or_create_vertex(c, None);
                    if let Some(p) = prev {
                        self.graph.connect(p, v);
                    }
                    prev = Some(v);
                }
            }
            Feature::Point { coordinate, name } => {
                self.report.points += 1;
                self.graph.get_or_create_vertex(*coordinate, name.as_deref());
            }
        }
    }

    /// Apply every record in order, then finish.
    pub fn build(mut self, records: &[FeatureRecord]) -> (RouteGraph, BuildReport) {
        for record in records {
            // Skips are already captured in the report.
            let _ = self.add_record(record);
        }
        self.finish()
    }

    /// Consume the builder and return the graph with its report.
    pub fn finish(self) -> (RouteGraph, BuildReport) {
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            named = self.graph.named_vertices().count(),
            skipped = self.report.skipped.len(),
            "route graph built"
        );
        (self.graph, self.report)
    }
}
