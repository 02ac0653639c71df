//! R-tree nearest-vertex index.
//!
//! [`RouteGraph::nearest_vertex`] scans every vertex, which is fine for a
//! campus but not for a city-wide footway network.  A `SnapIndex` is bulk
//! loaded once from a finished graph and answers the same query in
//! O(log V).  It is a snapshot: rebuild it after mutating the graph.
//!
//! The tree is keyed on a local equirectangular projection (longitude scaled
//! by `cos(lat)`), so planar nearest-neighbour order matches great-circle
//! order closely at walking scale; the final pick among the closest
//! candidates is made with the exact haversine distance.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::{Coordinate, VertexId};

use crate::RouteGraph;

/// Candidates re-ranked by exact distance after the planar search.
const RERANK_CANDIDATES: usize = 4;

#[derive(Clone)]
struct VertexEntry {
    point: [f64; 2], // [lat, lon * cos(ref_lat)]
    coord: Coordinate,
    id:    VertexId,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VertexEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d0 = self.point[0] - point[0];
        let d1 = self.point[1] - point[1];
        d0 * d0 + d1 * d1
    }
}

/// Spatial index over a graph's vertices.
pub struct SnapIndex {
    tree:       RTree<VertexEntry>,
    lon_scale:  f64,
}

impl SnapIndex {
    /// Bulk-load the index from `graph`.
    pub fn build(graph: &RouteGraph) -> Self {
        let n = graph.vertex_count().max(1) as f64;
        let mean_lat = graph.vertices().map(|v| v.coordinate.lat).sum::<f64>() / n;
        let lon_scale = mean_lat.to_radians().cos();

        let entries: Vec<VertexEntry> = graph
            .vertices()
            .map(|v| VertexEntry {
                point: project(v.coordinate, lon_scale),
                coord: v.coordinate,
                id:    v.id,
            })
            .collect();

        Self { tree: RTree::bulk_load(entries), lon_scale }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nearest vertex to `coordinate`; `None` only for an empty graph.
    pub fn nearest_vertex(&self, coordinate: Coordinate) -> Option<VertexId> {
        self.tree
            .nearest_neighbor_iter(&project(coordinate, self.lon_scale))
            .take(RERANK_CANDIDATES)
            .map(|e| (e.coord.distance_m(coordinate), e.id))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    /// Up to `k` vertices nearest to `coordinate`, closest first.
    pub fn k_nearest(&self, coordinate: Coordinate, k: usize) -> Vec<VertexId> {
        self.tree
            .nearest_neighbor_iter(&project(coordinate, self.lon_scale))
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

#[inline]
fn project(c: Coordinate, lon_scale: f64) -> [f64; 2] {
    [c.lat, c.lon * lon_scale]
}
