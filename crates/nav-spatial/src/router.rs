//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Guidance calls routing via the [`Router`] trait, so applications can swap
//! in A* or an accessibility-weighted search without touching the guidance
//! layer.  The name- and GPS-based entry points are provided methods, so a
//! custom router only implements vertex-to-vertex search.
//!
//! # Cost units
//!
//! Costs are great-circle metres, computed per edge when the edge is relaxed
//! (the graph stores no weights).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use nav_core::{Coordinate, VertexId};

use crate::{RouteGraph, SpatialError, SpatialResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Vertices to visit in order, start first, end last.  Never empty.
    pub vertices: Vec<VertexId>,
    /// Sum of great-circle leg lengths in metres.
    pub total_distance_m: f64,
}

impl Path {
    pub fn start(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn end(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// `true` if start and end are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine over a [`RouteGraph`].
pub trait Router {
    /// Shortest path from `from` to `to`.
    ///
    /// `from == to` yields a single-vertex path of length zero.  Fails with
    /// [`SpatialError::NoRouteFound`] when the two lie in different
    /// components and [`SpatialError::VertexNotFound`] for foreign ids.
    fn route(&self, graph: &RouteGraph, from: VertexId, to: VertexId) -> SpatialResult<Path>;

    /// Route between two named points.
    fn route_by_name(&self, graph: &RouteGraph, start: &str, end: &str) -> SpatialResult<Path> {
        let from = graph
            .find_by_name(start)
            .ok_or_else(|| SpatialError::PointNotFound(start.to_owned()))?;
        let to = graph
            .find_by_name(end)
            .ok_or_else(|| SpatialError::PointNotFound(end.to_owned()))?;
        self.route(graph, from, to)
    }

    /// Route from a live GPS fix to a named destination, snapping the fix
    /// to the nearest vertex first.
    fn route_from_fix(&self, graph: &RouteGraph, fix: Coordinate, end: &str) -> SpatialResult<Path> {
        let from = graph.nearest_vertex(fix).ok_or(SpatialError::GraphEmpty)?;
        let to = graph
            .find_by_name(end)
            .ok_or_else(|| SpatialError::PointNotFound(end.to_owned()))?;
        debug!(%fix, snapped = %graph.display_name(from), "snapped GPS fix to graph");
        self.route(graph, from, to)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra with a binary heap.
///
/// Among unvisited vertices with equal tentative distance the lowest
/// [`VertexId`] is settled first, so results are reproducible for a given
/// feature order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RouteGraph, from: VertexId, to: VertexId) -> SpatialResult<Path> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, then the smallest id.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost:   f64,
    vertex: VertexId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Great-circle length of the edge `a`–`b`.
#[inline]
fn edge_cost_m(graph: &RouteGraph, a: VertexId, b: VertexId) -> f64 {
    match (graph.coordinate(a), graph.coordinate(b)) {
        (Some(ca), Some(cb)) => ca.distance_m(cb),
        _ => f64::INFINITY,
    }
}

fn dijkstra(graph: &RouteGraph, from: VertexId, to: VertexId) -> SpatialResult<Path> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(SpatialError::VertexNotFound(id));
        }
    }
    if from == to {
        return Ok(Path { vertices: vec![from], total_distance_m: 0.0 });
    }

    let n = graph.vertex_count();
    // dist[v] = best known distance (m) to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![None::<VertexId>; n];
    let mut settled = vec![false; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, vertex: from });

    while let Some(State { cost, vertex }) = heap.pop() {
        if settled[vertex.index()] {
            continue;
        }
        settled[vertex.index()] = true;

        if vertex == to {
            let path = reconstruct(&prev, from, to, cost);
            debug!(
                hops = path.vertices.len() - 1,
                distance_m = path.total_distance_m,
                "route found"
            );
            return Ok(path);
        }

        for &neighbor in graph.neighbors(vertex) {
            if settled[neighbor.index()] {
                continue;
            }
            let tentative = cost + edge_cost_m(graph, vertex, neighbor);
            if tentative < dist[neighbor.index()] {
                dist[neighbor.index()] = tentative;
                prev[neighbor.index()] = Some(vertex);
                heap.push(State { cost: tentative, vertex: neighbor });
            }
        }
    }

    Err(SpatialError::NoRouteFound { from, to })
}

fn reconstruct(prev: &[Option<VertexId>], from: VertexId, to: VertexId, total_m: f64) -> Path {
    let mut vertices = vec![to];
    let mut cur = to;
    while cur != from {
        match prev[cur.index()] {
            Some(p) => {
                vertices.push(p);
                cur = p;
            }
            None => break,
        }
    }
    vertices.reverse();
    Path { vertices, total_distance_m: total_m }
}
