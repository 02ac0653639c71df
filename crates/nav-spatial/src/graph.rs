//! Undirected walkway graph.
//!
//! # Data layout
//!
//! Vertices live in an arena (`Vec<Vertex>`) addressed by [`VertexId`], with
//! a `CanonicalKey -> VertexId` map for coordinate lookup.  Edges are
//! implicit: each vertex holds a neighbor list of ids, and every connection
//! is inserted on both ends, so the mutual-reference structure of a walkway
//! network needs no shared ownership.
//!
//! Edges carry no weight.  Routers compute great-circle lengths on demand
//! from the endpoint coordinates.
//!
//! # Invariants
//!
//! - `index[v.key] == v.id` for every vertex `v`; no vertex exists outside
//!   the map.
//! - `b ∈ neighbors(a)` ⇔ `a ∈ neighbors(b)`; no duplicates, no self-loops.

use rustc_hash::FxHashMap;

use nav_core::{CanonicalKey, Coordinate, VertexId};

// ── Vertex ────────────────────────────────────────────────────────────────────

/// A uniquely located point in the walkway graph, optionally named.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub coordinate: Coordinate,
    pub key: CanonicalKey,
    /// Human-readable destination name (building entrance, landmark, …).
    pub name: Option<String>,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    /// Adjacent vertices in the order their edges were created.
    #[inline]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Owns every vertex of the walkway network.
///
/// Mutation takes `&mut self` and search takes `&self`, so a graph cannot be
/// modified while a route is being computed over it.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    vertices: Vec<Vertex>,
    index: FxHashMap<CanonicalKey, VertexId>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Return the vertex at `coordinate`, creating it if absent.
    ///
    /// A non-empty `name` overwrites any existing name; `None` or `""` never
    /// clears one.
    pub fn get_or_create_vertex(&mut self, coordinate: Coordinate, name: Option<&str>) -> VertexId {
        let name = name.filter(|n| !n.is_empty());
        let key = coordinate.key();

        if let Some(&id) = self.index.get(&key) {
            if let Some(n) = name {
                self.vertices[id.index()].name = Some(n.to_owned());
            }
            return id;
        }

        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            id,
            coordinate,
            key: key.clone(),
            name: name.map(str::to_owned),
            neighbors: Vec::new(),
        });
        self.index.insert(key, id);
        id
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// Idempotent.  `connect(v, v)` is a no-op.
    ///
    /// # Panics
    /// Panics if either id does not belong to this graph.
    pub fn connect(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        if !self.vertices[a.index()].neighbors.contains(&b) {
            self.vertices[a.index()].neighbors.push(b);
        }
        if !self.vertices[b.index()].neighbors.contains(&a) {
            self.vertices[b.index()].neighbors.push(a);
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    #[inline]
    pub fn coordinate(&self, id: VertexId) -> Option<Coordinate> {
        self.vertex(id).map(|v| v.coordinate)
    }

    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::neighbors).unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Exact-key lookup; no tolerance is applied.
    pub fn vertex_at(&self, coordinate: Coordinate) -> Option<VertexId> {
        self.index.get(&coordinate.key()).copied()
    }

    /// First vertex (lowest id) carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|v| v.name.as_deref() == Some(name))
            .map(|v| v.id)
    }

    /// All named vertices, in creation order.  This is the destination list
    /// offered to the walker.
    pub fn named_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter().filter(|v| v.name.is_some())
    }

    /// Vertex name, or its canonical key when unnamed.
    pub fn display_name(&self, id: VertexId) -> String {
        match self.vertex(id) {
            Some(Vertex { name: Some(n), .. }) => n.clone(),
            Some(v) => v.key.to_string(),
            None => id.to_string(),
        }
    }

    /// One-line route summary, e.g. `"Library → 19.3321,-99.187 → Cafeteria"`.
    pub fn describe_path(&self, path: &[VertexId]) -> String {
        path.iter()
            .map(|&id| self.display_name(id))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest vertex to `coordinate` by great-circle distance.
    ///
    /// Linear O(V) scan; ties go to the lowest id.  Returns `None` only if the
    /// graph is empty.  Campus graphs hold tens to low thousands of vertices,
    /// so a scan per GPS fix is cheap; for larger graphs build a
    /// [`SnapIndex`](crate::SnapIndex) once and query that instead.
    pub fn nearest_vertex(&self, coordinate: Coordinate) -> Option<VertexId> {
        let mut best: Option<(f64, VertexId)> = None;
        for v in &self.vertices {
            let d = v.coordinate.distance_m(coordinate);
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, v.id));
            }
        }
        best.map(|(_, id)| id)
    }
}
