//! `nav-spatial` — walkway graph, feature ingestion, routing and analysis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`graph`]    | `RouteGraph` (vertex arena + key map), `Vertex`                |
//! | [`feature`]  | `FeatureRecord`, `Feature`, CSV / GeoJSON loaders              |
//! | [`builder`]  | `GraphBuilder`, `BuildReport`                                  |
//! | [`router`]   | `Router` trait, `Path`, `DijkstraRouter`                       |
//! | [`analyzer`] | `RouteAnalyzer`, `OrientedSegment`                             |
//! | [`snap`]     | `SnapIndex` — R-tree nearest-vertex lookup for large graphs    |
//! | [`error`]    | `SpatialError`, `FeatureParseError`, `SpatialResult<T>`        |
//!
//! # Data flow
//!
//! ```text
//! FeatureRecord* ─► GraphBuilder ─► RouteGraph ─► Router ─► Path ─► RouteAnalyzer ─► OrientedSegment*
//! ```
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `geojson` | Enables `load_features_geojson_str` (on by default).        |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `nav-core` types.      |

pub mod analyzer;
pub mod builder;
pub mod error;
pub mod feature;
pub mod graph;
pub mod router;
pub mod snap;


pub use analyzer::{OrientedSegment, RouteAnalyzer};
pub use builder::{BuildReport, GraphBuilder};
pub use error::{FeatureParseError, SpatialError, SpatialResult};
pub use feature::{Feature, FeatureRecord, load_features_csv, load_features_reader};
#[cfg(feature = "geojson")]
pub use feature::{load_features_geojson_str, path_to_geojson};
pub use graph::{RouteGraph, Vertex};
pub use router::{DijkstraRouter, Path, Router};
pub use snap::SnapIndex;
