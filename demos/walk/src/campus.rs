//! Synthetic campus walkway network.
//!
//! ```text
//!   Hall (30.6912,-88.1806) ────────────── Cafe (30.6912,-88.1793)
//!          \                                     |
//!           Quad (30.6905,-88.1800) ──── Library (30.6905,-88.1793)
//!            |
//!           Gate (30.6900,-88.1800)
//! ```
//!
//! Gate → Cafe walks north, turns right at the quad, then left at the
//! library.  The path via Hall is the longer way round.

use nav_core::Coordinate;

/// Where the simulated walker stands before requesting a route.
pub const START: Coordinate = Coordinate { lat: 30.69001, lon: -88.18002 };

pub const CAMPUS_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "kind": "walkway" },
      "geometry": {
        "type": "LineString",
        "coordinates": [[-88.1800, 30.6900], [-88.1800, 30.6905], [-88.1806, 30.6912]]
      }
    },
    {
      "type": "Feature",
      "properties": { "kind": "walkway" },
      "geometry": {
        "type": "LineString",
        "coordinates": [[-88.1800, 30.6905], [-88.1793, 30.6905], [-88.1793, 30.6912]]
      }
    },
    {
      "type": "Feature",
      "properties": { "kind": "walkway" },
      "geometry": {
        "type": "LineString",
        "coordinates": [[-88.1806, 30.6912], [-88.1793, 30.6912]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Gate" },
      "geometry": { "type": "Point", "coordinates": [-88.1800, 30.6900] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Quad" },
      "geometry": { "type": "Point", "coordinates": [-88.1800, 30.6905] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Library" },
      "geometry": { "type": "Point", "coordinates": [-88.1793, 30.6905] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Hall" },
      "geometry": { "type": "Point", "coordinates": [-88.1806, 30.6912] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Cafe" },
      "geometry": { "type": "Point", "coordinates": [-88.1793, 30.6912] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Fountain" },
      "geometry": { "type": "MultiPoint", "coordinates": [[-88.1797, 30.6908]] }
    }
  ]
}"#;
