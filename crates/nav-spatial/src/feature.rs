//! Vector feature records and loaders.
//!
//! The graph builder consumes a loosely typed [`FeatureRecord`] per input
//! feature, mirroring what a parsed geometry document provides: a geometry
//! type, an array of `[lon, lat]` positions, and an optional `name`
//! property.  Validation into a typed [`Feature`] happens per record so one
//! bad feature never spoils a build.
//!
//! # CSV format
//!
//! One row per position.  Rows sharing a `feature_id` form one feature, in
//! order of first appearance; `seq` orders positions within a feature.
//!
//! ```csv
//! feature_id,geometry,seq,lat,lon,name
//! walk-1,LineString,0,19.3320,-99.1870,
//! walk-1,LineString,1,19.3329,-99.1870,
//! library,Point,0,19.3320,-99.1870,Library
//! ```
//!
//! # GeoJSON (feature = `"geojson"`)
//!
//! A `FeatureCollection` of `Point` / `LineString` geometries.  Other
//! geometry types load as records that the builder later skips.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use nav_core::Coordinate;

use crate::{FeatureParseError, SpatialError, SpatialResult};

/// Geometry type strings accepted as polylines.
const POLYLINE_TYPES: &[&str] = &["LineString", "Polyline"];
const POINT_TYPE: &str = "Point";

// ── Records ───────────────────────────────────────────────────────────────────

/// One input feature as delivered by a loader, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    pub geometry_type: Option<String>,
    /// Positions in GeoJSON `[lon, lat]` order.
    pub coordinates: Option<Vec<[f64; 2]>>,
    pub name: Option<String>,
}

impl FeatureRecord {
    /// A `LineString` record from `(lat, lon)` coordinates.
    pub fn polyline(coords: &[Coordinate]) -> Self {
        Self {
            geometry_type: Some("LineString".to_owned()),
            coordinates: Some(coords.iter().map(|c| [c.lon, c.lat]).collect()),
            name: None,
        }
    }

    /// A `Point` record.
    pub fn point(coord: Coordinate, name: Option<&str>) -> Self {
        Self {
            geometry_type: Some(POINT_TYPE.to_owned()),
            coordinates: Some(vec![[coord.lon, coord.lat]]),
            name: name.map(str::to_owned),
        }
    }
}

/// A validated feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Ordered walkway centreline; consecutive positions become edges.
    Polyline(Vec<Coordinate>),
    /// A single location, usually a named destination.
    Point { coordinate: Coordinate, name: Option<String> },
}

impl Feature {
    /// Validate `record`, which sits at position `index` in its source.
    pub fn from_record(index: usize, record: &FeatureRecord) -> Result<Feature, FeatureParseError> {
        let Some(kind) = record.geometry_type.as_deref() else {
            return Err(FeatureParseError::new(index, "missing geometry type"));
        };
        let is_point = kind == POINT_TYPE;
        if !is_point && !POLYLINE_TYPES.contains(&kind) {
            return Err(FeatureParseError::new(index, format!("unsupported geometry type {kind:?}")));
        }

        let Some(raw) = record.coordinates.as_deref() else {
            return Err(FeatureParseError::new(index, "missing coordinate array"));
        };
        if raw.is_empty() {
            return Err(FeatureParseError::new(index, "empty coordinate array"));
        }

        let coords = raw
            .iter()
            .map(|&[lon, lat]| {
                Coordinate::try_new(lat, lon).map_err(|e| FeatureParseError::new(index, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if is_point {
            if coords.len() != 1 {
                return Err(FeatureParseError::new(
                    index,
                    format!("point has {} positions, expected 1", coords.len()),
                ));
            }
            Ok(Feature::Point { coordinate: coords[0], name: record.name.clone() })
        } else {
            Ok(Feature::Polyline(coords))
        }
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeatureRow {
    feature_id: String,
    geometry:   String,
    seq:        u32,
    lat:        f64,
    lon:        f64,
    name:       Option<String>,
}

/// Load feature records from a CSV file.
pub fn load_features_csv(path: &Path) -> SpatialResult<Vec<FeatureRecord>> {
    let file = std::fs::File::open(path)?;
    load_features_reader(file)
}

/// Like [`load_features_csv`] but accepts any `Read` source.
///
/// A row that fails to parse aborts the load; the builder's per-feature
/// skipping applies only to structurally valid rows.
pub fn load_features_reader<R: Read>(reader: R) -> SpatialResult<Vec<FeatureRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // feature_id → slot in `groups`, preserving first-appearance order.
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<FeatureRow>> = Vec::new();

    for result in csv_reader.deserialize::<FeatureRow>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let slot = *slots.entry(row.feature_id.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(row);
    }

    Ok(groups
        .into_iter()
        .map(|mut rows| {
            rows.sort_by_key(|r| r.seq);
            let geometry_type = Some(rows[0].geometry.trim().to_owned());
            let name = rows.iter().find_map(|r| r.name.clone()).filter(|n| !n.is_empty());
            FeatureRecord {
                geometry_type,
                coordinates: Some(rows.iter().map(|r| [r.lon, r.lat]).collect()),
                name,
            }
        })
        .collect())
}

// ── GeoJSON ───────────────────────────────────────────────────────────────────

#[cfg(feature = "geojson")]
mod geojson {
    use serde_json::{Value, json};

    use nav_core::VertexId;

    use super::FeatureRecord;
    use crate::{RouteGraph, SpatialError, SpatialResult};

    /// Parse a GeoJSON `FeatureCollection` into feature records.
    ///
    /// Fails only when the document itself is not JSON or has no `features`
    /// array.  Individual features with missing or malformed geometry load
    /// as incomplete records.
    pub fn load_features_geojson_str(src: &str) -> SpatialResult<Vec<FeatureRecord>> {
        let doc: Value = serde_json::from_str(src).map_err(|e| SpatialError::Parse(e.to_string()))?;
        let features = doc
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| SpatialError::Parse("document has no \"features\" array".to_owned()))?;
        Ok(features.iter().map(record_from_json).collect())
    }

    fn record_from_json(feature: &Value) -> FeatureRecord {
        let geometry = feature.get("geometry");
        let geometry_type = geometry
            .and_then(|g| g.get("type"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        let raw = geometry.and_then(|g| g.get("coordinates"));

        let coordinates = match geometry_type.as_deref() {
            Some("Point") => raw.and_then(position).map(|p| vec![p]),
            Some(_) => raw
                .and_then(Value::as_array)
                .and_then(|arr| arr.iter().map(position).collect::<Option<Vec<_>>>()),
            None => None,
        };

        let name = feature
            .get("properties")
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        FeatureRecord { geometry_type, coordinates, name }
    }

    /// `[lon, lat]` from a GeoJSON position; a trailing altitude is ignored.
    fn position(v: &Value) -> Option<[f64; 2]> {
        match v.as_array()?.as_slice() {
            [lon, lat, ..] => Some([lon.as_f64()?, lat.as_f64()?]),
            _ => None,
        }
    }

    /// Render a resolved path as a GeoJSON `Feature` with a `LineString`
    /// geometry, for drawing the route on a map overlay.
    pub fn path_to_geojson(graph: &RouteGraph, path: &[VertexId]) -> Value {
        let coords: Vec<Value> = path
            .iter()
            .filter_map(|&id| graph.coordinate(id))
            .map(|c| json!([c.lon, c.lat]))
            .collect();
        json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coords },
            "properties": { "summary": graph.describe_path(path) },
        })
    }
}

#[cfg(feature = "geojson")]
pub use geojson::{load_features_geojson_str, path_to_geojson};
