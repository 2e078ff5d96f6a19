//! GeoJSON layer store
//!
//! Layers are GeoJSON files in the workspace directory; only polygon
//! geometry participates in the analysis, everything else in a file is
//! ignored. The scored output is written back as a FeatureCollection
//! whose per-feature properties carry the coverage indicators, the
//! per-layer scores and the summed suitability.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};
use serde_json::json;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::ScoredLayer;
use crate::infrastructure::error::{StoreError, StoreResult};
use crate::infrastructure::traits::LayerStore;

/// File-based store reading and writing GeoJSON.
#[derive(Debug, Default)]
pub struct GeoJsonStore;

impl LayerStore for GeoJsonStore {
    fn list_layers(&self, dir: &Path, extension: &str) -> StoreResult<Vec<PathBuf>> {
        let mut layers = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| StoreError::io(dir, e.into()))?;
            let path = entry.path();
            if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
                layers.push(path.to_path_buf());
            }
        }
        layers.sort();
        Ok(layers)
    }

    fn load(&self, path: &Path) -> StoreResult<MultiPolygon<f64>> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let geojson: GeoJson = contents.parse().map_err(|e: geojson::Error| StoreError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let geometries = match geojson {
            GeoJson::FeatureCollection(fc) => {
                fc.features.into_iter().filter_map(|f| f.geometry).collect()
            }
            GeoJson::Feature(f) => f.geometry.map(|g| vec![g]).unwrap_or_default(),
            GeoJson::Geometry(g) => vec![g],
        };

        let rings = only_polygons(geometries);
        debug!(path = %path.display(), polygons = rings.len(), "loaded layer");
        if rings.is_empty() {
            return Err(StoreError::NoPolygons(path.to_path_buf()));
        }

        let polygons = rings
            .into_iter()
            .map(|poly| {
                let mut rings = poly.into_iter();
                let exterior = rings.next().ok_or_else(|| StoreError::Parse {
                    path: path.to_path_buf(),
                    message: "polygon with no rings".to_string(),
                })?;
                let exterior = ring(exterior, path)?;
                let interiors = rings
                    .map(|r| ring(r, path))
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(Polygon::new(exterior, interiors))
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(MultiPolygon::new(polygons))
    }

    fn write_scored(
        &self,
        path: &Path,
        scored: &ScoredLayer,
        suitability_field: &str,
    ) -> StoreResult<()> {
        let features = scored
            .fragments
            .iter()
            .map(|fragment| {
                let mut properties = JsonObject::new();
                for (i, binding) in scored.bindings.iter().enumerate() {
                    properties.insert(
                        binding.indicator_field.clone(),
                        JsonValue::Bool(fragment.coverage[i]),
                    );
                    properties.insert(binding.score_field.clone(), json!(fragment.scores[i]));
                }
                properties.insert(suitability_field.to_string(), json!(fragment.suitability));
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::from(&fragment.geometry))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        fs::write(path, GeoJson::from(collection).to_string())
            .map_err(|e| StoreError::io(path, e))?;
        debug!(path = %path.display(), fragments = scored.fragments.len(), "wrote scored layer");
        Ok(())
    }
}

/// Keep polygon rings, descend into collections, drop everything else.
fn only_polygons(geometries: Vec<Geometry>) -> Vec<Vec<Vec<Vec<f64>>>> {
    geometries
        .into_iter()
        .filter_map(|g| match g.value {
            Value::Polygon(p) => Some(vec![p]),
            Value::MultiPolygon(mp) => Some(mp),
            Value::GeometryCollection(gc) => Some(only_polygons(gc)),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Convert one GeoJSON ring into a closed `LineString`.
fn ring(points: Vec<Vec<f64>>, path: &Path) -> StoreResult<LineString<f64>> {
    let coords = points
        .into_iter()
        .map(|p| {
            if p.len() < 2 {
                return Err(StoreError::Parse {
                    path: path.to_path_buf(),
                    message: "ring position with fewer than two coordinates".to_string(),
                });
            }
            Ok(Coord { x: p[0], y: p[1] })
        })
        .collect::<StoreResult<Vec<_>>>()?;

    let line = LineString::new(coords);
    if !line.is_closed() {
        return Err(StoreError::RingNotClosed(path.to_path_buf()));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_ring_is_rejected() {
        let path = Path::new("bad.geojson");
        let err = ring(
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            path,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::RingNotClosed(_)));
    }

    #[test]
    fn polygon_with_no_rings_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ringless.geojson");
        std::fs::write(
            &path,
            r#"{"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[]}}"#,
        )
        .expect("write layer");

        let err = GeoJsonStore.load(&path).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Parse { message, .. } if message == "polygon with no rings"
        ));
    }

    #[test]
    fn non_polygon_geometry_is_ignored() {
        let geometries = vec![
            Geometry::new(Value::Point(vec![0.0, 0.0])),
            Geometry::new(Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]])),
        ];
        assert_eq!(only_polygons(geometries).len(), 1);
    }
}
