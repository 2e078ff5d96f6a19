//! Overlay engine backed by `geo` boolean operations
//!
//! The geometric kernel (intersection, difference, union of polygon
//! sets) is delegated to the `geo` crate; this module only drives the
//! partition sweep and tags each fragment with its coverage.

use geo::{Area, BooleanOps, CoordsIter, MultiPolygon};
use tracing::debug;

use crate::domain::{Fragment, LayerBinding, MergedLayer, SourceLayer, MIN_LAYERS};
use crate::infrastructure::error::{EngineError, EngineResult};
use crate::infrastructure::traits::OverlayEngine;

/// Planar-partition overlay on top of `geo::BooleanOps`.
#[derive(Debug, Default)]
pub struct GeoOverlayEngine;

impl GeoOverlayEngine {
    /// Reject inputs the boolean kernel is not defined over.
    fn validate(&self, layers: &[SourceLayer]) -> EngineResult<()> {
        if layers.len() < MIN_LAYERS {
            return Err(EngineError::TooFewLayers(layers.len()));
        }
        for source in layers {
            if source.geometry.0.is_empty() {
                return Err(EngineError::EmptyLayer(source.layer.name.clone()));
            }
            if source
                .geometry
                .coords_iter()
                .any(|c| !c.x.is_finite() || !c.y.is_finite())
            {
                return Err(EngineError::InvalidGeometry {
                    layer: source.layer.name.clone(),
                    reason: "non-finite coordinate".to_string(),
                });
            }
            if source.geometry.unsigned_area() <= 0.0 {
                return Err(EngineError::InvalidGeometry {
                    layer: source.layer.name.clone(),
                    reason: "zero-area geometry".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl OverlayEngine for GeoOverlayEngine {
    /// Incremental sweep: each layer splits every existing fragment
    /// into its inside and outside parts, then contributes its own
    /// not-yet-covered remainder as a fresh fragment. After layer `i`
    /// every fragment carries `i + 1` coverage indicators.
    fn union(&self, layers: &[SourceLayer]) -> EngineResult<MergedLayer> {
        self.validate(layers)?;

        let bindings: Vec<LayerBinding> = layers
            .iter()
            .map(|s| LayerBinding::for_layer(&s.layer))
            .collect();

        let mut fragments: Vec<Fragment> = Vec::new();
        let mut covered = MultiPolygon::<f64>::new(Vec::new());

        for (idx, source) in layers.iter().enumerate() {
            let geom = &source.geometry;
            let mut next = Vec::with_capacity(fragments.len() * 2 + 1);

            for fragment in &fragments {
                let inside = fragment.geometry.intersection(geom);
                if has_area(&inside) {
                    next.push(Fragment {
                        geometry: inside,
                        coverage: extended(&fragment.coverage, true),
                    });
                }
                let outside = fragment.geometry.difference(geom);
                if has_area(&outside) {
                    next.push(Fragment {
                        geometry: outside,
                        coverage: extended(&fragment.coverage, false),
                    });
                }
            }

            let fresh = geom.difference(&covered);
            if has_area(&fresh) {
                let mut coverage = vec![false; idx];
                coverage.push(true);
                next.push(Fragment {
                    geometry: fresh,
                    coverage,
                });
            }

            covered = covered.union(geom);
            fragments = next;
            debug!(
                layer = %source.layer.name,
                fragments = fragments.len(),
                "overlay sweep step"
            );
        }

        Ok(MergedLayer {
            bindings,
            fragments,
        })
    }
}

/// Degenerate (zero-area) pieces produced by clipping are dropped.
fn has_area(geometry: &MultiPolygon<f64>) -> bool {
    !geometry.0.is_empty() && geometry.unsigned_area() > 0.0
}

fn extended(coverage: &[bool], tail: bool) -> Vec<bool> {
    let mut out = Vec::with_capacity(coverage.len() + 1);
    out.extend_from_slice(coverage);
    out.push(tail);
    out
}
