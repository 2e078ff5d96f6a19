//! Suitability aggregation over merged fragments
//!
//! A pure, record-at-a-time transform: per-layer score is the layer
//! weight if the layer covers the fragment, otherwise zero; the
//! suitability of a fragment is the sum of its per-layer scores. No
//! ordering dependency between fragments, no shared state.

use crate::domain::entities::{MergedLayer, ScoredFragment, ScoredLayer};
use crate::domain::error::{DomainError, DomainResult};

/// Per-layer scores for one fragment: `weights[i]` where covered, else 0.
pub fn layer_scores(coverage: &[bool], weights: &[f64]) -> Vec<f64> {
    coverage
        .iter()
        .zip(weights)
        .map(|(&covered, &weight)| if covered { weight } else { 0.0 })
        .collect()
}

/// Summed suitability of one fragment.
pub fn suitability(scores: &[f64]) -> f64 {
    scores.iter().sum()
}

/// Score every fragment of a merged layer.
///
/// Index alignment is taken from the ordered `LayerBinding` list built
/// at overlay time. A coverage row whose length differs from the
/// binding list is rejected; no sign validation is performed, negative
/// weights flow through.
pub fn score_layer(merged: &MergedLayer) -> DomainResult<ScoredLayer> {
    let weights = merged.weights();

    let fragments = merged
        .fragments
        .iter()
        .map(|fragment| {
            if fragment.coverage.len() != merged.bindings.len() {
                return Err(DomainError::CoverageArity {
                    coverage: fragment.coverage.len(),
                    bindings: merged.bindings.len(),
                });
            }
            let scores = layer_scores(&fragment.coverage, &weights);
            let suitability = suitability(&scores);
            Ok(ScoredFragment {
                geometry: fragment.geometry.clone(),
                coverage: fragment.coverage.clone(),
                scores,
                suitability,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(ScoredLayer {
        bindings: merged.bindings.clone(),
        fragments,
    })
}
