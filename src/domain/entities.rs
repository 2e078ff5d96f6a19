//! Domain entities: core data structures

use geo::MultiPolygon;

/// One input vector layer with its suitability weight.
///
/// Created from user input, read-only afterwards. The weight is
/// unconstrained: negative weights are legal and propagate into
/// negative suitability contributions.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name as entered by the user (resolved against the workspace)
    pub name: String,
    /// Relative importance of this layer in the analysis
    pub weight: f64,
}

impl Layer {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// An input layer together with its loaded geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLayer {
    pub layer: Layer,
    pub geometry: MultiPolygon<f64>,
}

/// Explicit ordered mapping between one input layer and the output
/// fields that carry its coverage indicator and its per-layer score.
///
/// Built once at overlay time, in input order. All downstream stages
/// consume this binding; nothing re-derives the pairing from field
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerBinding {
    /// Name of the source layer
    pub layer: String,
    /// Weight contributed when the layer covers a fragment
    pub weight: f64,
    /// Output property holding the coverage indicator (bool)
    pub indicator_field: String,
    /// Output property holding the weight-or-zero score
    pub score_field: String,
}

impl LayerBinding {
    /// Derive the binding for a layer, with field names slugged from
    /// the layer name.
    pub fn for_layer(layer: &Layer) -> Self {
        let slug = field_slug(&layer.name);
        Self {
            layer: layer.name.clone(),
            weight: layer.weight,
            indicator_field: format!("cov_{slug}"),
            score_field: format!("score_{slug}"),
        }
    }
}

/// Lowercase a layer name into a property-name-safe slug.
fn field_slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// One output record of the overlay: a piece of the planar partition
/// tagged with which input layers cover it.
///
/// `coverage[i]` pairs with the i-th `LayerBinding` of the merged
/// layer that owns this fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub geometry: MultiPolygon<f64>,
    pub coverage: Vec<bool>,
}

/// The merged layer produced by the overlay: the planar partition plus
/// the ordered layer bindings it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedLayer {
    pub bindings: Vec<LayerBinding>,
    pub fragments: Vec<Fragment>,
}

impl MergedLayer {
    /// Weights in binding order.
    pub fn weights(&self) -> Vec<f64> {
        self.bindings.iter().map(|b| b.weight).collect()
    }
}

/// A fragment after scoring: coverage, per-layer scores and the summed
/// suitability value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFragment {
    pub geometry: MultiPolygon<f64>,
    pub coverage: Vec<bool>,
    pub scores: Vec<f64>,
    pub suitability: f64,
}

/// The fully scored output dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLayer {
    pub bindings: Vec<LayerBinding>,
    pub fragments: Vec<ScoredFragment>,
}
