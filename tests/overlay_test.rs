//! Tests for the geo-backed overlay engine: planar partition shape,
//! coverage tagging, and input validation.

use approx::assert_relative_eq;
use geo::{polygon, Area, MultiPolygon, Polygon};

use polysuit::domain::{Layer, MergedLayer, SourceLayer};
use polysuit::infrastructure::error::EngineError;
use polysuit::infrastructure::traits::OverlayEngine;
use polysuit::infrastructure::GeoOverlayEngine;
use polysuit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
        (x: x0, y: y0),
    ]
}

fn source(name: &str, weight: f64, poly: Polygon<f64>) -> SourceLayer {
    SourceLayer {
        layer: Layer::new(name, weight),
        geometry: MultiPolygon::new(vec![poly]),
    }
}

fn fragment_area(merged: &MergedLayer, coverage: &[bool]) -> f64 {
    merged
        .fragments
        .iter()
        .filter(|f| f.coverage == coverage)
        .map(|f| f.geometry.unsigned_area())
        .sum()
}

#[test]
fn given_two_overlapping_squares_when_union_then_three_tagged_fragments() {
    let engine = GeoOverlayEngine;

    let merged = engine
        .union(&[
            source("a", 1.0, square(0.0, 0.0, 2.0, 2.0)),
            source("b", 2.0, square(1.0, 1.0, 3.0, 3.0)),
        ])
        .expect("overlay");

    assert_eq!(merged.fragments.len(), 3);
    assert_relative_eq!(fragment_area(&merged, &[true, false]), 3.0, epsilon = 1e-9);
    assert_relative_eq!(fragment_area(&merged, &[true, true]), 1.0, epsilon = 1e-9);
    assert_relative_eq!(fragment_area(&merged, &[false, true]), 3.0, epsilon = 1e-9);
}

#[test]
fn given_identical_squares_when_union_then_one_fragment_covered_by_both() {
    let engine = GeoOverlayEngine;

    let merged = engine
        .union(&[
            source("a", 1.0, square(0.0, 0.0, 2.0, 2.0)),
            source("b", 1.0, square(0.0, 0.0, 2.0, 2.0)),
        ])
        .expect("overlay");

    assert_eq!(merged.fragments.len(), 1);
    assert_eq!(merged.fragments[0].coverage, vec![true, true]);
    assert_relative_eq!(
        merged.fragments[0].geometry.unsigned_area(),
        4.0,
        epsilon = 1e-9
    );
}

#[test]
fn given_nested_squares_when_union_then_hole_is_split_out() {
    let engine = GeoOverlayEngine;

    let merged = engine
        .union(&[
            source("outer", 1.0, square(0.0, 0.0, 4.0, 4.0)),
            source("inner", 2.0, square(1.0, 1.0, 2.0, 2.0)),
        ])
        .expect("overlay");

    assert_relative_eq!(fragment_area(&merged, &[true, false]), 15.0, epsilon = 1e-9);
    assert_relative_eq!(fragment_area(&merged, &[true, true]), 1.0, epsilon = 1e-9);
    assert_relative_eq!(fragment_area(&merged, &[false, true]), 0.0, epsilon = 1e-9);
}

#[test]
fn given_three_layers_when_union_then_partition_covers_the_union_exactly() {
    let engine = GeoOverlayEngine;

    let merged = engine
        .union(&[
            source("a", 1.0, square(0.0, 0.0, 2.0, 2.0)),
            source("b", 1.0, square(1.0, 1.0, 3.0, 3.0)),
            source("c", 1.0, square(2.0, 2.0, 4.0, 4.0)),
        ])
        .expect("overlay");

    assert!(merged
        .fragments
        .iter()
        .all(|f| f.coverage.len() == 3 && f.coverage.iter().any(|&c| c)));

    // fragments tile the union without overlap, so areas sum to it
    let total: f64 = merged
        .fragments
        .iter()
        .map(|f| f.geometry.unsigned_area())
        .sum();
    assert_relative_eq!(total, 10.0, epsilon = 1e-9);
}

#[test]
fn given_ordered_layers_when_union_then_bindings_follow_input_order() {
    let engine = GeoOverlayEngine;

    let merged = engine
        .union(&[
            source("b", 2.0, square(0.0, 0.0, 1.0, 1.0)),
            source("a", 1.0, square(0.5, 0.5, 1.5, 1.5)),
        ])
        .expect("overlay");

    let names: Vec<&str> = merged.bindings.iter().map(|b| b.layer.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(merged.weights(), vec![2.0, 1.0]);
}

#[test]
fn given_nonfinite_coordinates_when_union_then_engine_error() {
    let engine = GeoOverlayEngine;
    let bad = source("bad", 1.0, square(0.0, 0.0, f64::NAN, 1.0));

    let err = engine
        .union(&[bad, source("b", 1.0, square(0.0, 0.0, 1.0, 1.0))])
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidGeometry { layer, .. } if layer == "bad"));
}
