// Copyright 2025 Lars Brubaker
// Relative position of polygon pairs: scenarios, symmetry and containment.

mod helpers;

use helpers::*;
use polyrel::{relative_position, Config, Point, Position, Shape};

fn fixture(data: &str) -> Vec<Vec<Point>> {
    let polygons = parse_polygons(data);
    assert!(!polygons.is_empty(), "fixture parsed to nothing");
    polygons
}

#[test]
fn far_apart_squares_are_disjoint() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(5.0, 5.0, 1.0);
    assert_eq!(position_both_ways(&a, &b, "far apart"), Position::Disjoint);
}

#[test]
fn square_inside_square() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(2.0, 2.0, 2.0);
    assert_eq!(position_both_ways(&outer, &inner, "nested squares"), Position::Contains);
    assert_eq!(relative_position(&inner, &outer, &Config::default()).unwrap(), Position::Inside);
}

#[test]
fn same_triangle_is_equal() {
    let tri = ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
    assert_eq!(position_both_ways(&tri, &tri, "triangle"), Position::Equal);
}

#[test]
fn overlapping_squares_overlap() {
    let polygons = fixture(include_str!("data/overlapping_squares.dat"));
    assert_eq!(position_both_ways(&polygons[0], &polygons[1], "overlapping squares"), Position::Overlaps);
}

#[test]
fn every_polygon_equals_itself() {
    let cases: Vec<(&str, Vec<Point>)> = vec![
        ("square", square(1.0, 2.0, 3.0)),
        ("hexagon", regular(6, 0.0, 0.0, 5.0)),
        ("skewed quad", fixture(include_str!("data/skewed.dat"))[0].clone()),
        ("middle of nested", fixture(include_str!("data/nested.dat"))[1].clone()),
    ];
    for (label, poly) in &cases {
        assert_eq!(position_both_ways(poly, poly, label), Position::Equal, "{}", label);
    }
}

#[test]
fn equality_ignores_start_vertex_and_direction() {
    let hex = regular(6, 3.0, 3.0, 2.0);
    for shift in 0..hex.len() {
        let other = restarted_reversed(&hex, shift);
        assert_eq!(
            position_both_ways(&hex, &other, "restarted hexagon"),
            Position::Equal,
            "shift {}",
            shift
        );
    }
}

#[test]
fn containment_chain_is_transitive() {
    let polygons = fixture(include_str!("data/nested.dat"));
    let (a, b, c) = (&polygons[0], &polygons[1], &polygons[2]);
    assert_eq!(position_both_ways(a, b, "outer/middle"), Position::Contains);
    assert_eq!(position_both_ways(b, c, "middle/inner"), Position::Contains);
    assert_eq!(position_both_ways(a, c, "outer/inner"), Position::Contains);
}

#[test]
fn general_position_pair_overlaps() {
    let polygons = fixture(include_str!("data/skewed.dat"));
    assert_eq!(position_both_ways(&polygons[0], &polygons[1], "skewed"), Position::Overlaps);
}

#[test]
fn diagonal_chain_pairs() {
    let polygons = fixture(include_str!("data/diagonal_chain.dat"));
    assert_eq!(position_both_ways(&polygons[0], &polygons[1], "first/middle"), Position::Overlaps);
    assert_eq!(position_both_ways(&polygons[1], &polygons[2], "middle/last"), Position::Overlaps);
    // Corner to corner only.
    assert_eq!(position_both_ways(&polygons[0], &polygons[2], "first/last"), Position::Disjoint);
}

#[test]
fn squares_sharing_an_edge_are_disjoint() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(2.0, 0.5, 1.0);
    assert_eq!(position_both_ways(&a, &b, "side by side"), Position::Disjoint);
}

#[test]
fn hexagon_and_inscribed_triangle() {
    let hex = regular(6, 0.0, 0.0, 4.0);
    let tri = regular(3, 0.0, 0.0, 2.0);
    assert_eq!(position_both_ways(&hex, &tri, "hexagon/triangle"), Position::Contains);
}

#[test]
fn triangle_poking_out_of_a_square() {
    let sq = square(0.0, 0.0, 4.0);
    let tri = ring(&[(1.0, 1.0), (6.0, 2.0), (1.0, 3.0)]);
    assert_eq!(position_both_ways(&sq, &tri, "poking triangle"), Position::Overlaps);
}

#[test]
fn coarser_precision_snaps_near_equal_polygons() {
    let a = square(0.0, 0.0, 4.0);
    let b = ring(&[(0.001, 0.0), (4.0, 0.002), (3.999, 4.0), (0.0, 4.001)]);
    let config = Config::default();
    assert_eq!(relative_position(&a, &b, &config).unwrap(), Position::Equal);
}

#[test]
fn shapes_can_be_compared_directly() {
    let config = Config::default();
    let group = Shape::group(
        vec![Shape::Single(square(0.0, 0.0, 2.0)), Shape::Single(square(1.0, 1.0, 2.0))],
        &config,
    )
    .unwrap();
    let small = Shape::single([(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)]);
    assert_eq!(relative_position(&group, &small, &config).unwrap(), Position::Contains);
    let part = Shape::Single(square(1.0, 1.0, 2.0));
    assert_eq!(relative_position(&group, &part, &config).unwrap(), Position::Contains);
}

#[test]
fn invalid_input_is_an_error() {
    let config = Config::default();
    let nan = ring(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0)]);
    assert!(relative_position(&square(0.0, 0.0, 1.0), &nan, &config).is_err());
    let short = ring(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(relative_position(&short, &square(0.0, 0.0, 1.0), &config).is_err());
}
