// Copyright 2025 Lars Brubaker
// Union outlines: shapes, sentinels and the outline covering its parts.

mod helpers;

use approx::assert_relative_eq;
use helpers::*;
use polyrel::{
    area, boundary, contains_point, polygons_equal, relative_position, Boundary, Config, Error, Point,
    PointLocation, Position, Shape,
};

fn outline_of(polygons: &[Vec<Point>]) -> Vec<Point> {
    match boundary(polygons, &Config::default()).unwrap() {
        Boundary::Polygon(outline) => outline,
        other => panic!("expected an outline, got {:?}", other),
    }
}

fn assert_covers_parts(outline: &[Point], parts: &[Vec<Point>], label: &str) {
    let config = Config::default();
    for (i, part) in parts.iter().enumerate() {
        let position = relative_position(outline, part, &config).unwrap();
        assert!(
            matches!(position, Position::Contains | Position::Equal),
            "{}: outline vs part {} is {:?}",
            label,
            i,
            position
        );
    }
}

#[test]
fn overlapping_squares_union() {
    let polygons = parse_polygons(include_str!("data/overlapping_squares.dat"));
    let outline = outline_of(&polygons);
    assert_eq!(outline.len(), 8);
    assert_relative_eq!(area(&outline), 7.0);
    assert_eq!(
        sorted(outline.clone()),
        sorted(ring(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (3.0, 1.0),
            (3.0, 3.0),
            (1.0, 3.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]))
    );
    assert_covers_parts(&outline, &polygons, "overlapping squares");
}

#[test]
fn diagonal_chain_union() {
    let polygons = parse_polygons(include_str!("data/diagonal_chain.dat"));
    let outline = outline_of(&polygons);
    assert_eq!(outline.len(), 12);
    assert_relative_eq!(area(&outline), 10.0);
    assert!(
        !outline.contains(&Point::new(2.0, 2.0)),
        "interior meeting point must not be on the outline"
    );
    assert_covers_parts(&outline, &polygons, "diagonal chain");
}

#[test]
fn general_position_union_covers_parts() {
    let polygons = parse_polygons(include_str!("data/skewed.dat"));
    let outline = outline_of(&polygons);
    assert_eq!(outline.len(), 8);
    assert!(area(&outline) > area(&polygons[0]));
    assert!(area(&outline) < area(&polygons[0]) + area(&polygons[1]));
    assert_covers_parts(&outline, &polygons, "skewed");
}

#[test]
fn outline_does_not_depend_on_input_order() {
    let polygons = parse_polygons(include_str!("data/diagonal_chain.dat"));
    let forward = outline_of(&polygons);
    let mut shuffled = polygons.clone();
    shuffled.rotate_left(1);
    let backward = outline_of(&shuffled);
    assert!(polygons_equal(&forward, &backward), "{:?} vs {:?}", forward, backward);
}

#[test]
fn nested_polygons_give_the_outer_one() {
    let polygons = parse_polygons(include_str!("data/nested.dat"));
    let outline = outline_of(&polygons);
    assert_eq!(outline, polygons[0]);
}

#[test]
fn sentinels() {
    let config = Config::default();
    let apart = vec![square(0.0, 0.0, 1.0), square(3.0, 0.0, 1.0)];
    assert_eq!(boundary(&apart, &config).unwrap(), Boundary::Invalid);

    let corner = vec![square(0.0, 0.0, 1.0), square(1.0, 1.0, 1.0)];
    assert_eq!(boundary(&corner, &config).unwrap(), Boundary::NoUnion);

    let none: Vec<Vec<Point>> = Vec::new();
    assert_eq!(boundary(&none, &config), Err(Error::NoPolygons));
}

#[test]
fn union_enclosing_a_hole_is_not_a_union() {
    let config = Config::default();
    let u = ring(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (4.0, 6.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ]);
    let lid = ring(&[(-1.0, 5.0), (7.0, 5.0), (7.0, 7.0), (-1.0, 7.0)]);
    assert_eq!(
        boundary(&[u.clone(), lid.clone()], &config).unwrap(),
        Boundary::NoUnion,
        "the notch under the lid is uncovered"
    );

    let short_lid = ring(&[(-1.0, 7.0), (7.0, 7.0), (7.0, 8.0), (-1.0, 8.0)]);
    assert_eq!(boundary(&[u.clone(), short_lid], &config).unwrap(), Boundary::Invalid);

    let plug = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 5.0), (2.0, 5.0)]);
    let outline = outline_of(&[u, lid, plug]);
    assert_relative_eq!(area(&outline), 46.0);
}

#[test]
fn union_interior_and_boundary_points() {
    let polygons = parse_polygons(include_str!("data/overlapping_squares.dat"));
    let outline = outline_of(&polygons);
    assert_eq!(contains_point(&outline, Point::new(1.5, 1.5), 2).unwrap(), PointLocation::Interior);
    assert_eq!(contains_point(&outline, Point::new(2.5, 0.5), 2).unwrap(), PointLocation::Outside);
    assert!(matches!(
        contains_point(&outline, Point::new(2.0, 1.0), 2).unwrap(),
        PointLocation::Vertex(_)
    ));
}

#[test]
fn groups_nest() {
    let config = Config::default();
    let polygons = parse_polygons(include_str!("data/diagonal_chain.dat"));
    let pair = Shape::group(
        vec![Shape::Single(polygons[0].clone()), Shape::Single(polygons[1].clone())],
        &config,
    )
    .unwrap();
    let all = Shape::group(vec![pair, Shape::Single(polygons[2].clone())], &config).unwrap();
    assert_eq!(all.members().len(), 2);
    assert!(all.members()[0].is_group());
    assert_relative_eq!(area(polyrel::PolygonSource::vertices(&all)), 10.0);
}
