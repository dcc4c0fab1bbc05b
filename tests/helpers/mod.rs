// Copyright 2025 Lars Brubaker
// Shared test utilities for polyrel tests.

#![allow(dead_code)]

use polyrel::{relative_position, Config, Point, Position};

/// Parse the `.dat` fixture format: one vertex per line as `x y` or `x, y`.
/// Blank lines separate polygons; lines starting with `#` are comments.
pub fn parse_polygons(data: &str) -> Vec<Vec<Point>> {
    let mut polygons: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for line in data.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed.is_empty() {
            if !current.is_empty() {
                polygons.push(std::mem::take(&mut current));
            }
            continue;
        }
        let coords: Vec<f64> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<f64>().ok())
            .collect();
        assert_eq!(coords.len(), 2, "bad vertex line {:?}", line);
        current.push(Point::new(coords[0], coords[1]));
    }
    if !current.is_empty() {
        polygons.push(current);
    }
    polygons
}

pub fn ring(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&p| p.into()).collect()
}

/// Axis-aligned square with its lower-left corner at `(x, y)`, counter-clockwise.
pub fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
    ring(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

/// Regular `n`-gon around `(cx, cy)`.
pub fn regular(n: usize, cx: f64, cy: f64, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / n as f64;
            Point::new(cx + radius * t.cos(), cy + radius * t.sin())
        })
        .collect()
}

/// Same ring, different start vertex and direction.
pub fn restarted_reversed(poly: &[Point], shift: usize) -> Vec<Point> {
    let mut out = poly.to_vec();
    out.rotate_left(shift % poly.len());
    out.reverse();
    out
}

/// Relative position with the default config, checked in both directions.
pub fn position_both_ways(a: &[Point], b: &[Point], label: &str) -> Position {
    let config = Config::default();
    let ab = relative_position(a, b, &config).unwrap_or_else(|e| panic!("{}: {}", label, e));
    let ba = relative_position(b, a, &config).unwrap_or_else(|e| panic!("{}: {}", label, e));
    assert_eq!(
        ab.inverse(),
        ba,
        "{}: position({:?}) is not the inverse of the swapped query ({:?})",
        label,
        ab,
        ba
    );
    ab
}

/// Sort points lexicographically for order-insensitive comparisons.
pub fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(Point::cmp_lex);
    points
}
