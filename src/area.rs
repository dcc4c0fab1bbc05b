// Copyright 2025 Lars Brubaker
// License: MIT
//
// Shoelace area and the rotation/reflection-insensitive equality test.

use crate::geom::Point;

/// Signed shoelace area, `½ Σ (x_i·y_{i-1} − x_{i-1}·y_i)`. Negative for
/// counter-clockwise rings, positive for clockwise ones.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let cur = vertices[i];
        let prev = vertices[(i + n - 1) % n];
        sum += cur.x * prev.y - prev.x * cur.y;
    }
    sum / 2.0
}

/// Absolute shoelace area.
pub fn area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

/// Length of the closed ring.
pub fn perimeter(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n).map(|i| (vertices[(i + 1) % n] - vertices[i]).length()).sum()
}

/// Index of the lexicographically smallest vertex.
pub(crate) fn min_vertex(vertices: &[Point]) -> Option<usize> {
    (0..vertices.len()).min_by(|&a, &b| vertices[a].cmp_lex(&vertices[b]))
}

/// Whether two vertex lists describe the same ring, regardless of start
/// vertex and winding direction. Points are compared exactly.
pub fn polygons_equal(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let (Some(sa), Some(sb)) = (min_vertex(a), min_vertex(b)) else {
        return true;
    };
    let n = a.len();
    let forward = (0..n).all(|k| a[(sa + k) % n] == b[(sb + k) % n]);
    forward || (0..n).all(|k| a[(sa + k) % n] == b[(sb + n - k) % n])
}
