// Copyright 2025 Lars Brubaker
// License: MIT
//
// Oriented polygon edges as seen by the sweep line.
//
// A segment is normalized so that `left <= right` under the lexicographic
// point order; swapping the endpoints swaps the index pair with them. The
// swept coordinates are the rotated, x-quantized ones. `orig_left` and
// `orig_right` keep the caller's coordinates so contacts can be computed
// without the rotation error.

use std::f64::consts::PI;

use crate::geom::Point;

/// Where the sweep line currently meets a segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum XPos {
    /// At the left endpoint.
    Left,
    /// Strictly between the endpoints.
    Mid,
    /// At the right endpoint.
    Right,
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub id: usize,
    /// Index of the owning polygon in the query.
    pub poly: usize,
    pub left: Point,
    pub right: Point,
    /// Vertex index of `left` in the owning polygon.
    pub left_index: usize,
    /// Vertex index of `right` in the owning polygon.
    pub right_index: usize,
    /// The edge as `(i, (i + 1) % n)` in the polygon's own order.
    pub edge: (usize, usize),
    pub orig_left: Point,
    pub orig_right: Point,
    pub dx: f64,
    pub dy: f64,
    /// `dy / dx`, infinite for a vertical segment.
    pub gradient: f64,
    pub top: f64,
    pub bottom: f64,
    /// Angle from vertical in `[0, π)`: 0 is vertical, π/2 horizontal.
    pub angle: f64,
    /// Current sweep-line y.
    pub y: f64,
    pub xpos: XPos,
}

impl Segment {
    /// Build the edge `start -> end` of polygon `poly`, where `start` is
    /// vertex `indices.0` and `end` is vertex `indices.1`. `orig` holds the
    /// same two vertices in caller coordinates.
    pub fn new(
        id: usize,
        poly: usize,
        start: Point,
        end: Point,
        indices: (usize, usize),
        orig: (Point, Point),
    ) -> Self {
        let (left, right, left_index, right_index, orig_left, orig_right) =
            if start.cmp_lex(&end).is_le() {
                (start, end, indices.0, indices.1, orig.0, orig.1)
            } else {
                (end, start, indices.1, indices.0, orig.1, orig.0)
            };
        let dx = right.x - left.x;
        let dy = right.y - left.y;
        let gradient = if dx == 0.0 { f64::INFINITY } else { dy / dx };
        let angle = dx.atan2(dy).rem_euclid(PI);
        Segment {
            id,
            poly,
            left,
            right,
            left_index,
            right_index,
            edge: indices,
            orig_left,
            orig_right,
            dx,
            dy,
            gradient,
            top: left.y.max(right.y),
            bottom: left.y.min(right.y),
            angle,
            y: left.y,
            xpos: XPos::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.dx == 0.0
    }

    /// Absolute angle from vertical, folded into `[0, π/2]`.
    pub fn tilt(&self) -> f64 {
        if self.angle > PI / 2.0 {
            PI - self.angle
        } else {
            self.angle
        }
    }

    /// y of the segment's line at `x`, exact at the endpoints.
    pub fn y_at(&self, x: f64) -> f64 {
        if x == self.right.x {
            self.right.y
        } else if x == self.left.x || self.is_vertical() {
            self.left.y
        } else {
            self.left.y + self.gradient * (x - self.left.x)
        }
    }

    /// Move the sweep line to `x`, updating `y` and `xpos`.
    pub fn advance(&mut self, x: f64) {
        self.y = self.y_at(x);
        self.xpos = if x >= self.right.x {
            XPos::Right
        } else if x <= self.left.x {
            XPos::Left
        } else {
            XPos::Mid
        };
    }

    /// Vertex index of the endpoint the sweep line is sitting on, if any.
    pub fn vertex_at_sweep(&self) -> Option<usize> {
        match self.xpos {
            XPos::Left => Some(self.left_index),
            XPos::Right => Some(self.right_index),
            XPos::Mid => None,
        }
    }
}

/// Build one segment per edge of each polygon. `swept[k]` and `orig[k]` are
/// the same ring of polygon `k` in sweep and caller coordinates.
pub fn build_segments(swept: &[Vec<Point>], orig: &[&[Point]]) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (poly, (ring, orig_ring)) in swept.iter().zip(orig).enumerate() {
        let n = ring.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let id = segments.len();
            segments.push(Segment::new(
                id,
                poly,
                ring[i],
                ring[j],
                (i, j),
                (orig_ring[i], orig_ring[j]),
            ));
        }
    }
    segments
}
