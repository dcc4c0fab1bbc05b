// Copyright 2025 Lars Brubaker
// License: MIT
//
// Axis-aligned bounding boxes and the cheap relation test run before any
// sweep.

use crate::geom::{round_to, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How box A relates to box B.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxRelation {
    /// No common point.
    Disjoint,
    /// Boxes meet along an edge or at a corner only.
    Touching,
    Equal,
    /// A lies within B.
    Inside,
    /// A encloses B.
    Contains,
    Overlaps,
}

impl BoxRelation {
    /// Relations that prove the polygons share no interior.
    pub fn excludes_overlap(self) -> bool {
        matches!(self, BoxRelation::Disjoint | BoxRelation::Touching)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Box of a vertex list, optionally rounding each axis first.
    /// Returns `None` for an empty list.
    pub fn of(vertices: &[Point], xdp: Option<u32>, ydp: Option<u32>) -> Option<Self> {
        let fx = |v: f64| xdp.map_or(v, |dp| round_to(v, dp));
        let fy = |v: f64| ydp.map_or(v, |dp| round_to(v, dp));
        let first = vertices.first()?;
        let init = BoundingBox {
            min_x: fx(first.x),
            min_y: fy(first.y),
            max_x: fx(first.x),
            max_y: fy(first.y),
        };
        Some(vertices.iter().skip(1).fold(init, |b, p| {
            let (x, y) = (fx(p.x), fy(p.y));
            BoundingBox {
                min_x: b.min_x.min(x),
                min_y: b.min_y.min(y),
                max_x: b.max_x.max(x),
                max_y: b.max_y.max(y),
            }
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Relation of `self` (A) to `other` (B), on extents alone.
    pub fn compare(&self, other: &BoundingBox) -> BoxRelation {
        let (a, b) = (self, other);
        if a.max_x < b.min_x || b.max_x < a.min_x || a.max_y < b.min_y || b.max_y < a.min_y {
            return BoxRelation::Disjoint;
        }
        if a.max_x == b.min_x || b.max_x == a.min_x || a.max_y == b.min_y || b.max_y == a.min_y {
            return BoxRelation::Touching;
        }
        if a == b {
            return BoxRelation::Equal;
        }
        let encloses = |p: &BoundingBox, q: &BoundingBox| {
            p.min_x <= q.min_x && p.max_x >= q.max_x && p.min_y <= q.min_y && p.max_y >= q.max_y
        };
        if encloses(a, b) {
            BoxRelation::Contains
        } else if encloses(b, a) {
            BoxRelation::Inside
        } else {
            BoxRelation::Overlaps
        }
    }
}
