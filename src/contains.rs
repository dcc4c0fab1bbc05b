// Copyright 2025 Lars Brubaker
// License: MIT
//
// Point-in-polygon test by even-odd ray casting, with vertex and edge hits
// resolved first at the requested decimal precision.

use crate::error::Result;
use crate::geom::{quantum, segment_distance, Point};
use crate::source::{validate, PolygonSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a point lies relative to a polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointLocation {
    /// On vertex `i`.
    Vertex(usize),
    /// On the edge from vertex `i` to vertex `j`.
    Edge(usize, usize),
    Interior,
    Outside,
}

impl PointLocation {
    /// Interior or on the boundary.
    pub fn is_covered(self) -> bool {
        self != PointLocation::Outside
    }

    pub fn is_on_boundary(self) -> bool {
        matches!(self, PointLocation::Vertex(_) | PointLocation::Edge(..))
    }
}

/// Classify `point` against `polygon`, rounding both to `dp` places.
pub fn contains_point<P: PolygonSource + ?Sized>(
    polygon: &P,
    point: Point,
    dp: u32,
) -> Result<PointLocation> {
    let vertices = polygon.vertices();
    validate(vertices, 0)?;
    let ring: Vec<Point> = vertices.iter().map(|v| v.rounded(dp)).collect();
    let p = point.rounded(dp);
    let n = ring.len();

    if let Some(i) = ring.iter().position(|&v| v == p) {
        return Ok(PointLocation::Vertex(i));
    }
    let tolerance = quantum(dp) / 2.0;
    for i in 0..n {
        let j = (i + 1) % n;
        if segment_distance(ring[i], ring[j], p) < tolerance {
            return Ok(PointLocation::Edge(i, j));
        }
    }

    let mut inside = false;
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < cross_x {
                inside = !inside;
            }
        }
    }
    Ok(if inside {
        PointLocation::Interior
    } else {
        PointLocation::Outside
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn interior_and_outside() {
        let sq = square();
        assert_eq!(contains_point(&sq, Point::new(5.0, 5.0), 2).unwrap(), PointLocation::Interior);
        assert_eq!(contains_point(&sq, Point::new(15.0, 5.0), 2).unwrap(), PointLocation::Outside);
        assert_eq!(contains_point(&sq, Point::new(-1.0, -1.0), 2).unwrap(), PointLocation::Outside);
    }

    #[test]
    fn vertices_and_edges() {
        let sq = square();
        assert_eq!(contains_point(&sq, Point::new(10.0, 10.0), 2).unwrap(), PointLocation::Vertex(2));
        assert_eq!(contains_point(&sq, Point::new(10.0, 4.0), 2).unwrap(), PointLocation::Edge(1, 2));
        assert_eq!(contains_point(&sq, Point::new(0.0, 5.0), 2).unwrap(), PointLocation::Edge(3, 0));
    }

    #[test]
    fn precision_snaps_near_misses() {
        let sq = square();
        assert_eq!(contains_point(&sq, Point::new(10.001, 4.0), 2).unwrap(), PointLocation::Edge(1, 2));
        assert_eq!(contains_point(&sq, Point::new(10.001, 4.0), 3).unwrap(), PointLocation::Outside);
        assert_eq!(contains_point(&sq, Point::new(9.996, 9.999), 2).unwrap(), PointLocation::Vertex(2));
    }

    #[test]
    fn concave_polygon() {
        // A "U" opening upwards.
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(6.0, 6.0),
            Point::new(4.0, 6.0),
            Point::new(4.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 6.0),
            Point::new(0.0, 6.0),
        ];
        assert_eq!(contains_point(&u, Point::new(3.0, 4.0), 2).unwrap(), PointLocation::Outside);
        assert_eq!(contains_point(&u, Point::new(1.0, 4.0), 2).unwrap(), PointLocation::Interior);
        assert_eq!(contains_point(&u, Point::new(3.0, 1.0), 2).unwrap(), PointLocation::Interior);
        assert!(contains_point(&u, Point::new(3.0, 2.0), 2).unwrap().is_on_boundary());
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let line = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(contains_point(&line, Point::new(0.5, 0.5), 2).is_err());
    }
}
