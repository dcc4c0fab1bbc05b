// Copyright 2025 Lars Brubaker
// License: MIT
//
// Degeneracy avoidance before sweeping.
//
// The sweeps assume no edge is vertical. When some input edge is, every
// polygon of the query is rotated by half the smallest nonzero edge angle
// (measured from vertical) about a distant pivot, which leaves no edge
// vertical. Afterwards x coordinates are quantized to `dp` places so that
// x values differing only by rotation noise land on the same sweep stop.

use log::debug;

use crate::config::Config;
use crate::geom::{round_to, Point};

/// Rotation used when every edge is vertical, which only degenerate input
/// can produce.
const FALLBACK_ANGLE: f64 = std::f64::consts::PI / 8.0;

/// A rotation about a pivot, shared by every polygon of one query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    pub angle: f64,
    pub pivot: Point,
}

impl Rotation {
    pub fn identity() -> Self {
        Rotation {
            angle: 0.0,
            pivot: Point::default(),
        }
    }

    /// Pick the rotation for a set of rings.
    pub fn choose<'a, I>(rings: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        let mut has_vertical = false;
        let mut min_tilt = f64::INFINITY;
        for ring in rings {
            let n = ring.len();
            for i in 0..n {
                let d = ring[(i + 1) % n] - ring[i];
                let tilt = edge_tilt(d);
                if tilt == 0.0 {
                    has_vertical = true;
                } else if tilt < min_tilt {
                    min_tilt = tilt;
                }
            }
        }
        if !has_vertical {
            return Rotation::identity();
        }
        let angle = if min_tilt.is_finite() {
            min_tilt / 2.0
        } else {
            FALLBACK_ANGLE
        };
        debug!("vertical edge present, rotating by {:.6} rad", angle);
        Rotation {
            angle,
            pivot: config.pivot,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    pub fn apply(&self, p: Point) -> Point {
        if self.is_identity() {
            return p;
        }
        self.pivot + (p - self.pivot).rotated(self.angle)
    }

    pub fn invert(&self, p: Point) -> Point {
        if self.is_identity() {
            return p;
        }
        self.pivot + (p - self.pivot).rotated(-self.angle)
    }

    /// Rotate a ring and quantize its x coordinates to `dp` places.
    pub fn prepare(&self, ring: &[Point], dp: u32) -> Vec<Point> {
        ring.iter()
            .map(|&p| {
                let r = self.apply(p);
                Point::new(round_to(r.x, dp), r.y)
            })
            .collect()
    }
}

/// Absolute angle between an edge direction and the vertical, in `[0, π/2]`.
fn edge_tilt(d: Point) -> f64 {
    d.x.abs().atan2(d.y.abs())
}

/// Rotate every ring of a query with one shared rotation.
pub fn prepare_all(rings: &[&[Point]], config: &Config) -> (Rotation, Vec<Vec<Point>>) {
    let rotation = Rotation::choose(rings.iter().copied(), config);
    let prepared = rings
        .iter()
        .map(|ring| rotation.prepare(ring, config.dp))
        .collect();
    (rotation, prepared)
}
