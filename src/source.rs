// Copyright 2025 Lars Brubaker
// License: MIT
//
// Uniform access to polygon vertex lists, whatever object the caller holds.

use crate::boundary::{boundary, Boundary};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::geom::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that can be viewed as the vertex ring of a simple polygon.
pub trait PolygonSource {
    fn vertices(&self) -> &[Point];
}

impl PolygonSource for [Point] {
    fn vertices(&self) -> &[Point] {
        self
    }
}

impl PolygonSource for Vec<Point> {
    fn vertices(&self) -> &[Point] {
        self
    }
}

impl<const N: usize> PolygonSource for [Point; N] {
    fn vertices(&self) -> &[Point] {
        self
    }
}

impl<T: PolygonSource + ?Sized> PolygonSource for &T {
    fn vertices(&self) -> &[Point] {
        (**self).vertices()
    }
}

/// A caller-side shape: either one polygon, or a group of shapes represented
/// by their merged outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Single(Vec<Point>),
    Group { members: Vec<Shape>, outline: Vec<Point> },
}

impl Shape {
    pub fn single(vertices: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Shape::Single(vertices.into_iter().map(Into::into).collect())
    }

    /// Merge `members` into a group. Fails unless their union is a single
    /// simple outline.
    pub fn group(members: Vec<Shape>, config: &Config) -> Result<Shape> {
        match boundary(&members, config)? {
            Boundary::Polygon(outline) => Ok(Shape::Group { members, outline }),
            other => Err(Error::Unmergeable(other)),
        }
    }

    pub fn members(&self) -> &[Shape] {
        match self {
            Shape::Single(_) => &[],
            Shape::Group { members, .. } => members,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group { .. })
    }
}

impl PolygonSource for Shape {
    fn vertices(&self) -> &[Point] {
        match self {
            Shape::Single(vertices) => vertices,
            Shape::Group { outline, .. } => outline,
        }
    }
}

/// Reject vertex lists the sweeps cannot handle: fewer than three vertices,
/// non-finite coordinates and zero-length edges.
pub(crate) fn validate(vertices: &[Point], index: usize) -> Result<()> {
    let invalid = |reason: String| Error::InvalidPolygon { index, reason };
    if vertices.len() < 3 {
        return Err(invalid(format!(
            "needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }
    if let Some(i) = vertices.iter().position(|p| !p.is_finite()) {
        return Err(invalid(format!("non-finite coordinate at vertex {}", i)));
    }
    let n = vertices.len();
    if let Some(i) = (0..n).find(|&i| vertices[i] == vertices[(i + 1) % n]) {
        return Err(invalid(format!("zero-length edge at vertex {}", i)));
    }
    Ok(())
}
