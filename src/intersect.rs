// Copyright 2025 Lars Brubaker
// License: MIT
//
// Intersection-finding sweep over any number of polygons.
//
// Every candidate pair handed out by the sweep line is resolved on the
// caller's coordinates: a proper crossing gives one point, a touch gives the
// endpoints lying on the other segment (which also yields the two extreme
// points of a collinear overlap). Points are merged on a `dp` grid, and each
// record says, per polygon, whether the point is one of its vertices or lies
// inside one of its edges.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::geom::{Contact, Point};
use crate::rotate::prepare_all;
use crate::segment::{build_segments, Segment};
use crate::source::{validate, PolygonSource};
use crate::sweep::SweepLine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where an intersection sits on one polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    /// Exactly on vertex `i`.
    Vertex(usize),
    /// Strictly inside the edge from vertex `i` to vertex `j = (i + 1) % n`.
    Edge(usize, usize),
}

impl Location {
    /// Combine two references to the same point on one polygon. A vertex
    /// beats an edge, and two edges sharing a vertex collapse onto it.
    fn merge(self, other: Location) -> Location {
        match (self, other) {
            (Location::Vertex(_), _) => self,
            (Location::Edge(..), Location::Vertex(_)) => other,
            (Location::Edge(a, b), Location::Edge(c, d)) => {
                if (a, b) == (c, d) {
                    self
                } else if a == c || a == d {
                    Location::Vertex(a)
                } else if b == c || b == d {
                    Location::Vertex(b)
                } else {
                    self
                }
            }
        }
    }
}

/// A point shared by the boundaries of two or more polygons.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Intersection {
    /// Rounded to `dp` places, in caller coordinates.
    pub point: Point,
    /// Location per polygon index.
    pub locations: BTreeMap<usize, Location>,
}

impl Intersection {
    pub fn location(&self, poly: usize) -> Option<Location> {
        self.locations.get(&poly).copied()
    }

    /// Indices of the polygons meeting here.
    pub fn polygons(&self) -> impl Iterator<Item = usize> + '_ {
        self.locations.keys().copied()
    }
}

/// All points where boundaries of different polygons cross or touch, in
/// sweep order.
pub fn find_intersections<P: PolygonSource>(
    polygons: &[P],
    config: &Config,
) -> Result<Vec<Intersection>> {
    let rings: Vec<&[Point]> = polygons.iter().map(|p| p.vertices()).collect();
    for (index, ring) in rings.iter().enumerate() {
        validate(ring, index)?;
    }
    Ok(collect(&rings, config))
}

/// Intersection sweep over already validated rings.
pub(crate) fn collect(rings: &[&[Point]], config: &Config) -> Vec<Intersection> {
    if rings.len() < 2 {
        return Vec::new();
    }
    let (_, prepared) = prepare_all(rings, config);
    let mut sweep = SweepLine::new(build_segments(&prepared, rings), config);
    let mut found = IntersectionSet::new(config.dp);

    while let Some(stop) = sweep.step() {
        for (a, b) in stop.candidates {
            let Some(contact) = sweep.contact(a, b) else {
                continue;
            };
            let pair = [sweep.segment(a), sweep.segment(b)];
            match contact {
                Contact::Cross(p) => found.record(p, &pair, rings),
                Contact::Touch(points) => {
                    for p in points {
                        found.record(p, &pair, rings);
                    }
                }
            }
        }
    }

    let found = found.into_vec();
    debug!("{} polygons, {} intersections", rings.len(), found.len());
    found
}

/// Intersections keyed by their `dp` grid cell.
struct IntersectionSet {
    dp: u32,
    items: Vec<Intersection>,
    by_cell: HashMap<(i64, i64), usize>,
}

impl IntersectionSet {
    fn new(dp: u32) -> Self {
        Self {
            dp,
            items: Vec::new(),
            by_cell: HashMap::new(),
        }
    }

    fn record(&mut self, p: Point, segments: &[&Segment], rings: &[&[Point]]) {
        let point = p.rounded(self.dp);
        let cell = p.grid_key(self.dp);
        let index = match self.by_cell.get(&cell) {
            Some(&i) => i,
            None => {
                self.items.push(Intersection {
                    point,
                    locations: BTreeMap::new(),
                });
                self.by_cell.insert(cell, self.items.len() - 1);
                self.items.len() - 1
            }
        };
        for segment in segments {
            let location = attribute(segment, point, rings[segment.poly], self.dp);
            self.items[index]
                .locations
                .entry(segment.poly)
                .and_modify(|l| *l = l.merge(location))
                .or_insert(location);
        }
    }

    fn into_vec(self) -> Vec<Intersection> {
        self.items
    }
}

/// Vertex reference when `point` matches an endpoint of the segment's edge at
/// `dp` places, else an edge reference.
fn attribute(segment: &Segment, point: Point, ring: &[Point], dp: u32) -> Location {
    let (i, j) = segment.edge;
    if ring[i].rounded(dp) == point {
        Location::Vertex(i)
    } else if ring[j].rounded(dp) == point {
        Location::Vertex(j)
    } else {
        Location::Edge(i, j)
    }
}
