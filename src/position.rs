// Copyright 2025 Lars Brubaker
// License: MIT
//
// Relative position of two polygons.
//
// The bounding boxes settle the easy cases. Otherwise both polygons are swept
// together: any proper crossing of their boundaries means they overlap, and
// in every slab between two stops the inside spans of the second polygon are
// compared with those of the first. Each span votes Contains or Disjoint;
// anything in between, or two different votes, means Overlaps.

use log::{debug, trace};

use crate::area::{area, perimeter, polygons_equal};
use crate::bbox::{BoundingBox, BoxRelation};
use crate::config::Config;
use crate::error::Result;
use crate::geom::{Contact, Point};
use crate::region::{Region, RegionArena};
use crate::rotate::prepare_all;
use crate::segment::build_segments;
use crate::source::{validate, PolygonSource};
use crate::sweep::SweepLine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of polygon A relative to polygon B.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// A encloses B.
    Contains,
    /// A lies within B.
    Inside,
    /// The interiors intersect but neither encloses the other.
    Overlaps,
    Equal,
    /// The interiors do not intersect. Boundaries may touch.
    Disjoint,
}

impl Position {
    /// The position of B relative to A.
    pub fn inverse(self) -> Position {
        match self {
            Position::Contains => Position::Inside,
            Position::Inside => Position::Contains,
            other => other,
        }
    }
}

/// Classify `a` against `b`.
///
/// ```rust
/// use polyrel::{relative_position, Config, Point, Position};
///
/// let outer = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
/// let inner = [Point::new(2.0, 2.0), Point::new(4.0, 2.0), Point::new(4.0, 4.0), Point::new(2.0, 4.0)];
/// let config = Config::default();
/// assert_eq!(relative_position(&outer, &inner, &config).unwrap(), Position::Contains);
/// assert_eq!(relative_position(&inner, &outer, &config).unwrap(), Position::Inside);
/// ```
pub fn relative_position<A, B>(a: &A, b: &B, config: &Config) -> Result<Position>
where
    A: PolygonSource + ?Sized,
    B: PolygonSource + ?Sized,
{
    let (va, vb) = (a.vertices(), b.vertices());
    validate(va, 0)?;
    validate(vb, 1)?;
    Ok(classify(va, vb, config))
}

/// What the bounding boxes alone say about a pair.
#[derive(Debug, PartialEq)]
pub(crate) enum Prefilter<'a> {
    Decided(Position),
    /// Sweep `outer` against `inner`; `transposed` when they were swapped.
    Sweep {
        outer: &'a [Point],
        inner: &'a [Point],
        transposed: bool,
    },
}

pub(crate) fn prefilter<'a>(a: &'a [Point], b: &'a [Point], config: &Config) -> Prefilter<'a> {
    let dp = Some(config.dp);
    let (Some(box_a), Some(box_b)) = (BoundingBox::of(a, dp, dp), BoundingBox::of(b, dp, dp)) else {
        return Prefilter::Decided(Position::Disjoint);
    };
    let (outer, inner, transposed) = match box_a.compare(&box_b) {
        relation if relation.excludes_overlap() => {
            debug!("bounding boxes {:?}, polygons disjoint", relation);
            return Prefilter::Decided(Position::Disjoint);
        }
        BoxRelation::Equal => {
            let rounded = |ring: &[Point]| -> Vec<Point> { ring.iter().map(|p| p.rounded(config.dp)).collect() };
            if polygons_equal(&rounded(a), &rounded(b)) {
                debug!("equal bounding boxes and equal vertices");
                return Prefilter::Decided(Position::Equal);
            }
            if area(b) > area(a) {
                (b, a, true)
            } else {
                (a, b, false)
            }
        }
        BoxRelation::Inside => (b, a, true),
        _ => (a, b, false),
    };
    Prefilter::Sweep {
        outer,
        inner,
        transposed,
    }
}

pub(crate) fn classify(a: &[Point], b: &[Point], config: &Config) -> Position {
    let (outer, inner, transposed) = match prefilter(a, b, config) {
        Prefilter::Decided(position) => return position,
        Prefilter::Sweep {
            outer,
            inner,
            transposed,
        } => (outer, inner, transposed),
    };
    match sweep_position(outer, inner, config) {
        Position::Contains if same_area(outer, inner, config) => Position::Equal,
        Position::Contains if transposed => Position::Inside,
        position => position,
    }
}

/// Areas that differ by no more than the rounding noise the boundary can
/// carry at sweep precision.
fn same_area(outer: &[Point], inner: &[Point], config: &Config) -> bool {
    let (ao, ai) = (area(outer), area(inner));
    config.sweep_eq(ao, ai) || (ao - ai).abs() <= perimeter(outer) * config.snap_tolerance()
}

const OUTER: usize = 0;
const INNER: usize = 1;

/// Running verdict of one relative-position sweep.
struct PositionSweep {
    regions: RegionArena,
    vote: Option<Position>,
    tolerance: f64,
}

impl PositionSweep {
    fn new(config: &Config) -> Self {
        Self {
            regions: RegionArena::new(),
            vote: None,
            tolerance: config.sweep_tolerance() / 2.0,
        }
    }

    /// Record one slab. Returns `Some(Overlaps)` as soon as the outcome is
    /// settled.
    fn slab(&mut self, outer: &[(usize, usize, f64, f64)], inner: &[(usize, usize, f64, f64)]) -> Option<Position> {
        self.regions.update(OUTER, outer);
        let ended = self.regions.update(INNER, inner);
        if !ended.is_empty() {
            trace!("{} inner regions ended", ended.len());
        }
        let votes: Vec<Position> = self
            .regions
            .open(INNER)
            .map(|region| self.judge(region))
            .collect();
        for vote in votes {
            match (self.vote, vote) {
                (_, Position::Overlaps) => return Some(Position::Overlaps),
                (None, v) => self.vote = Some(v),
                (Some(current), v) if current != v => return Some(Position::Overlaps),
                _ => {}
            }
        }
        None
    }

    /// Vote of one inner region against the open outer regions.
    fn judge(&self, region: &Region) -> Position {
        let t = self.tolerance;
        let mut outer = self.regions.open(OUTER).peekable();
        if outer.peek().is_none() {
            return Position::Disjoint;
        }
        let mut disjoint = true;
        for o in outer {
            if o.start <= region.start + t && region.end <= o.end + t {
                return Position::Contains;
            }
            if !(region.end <= o.start + t || o.end <= region.start + t) {
                disjoint = false;
            }
        }
        if disjoint {
            Position::Disjoint
        } else {
            Position::Overlaps
        }
    }

    fn finish(self) -> Position {
        self.vote.unwrap_or(Position::Disjoint)
    }
}

/// Sweep `outer` and `inner` together and vote as described above.
fn sweep_position(outer: &[Point], inner: &[Point], config: &Config) -> Position {
    let rings = [outer, inner];
    let (_, prepared) = prepare_all(&rings, config);
    let mut sweep = SweepLine::new(build_segments(&prepared, &rings), config);
    let mut state = PositionSweep::new(config);

    while let Some(stop) = sweep.step() {
        for &(a, b) in &stop.candidates {
            if let Some(Contact::Cross(p)) = sweep.contact(a, b) {
                debug!("boundaries cross at ({}, {}), polygons overlap", p.x, p.y);
                return Position::Overlaps;
            }
        }
        let Some(next_x) = stop.next_x else {
            break;
        };
        let outer_spans = sweep.slab_spans(OUTER, stop.x, next_x);
        let inner_spans = sweep.slab_spans(INNER, stop.x, next_x);
        if let Some(settled) = state.slab(&outer_spans, &inner_spans) {
            debug!("inner region straddles outer boundary at x={}", stop.x);
            return settled;
        }
    }
    state.finish()
}
