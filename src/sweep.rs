// Copyright 2025 Lars Brubaker
// License: MIT
//
// The vertical sweep line shared by the relative-position and intersection
// queries.
//
// Stops are the distinct vertex x values. At each stop the live segments are
// moved to the new x, segments starting there are admitted, finished ones are
// dropped and the live set is re-sorted by (y at sweep precision, gradient).
// Pairs of segments from different polygons become *candidates* when
//   - their order inverted since the previous stop (they crossed in between),
//   - their y coincide at this stop within sweep precision, or
//   - one of them is vertical at this stop and the other passes through its
//     span.
// Candidates are handed back to the caller once per sweep; deciding what kind
// of contact a candidate really is happens on the caller's coordinates via
// `SweepLine::contact`.
//
// All state lives in `SweepLine` and is advanced one stop at a time by
// `step`, so a sweep can be driven (and tested) stop by stop.

use std::collections::HashSet;

use log::trace;

use crate::config::Config;
use crate::geom::{quantum, round_to, segment_contact, Contact};
use crate::segment::{Segment, XPos};

/// What happened at one sweep stop.
#[derive(Debug, Clone)]
pub struct Stop {
    pub x: f64,
    /// The following stop, if any. The slab `(x, next_x)` holds no vertex.
    pub next_x: Option<f64>,
    /// New candidate pairs `(a, b)` with `a < b`.
    pub candidates: Vec<(usize, usize)>,
}

pub struct SweepLine {
    segments: Vec<Segment>,
    /// Segment ids ordered by left endpoint, the admission order.
    pending: Vec<usize>,
    cursor: usize,
    stops: Vec<f64>,
    next_stop: usize,
    /// Live segment ids in sweep order.
    live: Vec<usize>,
    examined: HashSet<(usize, usize)>,
    config: Config,
}

impl SweepLine {
    pub fn new(segments: Vec<Segment>, config: &Config) -> Self {
        let mut stops: Vec<f64> = segments
            .iter()
            .flat_map(|s| [s.left.x, s.right.x])
            .collect();
        stops.sort_by(f64::total_cmp);
        stops.dedup();

        let mut pending: Vec<usize> = (0..segments.len()).collect();
        pending.sort_by(|&a, &b| {
            let (sa, sb) = (&segments[a], &segments[b]);
            sa.left
                .cmp_lex(&sb.left)
                .then_with(|| sa.gradient.total_cmp(&sb.gradient))
                .then_with(|| a.cmp(&b))
        });

        SweepLine {
            segments,
            pending,
            cursor: 0,
            stops,
            next_stop: 0,
            live: Vec::new(),
            examined: HashSet::new(),
            config: *config,
        }
    }

    pub fn stops(&self) -> &[f64] {
        &self.stops
    }

    pub fn segment(&self, id: usize) -> &Segment {
        &self.segments[id]
    }

    /// Live segment ids in sweep order.
    pub fn live(&self) -> &[usize] {
        &self.live
    }

    /// Advance to the next stop. Returns `None` once every stop is done.
    pub fn step(&mut self) -> Option<Stop> {
        let x = *self.stops.get(self.next_stop)?;
        self.next_stop += 1;
        let next_x = self.stops.get(self.next_stop).copied();
        let mut candidates = Vec::new();

        for &id in &self.live {
            self.segments[id].advance(x);
        }

        // Order inversions since the previous stop.
        for i in 0..self.live.len() {
            for j in i + 1..self.live.len() {
                let (a, b) = (self.live[i], self.live[j]);
                let (sa, sb) = (&self.segments[a], &self.segments[b]);
                if sa.poly != sb.poly && sa.y > sb.y {
                    self.propose(a, b, &mut candidates);
                }
            }
        }

        let mut entering = Vec::new();
        let mut verticals = Vec::new();
        while let Some(&id) = self.pending.get(self.cursor) {
            if self.segments[id].left.x != x {
                break;
            }
            self.cursor += 1;
            self.segments[id].advance(x);
            if self.segments[id].is_vertical() {
                verticals.push(id);
            } else {
                entering.push(id);
            }
        }

        // Coincidences at this stop.
        let present: Vec<usize> = self.live.iter().chain(&entering).copied().collect();
        for i in 0..present.len() {
            for j in i + 1..present.len() {
                let (a, b) = (present[i], present[j]);
                if self.segments[a].poly != self.segments[b].poly && self.coincide(a, b) {
                    self.propose(a, b, &mut candidates);
                }
            }
        }

        // Vertical segments only exist at this stop.
        let tol = self.config.sweep_tolerance();
        for (k, &v) in verticals.iter().enumerate() {
            let (bottom, top, poly) = {
                let s = &self.segments[v];
                (s.bottom - tol, s.top + tol, s.poly)
            };
            for &other in present.iter().chain(&verticals[k + 1..]) {
                let s = &self.segments[other];
                if s.poly == poly {
                    continue;
                }
                let hit = if s.is_vertical() {
                    s.bottom <= top && s.top >= bottom
                } else {
                    s.y >= bottom && s.y <= top
                };
                if hit {
                    self.propose(v, other, &mut candidates);
                }
            }
        }

        let segments = &self.segments;
        self.live.retain(|&id| segments[id].xpos != XPos::Right);
        self.live.extend(entering);
        let dp = self.config.sweep_dp;
        self.live.sort_by(|&a, &b| {
            let (sa, sb) = (&segments[a], &segments[b]);
            round_to(sa.y, dp)
                .total_cmp(&round_to(sb.y, dp))
                .then_with(|| sa.gradient.total_cmp(&sb.gradient))
                .then_with(|| sa.poly.cmp(&sb.poly))
                .then_with(|| a.cmp(&b))
        });

        trace!(
            "sweep stop x={} live={} verticals={} candidates={}",
            x,
            self.live.len(),
            verticals.len(),
            candidates.len()
        );
        Some(Stop {
            x,
            next_x,
            candidates,
        })
    }

    /// Whether two non-vertical segments meet the sweep line at the same y,
    /// allowing for the sweep precision plus the y error that x quantization
    /// introduces on steep segments.
    fn coincide(&self, a: usize, b: usize) -> bool {
        let (sa, sb) = (&self.segments[a], &self.segments[b]);
        let slack = (sa.gradient.abs() + sb.gradient.abs()) * quantum(self.config.dp) / 2.0;
        (sa.y - sb.y).abs() <= self.config.sweep_tolerance() + slack
    }

    fn propose(&mut self, a: usize, b: usize, out: &mut Vec<(usize, usize)>) {
        let key = (a.min(b), a.max(b));
        if self.examined.insert(key) {
            out.push(key);
        }
    }

    /// Exact contact between two segments, on caller coordinates.
    pub fn contact(&self, a: usize, b: usize) -> Option<Contact> {
        let (sa, sb) = (&self.segments[a], &self.segments[b]);
        segment_contact(
            sa.orig_left,
            sa.orig_right,
            sb.orig_left,
            sb.orig_right,
            self.config.snap_tolerance(),
        )
    }

    /// Live segments of `poly` paired bottom-up into inside spans for the slab
    /// `(x, next_x)`, each as `(lower id, upper id, start, end)` measured at
    /// the slab midpoint. An unpaired top segment (degenerate input) is
    /// ignored.
    pub fn slab_spans(&self, poly: usize, x: f64, next_x: f64) -> Vec<(usize, usize, f64, f64)> {
        let mid = (x + next_x) / 2.0;
        let mut at_mid: Vec<(f64, usize)> = self
            .live
            .iter()
            .filter(|&&id| self.segments[id].poly == poly)
            .map(|&id| (self.segments[id].y_at(mid), id))
            .collect();
        at_mid.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        at_mid
            .chunks_exact(2)
            .map(|pair| (pair[0].1, pair[1].1, pair[0].0, pair[1].0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::segment::build_segments;

    fn ring(points: &[(f64, f64)]) -> Vec<Point> {
        points.iter().map(|&p| p.into()).collect()
    }

    fn sweep_of(rings: &[Vec<Point>]) -> SweepLine {
        let orig: Vec<&[Point]> = rings.iter().map(|r| r.as_slice()).collect();
        SweepLine::new(build_segments(rings, &orig), &Config::default())
    }

    fn all_candidates(sweep: &mut SweepLine) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        while let Some(stop) = sweep.step() {
            out.extend(stop.candidates);
        }
        out
    }

    #[test]
    fn stops_are_distinct_vertex_xs() {
        let sweep = sweep_of(&[ring(&[(0.0, 0.0), (2.0, 1.0), (1.0, 3.0)])]);
        assert_eq!(sweep.stops(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn single_polygon_has_no_candidates() {
        let mut sweep = sweep_of(&[ring(&[(0.0, 0.0), (4.0, 1.0), (3.0, 3.0), (1.0, 2.0)])]);
        assert!(all_candidates(&mut sweep).is_empty());
    }

    #[test]
    fn crossing_edges_become_candidates() {
        // Two triangles whose edges cross between stops.
        let a = ring(&[(0.0, 0.0), (4.0, 2.0), (0.0, 3.0)]);
        let b = ring(&[(1.0, 2.5), (5.0, 0.5), (5.0, 4.0)]);
        let mut sweep = sweep_of(&[a, b]);
        let candidates = all_candidates(&mut sweep);
        assert!(!candidates.is_empty());
        let crosses = candidates
            .iter()
            .filter(|&&(x, y)| matches!(sweep.contact(x, y), Some(Contact::Cross(_))))
            .count();
        assert!(crosses >= 1);
    }

    #[test]
    fn far_apart_polygons_have_no_candidates() {
        let a = ring(&[(0.0, 0.0), (1.0, 0.5), (0.5, 1.0)]);
        let b = ring(&[(0.2, 5.0), (1.2, 5.5), (0.7, 6.0)]);
        let mut sweep = sweep_of(&[a, b]);
        assert!(all_candidates(&mut sweep).is_empty());
    }

    #[test]
    fn live_set_is_sorted_bottom_up() {
        let tri = ring(&[(0.0, 0.0), (4.0, 1.0), (1.0, 3.0)]);
        let mut sweep = sweep_of(&[tri]);
        let stop = sweep.step().unwrap();
        assert_eq!(stop.x, 0.0);
        let live = sweep.live().to_vec();
        assert_eq!(live.len(), 2);
        assert!(sweep.segment(live[0]).gradient < sweep.segment(live[1]).gradient);
        let spans = sweep.slab_spans(0, 0.0, 1.0);
        assert_eq!(spans.len(), 1);
        assert!(spans[0].2 < spans[0].3);
    }

    #[test]
    fn vertical_edge_meets_crossing_edge() {
        let a = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let b = ring(&[(1.0, 1.0), (3.0, 0.9), (3.0, 1.5)]);
        let mut sweep = sweep_of(&[a, b]);
        let candidates = all_candidates(&mut sweep);
        let vertical = (0..3).find(|&id| sweep.segment(id).is_vertical()).unwrap();
        assert!(candidates.iter().any(|&(x, y)| x == vertical || y == vertical));
    }
}
