// Copyright 2025 Lars Brubaker
// License: MIT
//
// Outer boundary of the union of several polygons.
//
// Intersection points are spliced into every polygon ring, turning the rings
// into one planar graph whose nodes are original vertices and shared
// intersection points. Starting from the lowest-leftmost node the walk always
// takes the most counter-clockwise turn relative to the direction it arrived
// from, which keeps it on the outside of the union and traces the outline
// clockwise. Polygons that share no intersection with the traced group must
// lie inside the outline, and no graph edge left off the outline may border a
// gap that none of the inputs cover.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::area::area;
use crate::config::Config;
use crate::contains::{contains_point, PointLocation};
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::intersect::{collect, Intersection, Location};
use crate::position::{classify, Position};
use crate::source::{validate, PolygonSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of merging polygons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// Outline of the union, clockwise or in input winding when one polygon
    /// already encloses the others. No closing duplicate vertex.
    Polygon(Vec<Point>),
    /// The polygons touch or overlap but do not form one simple outline.
    NoUnion,
    /// The polygons share no boundary point and none encloses all others.
    Invalid,
}

impl Boundary {
    pub fn polygon(&self) -> Option<&[Point]> {
        match self {
            Boundary::Polygon(outline) => Some(outline),
            _ => None,
        }
    }
}

/// Merge `polygons` into the outline of their union.
///
/// ```rust
/// use polyrel::{area, boundary, Boundary, Config, Point};
///
/// let a = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
/// let b = vec![Point::new(1.0, 1.0), Point::new(3.0, 1.0), Point::new(3.0, 3.0), Point::new(1.0, 3.0)];
/// let Boundary::Polygon(outline) = boundary(&[a, b], &Config::default()).unwrap() else {
///     panic!("squares should merge");
/// };
/// assert_eq!(outline.len(), 8);
/// assert_eq!(area(&outline), 7.0);
/// ```
pub fn boundary<P: PolygonSource>(polygons: &[P], config: &Config) -> Result<Boundary> {
    if polygons.is_empty() {
        return Err(Error::NoPolygons);
    }
    let rings: Vec<&[Point]> = polygons.iter().map(|p| p.vertices()).collect();
    for (index, ring) in rings.iter().enumerate() {
        validate(ring, index)?;
    }

    let intersections = collect(&rings, config);
    let result = if intersections.is_empty() {
        enclosing(&rings, config)
    } else {
        merge(&rings, &intersections, config)
    };
    debug!(
        "merged {} polygons: {}",
        rings.len(),
        match &result {
            Boundary::Polygon(outline) => format!("outline of {} vertices", outline.len()),
            other => format!("{:?}", other),
        }
    );
    Ok(result)
}

/// No shared boundary points: the largest polygon has to enclose the rest.
fn enclosing(rings: &[&[Point]], config: &Config) -> Boundary {
    let mut largest = 0;
    for (i, ring) in rings.iter().enumerate().skip(1) {
        if area(ring) > area(rings[largest]) {
            largest = i;
        }
    }
    let outer = rings[largest];
    let encloses_all = rings
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != largest)
        .all(|(_, ring)| classify(outer, ring, config) == Position::Contains);
    if encloses_all {
        Boundary::Polygon(outer.to_vec())
    } else {
        Boundary::Invalid
    }
}

fn merge(rings: &[&[Point]], intersections: &[Intersection], config: &Config) -> Boundary {
    let graph = Graph::build(rings, intersections);
    let Some(path) = graph.outline() else {
        return Boundary::NoUnion;
    };

    let mut groups = Groups::new(rings.len());
    for intersection in intersections {
        let mut polys = intersection.polygons();
        if let Some(first) = polys.next() {
            for other in polys {
                groups.union(first, other);
            }
        }
    }
    let traced = path
        .first()
        .and_then(|&node| graph.owner(node, intersections))
        .map(|poly| groups.find(poly));

    let outline: Vec<Point> = path.iter().map(|&node| graph.point(node)).collect();
    if graph.borders_hole(&path, &outline, rings, config) {
        return Boundary::NoUnion;
    }
    for poly in 0..rings.len() {
        if Some(groups.find(poly)) == traced {
            continue;
        }
        if classify(&outline, rings[poly], config) != Position::Contains {
            debug!("polygon {} is outside the traced outline", poly);
            return Boundary::NoUnion;
        }
    }
    Boundary::Polygon(outline)
}

/// A node of the merge graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Node {
    Vertex { poly: usize, index: usize },
    /// Index into the intersection list.
    Crossing(usize),
}

struct Graph {
    points: HashMap<Node, Point>,
    neighbours: HashMap<Node, Vec<Node>>,
    edges: usize,
}

impl Graph {
    fn build(rings: &[&[Point]], intersections: &[Intersection]) -> Self {
        // Records that land on the same vertex share one node.
        let mut same = Groups::new(intersections.len());
        let mut at_vertex: HashMap<(usize, usize), usize> = HashMap::new();
        let mut on_edge: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (k, intersection) in intersections.iter().enumerate() {
            for (&poly, &location) in &intersection.locations {
                match location {
                    Location::Vertex(i) => {
                        let first = *at_vertex.entry((poly, i)).or_insert(k);
                        same.union(first, k);
                    }
                    Location::Edge(i, _) => on_edge.entry((poly, i)).or_default().push(k),
                }
            }
        }
        let canonical: Vec<usize> = (0..intersections.len()).map(|k| same.find(k)).collect();

        let mut graph = Graph {
            points: HashMap::new(),
            neighbours: HashMap::new(),
            edges: 0,
        };
        for (k, intersection) in intersections.iter().enumerate() {
            if canonical[k] == k {
                graph.points.insert(Node::Crossing(k), intersection.point);
            }
        }

        for (poly, ring) in rings.iter().enumerate() {
            let mut cycle: Vec<Node> = Vec::with_capacity(ring.len());
            for (index, &vertex) in ring.iter().enumerate() {
                let node = match at_vertex.get(&(poly, index)) {
                    Some(&k) => Node::Crossing(canonical[k]),
                    None => {
                        let node = Node::Vertex { poly, index };
                        graph.points.insert(node, vertex);
                        node
                    }
                };
                cycle.push(node);
                if let Some(crossings) = on_edge.get(&(poly, index)) {
                    let mut crossings = crossings.clone();
                    crossings.sort_by(|&a, &b| {
                        let da = (intersections[a].point - vertex).length();
                        let db = (intersections[b].point - vertex).length();
                        da.total_cmp(&db)
                    });
                    cycle.extend(crossings.into_iter().map(|k| Node::Crossing(canonical[k])));
                }
            }
            cycle.dedup();
            for i in 0..cycle.len() {
                graph.link(cycle[i], cycle[(i + 1) % cycle.len()]);
            }
        }
        graph
    }

    fn link(&mut self, a: Node, b: Node) {
        if a == b {
            return;
        }
        let forward = self.neighbours.entry(a).or_default();
        if forward.contains(&b) {
            return;
        }
        forward.push(b);
        self.neighbours.entry(b).or_default().push(a);
        self.edges += 1;
    }

    /// Every linked node gets its point in `build`.
    fn point(&self, node: Node) -> Point {
        self.points[&node]
    }

    /// A polygon the node belongs to.
    fn owner(&self, node: Node, intersections: &[Intersection]) -> Option<usize> {
        match node {
            Node::Vertex { poly, .. } => Some(poly),
            Node::Crossing(k) => intersections.get(k)?.polygons().next(),
        }
    }

    /// The node every walk starts from: lowest x, then lowest y.
    fn start(&self) -> Option<Node> {
        self.neighbours.keys().copied().min_by(|a, b| {
            self.point(*a)
                .cmp_lex(&self.point(*b))
                .then_with(|| a.cmp(b))
        })
    }

    /// Neighbour of `node` reached by the most counter-clockwise turn from
    /// `incoming`. Going straight back ranks last.
    fn turn(&self, node: Node, incoming: Point) -> Option<Node> {
        let here = self.point(node);
        let mut best: Option<(f64, Node)> = None;
        for &next in self.neighbours.get(&node)? {
            let out = self.point(next) - here;
            if out.length() == 0.0 {
                continue;
            }
            let turn = out.angle_from(incoming);
            let better = match best {
                None => true,
                Some((angle, held)) => turn > angle || (turn == angle && next < held),
            };
            if better {
                best = Some((turn, next));
            }
        }
        best.map(|(_, chosen)| chosen)
    }

    /// Trace the outer boundary. `None` when the walk does not close into a
    /// simple cycle.
    fn outline(&self) -> Option<Vec<Node>> {
        let start = self.start()?;
        let budget = 2 * self.edges + 1;
        let mut path = vec![start];
        let mut current = start;
        let mut incoming = Point::new(0.0, 1.0);
        let mut first: Option<(Node, Node)> = None;

        for _ in 0..=budget {
            let next = self.turn(current, incoming)?;
            match first {
                Some(edge) if edge == (current, next) => {
                    path.pop();
                    let distinct: HashSet<Node> = path.iter().copied().collect();
                    if distinct.len() != path.len() {
                        debug!("outline walk passes a node twice");
                        return None;
                    }
                    return Some(path);
                }
                None => first = Some((current, next)),
                _ => {}
            }
            path.push(next);
            incoming = self.point(next) - self.point(current);
            current = next;
        }
        debug!("outline walk exceeded {} steps", budget);
        None
    }

    /// Whether an edge left off the outline has, on either side, a point that
    /// lies inside the outline but in none of the input polygons.
    fn borders_hole(&self, path: &[Node], outline: &[Point], rings: &[&[Point]], config: &Config) -> bool {
        let traced: HashSet<(Node, Node)> = path
            .iter()
            .zip(path.iter().cycle().skip(1))
            .map(|(&a, &b)| (a.min(b), a.max(b)))
            .collect();
        let offset = 2.0 * config.snap_tolerance();
        let locate = |ring: &[Point], p: Point| contains_point(ring, p, config.dp).ok();

        for (&a, ends) in &self.neighbours {
            for &b in ends {
                if a > b || traced.contains(&(a, b)) {
                    continue;
                }
                let (pa, pb) = (self.point(a), self.point(b));
                let along = pb - pa;
                let length = along.length();
                if length == 0.0 {
                    continue;
                }
                let normal = Point::new(-along.y, along.x) * (offset / length);
                let mid = (pa + pb) / 2.0;
                for side in [mid + normal, mid - normal] {
                    if locate(outline, side) != Some(PointLocation::Interior) {
                        continue;
                    }
                    let covered = rings
                        .iter()
                        .any(|&ring| locate(ring, side).map_or(true, PointLocation::is_covered));
                    if !covered {
                        debug!("gap inside the outline next to ({}, {})", side.x, side.y);
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Union-find over indices.
struct Groups {
    parent: Vec<usize>,
}

impl Groups {
    fn new(n: usize) -> Self {
        Groups {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}
