// Copyright 2025 Lars Brubaker
// WASM bindings for polyrel

use polyrel::{Boundary, Config, Point, PolygonSource, Position};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A set of polygons queried against each other.
#[wasm_bindgen]
pub struct PolygonSetJs {
    polygons: Vec<Vec<Point>>,
    config: Config,
}

#[wasm_bindgen]
impl PolygonSetJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PolygonSetJs {
        PolygonSetJs {
            polygons: Vec::new(),
            config: Config::default(),
        }
    }

    /// Decimal places kept by every query (sweep comparisons use one fewer).
    pub fn set_precision(&mut self, dp: u32) {
        self.config = self.config.with_precision(dp);
    }

    /// Add a polygon from a flat [x0,y0, x1,y1, ...] Float64Array.
    /// Returns its index.
    pub fn add_polygon(&mut self, vertices: &[f64]) -> u32 {
        self.polygons.push(to_points(vertices));
        (self.polygons.len() - 1) as u32
    }

    pub fn polygon_count(&self) -> u32 {
        self.polygons.len() as u32
    }

    /// Position of polygon `a` relative to polygon `b`.
    /// 0=Contains 1=Inside 2=Overlaps 3=Equal 4=Disjoint, -1 on bad input.
    pub fn relative_position(&self, a: u32, b: u32) -> i32 {
        let (Some(pa), Some(pb)) = (self.polygons.get(a as usize), self.polygons.get(b as usize)) else {
            return -1;
        };
        match polyrel::relative_position(pa, pb, &self.config) {
            Ok(position) => position_code(position),
            Err(_) => -1,
        }
    }

    /// Flat [x0,y0, x1,y1, ...] of every intersection point, in sweep order.
    pub fn intersections(&self) -> Vec<f64> {
        match polyrel::find_intersections(&self.polygons, &self.config) {
            Ok(found) => found.iter().flat_map(|i| [i.point.x, i.point.y]).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Flat outline of the union, or an empty array when the polygons do not
    /// merge into one outline.
    pub fn union_outline(&self) -> Vec<f64> {
        match polyrel::boundary(&self.polygons, &self.config) {
            Ok(Boundary::Polygon(outline)) => from_points(&outline),
            _ => Vec::new(),
        }
    }

    /// Point location against polygon `index`.
    /// 0=Outside 1=Interior 2=Edge 3=Vertex, -1 on bad input.
    pub fn locate(&self, index: u32, x: f64, y: f64) -> i32 {
        let Some(poly) = self.polygons.get(index as usize) else {
            return -1;
        };
        match polyrel::contains_point(poly, Point::new(x, y), self.config.dp) {
            Ok(polyrel::PointLocation::Outside) => 0,
            Ok(polyrel::PointLocation::Interior) => 1,
            Ok(polyrel::PointLocation::Edge(..)) => 2,
            Ok(polyrel::PointLocation::Vertex(_)) => 3,
            Err(_) => -1,
        }
    }

    /// Absolute area of polygon `index`.
    pub fn area(&self, index: u32) -> f64 {
        self.polygons
            .get(index as usize)
            .map_or(0.0, |p| polyrel::area(p.vertices()))
    }
}

impl Default for PolygonSetJs {
    fn default() -> Self {
        Self::new()
    }
}

fn to_points(flat: &[f64]) -> Vec<Point> {
    flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
}

fn from_points(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

fn position_code(position: Position) -> i32 {
    match position {
        Position::Contains => 0,
        Position::Inside => 1,
        Position::Overlaps => 2,
        Position::Equal => 3,
        Position::Disjoint => 4,
    }
}

/// Convenience: union outline of two flat polygons.
#[wasm_bindgen]
pub fn union_of_two(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut set = PolygonSetJs::new();
    set.add_polygon(a);
    set.add_polygon(b);
    set.union_outline()
}
