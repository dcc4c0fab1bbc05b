// polyrel: relative position, intersections and union outlines of simple polygons
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod area;
pub mod bbox;
pub mod boundary;
pub mod config;
pub mod contains;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod position;
pub mod region;
pub mod rotate;
pub mod segment;
pub mod source;
pub mod sweep;

pub use area::{area, perimeter, polygons_equal, signed_area};
pub use bbox::{BoundingBox, BoxRelation};
pub use boundary::{boundary, Boundary};
pub use config::{Config, DEFAULT_DP, DEFAULT_PIVOT};
pub use contains::{contains_point, PointLocation};
pub use error::{Error, Result};
pub use geom::Point;
pub use intersect::{find_intersections, Intersection, Location};
pub use position::{relative_position, Position};
pub use rotate::Rotation;
pub use source::{PolygonSource, Shape};
