// Copyright 2025 Lars Brubaker
// License: MIT
//
// Point/vector primitive plus the pure geometric predicates the sweeps share:
// lexicographic vertex ordering, decimal rounding, signed distances and the
// contact test between two segments.
//
// Every sweep sorts with `Point::cmp_lex`. It is a total order (0.0 and -0.0
// compare equal), so stop lists and start vertices are reproducible.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point or vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// `x1*y2 - y1*x2`.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector from the positive x axis, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle that rotates `other` onto `self`, in `(-π, π]` except that
    /// exactly opposite vectors give `-π`: a zero cross product is taken as
    /// negative zero. The boundary walk relies on a reversal ranking last.
    pub fn angle_from(self, other: Point) -> f64 {
        let cross = other.cross(self);
        let cross = if cross == 0.0 { -0.0 } else { cross };
        cross.atan2(other.dot(self))
    }

    /// Lexicographic order, x first then y.
    pub fn cmp_lex(&self, other: &Point) -> Ordering {
        cmp_f64(self.x, other.x).then_with(|| cmp_f64(self.y, other.y))
    }

    /// Rotate about the origin by `angle` radians (counter-clockwise).
    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Both coordinates rounded to `dp` decimal places.
    pub fn rounded(self, dp: u32) -> Point {
        Point::new(round_to(self.x, dp), round_to(self.y, dp))
    }

    /// Integer grid cell of the point at `dp` decimal places, used as a hash key.
    pub fn grid_key(self, dp: u32) -> (i64, i64) {
        let scale = scale(dp);
        ((self.x * scale).round() as i64, (self.y * scale).round() as i64)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        Some(self.cmp_lex(other))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// `Point * Point` is the dot product.
impl Mul for Point {
    type Output = f64;
    fn mul(self, rhs: Point) -> f64 {
        self.dot(rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

#[inline]
fn scale(dp: u32) -> f64 {
    10f64.powi(dp as i32)
}

/// Round to `dp` decimal places. Never returns negative zero.
pub fn round_to(value: f64, dp: u32) -> f64 {
    let scale = scale(dp);
    (value * scale).round() / scale + 0.0
}

/// One unit in the last kept decimal place: `10^-dp`.
#[inline]
pub fn quantum(dp: u32) -> f64 {
    1.0 / scale(dp)
}

/// Signed distance of `p` from the infinite line through `a` and `b`,
/// positive to the left of `a -> b`.
pub fn line_distance(a: Point, b: Point, p: Point) -> f64 {
    let d = b - a;
    let len = d.length();
    if len == 0.0 {
        return (p - a).length();
    }
    d.cross(p - a) / len
}

/// Distance from `p` to the closed segment `ab`.
pub fn segment_distance(a: Point, b: Point, p: Point) -> f64 {
    let d = b - a;
    let len2 = d * d;
    if len2 == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a) * d / len2).clamp(0.0, 1.0);
    (a + d * t - p).length()
}

/// Intersection of the lines `p + s*v1` and `q + t*v2`.
/// Parallel (or degenerate) lines have no intersection.
pub fn line_intersection(p: Point, v1: Point, q: Point, v2: Point) -> Option<Point> {
    let denom = v1.cross(v2);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let t = (q - p).cross(v2) / denom;
    Some(p + v1 * t)
}

/// How two segments meet.
#[derive(Clone, Debug, PartialEq)]
pub enum Contact {
    /// The segments cross at a point strictly inside both of them.
    Cross(Point),
    /// Endpoints of either segment that lie on the other one. Collinear
    /// overlaps show up here as the two extreme points of the overlap.
    Touch(Vec<Point>),
}

/// Classify how segments `p1p2` and `q1q2` meet, treating anything within
/// `eps` of a line or segment as lying on it.
pub fn segment_contact(p1: Point, p2: Point, q1: Point, q2: Point, eps: f64) -> Option<Contact> {
    let d1 = line_distance(p1, p2, q1);
    let d2 = line_distance(p1, p2, q2);
    let d3 = line_distance(q1, q2, p1);
    let d4 = line_distance(q1, q2, p2);
    let straddles = |a: f64, b: f64| (a > eps && b < -eps) || (a < -eps && b > eps);

    if straddles(d1, d2) && straddles(d3, d4) {
        return line_intersection(p1, p2 - p1, q1, q2 - q1).map(Contact::Cross);
    }

    let mut touches: Vec<Point> = Vec::new();
    for (end, a, b) in [(p1, q1, q2), (p2, q1, q2), (q1, p1, p2), (q2, p1, p2)] {
        if segment_distance(a, b, end) <= eps && !touches.iter().any(|t| (*t - end).length() <= eps) {
            touches.push(end);
        }
    }
    if touches.is_empty() {
        None
    } else {
        Some(Contact::Touch(touches))
    }
}
