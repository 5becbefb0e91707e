//! Primitive 2D collision shapes
//!
//! Plain value types with derived geometric properties. Nothing here holds
//! transform state; obstacles produce world-space segments on demand.

use approx::{AbsDiffEq, RelativeEq};
use crate::foundation::math::{Point2, Vec2};

/// A line segment between two points
///
/// Equality ignores orientation: `(a, b)` equals `(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    /// First endpoint
    pub p1: Point2,
    /// Second endpoint
    pub p2: Point2,
}

impl LineSegment {
    /// Creates a new segment
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }
    
    /// Creates a segment from raw coordinates
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }
    
    /// Vector from `p1` to `p2`
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }
    
    /// Length of the segment
    pub fn length(&self) -> f32 {
        self.direction().magnitude()
    }
    
    /// Point halfway between the endpoints
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }
    
    /// Same segment with the endpoints swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
    
    /// Closest point on the segment to `point`
    pub fn closest_point(&self, point: Point2) -> Point2 {
        let dir = self.direction();
        let len_sq = dir.magnitude_squared();
        if len_sq <= f32::EPSILON {
            return self.p1;
        }
        let t = ((point - self.p1).dot(&dir) / len_sq).clamp(0.0, 1.0);
        self.p1 + dir * t
    }
    
    /// Shortest distance from `point` to the segment
    pub fn distance_to_point(&self, point: Point2) -> f32 {
        nalgebra::distance(&self.closest_point(point), &point)
    }
    
    /// True if a circle touches or overlaps the segment
    pub fn intersects_circle(&self, center: Point2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        nalgebra::distance_squared(&closest, &center) <= radius * radius
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl AbsDiffEq for LineSegment {
    type Epsilon = f32;
    
    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }
    
    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.p1.abs_diff_eq(&other.p1, epsilon) && self.p2.abs_diff_eq(&other.p2, epsilon))
            || (self.p1.abs_diff_eq(&other.p2, epsilon) && self.p2.abs_diff_eq(&other.p1, epsilon))
    }
}

impl RelativeEq for LineSegment {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }
    
    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        (self.p1.relative_eq(&other.p1, epsilon, max_relative)
            && self.p2.relative_eq(&other.p2, epsilon, max_relative))
            || (self.p1.relative_eq(&other.p2, epsilon, max_relative)
                && self.p2.relative_eq(&other.p1, epsilon, max_relative))
    }
}

/// A circular target area, such as the cup on a golf green
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    /// Center of the hole in world space
    pub center: Point2,
    /// Radius of the hole
    pub radius: f32,
}

impl Hole {
    /// Creates a new hole
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }
    
    /// True if `point` lies inside the hole, boundary included
    pub fn contains(&self, point: Point2) -> bool {
        nalgebra::distance_squared(&self.center, &point) <= self.radius * self.radius
    }
}
