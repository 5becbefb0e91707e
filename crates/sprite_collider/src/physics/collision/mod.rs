//! 2D collision geometry
//!
//! # Architecture
//!
//! - **Model Space Storage**: Obstacle outlines are stored in local coordinates
//! - **On-Demand Transformation**: Outlines become world-space segments only when queried
//! - **External Response**: Intersection response belongs to whoever implements [`CollisionQuery`]
//!
//! # Module Organization
//!
//! - [`primitives`] - Segment and hole value types

pub mod primitives;

pub use primitives::{LineSegment, Hole};

/// Receiver for world-space obstacle segments
///
/// Implemented by moving bodies (a ball, a probe ray) that want to test
/// themselves against an obstacle's outline. Segments arrive in contour
/// traversal order.
pub trait CollisionQuery {
    /// Test one world-space segment, returning `true` on contact
    fn check_segment(&mut self, segment: &LineSegment) -> bool;
}
