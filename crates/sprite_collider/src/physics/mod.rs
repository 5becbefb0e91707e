//! Physics module: sprite obstacles and their collision geometry
//!
//! Provides obstacles that keep a sprite-derived outline in local space and
//! transform it to world space for every query.

pub mod collision;
pub mod obstacle;

pub use collision::{CollisionQuery, Hole, LineSegment};
pub use obstacle::{Obstacle, ObstacleError};
