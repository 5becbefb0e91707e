//! # Sprite Collider
//!
//! Turns a sprite's alpha silhouette into a closed outline of line segments
//! and maps that outline into world space for collision queries.
//!
//! ## Features
//!
//! - **Silhouette Extraction**: alpha threshold, Moore-neighbor tracing, collinear point removal
//! - **Local Frame**: outlines are centered on the sprite's geometric center
//! - **On-Demand Transform**: obstacles rebuild world-space segments from scale, rotation and position
//! - **Debug Capture**: world-space outlines recorded for an external renderer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_collider::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut obstacle = Obstacle::from_file("images/obstacle.png", Vec2::new(600.0, 600.0))?;
//!     obstacle.set_rotation(45.0);
//!
//!     for line in obstacle.collision_lines() {
//!         println!("{:?} -> {:?}", line.p1, line.p2);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core configuration
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod edge_detection;
pub mod physics;
pub mod debug;

#[cfg(test)]
mod tests;

pub use edge_detection::{extract_edges, extract_edges_with, ExtractionError};
pub use physics::{Obstacle, ObstacleError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        extract_edges, extract_edges_with, ExtractionError,
        Obstacle, ObstacleError,
        foundation::math::{Vec2, Point2, Transform2D},
        assets::{ImageData, PixelSource, PixelView, AssetError},
        physics::{CollisionQuery, Hole, LineSegment},
        debug::CollisionDebugVisualizer,
        config::{Config, ConfigError},
        core::config::{ExtractionConfig, Winding},
    };
}
