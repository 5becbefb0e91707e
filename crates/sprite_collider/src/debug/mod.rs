//! Debug module for visualization and debugging tools
//!
//! Records shapes for an external renderer to draw; nothing here talks to a
//! graphics API.

pub mod draw;
pub mod collision_debug;

pub use draw::{DebugDrawSystem, DebugItem, DebugShape, DebugShapeId, Lifetime};
pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};
