//! Math utilities and types
//!
//! Provides the 2D math types used by the extraction pipeline and the
//! obstacle transform.

use serde::{Serialize, Deserialize};

pub use nalgebra::{Vector2, Rotation2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 4D vector type, used for RGBA colors
pub type Vec4 = nalgebra::Vector4<f32>;

/// 2D transform applied as scale, then rotation, then translation
///
/// Rotation is stored in degrees and applied counter-clockwise in a
/// standard right-handed 2D frame. Scale is uniform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Translation applied last
    pub position: Vec2,
    
    /// Rotation in degrees
    pub rotation: f32,
    
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }
    
    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
    
    /// Create a transform from all three components
    pub fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }
    
    /// Rotation as a nalgebra rotation
    pub fn rotation_matrix(&self) -> Rotation2<f32> {
        Rotation2::new(utils::deg_to_rad(self.rotation))
    }
    
    /// Apply this transform to a point (scale, rotate, translate)
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.transform_point_with(&self.rotation_matrix(), point)
    }
    
    /// Apply this transform reusing an already computed rotation
    ///
    /// Lets callers transforming many points evaluate sin/cos once.
    pub fn transform_point_with(&self, rotation: &Rotation2<f32>, point: Point2) -> Point2 {
        let scaled = point.coords * self.scale;
        let rotated = rotation * scaled;
        Point2::from(rotated + self.position)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;
    
    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;
    
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}
