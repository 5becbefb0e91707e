//! Collision-specific debug visualization
//!
//! Draws obstacle outlines in world space, the way they are handed to the
//! collision query, so mismatches between sprite and outline are visible.

use crate::debug::draw::{DebugDrawSystem, DebugItem, DebugShape, Lifetime};
use crate::foundation::math::{Point2, Vec4};
use crate::physics::collision::Hole;
use crate::physics::obstacle::Obstacle;

/// Color scheme for collision visualization
#[derive(Clone, Debug)]
pub struct CollisionDebugColors {
    /// Obstacle outline (no contact this frame)
    pub outline: Vec4,
    
    /// Obstacle outline (contact this frame)
    pub outline_colliding: Vec4,
    
    /// Probe bodies such as the ball
    pub probe: Vec4,
    
    /// Holes
    pub hole: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            outline: Vec4::new(1.0, 0.0, 0.0, 1.0),            // Red
            outline_colliding: Vec4::new(1.0, 0.85, 0.0, 1.0), // Yellow
            probe: Vec4::new(1.0, 1.0, 1.0, 1.0),              // White
            hole: Vec4::new(0.0, 0.0, 0.0, 1.0),               // Black
        }
    }
}

/// Collision-specific debug visualizer
pub struct CollisionDebugVisualizer {
    debug_draw: DebugDrawSystem,
    colors: CollisionDebugColors,
    
    /// Show obstacle outlines
    pub show_outlines: bool,
    
    /// Show probes and holes
    pub show_probes: bool,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self {
            debug_draw: DebugDrawSystem::new(),
            colors: CollisionDebugColors::default(),
            show_outlines: true,
            show_probes: true,
        }
    }
    
    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }
    
    /// Draw an obstacle's world-space outline for one frame
    pub fn draw_obstacle<S>(&mut self, obstacle: &Obstacle<S>, is_colliding: bool) {
        if !self.show_outlines {
            return;
        }
        
        let color = if is_colliding {
            self.colors.outline_colliding
        } else {
            self.colors.outline
        };
        
        self.debug_draw.draw_outline(&obstacle.collision_lines(), color);
    }
    
    /// Draw a circular probe for one frame
    pub fn draw_probe(&mut self, center: Point2, radius: f32) {
        if !self.show_probes {
            return;
        }
        
        self.debug_draw.draw_circle(center, radius, self.colors.probe, Lifetime::Frame);
    }
    
    /// Keep a hole on screen until cleared
    pub fn draw_hole(&mut self, id: &str, hole: &Hole) {
        if !self.show_probes {
            return;
        }
        
        self.debug_draw.pin(
            format!("hole_{}", id),
            DebugShape::Circle { center: hole.center, radius: hole.radius },
            self.colors.hole,
        );
    }
    
    /// Clear all visualization
    pub fn clear(&mut self) {
        self.debug_draw.clear();
    }
    
    /// Update debug system (expire temporary shapes)
    pub fn update(&mut self, delta_time: f32) {
        self.debug_draw.update(delta_time);
    }
    
    /// Visible debug items for rendering
    pub fn items(&self) -> Vec<&DebugItem> {
        self.debug_draw.items()
    }
    
    /// Enable/disable the entire debug system
    pub fn set_enabled(&mut self, enabled: bool) {
        self.debug_draw.enabled = enabled;
    }
    
    /// Get reference to underlying debug draw system
    pub fn debug_draw(&self) -> &DebugDrawSystem {
        &self.debug_draw
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
