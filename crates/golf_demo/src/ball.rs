//! The ball, reduced to a moving circular collision probe
//!
//! Collision response is left to a physics layer; the ball only reports
//! which obstacle segments it touches.

use sprite_collider::foundation::math::{Point2, Vec2};
use sprite_collider::physics::{CollisionQuery, LineSegment};

use crate::config::BallSpec;

/// Moving circle that records contacts with obstacle outlines
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center in world space
    pub position: Point2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    /// Radius in pixels
    pub radius: f32,
    contacts: Vec<LineSegment>,
}

impl Ball {
    /// Create a ball from its spec
    pub fn new(spec: &BallSpec) -> Self {
        Self {
            position: Point2::from(spec.position),
            velocity: spec.velocity,
            radius: spec.radius,
            contacts: Vec::new(),
        }
    }
    
    /// Advance by one time step and forget last frame's contacts
    pub fn update_position(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
        self.contacts.clear();
    }
    
    /// Segments touched since the last update
    pub fn contacts(&self) -> &[LineSegment] {
        &self.contacts
    }
}

impl CollisionQuery for Ball {
    fn check_segment(&mut self, segment: &LineSegment) -> bool {
        let hit = segment.intersects_circle(self.position, self.radius);
        if hit {
            self.contacts.push(*segment);
        }
        hit
    }
}
