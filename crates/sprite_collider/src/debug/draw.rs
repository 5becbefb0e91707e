//! Debug drawing primitives and system
//!
//! Shapes are recorded with a color and a [`Lifetime`]. Per-frame shapes vanish
//! on the next [`DebugDrawSystem::update`], timed shapes count down, and pinned
//! shapes stay until unpinned by id.

use crate::foundation::math::{Point2, Vec4};
use crate::physics::collision::LineSegment;
use std::collections::HashMap;

/// Unique identifier for pinned debug shapes
pub type DebugShapeId = String;

/// 2D geometry a renderer knows how to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Start point in world space
        start: Point2,
        /// End point in world space
        end: Point2,
    },

    /// Circle outline
    Circle {
        /// Center in world space
        center: Point2,
        /// Radius in world units
        radius: f32,
    },

    /// Single dot
    Point {
        /// Position in world space
        position: Point2,
        /// Size in pixels
        size: f32,
    },
}

impl From<&LineSegment> for DebugShape {
    fn from(segment: &LineSegment) -> Self {
        DebugShape::Line { start: segment.p1, end: segment.p2 }
    }
}

/// How long a recorded shape stays visible
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lifetime {
    /// Until the next update
    Frame,
    /// For the given number of seconds
    Seconds(f32),
    /// Until unpinned or cleared
    Pinned,
}

/// A shape with its color and remaining lifetime
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugItem {
    /// Geometry to draw
    pub shape: DebugShape,
    /// RGBA color
    pub color: Vec4,
    lifetime: Lifetime,
}

impl DebugItem {
    /// Remaining lifetime
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Age the item, returning true once it has expired
    fn age(&mut self, delta_time: f32) -> bool {
        match &mut self.lifetime {
            Lifetime::Frame => true,
            Lifetime::Seconds(left) => {
                *left -= delta_time;
                *left <= 0.0
            }
            Lifetime::Pinned => false,
        }
    }
}

/// Collects debug shapes for an external renderer
pub struct DebugDrawSystem {
    /// Frame and timed shapes, in draw order
    transient: Vec<DebugItem>,

    /// Pinned shapes keyed by id
    pinned: HashMap<DebugShapeId, DebugItem>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            transient: Vec::new(),
            pinned: HashMap::new(),
            enabled: true,
        }
    }

    /// Record a shape
    ///
    /// A [`Lifetime::Pinned`] shape drawn this way can only be removed by
    /// [`clear`](Self::clear); use [`pin`](Self::pin) to keep an id.
    pub fn draw(&mut self, shape: DebugShape, color: Vec4, lifetime: Lifetime) {
        if !self.enabled {
            return;
        }

        self.transient.push(DebugItem { shape, color, lifetime });
    }

    /// Record every segment of an outline for one frame
    pub fn draw_outline<'a, I>(&mut self, segments: I, color: Vec4)
    where
        I: IntoIterator<Item = &'a LineSegment>,
    {
        for segment in segments {
            self.draw(segment.into(), color, Lifetime::Frame);
        }
    }

    /// Record a circle outline
    pub fn draw_circle(&mut self, center: Point2, radius: f32, color: Vec4, lifetime: Lifetime) {
        self.draw(DebugShape::Circle { center, radius }, color, lifetime);
    }

    /// Keep a shape until [`unpin`](Self::unpin) is called with the same id
    pub fn pin(&mut self, id: impl Into<DebugShapeId>, shape: DebugShape, color: Vec4) {
        if !self.enabled {
            return;
        }

        self.pinned.insert(id.into(), DebugItem { shape, color, lifetime: Lifetime::Pinned });
    }

    /// Remove a pinned shape
    pub fn unpin(&mut self, id: &str) -> bool {
        self.pinned.remove(id).is_some()
    }

    /// Advance lifetimes and drop expired shapes
    ///
    /// Runs while disabled too, so nothing stale reappears on re-enable.
    pub fn update(&mut self, delta_time: f32) {
        self.transient.retain_mut(|item| !item.age(delta_time));
    }

    /// Visible items, transient ones first in draw order
    pub fn items(&self) -> Vec<&DebugItem> {
        if !self.enabled {
            return Vec::new();
        }

        self.transient.iter()
            .chain(self.pinned.values())
            .collect()
    }

    /// Number of recorded shapes, visible or not
    pub fn shape_count(&self) -> usize {
        self.transient.len() + self.pinned.len()
    }

    /// Drop every shape, pinned ones included
    pub fn clear(&mut self) {
        self.transient.clear();
        self.pinned.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec4 {
        Vec4::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_frame_shapes_last_one_update() {
        let mut system = DebugDrawSystem::new();
        let square = [
            LineSegment::from_coords(0.0, 0.0, 1.0, 0.0),
            LineSegment::from_coords(1.0, 0.0, 1.0, 1.0),
            LineSegment::from_coords(1.0, 1.0, 0.0, 1.0),
            LineSegment::from_coords(0.0, 1.0, 0.0, 0.0),
        ];

        system.draw_outline(&square, red());
        assert_eq!(system.shape_count(), 4);
        assert_eq!(system.items()[2].shape, DebugShape::from(&square[2]));

        system.update(0.0);
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_timed_shape_expiration() {
        let mut system = DebugDrawSystem::new();
        system.draw_circle(Point2::origin(), 2.0, red(), Lifetime::Seconds(1.0));

        system.update(0.5);
        assert_eq!(system.shape_count(), 1);

        // Total 1.1 seconds
        system.update(0.6);
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_pinned_shapes() {
        let mut system = DebugDrawSystem::new();
        system.pin("cup", DebugShape::Circle { center: Point2::origin(), radius: 1.0 }, red());

        for _ in 0..100 {
            system.update(1.0);
        }
        assert_eq!(system.shape_count(), 1);
        assert_eq!(system.items()[0].lifetime(), Lifetime::Pinned);

        assert!(system.unpin("cup"));
        assert!(!system.unpin("cup"));
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_disabled_system_records_nothing() {
        let mut system = DebugDrawSystem::new();
        system.enabled = false;

        system.draw(DebugShape::Point { position: Point2::origin(), size: 2.0 }, red(), Lifetime::Frame);
        assert_eq!(system.shape_count(), 0);
        assert!(system.items().is_empty());
    }

    #[test]
    fn test_shapes_expire_while_disabled() {
        let mut system = DebugDrawSystem::new();
        system.draw(DebugShape::Point { position: Point2::origin(), size: 2.0 }, red(), Lifetime::Frame);
        system.draw_circle(Point2::origin(), 1.0, red(), Lifetime::Seconds(5.0));
        system.pin("cup", DebugShape::Circle { center: Point2::origin(), radius: 1.0 }, red());

        system.enabled = false;
        for _ in 0..10 {
            system.update(1.0);
        }
        system.enabled = true;

        let items = system.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].lifetime(), Lifetime::Pinned);
    }
}
