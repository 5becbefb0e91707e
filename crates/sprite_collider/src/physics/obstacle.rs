//! Sprite-backed obstacles
//!
//! An obstacle extracts its outline once, at construction, and keeps it in
//! the sprite's local frame. World-space segments are rebuilt from the
//! current [`Transform2D`] on every query and never cached, so callers in
//! tight loops should hold on to the returned list for the frame.

use std::path::Path;
use thiserror::Error;

use crate::assets::{AssetError, ImageData, PixelSource};
use crate::core::config::ExtractionConfig;
use crate::edge_detection::{extract_edges_with, ExtractionError};
use crate::foundation::math::{Point2, Transform2D, Vec2};
use super::collision::{CollisionQuery, LineSegment};

/// Errors raised while building an obstacle from a sprite file
#[derive(Error, Debug)]
pub enum ObstacleError {
    /// Sprite could not be loaded
    #[error(transparent)]
    Asset(#[from] AssetError),
    
    /// Sprite could not be outlined
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// A static collidable sprite with a mutable world transform
#[derive(Debug, Clone)]
pub struct Obstacle<S = ImageData> {
    sprite: S,
    transform: Transform2D,
    local_lines: Vec<LineSegment>,
}

impl<S: PixelSource> Obstacle<S> {
    /// Outline `sprite` and place it at `position` with no rotation and unit scale
    pub fn new(sprite: S, position: Vec2) -> Result<Self, ExtractionError> {
        Self::with_transform(sprite, position, 0.0, 1.0)
    }
    
    /// Outline `sprite` and place it with a full transform
    ///
    /// `rotation` is in degrees.
    pub fn with_transform(sprite: S, position: Vec2, rotation: f32, scale: f32) -> Result<Self, ExtractionError> {
        Self::with_config(sprite, Transform2D::new(position, rotation, scale), &ExtractionConfig::default())
    }
    
    /// Outline `sprite` with explicit extraction settings
    pub fn with_config(sprite: S, transform: Transform2D, config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        let local_lines = extract_edges_with(&sprite, config)?;
        if local_lines.is_empty() {
            log::warn!("Sprite has no visible boundary; obstacle will not collide");
        }
        
        Ok(Self {
            sprite,
            transform,
            local_lines,
        })
    }
    
    /// Sprite size in pixels
    pub fn sprite_size(&self) -> (u32, u32) {
        self.sprite.dimensions()
    }
}

impl Obstacle<ImageData> {
    /// Load a sprite file and outline it
    pub fn from_file<P: AsRef<Path>>(path: P, position: Vec2) -> Result<Self, ObstacleError> {
        Self::from_file_with(path, Transform2D::from_position(position), &ExtractionConfig::default())
    }
    
    /// Load a sprite file and outline it with explicit settings
    pub fn from_file_with<P: AsRef<Path>>(
        path: P,
        transform: Transform2D,
        config: &ExtractionConfig,
    ) -> Result<Self, ObstacleError> {
        let sprite = ImageData::from_file(path)?;
        Ok(Self::with_config(sprite, transform, config)?)
    }
}

impl<S> Obstacle<S> {
    /// The owned sprite
    pub fn sprite(&self) -> &S {
        &self.sprite
    }
    
    /// Current transform
    pub fn transform(&self) -> Transform2D {
        self.transform
    }
    
    /// World position of the sprite center
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }
    
    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.transform.rotation
    }
    
    /// Uniform scale
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }
    
    /// Outline in the sprite's centered local frame
    pub fn local_lines(&self) -> &[LineSegment] {
        &self.local_lines
    }
    
    /// Replace the whole transform
    pub fn set_transform(&mut self, transform: Transform2D) {
        self.transform = transform;
    }
    
    /// Move the sprite center
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }
    
    /// Set rotation in degrees
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.rotation = rotation;
    }
    
    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
    }
    
    /// Replace the local outline, e.g. with a hand-authored shape
    pub fn set_collision_lines(&mut self, lines: Vec<LineSegment>) {
        self.local_lines = lines;
    }
    
    /// Map a local point to world space (scale, rotate, translate)
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.transform.transform_point(point)
    }
    
    /// Map a local segment to world space
    pub fn transform_line(&self, line: &LineSegment) -> LineSegment {
        LineSegment::new(self.transform_point(line.p1), self.transform_point(line.p2))
    }
    
    /// World-space outline for the current transform
    pub fn collision_lines(&self) -> Vec<LineSegment> {
        let rotation = self.transform.rotation_matrix();
        self.local_lines
            .iter()
            .map(|line| LineSegment::new(
                self.transform.transform_point_with(&rotation, line.p1),
                self.transform.transform_point_with(&rotation, line.p2),
            ))
            .collect()
    }
    
    /// Feed every world-space segment to `query`, returning the contact count
    pub fn collide<Q: CollisionQuery + ?Sized>(&self, query: &mut Q) -> usize {
        self.collision_lines()
            .iter()
            .filter(|segment| query.check_segment(segment))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::rc::Rc;

    const EPSILON: f32 = 1e-4;

    fn square_sprite(size: u32) -> ImageData {
        ImageData::solid_color(size, size, [200, 120, 40, 255])
    }

    struct CountingQuery {
        seen: usize,
        max_x: f32,
    }

    impl CollisionQuery for CountingQuery {
        fn check_segment(&mut self, segment: &LineSegment) -> bool {
            self.seen += 1;
            segment.p1.x > self.max_x || segment.p2.x > self.max_x
        }
    }

    #[test]
    fn test_defaults() {
        let obstacle = Obstacle::new(square_sprite(4), Vec2::new(10.0, 20.0)).unwrap();
        
        assert_eq!(obstacle.position(), Vec2::new(10.0, 20.0));
        assert_eq!(obstacle.rotation(), 0.0);
        assert_eq!(obstacle.scale(), 1.0);
        assert_eq!(obstacle.sprite_size(), (4, 4));
        assert_eq!(obstacle.local_lines().len(), 4);
    }

    #[test]
    fn test_identity_transform_returns_local_lines() {
        let obstacle = Obstacle::new(square_sprite(6), Vec2::zeros()).unwrap();
        
        assert_eq!(obstacle.collision_lines(), obstacle.local_lines().to_vec());
    }

    #[test]
    fn test_translation_only() {
        let obstacle = Obstacle::new(square_sprite(4), Vec2::new(100.0, 50.0)).unwrap();
        
        for (world, local) in obstacle.collision_lines().iter().zip(obstacle.local_lines()) {
            assert_relative_eq!(world.p1, local.p1 + Vec2::new(100.0, 50.0), epsilon = EPSILON);
            assert_relative_eq!(world.p2, local.p2 + Vec2::new(100.0, 50.0), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_full_turn_restores_lines() {
        let mut obstacle = Obstacle::with_transform(square_sprite(5), Vec2::new(3.0, -7.0), 30.0, 2.0).unwrap();
        let before = obstacle.collision_lines();
        
        obstacle.set_rotation(390.0);
        let after = obstacle.collision_lines();
        
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_relative_eq!(*a, *b, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_quarter_turn_with_scale() {
        let mut obstacle = Obstacle::new(square_sprite(4), Vec2::zeros()).unwrap();
        obstacle.set_collision_lines(vec![LineSegment::from_coords(1.0, 0.0, 1.0, 1.0)]);
        obstacle.set_transform(Transform2D::new(Vec2::new(10.0, 0.0), 90.0, 2.0));
        
        let lines = obstacle.collision_lines();
        assert_relative_eq!(lines[0], LineSegment::from_coords(10.0, 2.0, 8.0, 2.0), epsilon = EPSILON);
        assert_relative_eq!(
            obstacle.transform_line(&obstacle.local_lines()[0]),
            lines[0],
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_mutators_apply_on_next_query() {
        let mut obstacle = Obstacle::new(square_sprite(4), Vec2::zeros()).unwrap();
        let base = obstacle.collision_lines();
        
        obstacle.set_position(Vec2::new(5.0, 5.0));
        obstacle.set_scale(3.0);
        let moved = obstacle.collision_lines();
        
        assert_eq!(obstacle.transform(), Transform2D::new(Vec2::new(5.0, 5.0), 0.0, 3.0));
        for (b, m) in base.iter().zip(moved.iter()) {
            assert_relative_eq!(m.p1, Point2::from(b.p1.coords * 3.0 + Vec2::new(5.0, 5.0)), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_transparent_sprite_is_a_legal_empty_obstacle() {
        let obstacle = Obstacle::new(ImageData::solid_color(8, 8, [0, 0, 0, 0]), Vec2::zeros()).unwrap();
        let mut query = CountingQuery { seen: 0, max_x: 0.0 };
        
        assert!(obstacle.collision_lines().is_empty());
        assert_eq!(obstacle.collide(&mut query), 0);
        assert_eq!(query.seen, 0);
    }

    #[test]
    fn test_collide_visits_every_segment() {
        let obstacle = Obstacle::new(square_sprite(4), Vec2::zeros()).unwrap();
        let mut query = CountingQuery { seen: 0, max_x: 0.5 };
        
        // Local square spans x in [-2, 1]; only the right edge and the two
        // horizontal edges reach past x = 0.5
        assert_eq!(obstacle.collide(&mut query), 3);
        assert_eq!(query.seen, 4);
    }

    #[test]
    fn test_zero_sized_sprite_is_an_error() {
        let result = Obstacle::new(ImageData::solid_color(0, 0, [0, 0, 0, 255]), Vec2::zeros());
        assert!(matches!(result, Err(ExtractionError::EmptyImage { .. })));
    }

    #[test]
    fn test_missing_file_surfaces_asset_error() {
        let result = Obstacle::from_file("no/such/sprite.png", Vec2::zeros());
        assert!(matches!(result, Err(ObstacleError::Asset(AssetError::NotFound(_)))));
    }

    #[test]
    fn test_drop_releases_sprite() {
        struct TrackedSprite {
            image: ImageData,
            _guard: Rc<()>,
        }

        impl PixelSource for TrackedSprite {
            fn dimensions(&self) -> (u32, u32) {
                self.image.dimensions()
            }

            fn pixel_view(&self) -> crate::assets::PixelView<'_> {
                self.image.pixel_view()
            }
        }

        let guard = Rc::new(());
        let sprite = TrackedSprite { image: square_sprite(3), _guard: Rc::clone(&guard) };
        let obstacle = Obstacle::new(sprite, Vec2::zeros()).unwrap();
        assert_eq!(Rc::strong_count(&guard), 2);
        
        drop(obstacle);
        assert_eq!(Rc::strong_count(&guard), 1);
    }

    #[test]
    fn test_obstacle_is_thread_safe_for_plain_images() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Obstacle<ImageData>>();
    }
}
