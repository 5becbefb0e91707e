//! Headless course simulation
//!
//! Each frame spins the obstacles, moves the ball, hands every world-space
//! outline to the ball and checks the hole.

use thiserror::Error;
use sprite_collider::assets::AssetError;
use sprite_collider::config::ConfigError;
use sprite_collider::debug::CollisionDebugVisualizer;
use sprite_collider::edge_detection::ExtractionError;
use sprite_collider::foundation::math::{Point2, Transform2D};
use sprite_collider::physics::{Hole, Obstacle};

use crate::ball::Ball;
use crate::config::CourseConfig;
use crate::sprites::load_sprite;

/// Errors raised while building a course
#[derive(Error, Debug)]
pub enum CourseError {
    /// Config values are unusable
    #[error("Course config error: {0}")]
    Config(#[from] ConfigError),
    
    /// A sprite could not be loaded
    #[error("Sprite error: {0}")]
    Asset(#[from] AssetError),
    
    /// A sprite could not be outlined
    #[error("Outline error: {0}")]
    Extraction(#[from] ExtractionError),
}

/// An obstacle and how fast it turns
struct SpinningObstacle {
    obstacle: Obstacle,
    spin: f32,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Segments the ball touched
    pub contacts: usize,
    /// Ball is inside the hole
    pub sunk: bool,
}

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: u32,
    /// Segment contacts over all frames
    pub contacts: usize,
    /// Frames with at least one contact
    pub frames_with_contact: u32,
    /// Frame on which the ball dropped in, if it did
    pub sunk_on_frame: Option<u32>,
}

/// A course: obstacles, a ball and a hole
pub struct Course {
    obstacles: Vec<SpinningObstacle>,
    ball: Ball,
    hole: Hole,
    debug: Option<CollisionDebugVisualizer>,
}

impl Course {
    /// Build every obstacle described by `config`
    pub fn from_config(config: &CourseConfig) -> Result<Self, CourseError> {
        config.validate()?;
        
        let mut obstacles = Vec::with_capacity(config.obstacles.len());
        for spec in &config.obstacles {
            let sprite = load_sprite(&spec.sprite)?;
            let transform = Transform2D::new(spec.position, spec.rotation, spec.scale);
            let obstacle = Obstacle::with_config(sprite, transform, &config.extraction)?;
            log::info!(
                "Obstacle at ({:.0}, {:.0}): {:?} sprite, {} outline segments",
                spec.position.x, spec.position.y, obstacle.sprite_size(), obstacle.local_lines().len()
            );
            obstacles.push(SpinningObstacle { obstacle, spin: spec.spin });
        }
        
        let mut debug = config.debug_draw.then(CollisionDebugVisualizer::new);
        let hole = Hole::new(Point2::from(config.hole.position), config.hole.radius);
        if let Some(visualizer) = debug.as_mut() {
            visualizer.draw_hole("course", &hole);
        }
        
        Ok(Self {
            obstacles,
            ball: Ball::new(&config.ball),
            hole,
            debug,
        })
    }
    
    /// Current ball state
    pub fn ball(&self) -> &Ball {
        &self.ball
    }
    
    /// Number of obstacles
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
    
    /// Debug shapes recorded this frame, if debug drawing is on
    pub fn debug_shape_count(&self) -> usize {
        self.debug.as_ref().map_or(0, |visualizer| visualizer.items().len())
    }
    
    /// Advance one frame
    pub fn step(&mut self, delta_time: f32) -> FrameReport {
        self.ball.update_position(delta_time);
        if let Some(visualizer) = self.debug.as_mut() {
            visualizer.update(delta_time);
        }
        
        let mut contacts = 0;
        for entry in &mut self.obstacles {
            if entry.spin != 0.0 {
                let rotation = entry.obstacle.rotation() + entry.spin * delta_time;
                entry.obstacle.set_rotation(rotation % 360.0);
            }
            
            let hits = entry.obstacle.collide(&mut self.ball);
            contacts += hits;
            
            if let Some(visualizer) = self.debug.as_mut() {
                visualizer.draw_obstacle(&entry.obstacle, hits > 0);
            }
        }
        
        if let Some(visualizer) = self.debug.as_mut() {
            visualizer.draw_probe(self.ball.position, self.ball.radius);
        }
        
        FrameReport {
            contacts,
            sunk: self.hole.contains(self.ball.position),
        }
    }
    
    /// Run up to `frames` frames, stopping early once the ball is sunk
    pub fn run(&mut self, frames: u32, delta_time: f32) -> RunSummary {
        let mut summary = RunSummary::default();
        
        for frame in 0..frames {
            let report = self.step(delta_time);
            summary.frames += 1;
            summary.contacts += report.contacts;
            
            if report.contacts > 0 {
                summary.frames_with_contact += 1;
                log::debug!("Frame {}: ball touched {} segments", frame, self.ball.contacts().len());
            }
            if report.sunk {
                log::info!("Ball dropped in on frame {}", frame);
                summary.sunk_on_frame = Some(frame);
                break;
            }
        }
        
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BallSpec, HoleSpec, ObstacleSpec, SpriteSource};
    use sprite_collider::foundation::math::Vec2;

    fn single_wall_course() -> CourseConfig {
        CourseConfig {
            obstacles: vec![ObstacleSpec {
                sprite: SpriteSource::Rect { width: 20, height: 100 },
                position: Vec2::new(100.0, 0.0),
                rotation: 0.0,
                scale: 1.0,
                spin: 0.0,
            }],
            ball: BallSpec {
                position: Vec2::new(0.0, 0.0),
                velocity: Vec2::new(100.0, 0.0),
                radius: 2.0,
            },
            hole: HoleSpec {
                position: Vec2::new(-500.0, -500.0),
                radius: 5.0,
            },
            frames: 120,
            time_step: 1.0 / 60.0,
            debug_draw: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ball_rolling_into_wall_reports_contacts() {
        let config = single_wall_course();
        let mut course = Course::from_config(&config).unwrap();
        
        let summary = course.run(config.frames, config.time_step);
        
        assert_eq!(summary.frames, 120);
        assert!(summary.frames_with_contact > 0);
        assert_eq!(summary.sunk_on_frame, None);
    }

    #[test]
    fn test_ball_sinks_and_run_stops() {
        let mut config = single_wall_course();
        config.hole = HoleSpec { position: Vec2::new(10.0, 0.0), radius: 6.0 };
        let mut course = Course::from_config(&config).unwrap();
        
        let summary = course.run(config.frames, config.time_step);
        
        assert!(summary.sunk_on_frame.is_some());
        assert!(summary.frames < 120);
    }

    #[test]
    fn test_debug_outlines_are_recorded_per_frame() {
        let config = single_wall_course();
        let mut course = Course::from_config(&config).unwrap();
        course.step(config.time_step);
        
        // Four outline segments, the ball and the persistent hole
        assert_eq!(course.debug_shape_count(), 6);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_loading() {
        let mut config = single_wall_course();
        config.time_step = -1.0;
        assert!(matches!(Course::from_config(&config), Err(CourseError::Config(_))));
    }

    #[test]
    fn test_missing_sprite_file_fails_the_course() {
        let mut config = single_wall_course();
        config.obstacles[0].sprite = SpriteSource::File { path: "nope/wall.png".into() };
        assert!(matches!(Course::from_config(&config), Err(CourseError::Asset(_))));
    }
}
