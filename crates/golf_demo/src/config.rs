//! Course configuration
//!
//! Loaded from TOML or RON through [`Config`]; every field has a default so
//! a partial file is enough.

use serde::{Deserialize, Serialize};
use sprite_collider::config::{Config, ConfigError};
use sprite_collider::core::config::ExtractionConfig;
use sprite_collider::foundation::math::Vec2;

/// Where an obstacle's sprite comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpriteSource {
    /// PNG file on disk
    File {
        /// Path to the image
        path: String,
    },
    /// Generated filled rectangle
    Rect {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Generated filled disc
    Disc {
        /// Radius in pixels
        radius: u32,
    },
}

/// One obstacle placed on the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Sprite to outline
    pub sprite: SpriteSource,
    /// World position of the sprite center
    pub position: Vec2,
    /// Initial rotation in degrees
    #[serde(default)]
    pub rotation: f32,
    /// Uniform scale
    #[serde(default = "unit_scale")]
    pub scale: f32,
    /// Rotation speed in degrees per second
    #[serde(default)]
    pub spin: f32,
}

fn unit_scale() -> f32 {
    1.0
}

/// Largest side, in pixels, of a generated sprite
pub const MAX_GENERATED_SIDE: u32 = 8192;

impl SpriteSource {
    /// Side lengths of a generated sprite, `None` for files or on overflow
    pub fn generated_size(&self) -> Option<(u32, u32)> {
        match *self {
            SpriteSource::File { .. } => None,
            SpriteSource::Rect { width, height } => Some((width, height)),
            SpriteSource::Disc { radius } => {
                let side = radius.checked_mul(2)?.checked_add(3)?;
                Some((side, side))
            }
        }
    }
}

/// Ball start state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    /// Start position
    pub position: Vec2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    /// Radius in pixels
    pub radius: f32,
}

/// Target hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    /// Center of the cup
    pub position: Vec2,
    /// Radius of the cup
    pub radius: f32,
}

/// Complete course description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Outline extraction settings shared by all obstacles
    pub extraction: ExtractionConfig,
    /// Obstacles on the course
    pub obstacles: Vec<ObstacleSpec>,
    /// Ball start state
    pub ball: BallSpec,
    /// Target hole
    pub hole: HoleSpec,
    /// Number of simulated frames
    pub frames: u32,
    /// Seconds per frame
    pub time_step: f32,
    /// Record debug outlines every frame
    pub debug_draw: bool,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            obstacles: vec![
                ObstacleSpec {
                    sprite: SpriteSource::Rect { width: 120, height: 40 },
                    position: Vec2::new(600.0, 600.0),
                    rotation: 0.0,
                    scale: 1.0,
                    spin: 45.0,
                },
                ObstacleSpec {
                    sprite: SpriteSource::Disc { radius: 50 },
                    position: Vec2::new(200.0, 200.0),
                    rotation: 0.0,
                    scale: 1.0,
                    spin: 0.0,
                },
            ],
            ball: BallSpec {
                position: Vec2::new(540.0, 480.0),
                velocity: Vec2::new(60.0, 120.0),
                radius: 8.0,
            },
            hole: HoleSpec {
                position: Vec2::new(900.0, 800.0),
                radius: 12.0,
            },
            frames: 180,
            time_step: 1.0 / 180.0,
            debug_draw: true,
        }
    }
}

impl Config for CourseConfig {}

impl CourseConfig {
    /// Validate every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.validate()?;
        if self.time_step.is_nan() || self.time_step <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "time_step",
                reason: format!("{} must be positive", self.time_step),
            });
        }
        for spec in &self.obstacles {
            if matches!(spec.sprite, SpriteSource::File { .. }) {
                continue;
            }
            match spec.sprite.generated_size() {
                Some((w, h)) if w <= MAX_GENERATED_SIDE && h <= MAX_GENERATED_SIDE => {}
                _ => {
                    return Err(ConfigError::Invalid {
                        field: "obstacles.sprite",
                        reason: format!("{:?} exceeds {} pixels per side", spec.sprite, MAX_GENERATED_SIDE),
                    });
                }
            }
        }
        if self.ball.radius.is_nan() || self.ball.radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "ball.radius",
                reason: format!("{} must be positive", self.ball.radius),
            });
        }
        Ok(())
    }
}
