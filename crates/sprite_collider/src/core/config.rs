//! # Extraction Configuration
//!
//! Tunables for turning a sprite silhouette into collision lines. The
//! defaults reproduce the classic behavior: any non-zero alpha is solid,
//! clockwise Moore-neighbor tracing, and a 0.99 cosine cut-off (roughly
//! 8 degrees) for merging collinear contour points.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Default cosine above which consecutive contour directions are merged
pub const DEFAULT_MIN_COSINE: f32 = 0.99;

/// Order in which the tracer walks the 8 neighbors of a boundary pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// E, SE, S, SW, W, NW, N, NE (image space, y down)
    #[default]
    Clockwise,
    /// E, NE, N, NW, W, SW, S, SE (image space, y down)
    CounterClockwise,
}

/// # Extraction Configuration
///
/// Controls mask thresholding, contour tracing and simplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Pixels with alpha strictly greater than this are solid
    pub alpha_threshold: u8,
    /// Interior points whose in/out directions have a cosine at or above
    /// this value are dropped
    pub min_cosine: f32,
    /// Neighbor scan order for the boundary tracer
    pub winding: Winding,
    /// Upper bound on tracer steps; `None` means width * height
    pub max_trace_steps: Option<usize>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 0,
            min_cosine: DEFAULT_MIN_COSINE,
            winding: Winding::Clockwise,
            max_trace_steps: None,
        }
    }
}

impl Config for ExtractionConfig {}

impl ExtractionConfig {
    /// Default configuration with a custom alpha threshold
    pub fn with_threshold(alpha_threshold: u8) -> Self {
        Self {
            alpha_threshold,
            ..Default::default()
        }
    }
    
    /// Builder pattern: set the winding
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }
    
    /// Builder pattern: set the simplification cosine
    pub fn with_min_cosine(mut self, min_cosine: f32) -> Self {
        self.min_cosine = min_cosine;
        self
    }
    
    /// Builder pattern: cap the number of tracer steps
    pub fn with_max_trace_steps(mut self, steps: usize) -> Self {
        self.max_trace_steps = Some(steps);
        self
    }
    
    /// Step bound for a grid of the given size
    pub fn trace_step_limit(&self, width: usize, height: usize) -> usize {
        self.max_trace_steps.unwrap_or(width * height)
    }
    
    /// Validate that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-1.0..=1.0).contains(&self.min_cosine) {
            return Err(ConfigError::Invalid {
                field: "min_cosine",
                reason: format!("{} is not within [-1, 1]", self.min_cosine),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_behavior() {
        let config = ExtractionConfig::default();
        assert_eq!(config.alpha_threshold, 0);
        assert!((config.min_cosine - 0.99).abs() < f32::EPSILON);
        assert_eq!(config.winding, Winding::Clockwise);
        assert_eq!(config.trace_step_limit(8, 4), 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_step_limit_wins() {
        let config = ExtractionConfig::default().with_max_trace_steps(5);
        assert_eq!(config.trace_step_limit(100, 100), 5);
    }

    #[test]
    fn test_validate_rejects_nan_and_out_of_range_cosine() {
        assert!(ExtractionConfig::default().with_min_cosine(1.5).validate().is_err());
        assert!(ExtractionConfig::default().with_min_cosine(f32::NAN).validate().is_err());
        assert!(ExtractionConfig::default().with_min_cosine(-1.0).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ExtractionConfig = toml::from_str(
            "alpha_threshold = 16\nwinding = \"counter_clockwise\"\n",
        ).unwrap();

        assert_eq!(config.alpha_threshold, 16);
        assert_eq!(config.winding, Winding::CounterClockwise);
        assert!((config.min_cosine - DEFAULT_MIN_COSINE).abs() < f32::EPSILON);
        assert_eq!(config.max_trace_steps, None);
    }

    #[test]
    fn test_file_roundtrip_toml_and_ron() {
        let config = ExtractionConfig::with_threshold(40)
            .with_winding(Winding::CounterClockwise)
            .with_max_trace_steps(1000);
        let dir = std::env::temp_dir();

        for name in ["sprite_collider_extraction.toml", "sprite_collider_extraction.ron"] {
            let path = dir.join(name);
            let path = path.to_str().unwrap();
            config.save_to_file(path).unwrap();
            let loaded = ExtractionConfig::load_from_file(path).unwrap();
            assert_eq!(loaded, config);
            std::fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = ExtractionConfig::default().save_to_file("extraction.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
