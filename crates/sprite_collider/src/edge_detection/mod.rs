//! Sprite silhouette extraction
//!
//! Turns the alpha channel of a sprite into a closed outline of line
//! segments centered on the sprite's geometric center:
//!
//! 1. [`mask`] - threshold alpha into an [`OpacityGrid`]
//! 2. [`trace`] - find the first boundary pixel and walk the outline
//! 3. [`simplify`] - drop collinear points
//! 4. [`frame`] - connect points into segments and recenter them
//!
//! Only the first boundary found in raster order is traced.

pub mod mask;
pub mod trace;
pub mod simplify;
pub mod frame;

pub use mask::OpacityGrid;
pub use trace::{find_start, trace_contour, Contour, Direction, LatticePoint, Trace, TraceEnd};
pub use simplify::simplify_contour;
pub use frame::{build_segments, center_segments, sprite_center};

use thiserror::Error;
use crate::assets::PixelSource;
use crate::config::ConfigError;
use crate::core::config::ExtractionConfig;
use crate::foundation::time::{millis, Stopwatch};
use crate::physics::collision::LineSegment;

/// Reasons an outline cannot be extracted
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The sprite has no pixels to center on
    #[error("Cannot extract edges from a {width}x{height} image")]
    EmptyImage {
        /// Sprite width
        width: u32,
        /// Sprite height
        height: u32,
    },
    
    /// The pixel buffer does not match the reported dimensions
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// Bytes required by width * height * 4
        expected: usize,
        /// Bytes present
        actual: usize,
    },
    
    /// The extraction settings are unusable
    #[error("Invalid extraction config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Extract a centered outline using default settings and `threshold`
///
/// A threshold of 0 treats every pixel that is not fully transparent as
/// solid. A sprite without any boundary yields an empty list.
pub fn extract_edges<S: PixelSource + ?Sized>(sprite: &S, threshold: u8) -> Result<Vec<LineSegment>, ExtractionError> {
    extract_edges_with(sprite, &ExtractionConfig::with_threshold(threshold))
}

/// Extract a centered outline with explicit settings
pub fn extract_edges_with<S: PixelSource + ?Sized>(
    sprite: &S,
    config: &ExtractionConfig,
) -> Result<Vec<LineSegment>, ExtractionError> {
    config.validate()?;
    
    let pixels = sprite.pixel_view();
    let (width, height) = (pixels.width(), pixels.height());
    if width == 0 || height == 0 {
        return Err(ExtractionError::EmptyImage { width, height });
    }
    
    let mut stopwatch = Stopwatch::start_new();
    let grid = OpacityGrid::from_pixels(&pixels, config.alpha_threshold)?;
    let mask_time = stopwatch.lap();
    
    let Some(start) = find_start(&grid) else {
        log::debug!("No boundary in {}x{} sprite, outline is empty", width, height);
        return Ok(Vec::new());
    };
    
    let limit = config.trace_step_limit(grid.width(), grid.height());
    let trace = trace_contour(&grid, start, config.winding, limit);
    let trace_time = stopwatch.lap();
    let simplified = simplify_contour(&trace.points, config.min_cosine);
    
    let mut segments = build_segments(&simplified);
    center_segments(&mut segments, width, height);
    
    log::debug!(
        "Outline of {}x{} sprite: {} traced points ({:?}), {} kept, {} segments",
        width, height, trace.points.len(), trace.end, simplified.len(), segments.len()
    );
    log::trace!(
        "Edge extraction took {:.3} ms (mask {:.3}, trace {:.3})",
        stopwatch.elapsed_millis(), millis(mask_time), millis(trace_time)
    );
    
    Ok(segments)
}
