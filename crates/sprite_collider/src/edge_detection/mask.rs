//! Binary opacity grid built from a sprite's alpha channel

use crate::assets::PixelView;
use super::ExtractionError;

/// Row-major grid marking which pixels count as solid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpacityGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl OpacityGrid {
    /// Threshold the alpha channel: a cell is solid iff alpha > `threshold`
    ///
    /// Zero width or height yields an empty grid. Fails when the buffer
    /// length disagrees with the view's dimensions.
    pub fn from_pixels(pixels: &PixelView<'_>, threshold: u8) -> Result<Self, ExtractionError> {
        if !pixels.is_consistent() {
            return Err(ExtractionError::BufferSize {
                expected: pixels.expected_len(),
                actual: pixels.len(),
            });
        }
        
        let (width, height) = (pixels.width(), pixels.height());
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(pixels.alpha(x, y) > threshold);
            }
        }
        
        Ok(Self {
            cells,
            width: width as usize,
            height: height as usize,
        })
    }
    
    /// Build a grid from a predicate over (x, y)
    pub fn from_fn(width: usize, height: usize, mut solid: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(solid(x, y));
            }
        }
        
        Self { cells, width, height }
    }
    
    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }
    
    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }
    
    /// True when the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    
    /// Number of solid cells
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
    
    /// True if (x, y) is inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    
    /// Cell value; anything outside the grid is transparent
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.cells[y as usize * self.width + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use crate::assets::PixelSource;

    #[test]
    fn test_threshold_is_strict() {
        let img = RgbaImage::from_fn(3, 1, |x, _| Rgba([0, 0, 0, [0, 1, 128][x as usize]]));
        
        let any_alpha = OpacityGrid::from_pixels(&img.pixel_view(), 0).unwrap();
        assert!(!any_alpha.get(0, 0));
        assert!(any_alpha.get(1, 0));
        assert!(any_alpha.get(2, 0));
        
        let half = OpacityGrid::from_pixels(&img.pixel_view(), 128).unwrap();
        assert_eq!(half.solid_count(), 0);
    }

    #[test]
    fn test_outside_cells_are_transparent() {
        let grid = OpacityGrid::from_fn(2, 2, |_, _| true);
        assert!(grid.get(1, 1));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
    }

    #[test]
    fn test_zero_dimension_yields_empty_grid() {
        let img = RgbaImage::new(0, 5);
        let grid = OpacityGrid::from_pixels(&img.pixel_view(), 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 5);
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn test_short_buffer_is_an_error() {
        let data = [0u8, 0, 0, 255, 0, 0, 0, 255];
        let view = PixelView::new(&data, 2, 2);
        
        assert!(matches!(
            OpacityGrid::from_pixels(&view, 0),
            Err(ExtractionError::BufferSize { expected: 16, actual: 8 })
        ));
    }
}
