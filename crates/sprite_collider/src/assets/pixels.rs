//! Scoped, row-major access to RGBA8 pixel buffers

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A sprite whose pixels can be read for silhouette extraction
pub trait PixelSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);
    
    /// Borrow the raw RGBA8 buffer for the duration of the returned view
    fn pixel_view(&self) -> PixelView<'_>;
}

/// Borrowed RGBA8 buffer with a row-major accessor
///
/// The view does not validate its length; extraction checks
/// [`PixelView::is_consistent`] before reading.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelView<'a> {
    /// Wrap a raw RGBA8 buffer
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self { data, width, height }
    }
    
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }
    
    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
    
    /// Number of bytes the dimensions call for
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }
    
    /// Number of bytes actually present
    pub fn len(&self) -> usize {
        self.data.len()
    }
    
    /// True when the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    
    /// True when the buffer length matches the dimensions
    pub fn is_consistent(&self) -> bool {
        self.len() == self.expected_len()
    }
    
    /// Alpha channel of the pixel at (x, y)
    ///
    /// # Panics
    /// Panics when (x, y) is outside the view or the buffer is short.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside {}x{}", self.width, self.height);
        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[index + 3]
    }
}

impl PixelSource for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        image::RgbaImage::dimensions(self)
    }
    
    fn pixel_view(&self) -> PixelView<'_> {
        let (width, height) = image::RgbaImage::dimensions(self);
        PixelView::new(self.as_raw(), width, height)
    }
}
