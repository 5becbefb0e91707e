//! Image loading utilities for sprite data
//!
//! Decodes PNG sprites into RGBA8 buffers the extraction pipeline can read.

use std::io::ErrorKind;
use std::path::Path;
use crate::assets::{AssetError, PixelSource, PixelView};

/// Decoded sprite pixels, always RGBA8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Row-major RGBA bytes
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load a sprite from a file path
    ///
    /// The format is sniffed from the file contents, not the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        
        let sprite = Self::decode(&bytes).map_err(|e| {
            AssetError::LoadFailed(format!("{}: {}", path.display(), e))
        })?;
        log::info!("Loaded sprite {}x{} from {}", sprite.width, sprite.height, path.display());
        Ok(sprite)
    }
    
    /// Decode an encoded sprite held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let sprite = Self::decode(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory sprite: {}", e)))?;
        log::debug!("Decoded sprite {}x{} from memory", sprite.width, sprite.height);
        Ok(sprite)
    }
    
    fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(image::load_from_memory(bytes)?.to_rgba8().into())
    }
    
    /// Sprite filled with a single color
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            data: color.repeat(width as usize * height as usize),
            width,
            height,
        }
    }
    
    /// Size of the pixel buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

impl PixelSource for ImageData {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    
    fn pixel_view(&self) -> PixelView<'_> {
        PixelView::new(&self.data, self.width, self.height)
    }
}

impl From<image::RgbaImage> for ImageData {
    fn from(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { data: image.into_raw(), width, height }
    }
}
