//! Sprite asset access
//!
//! The extraction pipeline never touches an image library's memory layout
//! directly. Sprites implement [`PixelSource`] and hand out a short-lived
//! [`PixelView`] borrow of their RGBA8 buffer; the borrow ends (and the
//! buffer is released back to its owner) on every exit path of the caller.

pub mod image_loader;
pub mod pixels;

pub use image_loader::ImageData;
pub use pixels::{PixelSource, PixelView};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),
    
    /// Load failed
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
    
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
