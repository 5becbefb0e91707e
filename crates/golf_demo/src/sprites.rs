//! Sprite loading and procedural sprite generation

use image::{Rgba, RgbaImage};
use sprite_collider::assets::{AssetError, ImageData};

use crate::config::SpriteSource;

const FILL: Rgba<u8> = Rgba([139, 94, 60, 255]);
const EMPTY: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Produce the pixels for a sprite source
pub fn load_sprite(source: &SpriteSource) -> Result<ImageData, AssetError> {
    match source {
        SpriteSource::File { path } => ImageData::from_file(path),
        SpriteSource::Rect { width, height } => Ok(ImageData::solid_color(*width, *height, FILL.0)),
        SpriteSource::Disc { radius } => disc(*radius),
    }
}

/// Filled disc with a one pixel transparent margin
fn disc(radius: u32) -> Result<ImageData, AssetError> {
    let Some((size, _)) = (SpriteSource::Disc { radius }).generated_size() else {
        return Err(AssetError::LoadFailed(format!("disc radius {} is too large", radius)));
    };
    let center = (size as f32 - 1.0) / 2.0;
    let r_sq = (radius as f32) * (radius as f32);
    
    Ok(ImageData::from(RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f32 - center, y as f32 - center);
        if dx * dx + dy * dy <= r_sq { FILL } else { EMPTY }
    })))
}
