use std::path::Path;
use std::sync::Arc;

use image::ImageReader;
use thiserror::Error;
use tracing::warn;

/// Decoded RGBA image handle. The runtime never reads files on the
/// game's behalf during play; sprites arrive already decoded, either
/// from [`Sprite::load`] at startup or from an in-memory buffer.
///
/// Cloning is cheap: the pixel data is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("sprite dimensions must be non-zero")]
    ZeroSize,
    #[error("rgba buffer holds {actual} bytes, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("failed to open sprite image {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sprite image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

impl Sprite {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SpriteError> {
        if width == 0 || height == 0 {
            return Err(SpriteError::ZeroSize);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::PixelCountMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba: rgba.into(),
        })
    }

    /// Uniform opaque fill, used for placeholders and tests.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            rgba.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            rgba: rgba.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        let reader = ImageReader::open(path).map_err(|source| SpriteError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| SpriteError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        let image = decoded.to_rgba8();
        Sprite::from_rgba(image.width(), image.height(), image.into_raw())
    }

    /// Startup-time loader that degrades to a solid placeholder instead
    /// of failing, so a missing art file never blocks play.
    pub fn load_or_placeholder(path: &Path, width: u32, height: u32, color: [u8; 4]) -> Self {
        match Sprite::load(path) {
            Ok(sprite) => sprite,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "sprite_load_failed_using_placeholder"
                );
                Sprite::solid(width, height, color)
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
