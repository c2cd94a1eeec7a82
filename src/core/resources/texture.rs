//=========================================================================
// Textures
//=========================================================================
//
// Decodes image files into RGBA8 pixel buffers with the `image` crate.
//
//=========================================================================

use std::path::PathBuf;

use anyhow::Context;

use super::Loader;

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Wraps an RGBA8 buffer. Returns `None` if the buffer length does
    /// not match `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Loads a texture from an image path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextureLoader;

impl Loader<Texture> for TextureLoader {
    type Params = PathBuf;

    fn load(&self, path: Self::Params) -> anyhow::Result<Texture> {
        let image = image::open(&path)
            .with_context(|| format!("cannot decode texture {}", path.display()))?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Texture {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}
