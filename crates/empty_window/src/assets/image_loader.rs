//! Icon image decoding
//!
//! Decodes PNG files into RGBA8 pixel buffers for `glfwSetWindowIcon`.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded icon pixels
///
/// Short-lived: built right before the icon call and consumed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Raw RGBA pixel data, row-major, top row first
    pub pixels: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl IconImage {
    /// Number of color channels in [`IconImage::pixels`]
    pub const CHANNELS: usize = 4;

    /// Load an icon from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading icon from: {:?}", path_ref);

        let img = image::open(path_ref).map_err(|e| {
            AssetError::LoadFailed(format!("Failed to load icon image {path_ref:?}: {e}"))
        })?;

        let icon = Self::from_rgba(img.to_rgba8());
        log::info!("Loaded icon {}x{} from {:?}", icon.width, icon.height, path_ref);
        Ok(icon)
    }

    /// Load an icon from encoded bytes (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            AssetError::LoadFailed(format!("Failed to load icon image from bytes: {e}"))
        })?;

        Ok(Self::from_rgba(img.to_rgba8()))
    }

    fn from_rgba(rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            pixels: rgba.into_raw(),
            width,
            height,
        }
    }

    /// Convert into the GLFW icon format
    ///
    /// GLFW reads the buffer as bytes, so each `u32` keeps its four RGBA
    /// bytes in memory order.
    pub fn into_pixel_image(self) -> glfw::PixelImage {
        let pixels = self
            .pixels
            .chunks_exact(Self::CHANNELS)
            .map(|p| u32::from_ne_bytes([p[0], p[1], p[2], p[3]]))
            .collect();

        glfw::PixelImage {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}
