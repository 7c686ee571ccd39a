//! Owned RGBA pixel surface.

use crate::error::RenderError;

/// A square RGBA pixel buffer sized for a host canvas.
///
/// Four bytes per pixel, row-major from the top-left. The buffer is the
/// external render interface: the host blits
/// [`as_rgba()`](PixelSurface::as_rgba) into its display target (e.g.
/// `ImageData`) without further copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    size: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// Create a `size × size` surface. Rejects zero so the host never
    /// uploads an empty texture.
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::EmptySurface);
        }
        let count = (size as usize) * (size as usize) * 4;
        Ok(Self {
            size,
            pixels: vec![0; count],
        })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The raw RGBA buffer, ready for the host surface.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the raw RGBA buffer.
    pub fn as_rgba_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Write one opaque pixel.
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let offset = (y * self.size as usize + x) * 4;
        self.pixels[offset] = rgb[0];
        self.pixels[offset + 1] = rgb[1];
        self.pixels[offset + 2] = rgb[2];
        self.pixels[offset + 3] = 255;
    }

    /// Read one pixel as RGBA.
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.size as usize + x) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}
