//! Owned packed-BGRA framebuffer.
//!
//! A plain `Vec<u32>` of packed pixels with width/height metadata, sized to
//! pair with [`crate::quantize::ColorQuantizer`] and whatever presents the
//! result (a streaming window texture, an image file).

use std::path::Path;

use crate::rasterizer::ViewportBounds;

pub struct Framebuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a zeroed framebuffer.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "framebuffer must not be empty");
        Self {
            pixels: vec![0u32; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The viewport covering exactly this framebuffer.
    pub fn viewport(&self) -> ViewportBounds {
        ViewportBounds::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Row-major packed-BGRA words.
    pub fn words(&self) -> &[u32] {
        &self.pixels
    }

    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The pixel words as raw bytes (B, G, R, A per pixel on little-endian
    /// hosts), for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the framebuffer to an image file, dropping the alpha byte.
    /// The format follows the extension; `.png` and `.ppm` both work.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for &pixel in &self.pixels {
            rgb.push(((pixel >> 16) & 0xFF) as u8);
            rgb.push(((pixel >> 8) & 0xFF) as u8);
            rgb.push((pixel & 0xFF) as u8);
        }
        image::save_buffer(
            path,
            &rgb,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )
    }
}
