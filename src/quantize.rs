//! Reference fragment sink: quantize RGBA attributes into packed-BGRA pixels.

use crate::fragment::{FragmentBatch, FragmentSink};

/// Writes fragments into a borrowed row-major pixel buffer.
///
/// The first four fragment attributes are read as R, G, B, A in [0.0, 1.0];
/// each channel is clamped and quantized to a byte, packed as
/// `(a << 24) | (r << 16) | (g << 8) | b` and stored at `y * width + x`.
/// On a little-endian host the bytes land in memory as B, G, R, A. Any
/// other attribute layout produces meaningless colors but is not detected.
///
/// The depth lane is ignored; there is no depth test, later fragments
/// simply overwrite earlier ones.
///
/// # Panics
/// Panics if a fragment carries fewer than four attributes or lands outside
/// the pixel buffer. Neither happens when the rasterizer's viewport matches
/// the buffer extent.
pub struct ColorQuantizer<'a> {
    pixels: &'a mut [u32],
    width: u32,
}

impl<'a> ColorQuantizer<'a> {
    pub fn new(pixels: &'a mut [u32], width: u32) -> Self {
        debug_assert!(width > 0);
        debug_assert_eq!(pixels.len() % width as usize, 0);
        Self { pixels, width }
    }
}

fn quantize_channel(value: f32) -> u8 {
    if value < 0.0 {
        return 0;
    }
    if value > 1.0 {
        return 255;
    }
    (value * 255.0) as u8
}

impl FragmentSink for ColorQuantizer<'_> {
    fn consume(&mut self, batch: FragmentBatch<'_>) {
        for fragment in batch.iter() {
            let r = quantize_channel(fragment.attributes[0]) as u32;
            let g = quantize_channel(fragment.attributes[1]) as u32;
            let b = quantize_channel(fragment.attributes[2]) as u32;
            let a = quantize_channel(fragment.attributes[3]) as u32;

            let index = fragment.y as usize * self.width as usize + fragment.x as usize;
            self.pixels[index] = (a << 24) | (r << 16) | (g << 8) | b;
        }
    }
}
