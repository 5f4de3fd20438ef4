//! RGBA8 pixel buffer

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use glam::IVec2;

pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major, top-to-bottom RGBA8 image.
///
/// Starts fully transparent. Anything drawn through `DrawTarget` is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x as i32, y as i32)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    /// Copy `src` with its top-left corner at `at`, replacing every covered
    /// pixel, transparent ones included. Parts outside this frame are dropped.
    pub fn blit(&mut self, src: &Frame, at: IVec2) {
        let (dst_w, dst_h) = (self.width as i32, self.height as i32);
        let (src_w, src_h) = (src.width as i32, src.height as i32);

        let x0 = at.x.max(0);
        let x1 = (at.x + src_w).min(dst_w);
        if x0 >= x1 {
            return;
        }
        let row_bytes = (x1 - x0) as usize * BYTES_PER_PIXEL;

        for y in at.y.max(0)..(at.y + src_h).min(dst_h) {
            let src_start = ((y - at.y) * src_w + (x0 - at.x)) as usize * BYTES_PER_PIXEL;
            let dst_start = (y * dst_w + x0) as usize * BYTES_PER_PIXEL;
            self.pixels[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src.pixels[src_start..src_start + row_bytes]);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, [color.r(), color.g(), color.b(), 255]);
        }
        Ok(())
    }
}
